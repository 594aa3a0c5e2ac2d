//! Read-only render snapshot
//!
//! The renderer never touches `GameState` fields directly; after each tick it
//! pulls one `FrameSnapshot` and draws from that. Sprite order in the Vec is
//! paint order: items behind the player, the chaser behind obstacles.

use glam::Vec2;

use super::collision::Rect;
use super::state::{GameState, PlayerState};
use crate::assets::SheetKind;
use crate::consts::*;

/// One sprite to draw: which sheet, which frame, where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub sheet: SheetKind,
    pub frame: usize,
    pub dest: Rect,
    /// Sheet never loaded; draw a solid rectangle over `dest` instead
    pub placeholder: bool,
}

/// Player-centered darkness-with-spotlight overlay (suplemen shield up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightOverlay {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub is_day: bool,
    pub speed_multiplier: f32,
    pub score: u32,
    pub game_over: bool,
    pub death_animation_done: bool,

    pub bg_offset: f32,
    pub bg_tile_width: f32,
    pub ground_offset: f32,
    pub ground_tile_width: f32,

    pub sprites: Vec<SpriteInstance>,
    pub overlay: Option<SpotlightOverlay>,
}

impl FrameSnapshot {
    /// Which background sheet the current day/night phase selects
    pub fn background_sheet(&self) -> SheetKind {
        if self.is_day {
            SheetKind::BackgroundDay
        } else {
            SheetKind::BackgroundNight
        }
    }
}

/// Blow a hitbox up to sprite size: centered horizontally, bottom-aligned
fn upscaled(hitbox: Rect, scale: f32) -> Rect {
    let sprite = hitbox.size * scale;
    Rect {
        pos: Vec2::new(
            hitbox.pos.x - (sprite.x - hitbox.size.x) / 2.0,
            hitbox.pos.y + hitbox.size.y - sprite.y,
        ),
        size: sprite,
    }
}

impl GameState {
    /// Capture the current frame for the renderer. Call only between ticks.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut sprites = Vec::with_capacity(2 + self.items.len() + self.obstacles.len());

        for item in &self.items {
            sprites.push(SpriteInstance {
                sheet: item.kind.sheet(),
                frame: 0,
                dest: item.hitbox(),
                placeholder: item.placeholder,
            });
        }

        let player_dying = !matches!(
            self.player.state(),
            PlayerState::Running | PlayerState::Jumping | PlayerState::Falling
        );
        let (sheet, animator, placeholder) = if player_dying {
            (
                SheetKind::PlayerDeath,
                &self.player.death_animator,
                self.player.death_placeholder,
            )
        } else {
            (
                SheetKind::PlayerRun,
                &self.player.run_animator,
                self.player.run_placeholder,
            )
        };
        sprites.push(SpriteInstance {
            sheet,
            frame: animator.current_frame(),
            dest: upscaled(self.player.hitbox(), SPRITE_UPSCALE),
            placeholder,
        });

        if self.chaser.is_active() {
            sprites.push(SpriteInstance {
                sheet: SheetKind::Chaser,
                frame: self.chaser.animator.current_frame(),
                dest: upscaled(self.chaser.bounds(), SPRITE_UPSCALE),
                placeholder: self.chaser.placeholder,
            });
        }

        for obstacle in &self.obstacles {
            sprites.push(SpriteInstance {
                sheet: match obstacle.kind {
                    super::state::ObstacleKind::Ground => SheetKind::GroundObstacle,
                    super::state::ObstacleKind::Bird => SheetKind::BirdObstacle,
                },
                frame: obstacle.animator.current_frame(),
                dest: Rect {
                    pos: obstacle.pos,
                    size: obstacle.size,
                },
                placeholder: obstacle.placeholder,
            });
        }

        let overlay = self
            .player
            .suplemen_overlay_visible()
            .then(|| SpotlightOverlay {
                center: self.player.hitbox().center(),
                radius: SUPLEMEN_SPOTLIGHT_RADIUS,
            });

        FrameSnapshot {
            is_day: self.is_day,
            speed_multiplier: self.speed_multiplier,
            score: self.score(),
            game_over: self.game_over,
            death_animation_done: self.player.death_animation_done,
            bg_offset: self.scroll.bg_offset(),
            bg_tile_width: self.scroll.bg_tile_width(),
            ground_offset: self.scroll.ground_offset(),
            ground_tile_width: self.scroll.ground_tile_width(),
            sprites,
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::sim::state::{Item, ItemKind, Obstacle};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(5, Tuning::default(), AssetCatalog::with_defaults())
    }

    #[test]
    fn test_snapshot_lists_every_entity() {
        let mut s = state();
        let assets = s.assets.clone();
        s.obstacles.push(Obstacle::ground(400.0, &assets));
        s.obstacles.push(Obstacle::bird(600.0, &assets));
        s.items.push(Item::new(ItemKind::Meat, 500.0, 400.0, &assets));
        let snap = s.snapshot();
        // item + player + 2 obstacles; chaser inactive so absent
        assert_eq!(snap.sprites.len(), 4);
        assert!(snap.sprites.iter().all(|sp| !sp.placeholder));
    }

    #[test]
    fn test_chaser_appears_only_while_active() {
        let mut s = state();
        assert!(
            !s.snapshot()
                .sprites
                .iter()
                .any(|sp| sp.sheet == SheetKind::Chaser)
        );
        s.chaser.start_chasing(s.player.pos.x, 0);
        assert!(
            s.snapshot()
                .sprites
                .iter()
                .any(|sp| sp.sheet == SheetKind::Chaser)
        );
    }

    #[test]
    fn test_upscale_is_bottom_aligned_and_centered() {
        let hitbox = Rect::new(100.0, 450.0, 50.0, 50.0);
        let dest = upscaled(hitbox, 3.0);
        assert_eq!(dest.size.x, 150.0);
        assert_eq!(dest.size.y, 150.0);
        // Bottom edges coincide
        assert_eq!(dest.bottom(), hitbox.bottom());
        // Horizontal centers coincide
        assert_eq!(dest.center().x, hitbox.center().x);
    }

    #[test]
    fn test_overlay_tracks_shield() {
        let mut s = state();
        assert!(s.snapshot().overlay.is_none());
        let tuning = s.tuning.clone();
        s.player.activate_suplemen(&tuning);
        let overlay = s.snapshot().overlay.expect("overlay while shielded");
        assert_eq!(overlay.center, s.player.hitbox().center());
        assert_eq!(overlay.radius, SUPLEMEN_SPOTLIGHT_RADIUS);
        // A spent shield drops the overlay even if time remains
        s.player.consume_shield();
        assert!(s.snapshot().overlay.is_none());
    }

    #[test]
    fn test_dying_player_uses_death_sheet() {
        let mut s = state();
        let run_sheet = s
            .snapshot()
            .sprites
            .iter()
            .find(|sp| matches!(sp.sheet, SheetKind::PlayerRun | SheetKind::PlayerDeath))
            .unwrap()
            .sheet;
        assert_eq!(run_sheet, SheetKind::PlayerRun);
        s.player.start_dying();
        let death_sheet = s
            .snapshot()
            .sprites
            .iter()
            .find(|sp| matches!(sp.sheet, SheetKind::PlayerRun | SheetKind::PlayerDeath))
            .unwrap()
            .sheet;
        assert_eq!(death_sheet, SheetKind::PlayerDeath);
    }

    #[test]
    fn test_missing_sheets_flagged_as_placeholders() {
        let s = GameState::new(5, Tuning::default(), AssetCatalog::empty());
        let snap = s.snapshot();
        assert!(snap.sprites.iter().all(|sp| sp.placeholder));
    }

    #[test]
    fn test_day_night_background_selection() {
        let mut s = state();
        assert_eq!(s.snapshot().background_sheet(), SheetKind::BackgroundDay);
        s.is_day = false;
        assert_eq!(s.snapshot().background_sheet(), SheetKind::BackgroundNight);
    }
}
