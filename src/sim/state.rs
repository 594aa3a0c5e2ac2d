//! Game state and entity types
//!
//! One authoritative `GameState`, mutated only by `tick::tick`. Entities are
//! plain structs with kind tags; the world scrolls by moving obstacles and
//! items leftward, so every entity lives in absolute screen coordinates.

use glam::Vec2;

use super::animation::SpriteAnimator;
use super::chase::ChasingCharacter;
use super::collision::Rect;
use super::scroll::ScrollCoordinator;
use super::spawn::Spawner;
use crate::assets::{AssetCatalog, SheetKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Discrete things that happened during one tick, for the host to consume
/// (audio cues, UI). Order within the Vec is resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ItemCollected(ItemKind),
    /// A suplemen shield absorbed what would have been a fatal hit
    ShieldAbsorbed,
    /// The player hit an obstacle and is dying
    PlayerHit,
    GameOver,
    ChaseStarted,
    ChaseEnded,
}

/// Player locomotion/life state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Running,
    Jumping,
    Falling,
    Dying,
    Dead,
}

/// The auto-running player character
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vertical_velocity: f32,
    state: PlayerState,
    pub death_animation_done: bool,
    suplemen_ticks_left: u32,
    suplemen_used: bool,
    pub run_animator: SpriteAnimator,
    pub death_animator: SpriteAnimator,
    pub run_placeholder: bool,
    pub death_placeholder: bool,
}

impl Player {
    pub fn new(assets: &AssetCatalog) -> Self {
        let (mut run_animator, run_placeholder) =
            assets.animator(SheetKind::PlayerRun, PLAYER_ANIM_DELAY, true);
        let (death_animator, death_placeholder) =
            assets.animator(SheetKind::PlayerDeath, DEATH_ANIM_DELAY, false);
        run_animator.play();
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vertical_velocity: 0.0,
            state: PlayerState::Running,
            death_animation_done: false,
            suplemen_ticks_left: 0,
            suplemen_used: false,
            run_animator,
            death_animator,
            run_placeholder,
            death_placeholder,
        }
    }

    /// Jump key: only honored on the ground
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.state == PlayerState::Running {
            self.state = PlayerState::Jumping;
            self.vertical_velocity = tuning.jump_velocity;
        }
    }

    /// Fall key: fast-fall while airborne
    pub fn fall(&mut self, tuning: &Tuning) {
        if matches!(self.state, PlayerState::Jumping | PlayerState::Falling) {
            self.state = PlayerState::Falling;
            self.vertical_velocity = tuning.fast_fall_speed;
        }
    }

    /// One tick of physics and animation
    pub fn update(&mut self, tuning: &Tuning) {
        match self.state {
            PlayerState::Running => {
                self.run_animator.update();
                self.tick_suplemen();
            }
            PlayerState::Jumping | PlayerState::Falling => {
                self.vertical_velocity += tuning.gravity;
                self.pos.y += self.vertical_velocity;
                if self.vertical_velocity > 0.0 {
                    self.state = PlayerState::Falling;
                }
                let floor = GROUND_Y - self.size.y;
                if self.pos.y >= floor {
                    self.pos.y = floor;
                    self.vertical_velocity = 0.0;
                    self.state = PlayerState::Running;
                }
                self.tick_suplemen();
            }
            PlayerState::Dying => self.update_death(),
            PlayerState::Dead => {}
        }
    }

    /// Death sub-phase tick: only the death animation advances
    pub fn update_death(&mut self) {
        if self.state != PlayerState::Dying {
            return;
        }
        self.death_animator.update();
        if self.death_animator.finished() {
            self.state = PlayerState::Dead;
            self.death_animation_done = true;
        }
    }

    /// Transition to Dying; a no-op once already dying or dead, so the
    /// game-over transition can fire at most once per life.
    pub fn start_dying(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.state = PlayerState::Dying;
        self.death_animator.reset();
        self.death_animator.play();
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !matches!(self.state, PlayerState::Dying | PlayerState::Dead)
    }

    #[inline]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Shield is up: a suplemen was collected and has not been spent
    #[inline]
    pub fn shield_active(&self) -> bool {
        self.suplemen_ticks_left > 0 && !self.suplemen_used
    }

    /// Overlay condition for the renderer (spotlight while shielded)
    #[inline]
    pub fn suplemen_overlay_visible(&self) -> bool {
        self.shield_active()
    }

    pub fn activate_suplemen(&mut self, tuning: &Tuning) {
        self.suplemen_ticks_left = tuning.suplemen_duration_ticks;
        self.suplemen_used = false;
    }

    /// Spend the shield on one absorbed hit
    pub fn consume_shield(&mut self) {
        self.suplemen_used = true;
    }

    fn tick_suplemen(&mut self) {
        self.suplemen_ticks_left = self.suplemen_ticks_left.saturating_sub(1);
    }

    pub fn hitbox(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Ground,
    Bird,
}

/// A scrolling hazard; lethal on contact unless the shield absorbs it
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub animator: SpriteAnimator,
    pub placeholder: bool,
    /// Consumed by a shield absorb; removed at end of tick
    pub destroyed: bool,
}

impl Obstacle {
    pub fn ground(x: f32, assets: &AssetCatalog) -> Self {
        let (animator, placeholder) = assets.animator(SheetKind::GroundObstacle, 1, false);
        Self {
            kind: ObstacleKind::Ground,
            pos: Vec2::new(x, GROUND_Y - OBSTACLE_HEIGHT),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            animator,
            placeholder,
            destroyed: false,
        }
    }

    pub fn bird(x: f32, assets: &AssetCatalog) -> Self {
        let (mut animator, placeholder) =
            assets.animator(SheetKind::BirdObstacle, BIRD_ANIM_DELAY, true);
        animator.play();
        Self {
            kind: ObstacleKind::Bird,
            pos: Vec2::new(x, GROUND_Y - BIRD_FLY_HEIGHT - OBSTACLE_HEIGHT),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            animator,
            placeholder,
            destroyed: false,
        }
    }

    pub fn update(&mut self, game_speed: f32) {
        self.pos.x -= game_speed;
        self.animator.update();
    }

    #[inline]
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    /// Collision rect; birds use a tighter box than their drawn sprite
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        let bounds = Rect {
            pos: self.pos,
            size: self.size,
        };
        match self.kind {
            ObstacleKind::Ground => bounds,
            ObstacleKind::Bird => bounds.inset(tuning.bird_hitbox_inset),
        }
    }
}

/// Collectible variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Fish,
    Meat,
    Suplemen,
}

impl ItemKind {
    pub fn sheet(self) -> SheetKind {
        match self {
            ItemKind::Fish => SheetKind::Fish,
            ItemKind::Meat => SheetKind::Meat,
            ItemKind::Suplemen => SheetKind::Suplemen,
        }
    }
}

/// A scrolling collectible
#[derive(Debug, Clone)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    pub placeholder: bool,
}

impl Item {
    pub fn new(kind: ItemKind, x: f32, y: f32, assets: &AssetCatalog) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            size: Vec2::new(ITEM_SIZE, ITEM_SIZE),
            collected: false,
            placeholder: assets.is_placeholder(kind.sheet()),
        }
    }

    pub fn update(&mut self, game_speed: f32) {
        self.pos.x -= game_speed;
    }

    #[inline]
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    pub fn hitbox(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete game state (deterministic for a given seed + input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, reused verbatim on restart so a run can be replayed
    pub seed: u64,
    pub tuning: Tuning,
    pub assets: AssetCatalog,

    pub running: bool,
    pub game_over: bool,
    /// Simulation tick counter
    pub tick_count: u64,
    /// Score accumulator; the integer score is its floor
    distance: f32,
    /// Recomputed from score every tick
    pub speed_multiplier: f32,
    pub is_day: bool,

    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub items: Vec<Item>,
    pub chaser: ChasingCharacter,
    pub scroll: ScrollCoordinator,
    pub spawner: Spawner,
}

impl GameState {
    /// Create a new running game session
    pub fn new(seed: u64, tuning: Tuning, assets: AssetCatalog) -> Self {
        let (chase_animator, chase_placeholder) =
            assets.animator(SheetKind::Chaser, CHASER_ANIM_DELAY, true);
        let scroll = ScrollCoordinator::new(
            assets.tile_width(SheetKind::BackgroundDay, SCREEN_WIDTH),
            assets.tile_width(SheetKind::Platform, SCREEN_WIDTH),
        );
        let spawner = Spawner::new(seed, &tuning);
        let player = Player::new(&assets);
        Self {
            seed,
            running: true,
            game_over: false,
            tick_count: 0,
            distance: 0.0,
            speed_multiplier: 1.0,
            is_day: true,
            player,
            obstacles: Vec::new(),
            items: Vec::new(),
            chaser: ChasingCharacter::new(chase_animator, chase_placeholder),
            scroll,
            spawner,
            tuning,
            assets,
        }
    }

    /// Integer score (world-distance units)
    #[inline]
    pub fn score(&self) -> u32 {
        self.distance as u32
    }

    /// Add score directly (item bonuses) or via the per-tick accrual
    pub(crate) fn add_distance(&mut self, amount: f32) {
        self.distance += amount;
    }

    /// Reset to a fresh running session with the same seed, tuning and assets
    pub fn restart(&mut self) {
        log::info!("restarting game (final score {})", self.score());
        self.running = true;
        self.game_over = false;
        self.tick_count = 0;
        self.distance = 0.0;
        self.speed_multiplier = 1.0;
        self.is_day = true;
        self.player = Player::new(&self.assets);
        self.obstacles.clear();
        self.items.clear();
        self.chaser.reset();
        self.scroll.reset();
        self.spawner = Spawner::new(self.seed, &self.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(7, Tuning::default(), AssetCatalog::with_defaults())
    }

    #[test]
    fn test_player_jump_arc_returns_to_ground() {
        let t = Tuning::default();
        let mut p = Player::new(&AssetCatalog::with_defaults());
        let floor = GROUND_Y - PLAYER_HEIGHT;
        p.jump(&t);
        assert_eq!(p.state(), PlayerState::Jumping);
        let mut min_y = floor;
        for _ in 0..200 {
            p.update(&t);
            min_y = min_y.min(p.pos.y);
            if p.state() == PlayerState::Running {
                break;
            }
        }
        assert_eq!(p.state(), PlayerState::Running);
        assert_eq!(p.pos.y, floor);
        assert!(min_y < floor - 50.0);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let t = Tuning::default();
        let mut p = Player::new(&AssetCatalog::with_defaults());
        p.jump(&t);
        p.update(&t);
        let vv = p.vertical_velocity;
        p.jump(&t); // no double jump
        assert_eq!(p.vertical_velocity, vv);
    }

    #[test]
    fn test_fast_fall_shortens_air_time() {
        let t = Tuning::default();
        let mut slow = Player::new(&AssetCatalog::with_defaults());
        let mut fast = Player::new(&AssetCatalog::with_defaults());
        slow.jump(&t);
        fast.jump(&t);
        for _ in 0..3 {
            slow.update(&t);
            fast.update(&t);
        }
        fast.fall(&t);
        let mut fast_landed_at = 0;
        for i in 0..200 {
            fast.update(&t);
            if fast.state() == PlayerState::Running {
                fast_landed_at = i;
                break;
            }
        }
        let mut slow_landed_at = 0;
        for i in 0..200 {
            slow.update(&t);
            if slow.state() == PlayerState::Running {
                slow_landed_at = i;
                break;
            }
        }
        assert!(fast_landed_at < slow_landed_at);
    }

    #[test]
    fn test_fall_ignored_on_ground() {
        let t = Tuning::default();
        let mut p = Player::new(&AssetCatalog::with_defaults());
        p.fall(&t);
        assert_eq!(p.state(), PlayerState::Running);
        assert_eq!(p.vertical_velocity, 0.0);
    }

    #[test]
    fn test_start_dying_only_once() {
        let mut p = Player::new(&AssetCatalog::with_defaults());
        p.start_dying();
        assert_eq!(p.state(), PlayerState::Dying);
        // Run the death animation to completion
        for _ in 0..200 {
            p.update_death();
        }
        assert_eq!(p.state(), PlayerState::Dead);
        assert!(p.death_animation_done);
        p.start_dying();
        assert_eq!(p.state(), PlayerState::Dead);
    }

    #[test]
    fn test_shield_lifecycle() {
        let t = Tuning::default();
        let mut p = Player::new(&AssetCatalog::with_defaults());
        assert!(!p.shield_active());
        p.activate_suplemen(&t);
        assert!(p.shield_active());
        p.consume_shield();
        assert!(!p.shield_active());
        // A fresh suplemen re-arms the shield
        p.activate_suplemen(&t);
        assert!(p.shield_active());
    }

    #[test]
    fn test_shield_expires() {
        let mut t = Tuning::default();
        t.suplemen_duration_ticks = 3;
        let mut p = Player::new(&AssetCatalog::with_defaults());
        p.activate_suplemen(&t);
        for _ in 0..3 {
            p.update(&t);
        }
        assert!(!p.shield_active());
    }

    #[test]
    fn test_obstacle_scrolls_and_expires() {
        let assets = AssetCatalog::with_defaults();
        let mut obs = Obstacle::ground(50.0, &assets);
        for _ in 0..20 {
            obs.update(6.0);
        }
        assert!(obs.off_screen());
    }

    #[test]
    fn test_bird_hitbox_tighter_than_bounds() {
        let t = Tuning::default();
        let assets = AssetCatalog::with_defaults();
        let bird = Obstacle::bird(300.0, &assets);
        let ground = Obstacle::ground(300.0, &assets);
        let bird_box = bird.hitbox(&t);
        let ground_box = ground.hitbox(&t);
        assert!(bird_box.size.x < ground_box.size.x);
        assert!(bird_box.pos.x > bird.pos.x);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut s = state();
        s.add_distance(321.0);
        s.running = false;
        s.game_over = true;
        let assets = s.assets.clone();
        s.obstacles.push(Obstacle::ground(400.0, &assets));
        s.items.push(Item::new(ItemKind::Fish, 500.0, 400.0, &assets));
        s.chaser.start_chasing(PLAYER_X, 10);
        s.restart();
        assert!(s.running);
        assert!(!s.game_over);
        assert_eq!(s.score(), 0);
        assert!(s.obstacles.is_empty());
        assert!(s.items.is_empty());
        assert!(!s.chaser.is_active());
        assert_eq!(s.scroll.ground_offset(), 0.0);
        assert!(s.player.is_alive());
    }
}
