//! Fixed-tick orchestration
//!
//! One call to `tick` advances the whole simulation by exactly one tick, in a
//! fixed order:
//!
//!   1. Input (jump / fast-fall)
//!   2. Difficulty (pure functions of score)
//!   3. Player physics and animation
//!   4. Obstacle / item scroll
//!   5. Chaser bookkeeping + phase logic
//!   6. Scroll offsets
//!   7. Spawning (obstacles, items, chase trigger)
//!   8. Collision resolution
//!   9. Entity removal (only here, never mid-tick)
//!   10. Score accrual
//!
//! `tick` is the sole mutator of `GameState`. After a fatal hit the state
//! enters the death sub-phase: `running` is false, and further ticks advance
//! only the player's death animation while everything else stays frozen.

use super::difficulty;
use super::state::{GameEvent, GameState, Item, ItemKind, Obstacle, ObstacleKind};
use crate::consts::*;

/// Input commands for a single tick (one-shot, cleared by the host)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub fall: bool,
}

/// Advance the game by one fixed tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if !state.running {
        // Death sub-phase: only the player animates; world stays frozen
        if state.game_over && !state.player.death_animation_done {
            state.player.update_death();
        }
        return events;
    }

    state.tick_count += 1;

    if input.jump {
        state.player.jump(&state.tuning);
    }
    if input.fall {
        state.player.fall(&state.tuning);
    }

    let score = state.score();
    state.speed_multiplier = difficulty::speed_multiplier(score, &state.tuning);
    state.is_day = difficulty::is_day(score, &state.tuning);
    let game_speed = state.tuning.base_speed * state.speed_multiplier;

    state.player.update(&state.tuning);

    for obstacle in &mut state.obstacles {
        obstacle.update(game_speed);
    }
    for item in &mut state.items {
        item.update(game_speed);
    }

    // Chaser: pursuit bookkeeping first, then phase logic and integration
    state
        .chaser
        .update_chasing(state.player.pos.x, game_speed, score, &state.tuning);
    let chaser_was_active = state.chaser.is_active();
    state.chaser.update(&state.tuning);
    if chaser_was_active && !state.chaser.is_active() {
        events.push(GameEvent::ChaseEnded);
    }

    state.scroll.advance(game_speed);

    spawn(state, score, &mut events);
    resolve_collisions(state, &mut events);

    // Removal happens only between collision passes, never mid-pass
    state.obstacles.retain(|o| !o.destroyed && !o.off_screen());
    state.items.retain(|i| !i.collected && !i.off_screen());

    if state.running {
        state.add_distance(state.tuning.score_rate * state.speed_multiplier);
    }

    events
}

/// Run the spawn policies and instantiate whatever they schedule
fn spawn(state: &mut GameState, score: u32, events: &mut Vec<GameEvent>) {
    // Minimum-spacing contract: hold obstacle spawns while the right edge
    // is still occupied
    let lane_clear = state
        .obstacles
        .iter()
        .all(|o| o.pos.x + o.size.x <= SCREEN_WIDTH - 2.0 * OBSTACLE_WIDTH);

    if let Some(kind) =
        state
            .spawner
            .poll_obstacle(score, state.speed_multiplier, lane_clear, &state.tuning)
    {
        let obstacle = match kind {
            ObstacleKind::Ground => Obstacle::ground(SCREEN_WIDTH, &state.assets),
            ObstacleKind::Bird => Obstacle::bird(SCREEN_WIDTH, &state.assets),
        };
        state.obstacles.push(obstacle);
    }

    if let Some((kind, y)) = state.spawner.poll_item(&state.tuning) {
        let item = Item::new(kind, SCREEN_WIDTH, y, &state.assets);
        state.items.push(item);
    }

    if state
        .spawner
        .poll_chase(score, !state.chaser.is_active(), &state.tuning)
    {
        state.chaser.start_chasing(state.player.pos.x, score);
        events.push(GameEvent::ChaseStarted);
    }
}

/// AABB pass over obstacles then items, in insertion order
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_box = state.player.hitbox();
    let score = state.score();

    for obstacle in &mut state.obstacles {
        if obstacle.destroyed || !state.player.is_alive() {
            continue;
        }
        if player_box.intersects(&obstacle.hitbox(&state.tuning)) {
            if state.player.shield_active() {
                state.player.consume_shield();
                obstacle.destroyed = true;
                events.push(GameEvent::ShieldAbsorbed);
                log::debug!("shield absorbed a {:?} obstacle", obstacle.kind);
            } else {
                state.player.start_dying();
                state.running = false;
                state.game_over = true;
                events.push(GameEvent::PlayerHit);
                events.push(GameEvent::GameOver);
                log::info!(
                    "player hit a {:?} obstacle at score {score}, game over",
                    obstacle.kind
                );
            }
        }
    }

    if !state.player.is_alive() {
        return;
    }

    let mut bonus = 0u32;
    for item in &mut state.items {
        if item.collected {
            continue;
        }
        if player_box.intersects(&item.hitbox()) {
            item.collected = true;
            match item.kind {
                ItemKind::Fish => bonus += state.tuning.fish_score,
                ItemKind::Meat => bonus += state.tuning.meat_score,
                ItemKind::Suplemen => state.player.activate_suplemen(&state.tuning),
            }
            events.push(GameEvent::ItemCollected(item.kind));
        }
    }
    if bonus > 0 {
        state.add_distance(bonus as f32);
    }
}
