//! Chasing-character pursuit controller
//!
//! A four-phase state machine layered on one reusable entity:
//!
//! - `Inactive`: parked off-screen left, ignoring updates
//! - `Appearing`: accelerates toward a point behind the player, with speed
//!   capped proportional to the remaining gap so it can never overshoot
//! - `Steady`: holds the trailing distance with a proportional correction on
//!   top of the scroll speed, and counts score traveled since activation
//! - `Disappearing`: decelerates leftward (floored) until fully off-screen
//!
//! Invalid calls (`start_chasing` while active, updates while inactive) are
//! guarded no-ops.

use glam::Vec2;

use super::animation::SpriteAnimator;
use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Pursuit phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChasePhase {
    Inactive,
    Appearing,
    Steady,
    Disappearing,
}

/// The scripted threat that periodically pursues the player
#[derive(Debug, Clone)]
pub struct ChasingCharacter {
    pub pos: Vec2,
    pub size: Vec2,
    phase: ChasePhase,
    velocity_x: f32,
    target_x: f32,
    distance_traveled: u32,
    start_score: f32,
    pub animator: SpriteAnimator,
    pub placeholder: bool,
}

impl ChasingCharacter {
    pub fn new(animator: SpriteAnimator, placeholder: bool) -> Self {
        Self {
            pos: Vec2::new(-CHASER_WIDTH, GROUND_Y - CHASER_HEIGHT),
            size: Vec2::new(CHASER_WIDTH, CHASER_HEIGHT),
            phase: ChasePhase::Inactive,
            velocity_x: 0.0,
            target_x: 0.0,
            distance_traveled: 0,
            start_score: 0.0,
            animator,
            placeholder,
        }
    }

    /// Begin a pursuit: enter from off-screen left, aiming for a point
    /// `CHASE_TARGET_DISTANCE` behind the player. No-op while already active.
    pub fn start_chasing(&mut self, player_x: f32, current_score: u32) {
        if self.phase != ChasePhase::Inactive {
            return;
        }
        self.phase = ChasePhase::Appearing;
        self.pos.x = -self.size.x;
        self.pos.y = GROUND_Y - self.size.y;
        self.velocity_x = 0.0;
        self.distance_traveled = 0;
        self.start_score = current_score as f32;
        self.target_x = player_x - CHASE_TARGET_DISTANCE;
        self.animator.reset();
        self.animator.play();
        log::debug!("chase started at score {current_score}");
    }

    /// Begin the retreat; the Steady bookkeeping stops immediately
    pub fn stop_chasing(&mut self) {
        if matches!(self.phase, ChasePhase::Appearing | ChasePhase::Steady) {
            self.phase = ChasePhase::Disappearing;
        }
    }

    /// Pursuit bookkeeping against the player, run before integration.
    ///
    /// Counts score traveled since activation and triggers the retreat once
    /// the tuned span is covered. In Steady, re-aims the trailing point and
    /// sets velocity to scroll speed plus a proportional distance correction.
    pub fn update_chasing(
        &mut self,
        player_x: f32,
        game_speed: f32,
        current_score: u32,
        tuning: &Tuning,
    ) {
        if !self.is_active() || self.phase == ChasePhase::Disappearing {
            return;
        }

        self.distance_traveled = (current_score as f32 - self.start_score).max(0.0) as u32;
        if self.distance_traveled >= tuning.chase_distance_score {
            self.stop_chasing();
            return;
        }

        if self.phase == ChasePhase::Steady {
            self.target_x = player_x - CHASE_TARGET_DISTANCE;
            let current_distance = player_x - self.pos.x;
            // Ride the scroll speed, corrected toward the trailing distance
            self.velocity_x = -game_speed + (current_distance - CHASE_TARGET_DISTANCE) * CHASE_GAIN;
        }
    }

    /// Per-tick phase logic and position integration
    pub fn update(&mut self, tuning: &Tuning) {
        if !self.is_active() {
            return;
        }

        self.animator.update();

        match self.phase {
            ChasePhase::Appearing => {
                let distance_to_target = self.target_x - self.pos.x;
                if distance_to_target.abs() > CHASE_ARRIVAL_EPSILON {
                    // Speed cap proportional to the remaining gap: no overshoot
                    self.velocity_x += tuning.chase_acceleration;
                    let cap = distance_to_target.abs() * CHASE_GAIN;
                    if self.velocity_x > cap {
                        self.velocity_x = cap;
                    }
                } else {
                    self.phase = ChasePhase::Steady;
                    self.velocity_x = 0.0;
                }
            }
            ChasePhase::Disappearing => {
                self.velocity_x -= tuning.chase_deceleration;
                if self.velocity_x < CHASE_RETREAT_FLOOR {
                    self.velocity_x = CHASE_RETREAT_FLOOR;
                }
                if self.pos.x + self.size.x < 0.0 {
                    self.phase = ChasePhase::Inactive;
                    log::debug!("chase ended");
                }
            }
            ChasePhase::Steady | ChasePhase::Inactive => {}
        }

        self.pos.x += self.velocity_x;
    }

    /// Force Inactive and restore the off-screen start position. Safe to call
    /// from any phase, any number of times.
    pub fn reset(&mut self) {
        self.phase = ChasePhase::Inactive;
        self.pos.x = -self.size.x;
        self.pos.y = GROUND_Y - self.size.y;
        self.velocity_x = 0.0;
        self.distance_traveled = 0;
        self.start_score = 0.0;
        self.target_x = 0.0;
        self.animator.reset();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != ChasePhase::Inactive
    }

    #[inline]
    pub fn phase(&self) -> ChasePhase {
        self.phase
    }

    #[inline]
    pub fn velocity_x(&self) -> f32 {
        self.velocity_x
    }

    #[inline]
    pub fn distance_traveled(&self) -> u32 {
        self.distance_traveled
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
