//! Spawn policy
//!
//! All randomness in the simulation funnels through this module's seeded
//! `Pcg32`, so a given seed replays the exact same obstacle, item, and chase
//! schedule. Cadence is a per-category tick countdown re-rolled after every
//! spawn; the chase trigger is a score threshold.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{ItemKind, ObstacleKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Deterministic spawn scheduler
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    obstacle_countdown: u32,
    item_countdown: u32,
    next_chase_score: u32,
}

impl Spawner {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacle_countdown =
            rng.random_range(tuning.obstacle_gap_ticks_min..=tuning.obstacle_gap_ticks_max);
        let item_countdown =
            rng.random_range(tuning.item_gap_ticks_min..=tuning.item_gap_ticks_max);
        Self {
            rng,
            obstacle_countdown,
            item_countdown,
            next_chase_score: tuning.chase_first_score,
        }
    }

    /// One tick of obstacle cadence. `lane_clear` is the caller's minimum-
    /// spacing check; while it is false a due spawn is held, not skipped.
    /// Higher speed multipliers shorten the re-rolled gap so on-screen
    /// density stays roughly constant as the world speeds up.
    pub fn poll_obstacle(
        &mut self,
        score: u32,
        speed_multiplier: f32,
        lane_clear: bool,
        tuning: &Tuning,
    ) -> Option<ObstacleKind> {
        if self.obstacle_countdown > 0 {
            self.obstacle_countdown -= 1;
            return None;
        }
        if !lane_clear {
            return None;
        }
        let kind = if score >= tuning.bird_min_score && self.rng.random::<f32>() < tuning.bird_chance
        {
            ObstacleKind::Bird
        } else {
            ObstacleKind::Ground
        };
        let gap =
            self.rng.random_range(tuning.obstacle_gap_ticks_min..=tuning.obstacle_gap_ticks_max);
        self.obstacle_countdown = ((gap as f32 / speed_multiplier.max(1.0)) as u32).max(1);
        Some(kind)
    }

    /// One tick of item cadence; returns the kind and spawn height
    pub fn poll_item(&mut self, tuning: &Tuning) -> Option<(ItemKind, f32)> {
        if self.item_countdown > 0 {
            self.item_countdown -= 1;
            return None;
        }
        let kind = match self.rng.random_range(0u32..100) {
            0..=59 => ItemKind::Fish,
            60..=84 => ItemKind::Meat,
            _ => ItemKind::Suplemen,
        };
        // Half the items sit on the ground, half hang at jump height
        let y = if self.rng.random::<bool>() {
            GROUND_Y - ITEM_SIZE
        } else {
            GROUND_Y - ITEM_SIZE - 110.0
        };
        self.item_countdown =
            self.rng.random_range(tuning.item_gap_ticks_min..=tuning.item_gap_ticks_max);
        Some((kind, y))
    }

    /// Chase trigger: fires once per threshold crossing, re-arming
    /// `chase_interval ± jitter` ahead. Held (not consumed) while the chaser
    /// is still active from the previous pursuit.
    pub fn poll_chase(&mut self, score: u32, chaser_inactive: bool, tuning: &Tuning) -> bool {
        if score < self.next_chase_score || !chaser_inactive {
            return false;
        }
        let spread = tuning.chase_interval_jitter as i32;
        let jitter = self.rng.random_range(-spread..=spread);
        self.next_chase_score = score
            .saturating_add(tuning.chase_interval)
            .saturating_add_signed(jitter);
        true
    }

    #[inline]
    pub fn next_chase_score(&self) -> u32 {
        self.next_chase_score
    }
}
