//! Difficulty progression
//!
//! Both outputs are pure functions of the current score, so a replayed score
//! sequence reproduces the exact same speed and day/night schedule.

use crate::tuning::Tuning;

/// Speed multiplier for the current score: grows linearly, clamped to the
/// tuned maximum, never below 1.0.
pub fn speed_multiplier(score: u32, tuning: &Tuning) -> f32 {
    (1.0 + score as f32 / tuning.speed_score_scale).min(tuning.max_speed_multiplier)
}

/// Day/night flag: alternates every `day_night_score_period` score units,
/// starting in daylight.
pub fn is_day(score: u32, tuning: &Tuning) -> bool {
    (score / tuning.day_night_score_period) % 2 == 0
}
