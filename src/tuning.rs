//! Data-driven game balance
//!
//! Every gameplay policy knob lives here so balance changes are a JSON edit,
//! not a code change. `Default` is the shipped balance; a missing or corrupt
//! tuning file falls back to it with a logged warning.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Balance parameters for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World / physics ===
    /// Ground scroll speed at multiplier 1.0 (pixels/tick)
    pub base_speed: f32,
    /// Downward acceleration on the airborne player (pixels/tick²)
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = up)
    pub jump_velocity: f32,
    /// Vertical velocity floor set by the fast-fall key
    pub fast_fall_speed: f32,

    // === Score / difficulty ===
    /// Score gained per tick at multiplier 1.0
    pub score_rate: f32,
    /// Score units per +1.0 of speed multiplier
    pub speed_score_scale: f32,
    /// Upper clamp on the speed multiplier
    pub max_speed_multiplier: f32,
    /// Score units per day/night half-cycle
    pub day_night_score_period: u32,

    // === Chasing character ===
    /// Approach acceleration while appearing (pixels/tick²)
    pub chase_acceleration: f32,
    /// Retreat deceleration while disappearing (pixels/tick²)
    pub chase_deceleration: f32,
    /// Score units a pursuit lasts before the retreat begins
    pub chase_distance_score: u32,
    /// Score at which the first pursuit triggers
    pub chase_first_score: u32,
    /// Mean score gap between pursuits
    pub chase_interval: u32,
    /// Uniform jitter applied around `chase_interval`
    pub chase_interval_jitter: u32,

    // === Spawning ===
    /// Obstacle spawn countdown range (ticks, before difficulty scaling)
    pub obstacle_gap_ticks_min: u32,
    pub obstacle_gap_ticks_max: u32,
    /// Item spawn countdown range (ticks)
    pub item_gap_ticks_min: u32,
    pub item_gap_ticks_max: u32,
    /// Probability a spawned obstacle is a bird (once unlocked)
    pub bird_chance: f32,
    /// Score before bird obstacles may spawn
    pub bird_min_score: u32,

    // === Items / effects ===
    /// Score bonus for a fish
    pub fish_score: u32,
    /// Score bonus for meat
    pub meat_score: u32,
    /// Shield duration granted by a suplemen (ticks)
    pub suplemen_duration_ticks: u32,

    // === Hitboxes ===
    /// Fraction of the bird sprite bounds shaved off each side
    pub bird_hitbox_inset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            gravity: 0.9,
            jump_velocity: -16.0,
            fast_fall_speed: 18.0,

            score_rate: 0.2,
            speed_score_scale: 500.0,
            max_speed_multiplier: 2.5,
            day_night_score_period: 250,

            chase_acceleration: 0.5,
            chase_deceleration: 0.5,
            chase_distance_score: 100,
            chase_first_score: 150,
            chase_interval: 400,
            chase_interval_jitter: 100,

            obstacle_gap_ticks_min: 55,
            obstacle_gap_ticks_max: 110,
            item_gap_ticks_min: 180,
            item_gap_ticks_max: 420,
            bird_chance: 0.35,
            bird_min_score: 200,

            fish_score: 10,
            meat_score: 25,
            suplemen_duration_ticks: 600,

            bird_hitbox_inset: 0.15,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged, never fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::error!("Failed to write tuning file {}: {e}", path.display());
                }
            }
            Err(e) => log::error!("Failed to serialize tuning: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let t = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(t.chase_distance_score, Tuning::default().chase_distance_score);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        // serde(default) lets a tuning file override only some knobs
        let t: Tuning = serde_json::from_str(r#"{"base_speed": 8.5}"#).unwrap();
        assert_eq!(t.base_speed, 8.5);
        assert_eq!(t.gravity, Tuning::default().gravity);
    }
}
