//! High score persistence
//!
//! The game only ever needs one scalar: the best score so far. It round-trips
//! through a small JSON file; a missing or corrupt file degrades to zero with
//! a log line, never an error into the game loop.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Best score achieved on this machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Load from a JSON file, falling back to zero on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => scores,
                Err(e) => {
                    log::warn!("Ignoring corrupt high score file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No high score file at {}, starting fresh", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged, never fatal
    pub fn save(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::error!("Failed to write high score file {}: {e}", path.display());
                }
            }
            Err(e) => log::error!("Failed to serialize high score: {e}"),
        }
    }

    /// Record a finished run; returns true when it set a new best
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            log::info!("new high score: {score} (was {})", self.best);
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_at_zero() {
        let scores = HighScore::load(Path::new("/nonexistent/highscore.json"));
        assert_eq!(scores.best, 0);
    }

    #[test]
    fn test_submit_keeps_best() {
        let mut scores = HighScore::default();
        assert!(scores.submit(120));
        assert!(!scores.submit(80));
        assert!(!scores.submit(120));
        assert!(scores.submit(121));
        assert_eq!(scores.best, 121);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join("paw_runner_highscore_test.json");
        let mut scores = HighScore::default();
        scores.submit(777);
        scores.save(&path);
        let loaded = HighScore::load(&path);
        assert_eq!(loaded.best, 777);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_degrades_to_zero() {
        let path = std::env::temp_dir().join("paw_runner_highscore_corrupt.json");
        fs::write(&path, "not json {{{").unwrap();
        let loaded = HighScore::load(&path);
        assert_eq!(loaded.best, 0);
        let _ = fs::remove_file(&path);
    }
}
