//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (all speeds are pixels per tick)
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod animation;
pub mod chase;
pub mod collision;
pub mod difficulty;
pub mod scroll;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use animation::SpriteAnimator;
pub use chase::{ChasePhase, ChasingCharacter};
pub use collision::Rect;
pub use difficulty::{is_day, speed_multiplier};
pub use scroll::ScrollCoordinator;
pub use snapshot::{FrameSnapshot, SpotlightOverlay, SpriteInstance};
pub use spawn::Spawner;
pub use state::{GameEvent, GameState, Item, ItemKind, Obstacle, ObstacleKind, Player, PlayerState};
pub use tick::{TickInput, tick};
