//! Paw Runner - a side-scrolling endless-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tick loop, entities, collisions, chase AI)
//! - `assets`: Sprite-sheet metadata boundary with placeholder fallback
//! - `audio`: Fire-and-forget sound-cue sink
//! - `highscores`: Scalar high-score persistence
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Nominal tick interval for the host scheduler
    pub const TICK_MS: u64 = 1000 / TICK_HZ as u64;

    /// World dimensions (screen pixel space, top-left origin)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Y of the ground line entities stand on
    pub const GROUND_Y: f32 = 500.0;

    /// Player hitbox and fixed horizontal position
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Obstacle hitbox defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;
    /// How far above the ground line bird obstacles fly
    pub const BIRD_FLY_HEIGHT: f32 = 120.0;

    /// Item hitbox (square)
    pub const ITEM_SIZE: f32 = 32.0;

    /// Chasing character hitbox
    pub const CHASER_WIDTH: f32 = 60.0;
    pub const CHASER_HEIGHT: f32 = 60.0;
    /// Trailing distance the chaser holds behind the player
    pub const CHASE_TARGET_DISTANCE: f32 = 70.0;
    /// Arrival band around the target position (pixels)
    pub const CHASE_ARRIVAL_EPSILON: f32 = 5.0;
    /// Proportional gain for approach cap and trailing correction
    pub const CHASE_GAIN: f32 = 0.1;
    /// Retreat speed floor while disappearing (pixels/tick, leftward)
    pub const CHASE_RETREAT_FLOOR: f32 = -15.0;

    /// Background parallax factor relative to ground speed
    pub const BG_PARALLAX: f32 = 0.025;

    /// Player and chaser sprites draw larger than their hitboxes
    pub const SPRITE_UPSCALE: f32 = 3.0;
    /// Spotlight radius for the suplemen overlay
    pub const SUPLEMEN_SPOTLIGHT_RADIUS: f32 = 140.0;

    /// Animation frame delays (ticks per frame)
    pub const PLAYER_ANIM_DELAY: u32 = 5;
    pub const DEATH_ANIM_DELAY: u32 = 6;
    pub const BIRD_ANIM_DELAY: u32 = 4;
    pub const CHASER_ANIM_DELAY: u32 = 4;
}
