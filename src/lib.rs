//! Dirt Bike Jump - an endless-runner mini-game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bike physics, obstacles, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host presentation preferences
//! - `platform`: Browser/native platform abstraction (input mapping, wasm host)
//! - `audio`: Looping engine sound (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration the host clock advances by (ms)
    pub const FRAME_MS: f64 = 16.0;

    /// Play field dimensions
    pub const GAME_WIDTH: f32 = 600.0;
    pub const GAME_HEIGHT: f32 = 250.0;
    /// Obstacles are dropped once their right edge is this far left of the field
    pub const CULL_MARGIN: f32 = 50.0;

    /// Bike bounding box - fixed horizontal position, height tracks the jump
    pub const BIKE_X: f32 = 80.0;
    pub const BIKE_WIDTH: f32 = 60.0;
    pub const BIKE_HEIGHT: f32 = 40.0;

    /// Vertical physics (units per tick)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_POWER: f32 = 12.0;
    /// Bike counts as grounded at or below this height
    pub const GROUND_EPSILON: f32 = 2.0;

    /// Obstacle speed (units per tick) before mode and difficulty scaling
    pub const BASE_SPEED: f32 = 5.0;
    pub const INSANE_SPEED_MULTIPLIER: f32 = 1.7;
    /// Speed steps up every this many points
    pub const DIFFICULTY_STEP: u64 = 10;
    pub const DIFFICULTY_INCREMENT: f32 = 0.2;

    /// Spawner
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const INSANE_SPAWN_DIVISOR: f64 = 1.5;
    pub const COLLECTIBLE_CHANCE: f64 = 0.1;
    pub const COLLECTIBLE_SIZE: f32 = 35.0;
    pub const COLLECTIBLE_BONUS: u64 = 50;
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 70.0;

    /// Insane-mode flash duration on the host (ms)
    pub const FLASH_DURATION_MS: f64 = 200.0;
}
