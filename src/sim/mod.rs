//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied timestamps only
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rating;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{Aabb, bike_hits, just_passed};
pub use rating::rating_for;
pub use state::{BikeState, GameEvent, GamePhase, GameSession, Obstacle, ObstacleKind};
pub use tick::{TickInput, integrate_bike, tick};
pub use view::GameView;
