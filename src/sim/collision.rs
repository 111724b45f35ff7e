//! Collision detection for the bike and ground obstacles
//!
//! Everything is an axis-aligned box in play-field units: x grows to the
//! right, y grows up from the ground line.

use glam::Vec2;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap - touching edges do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The bike's box at its fixed horizontal position and current height
pub fn bike_box(tuning: &Tuning, height: f32) -> Aabb {
    Aabb::new(
        Vec2::new(tuning.bike_x, height),
        Vec2::new(tuning.bike_width, tuning.bike_height),
    )
}

/// Obstacles are grounded at y = 0
pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::new(
        Vec2::new(obstacle.x, 0.0),
        Vec2::new(obstacle.width, obstacle.height),
    )
}

/// Whether the bike at `height` touches `obstacle`
pub fn bike_hits(tuning: &Tuning, height: f32, obstacle: &Obstacle) -> bool {
    bike_box(tuning, height).overlaps(&obstacle_box(obstacle))
}

/// "Passed obstacle" window: the trailing edge is behind the bike, but by
/// less than one tick's travel.
///
/// A heuristic rather than an exact crossing detector. It fires once per
/// obstacle as long as `speed` matches the distance moved this tick.
pub fn just_passed(obstacle: &Obstacle, bike_x: f32, speed: f32) -> bool {
    let right = obstacle.right_edge();
    right < bike_x && right > bike_x - speed
}
