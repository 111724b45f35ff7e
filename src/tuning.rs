//! Data-driven game balance
//!
//! Every number the simulation consults lives in [`Tuning`]. The default is
//! the stock game; hosts may override fields from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected tuning values
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// JSON did not parse into a `Tuning`
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("tuning.{field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bike ===
    pub gravity: f32,
    pub jump_power: f32,
    pub ground_epsilon: f32,
    pub bike_x: f32,
    pub bike_width: f32,
    pub bike_height: f32,

    // === Speed ===
    pub base_speed: f32,
    pub insane_speed_multiplier: f32,
    /// Points per difficulty step
    pub difficulty_step: u64,
    /// Added to the difficulty factor per step
    pub difficulty_increment: f32,

    // === Spawning ===
    pub field_width: f32,
    pub cull_margin: f32,
    pub spawn_interval_ms: f64,
    pub insane_spawn_divisor: f64,
    pub collectible_chance: f64,
    pub collectible_size: f32,
    pub collectible_bonus: u64,
    pub obstacle_width: (f32, f32),
    pub obstacle_height: (f32, f32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            ground_epsilon: GROUND_EPSILON,
            bike_x: BIKE_X,
            bike_width: BIKE_WIDTH,
            bike_height: BIKE_HEIGHT,

            base_speed: BASE_SPEED,
            insane_speed_multiplier: INSANE_SPEED_MULTIPLIER,
            difficulty_step: DIFFICULTY_STEP,
            difficulty_increment: DIFFICULTY_INCREMENT,

            field_width: GAME_WIDTH,
            cull_margin: CULL_MARGIN,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            insane_spawn_divisor: INSANE_SPAWN_DIVISOR,
            collectible_chance: COLLECTIBLE_CHANCE,
            collectible_size: COLLECTIBLE_SIZE,
            collectible_bonus: COLLECTIBLE_BONUS,
            obstacle_width: (OBSTACLE_MIN_WIDTH, OBSTACLE_MAX_WIDTH),
            obstacle_height: (OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning overrides. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse overrides, falling back to the stock balance on any problem
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning overrides: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        fn range(field: &'static str, (lo, hi): (f32, f32)) -> Result<(), TuningError> {
            positive(field, lo as f64)?;
            if !hi.is_finite() || hi < lo {
                return Err(TuningError::Invalid {
                    field,
                    reason: "upper bound must be a number no lower than the lower bound",
                });
            }
            Ok(())
        }

        positive("gravity", self.gravity as f64)?;
        positive("jump_power", self.jump_power as f64)?;
        positive("bike_width", self.bike_width as f64)?;
        positive("bike_height", self.bike_height as f64)?;
        positive("base_speed", self.base_speed as f64)?;
        positive("insane_speed_multiplier", self.insane_speed_multiplier as f64)?;
        positive("field_width", self.field_width as f64)?;
        positive("spawn_interval_ms", self.spawn_interval_ms)?;
        positive("insane_spawn_divisor", self.insane_spawn_divisor)?;
        positive("collectible_size", self.collectible_size as f64)?;
        range("obstacle_width", self.obstacle_width)?;
        range("obstacle_height", self.obstacle_height)?;

        if self.difficulty_step == 0 {
            return Err(TuningError::Invalid {
                field: "difficulty_step",
                reason: "must be at least 1",
            });
        }
        if !(0.0..=1.0).contains(&self.collectible_chance) {
            return Err(TuningError::Invalid {
                field: "collectible_chance",
                reason: "must be between 0 and 1",
            });
        }
        for (field, value) in [
            ("ground_epsilon", self.ground_epsilon),
            ("cull_margin", self.cull_margin),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }
        Ok(())
    }

    /// Score-derived speed multiplier, stepping up every `difficulty_step` points
    pub fn difficulty_factor(&self, score: u64) -> f32 {
        1.0 + (score / self.difficulty_step) as f32 * self.difficulty_increment
    }

    /// Obstacle speed for a given score and mode
    pub fn speed_for(&self, score: u64, insane: bool) -> f32 {
        let mode = if insane { self.insane_speed_multiplier } else { 1.0 };
        self.base_speed * mode * self.difficulty_factor(score)
    }

    /// Minimum time between spawns
    pub fn spawn_interval(&self, insane: bool) -> f64 {
        if insane {
            self.spawn_interval_ms / self.insane_spawn_divisor
        } else {
            self.spawn_interval_ms
        }
    }
}
