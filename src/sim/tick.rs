//! Per-frame simulation tick
//!
//! Core game loop that advances a session by one animation frame.

use rand::Rng;

use super::autopilot;
use super::collision::{bike_hits, just_passed};
use super::spawn::roll_obstacle;
use super::state::{BikeState, GameEvent, GameSession};
use crate::tuning::Tuning;

/// Input queued by the host since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump trigger (space/click/tap); also starts a fresh session
    pub jump: bool,
    /// Demo mode - the autopilot decides when to jump
    pub autopilot: bool,
}

impl TickInput {
    /// Clear one-shot inputs after they have been processed
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
    }
}

/// Result of the collision pass
/// Advance the session to `timestamp_ms` (host clock, monotonic)
pub fn tick<R: Rng>(state: &mut GameSession<R>, input: &TickInput, timestamp_ms: f64) {
    // Queued triggers land before anything reads the bike state
    if input.jump {
        state.on_jump_trigger();
    }

    if input.autopilot && (!state.has_started || autopilot::should_jump(state)) {
        state.on_jump_trigger();
    }

    // Don't tick before the first trigger or after a crash
    if !state.has_started || state.is_over {
        return;
    }

    if !timestamp_ms.is_finite() || timestamp_ms < 0.0 {
        log::debug!("Ignoring tick with bad timestamp {}", timestamp_ms);
        return;
    }

    state.time_ticks += 1;

    integrate_bike(&mut state.bike, &state.tuning);

    state.current_speed = state.tuning.speed_for(state.score, state.insane_mode);

    advance_obstacles(state);

    // A crash ends the session, but this tick still runs to completion
    resolve_collisions(state);

    maybe_spawn(state, timestamp_ms);
}

/// Vertical integration. Position moves with last tick's velocity before
/// gravity is applied, so gravity lags by one tick.
pub fn integrate_bike(bike: &mut BikeState, tuning: &Tuning) {
    bike.height += bike.velocity;
    if bike.height <= 0.0 {
        // Landing
        bike.height = 0.0;
        bike.airborne = false;
        bike.velocity = 0.0;
    }

    if bike.height > 0.0 || bike.airborne {
        bike.velocity -= tuning.gravity;
    } else {
        bike.velocity = 0.0;
    }
}

/// Scroll obstacles left and cull the ones fully past the left margin
fn advance_obstacles<R: Rng>(state: &mut GameSession<R>) {
    let speed = state.current_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }

    let min_right = -state.tuning.cull_margin;
    state.obstacles.retain(|o| o.right_edge() >= min_right);
}

/// Overlap and pass-through scoring against every remaining obstacle
fn resolve_collisions<R: Rng>(state: &mut GameSession<R>) {
    let tuning = &state.tuning;
    let height = state.bike.height;
    let speed = state.current_speed;

    let mut collected: Vec<u32> = Vec::new();

    for obstacle in &state.obstacles {
        if bike_hits(tuning, height, obstacle) {
            if obstacle.is_collectible() {
                state.score += tuning.collectible_bonus;
                collected.push(obstacle.id);
                state.events.push(GameEvent::Collected {
                    id: obstacle.id,
                    bonus: tuning.collectible_bonus,
                });
                log::debug!("Collected {} (+{})", obstacle.id, tuning.collectible_bonus);
            } else if !state.is_over {
                state.is_over = true;
                state.events.push(GameEvent::Crashed { id: obstacle.id });
                log::info!("Crashed into {:?} {}", obstacle.kind, obstacle.id);
            }
        }

        if !obstacle.is_collectible() && just_passed(obstacle, tuning.bike_x, speed) {
            state.score += 1;
            state.events.push(GameEvent::Passed { id: obstacle.id });
        }
    }

    if !collected.is_empty() {
        state.obstacles.retain(|o| !collected.contains(&o.id));
    }

    if state.is_over {
        log::info!("Game over - final score {}", state.score);
    }
}

/// Append one obstacle once the (mode-dependent) interval has elapsed
fn maybe_spawn<R: Rng>(state: &mut GameSession<R>, timestamp_ms: f64) {
    let interval = state.tuning.spawn_interval(state.insane_mode);
    if timestamp_ms - state.last_spawn_ms <= interval {
        return;
    }

    let id = state.next_entity_id();
    let obstacle = roll_obstacle(&mut state.rng, &state.tuning, id);
    log::debug!(
        "Spawned {:?} {} ({:.0}x{:.0}) at {:.0}ms",
        obstacle.kind,
        id,
        obstacle.width,
        obstacle.height,
        timestamp_ms
    );
    state.events.push(GameEvent::Spawned {
        id,
        kind: obstacle.kind,
    });
    state.obstacles.push(obstacle);
    state.last_spawn_ms = timestamp_ms;
}

impl<R: Rng> GameSession<R> {
    /// Advance one frame with no queued input
    pub fn tick(&mut self, timestamp_ms: f64) {
        tick(self, &TickInput::default(), timestamp_ms);
    }
}
