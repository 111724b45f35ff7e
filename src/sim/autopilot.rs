//! Demo-mode driver
//!
//! Jumps so the bike is near the top of its arc while it overlaps the next
//! lethal obstacle. Collectibles are ridden into on purpose.

use rand::Rng;

use super::state::GameSession;

/// Jump when the next obstacle is at most this many ticks from the bike's front
pub const LEAD_TICKS: f32 = 9.0;

/// Whether the autopilot wants a jump trigger this tick
pub fn should_jump<R: Rng>(state: &GameSession<R>) -> bool {
    if state.is_over || state.bike.airborne || !state.bike.is_grounded(state.tuning.ground_epsilon)
    {
        return false;
    }

    let front = state.tuning.bike_x + state.tuning.bike_width;
    let lead = state.current_speed * LEAD_TICKS;

    state
        .obstacles
        .iter()
        .filter(|o| !o.is_collectible())
        .map(|o| o.x - front)
        .any(|gap| gap > 0.0 && gap <= lead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::ObstacleKind;
    use crate::sim::{TickInput, tick};

    fn demo() -> GameSession {
        let mut state = GameSession::new(4242);
        state.on_jump_trigger();
        state.last_spawn_ms = 1_000_000.0;
        state
    }

    #[test]
    fn test_waits_for_obstacle_in_range() {
        let mut state = demo();
        state.push_obstacle(ObstacleKind::Rock, GAME_WIDTH, 40.0, 60.0);
        assert!(!should_jump(&state));

        state.obstacles[0].x = BIKE_X + BIKE_WIDTH + BASE_SPEED * 4.0;
        assert!(should_jump(&state));

        state.bike.airborne = true;
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_ignores_collectibles() {
        let mut state = demo();
        state.push_obstacle(ObstacleKind::Collectible, BIKE_X + BIKE_WIDTH + 10.0, 35.0, 35.0);
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_clears_tallest_obstacle() {
        let mut state = demo();
        state.push_obstacle(
            ObstacleKind::Rock,
            BIKE_X + 102.0,
            OBSTACLE_MAX_WIDTH,
            OBSTACLE_MAX_HEIGHT,
        );
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        for i in 1..=60 {
            tick(&mut state, &input, i as f64 * FRAME_MS);
        }
        assert!(!state.is_over);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_autopilot_starts_session() {
        let mut state = GameSession::new(1);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input, 16.0);
        assert!(state.has_started);
    }
}
