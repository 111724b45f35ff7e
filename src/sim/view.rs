//! Read-only view of a session for rendering

use rand::Rng;
use serde::Serialize;

use super::rating::rating_for;
use super::state::{GamePhase, GameSession, Obstacle};

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub phase: GamePhase,
    pub score: u64,
    pub bike_x: f32,
    pub bike_height: f32,
    pub bike_tilt: f32,
    pub obstacles: Vec<Obstacle>,
    pub insane_mode: bool,
    pub sound_enabled: bool,
    pub speed: f32,
    pub speed_readout: u32,
    /// Only set once the run is over
    pub rating: Option<&'static str>,
}

impl<R: Rng> GameSession<R> {
    pub fn view(&self) -> GameView {
        let phase = self.phase();

        GameView {
            phase,
            score: self.score,
            bike_x: self.tuning.bike_x,
            bike_height: self.bike.height,
            bike_tilt: self.bike.tilt_degrees(),
            obstacles: self.obstacles.clone(),
            insane_mode: self.insane_mode,
            sound_enabled: self.sound_enabled,
            speed: self.current_speed,
            speed_readout: self.speed_readout(),
            rating: (phase == GamePhase::Over).then(|| rating_for(self.score)),
        }
    }
}
