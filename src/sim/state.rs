//! Game state and core simulation types
//!
//! A [`GameSession`] is the single owner of everything the simulation
//! mutates. Hosts call the command methods from input handlers and
//! [`super::tick`] once per animation frame.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Waiting for the first jump trigger
    Ready,
    /// Active gameplay
    Running,
    /// Crashed into a lethal obstacle, waiting for restart
    Over,
}

/// Vertical kinematic state of the bike
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BikeState {
    /// Distance above the ground (never negative)
    pub height: f32,
    /// Units per tick, positive is up
    pub velocity: f32,
    pub airborne: bool,
}

impl BikeState {
    /// Close enough to the ground to take off again
    #[inline]
    pub fn is_grounded(&self, epsilon: f32) -> bool {
        self.height <= epsilon
    }

    /// Sprite tilt: nose up while rising, nose down while falling
    pub fn tilt_degrees(&self) -> f32 {
        if self.velocity > 0.0 {
            10.0
        } else if self.velocity < 0.0 {
            -10.0
        } else {
            0.0
        }
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    Rock,
    Ramp,
    /// VR headset pickup - grants bonus points instead of ending the run
    Collectible,
}

/// An obstacle or collectible scrolling toward the bike.
/// Always sits on the ground, so its vertical span is `0..height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge, decreasing every tick
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn is_collectible(&self) -> bool {
        self.kind == ObstacleKind::Collectible
    }
}

/// Something the host may want to react to (sound, flash, HUD pop)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Started,
    Restarted,
    Jumped,
    Spawned { id: u32, kind: ObstacleKind },
    /// Trailing edge of a lethal obstacle went behind the bike (+1)
    Passed { id: u32 },
    Collected { id: u32, bonus: u64 },
    /// Lethal collision - host should stop the engine sound
    Crashed { id: u32 },
    /// Host may flash the play field
    InsaneModeEnabled,
}

/// One play session (deterministic for a given RNG and input sequence)
#[derive(Debug, Clone)]
pub struct GameSession<R = Pcg32> {
    /// Game balance
    pub tuning: Tuning,
    pub bike: BikeState,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub is_over: bool,
    pub has_started: bool,
    pub insane_mode: bool,
    pub sound_enabled: bool,
    /// Obstacle speed computed on the last tick
    pub current_speed: f32,
    /// Host timestamp (ms) of the last spawn
    pub last_spawn_ms: f64,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Spawner randomness
    pub(crate) rng: R,
    /// Pending host notifications, oldest first
    pub(crate) events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameSession<Pcg32> {
    /// Create a new session with stock balance and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session drawing spawn decisions from `rng`
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let current_speed = tuning.base_speed;
        Self {
            tuning,
            bike: BikeState::default(),
            obstacles: Vec::new(),
            score: 0,
            is_over: false,
            has_started: false,
            insane_mode: false,
            sound_enabled: false,
            current_speed,
            last_spawn_ms: 0.0,
            time_ticks: 0,
            rng,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if !self.has_started {
            GamePhase::Ready
        } else if self.is_over {
            GamePhase::Over
        } else {
            GamePhase::Running
        }
    }

    /// Jump key / click. The very first trigger only starts the session.
    pub fn on_jump_trigger(&mut self) {
        if !self.has_started {
            self.has_started = true;
            self.events.push(GameEvent::Started);
            log::info!("Session started");
            return;
        }

        if self.is_over
            || self.bike.airborne
            || !self.bike.is_grounded(self.tuning.ground_epsilon)
        {
            return;
        }

        self.bike.airborne = true;
        self.bike.velocity = self.tuning.jump_power;
        self.events.push(GameEvent::Jumped);
    }

    /// Fresh run. Mode and sound preferences carry over.
    pub fn restart(&mut self) {
        self.score = 0;
        self.obstacles.clear();
        self.bike = BikeState::default();
        self.current_speed = self.tuning.base_speed;
        self.last_spawn_ms = 0.0;
        self.time_ticks = 0;
        self.has_started = true;
        self.is_over = false;
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted (insane mode: {})", self.insane_mode);
    }

    /// Takes effect on the next speed recomputation
    pub fn set_insane_mode(&mut self, enabled: bool) {
        if enabled && !self.insane_mode {
            self.events.push(GameEvent::InsaneModeEnabled);
        }
        if enabled != self.insane_mode {
            log::info!("Insane mode: {}", enabled);
        }
        self.insane_mode = enabled;
    }

    pub fn toggle_insane_mode(&mut self) {
        self.set_insane_mode(!self.insane_mode);
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    pub fn toggle_sound(&mut self) {
        self.set_sound_enabled(!self.sound_enabled);
    }

    /// Whether the host should be playing the engine loop right now
    pub fn sound_should_play(&self) -> bool {
        self.sound_enabled && self.phase() == GamePhase::Running
    }

    /// Speed readout for the HUD
    pub fn speed_readout(&self) -> u32 {
        self.current_speed.round() as u32
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place an obstacle directly (scripted setups and tests)
    pub fn push_obstacle(&mut self, kind: ObstacleKind, x: f32, width: f32, height: f32) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle {
            id,
            x,
            width,
            height,
            kind,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn running() -> GameSession {
        let mut session = GameSession::new(7);
        session.on_jump_trigger();
        session.drain_events();
        session
    }

    #[test]
    fn test_first_trigger_only_starts() {
        let mut session = GameSession::new(1);
        assert_eq!(session.phase(), GamePhase::Ready);

        session.on_jump_trigger();
        assert_eq!(session.phase(), GamePhase::Running);
        assert!(!session.bike.airborne);
        assert_eq!(session.bike.velocity, 0.0);
        assert_eq!(session.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_jump_sets_power_once() {
        let mut session = running();
        session.on_jump_trigger();
        assert!(session.bike.airborne);
        assert_eq!(session.bike.velocity, JUMP_POWER);

        // Mid-air triggers are ignored
        session.bike.velocity = 3.0;
        session.bike.height = 20.0;
        session.on_jump_trigger();
        assert_eq!(session.bike.velocity, 3.0);
        assert_eq!(session.drain_events(), vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_no_jump_when_over() {
        let mut session = running();
        session.is_over = true;
        session.on_jump_trigger();
        assert!(!session.bike.airborne);
        assert_eq!(session.bike.velocity, 0.0);
    }

    #[test]
    fn test_jump_within_ground_epsilon() {
        let mut session = running();
        session.bike.height = GROUND_EPSILON;
        session.on_jump_trigger();
        assert!(session.bike.airborne);

        let mut session = running();
        session.bike.height = GROUND_EPSILON + 0.5;
        session.on_jump_trigger();
        assert!(!session.bike.airborne);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut session = running();
        session.set_insane_mode(true);
        session.score = 42;
        session.is_over = true;
        session.current_speed = 17.0;
        session.last_spawn_ms = 9000.0;
        session.bike = BikeState {
            height: 30.0,
            velocity: -2.0,
            airborne: true,
        };
        session.push_obstacle(ObstacleKind::Rock, 100.0, 40.0, 50.0);

        session.restart();
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.bike, BikeState::default());
        assert_eq!(session.current_speed, BASE_SPEED);
        assert_eq!(session.last_spawn_ms, 0.0);
        assert!(session.has_started);
        assert!(!session.is_over);
        assert!(session.insane_mode);
    }

    #[test]
    fn test_insane_mode_event_only_on_enable() {
        let mut session = running();
        session.set_insane_mode(true);
        session.set_insane_mode(true);
        session.toggle_insane_mode();
        assert!(!session.insane_mode);
        assert_eq!(session.drain_events(), vec![GameEvent::InsaneModeEnabled]);
    }

    #[test]
    fn test_sound_follows_phase() {
        let mut session = GameSession::new(3);
        session.set_sound_enabled(true);
        assert!(!session.sound_should_play());
        session.on_jump_trigger();
        assert!(session.sound_should_play());
        session.is_over = true;
        assert!(!session.sound_should_play());
    }

    #[test]
    fn test_tilt() {
        let mut bike = BikeState::default();
        assert_eq!(bike.tilt_degrees(), 0.0);
        bike.velocity = 4.0;
        assert_eq!(bike.tilt_degrees(), 10.0);
        bike.velocity = -0.6;
        assert_eq!(bike.tilt_degrees(), -10.0);
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut session = GameSession::new(5);
        let a = session.push_obstacle(ObstacleKind::Rock, 0.0, 1.0, 1.0);
        let b = session.push_obstacle(ObstacleKind::Ramp, 0.0, 1.0, 1.0);
        session.restart();
        let c = session.push_obstacle(ObstacleKind::Collectible, 0.0, 1.0, 1.0);
        assert!(a != b && b != c && a != c);
    }
}
