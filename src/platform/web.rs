//! Browser host binding
//!
//! The page owns the canvas/DOM, the input listeners and the
//! `requestAnimationFrame` loop. It forwards events here and redraws from the
//! JSON frame returned by [`DirtBikeGame::frame`].

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::input::{FlashTimer, HostCommand, command_for_key, dispatch};
use crate::audio::EngineSound;
use crate::consts::FLASH_DURATION_MS;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameSession, GameView, TickInput, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Dirt Bike Jump loaded");
}

/// What the page draws for one animation frame
#[derive(Serialize)]
struct Frame<'a> {
    #[serde(flatten)]
    view: GameView,
    events: &'a [GameEvent],
    flash: bool,
    show_speed: bool,
    sound_available: bool,
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct DirtBikeGame {
    session: GameSession,
    input: TickInput,
    settings: Settings,
    audio: EngineSound,
    flash: FlashTimer,
    last_timestamp: f64,
}

#[wasm_bindgen]
impl DirtBikeGame {
    /// `seed` defaults to the current time; settings and tuning are optional JSON
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>, settings: Option<String>, tuning: Option<String>) -> Self {
        let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
        let settings = settings
            .as_deref()
            .map(Settings::from_json_or_default)
            .unwrap_or_default();
        let tuning = tuning
            .as_deref()
            .map(Tuning::from_json_or_default)
            .unwrap_or_default();

        log::info!("Game initialized with seed: {}", seed);

        Self {
            session: GameSession::with_tuning(tuning, seed),
            input: TickInput::default(),
            audio: EngineSound::new(settings.effective_engine_volume()),
            settings,
            flash: FlashTimer::default(),
            last_timestamp: 0.0,
        }
    }

    /// Keyboard handler. Returns true when the key was used, so the page can
    /// `preventDefault()` (keeps space from scrolling).
    pub fn key_down(&mut self, code: &str) -> bool {
        match command_for_key(code, self.session.phase()) {
            Some(command) => {
                self.handle(command);
                true
            }
            None => false,
        }
    }

    /// Click or tap on the play field
    pub fn pointer_down(&mut self) {
        self.handle(HostCommand::Jump);
    }

    pub fn toggle_insane_mode(&mut self) {
        self.handle(HostCommand::ToggleInsaneMode);
    }

    pub fn toggle_sound(&mut self) {
        self.handle(HostCommand::ToggleSound);
    }

    pub fn restart(&mut self) {
        self.handle(HostCommand::Restart);
    }

    /// Demo mode
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Advance one frame and return the state to draw, as JSON
    pub fn frame(&mut self, timestamp: f64) -> String {
        if timestamp < self.last_timestamp {
            log::warn!(
                "Clock went backwards ({} -> {}), ticking anyway",
                self.last_timestamp,
                timestamp
            );
        }
        self.last_timestamp = timestamp;

        tick(&mut self.session, &self.input, timestamp);
        self.input.clear_one_shots();

        let events = self.session.drain_events();
        self.react(&events, timestamp);

        let frame = Frame {
            view: self.session.view(),
            events: &events,
            flash: self.flash.is_active(timestamp),
            show_speed: self.settings.show_speed,
            sound_available: self.audio.is_available(),
        };
        serde_json::to_string(&frame).unwrap_or_else(|e| {
            log::error!("Frame serialization failed: {}", e);
            String::from("{}")
        })
    }
}

impl DirtBikeGame {
    fn handle(&mut self, command: HostCommand) {
        dispatch(&mut self.session, &mut self.input, command);

        if command == HostCommand::ToggleSound && !self.audio.is_available() {
            // Nothing to play on; keep the control showing "off"
            self.session.set_sound_enabled(false);
        }

        // Still inside the user gesture, so audio is allowed to start here.
        // Events stay queued for the next frame.
        self.audio.sync(self.session.sound_should_play());
    }

    /// Host-side effects of simulation events
    fn react(&mut self, events: &[GameEvent], now: f64) {
        for event in events {
            match event {
                GameEvent::Crashed { .. } => self.audio.stop(),
                GameEvent::InsaneModeEnabled if self.settings.effective_flash() => {
                    self.flash.trigger(now, FLASH_DURATION_MS);
                }
                _ => {}
            }
        }
        if !self.session.sound_should_play() {
            self.audio.stop();
        }
    }
}
