//! Host input mapping
//!
//! Translates DOM key codes and pointer presses into commands, and routes
//! them either into the queued [`TickInput`] or straight to the session.

use rand::Rng;

use crate::sim::{GamePhase, GameSession, TickInput};

/// A host-level action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Jump,
    ToggleInsaneMode,
    ToggleSound,
    Restart,
}

/// Map a `KeyboardEvent.code` to a command for the current phase
pub fn command_for_key(code: &str, phase: GamePhase) -> Option<HostCommand> {
    match code {
        "Space" => Some(HostCommand::Jump),
        "KeyI" => Some(HostCommand::ToggleInsaneMode),
        "KeyM" => Some(HostCommand::ToggleSound),
        "KeyR" | "Enter" if phase == GamePhase::Over => Some(HostCommand::Restart),
        _ => None,
    }
}

/// Apply a command. Jumps are queued for the next tick; toggles and restart
/// take effect immediately since the host reacts to them inside the same
/// user gesture (audio may only start there).
pub fn dispatch<R: Rng>(session: &mut GameSession<R>, input: &mut TickInput, command: HostCommand) {
    match command {
        HostCommand::Jump => input.jump = true,
        HostCommand::ToggleInsaneMode => session.toggle_insane_mode(),
        HostCommand::ToggleSound => session.toggle_sound(),
        HostCommand::Restart => {
            input.clear_one_shots();
            session.restart();
        }
    }
}

/// Transient full-field flash shown after insane mode is switched on
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlashTimer {
    until_ms: Option<f64>,
}

impl FlashTimer {
    pub fn trigger(&mut self, now_ms: f64, duration_ms: f64) {
        self.until_ms = Some(now_ms + duration_ms);
    }

    /// Whether the flash is visible at `now_ms`; expires itself
    pub fn is_active(&mut self, now_ms: f64) -> bool {
        match self.until_ms {
            Some(until) if now_ms < until => true,
            Some(_) => {
                self.until_ms = None;
                false
            }
            None => false,
        }
    }
}
