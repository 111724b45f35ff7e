//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key codes and pointer presses to commands)
//! - The wasm-bindgen host handle that owns a session

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{FlashTimer, HostCommand, command_for_key, dispatch};
