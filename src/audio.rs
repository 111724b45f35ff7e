//! Engine sound using Web Audio API
//!
//! A single procedurally generated looping engine drone - no external files
//! needed. Every failure is swallowed: sound is cosmetic and must never
//! affect the simulation.

use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

/// Base pitch of the engine (Hz)
const ENGINE_FREQ: f32 = 70.0;
/// Throttle wobble rate (Hz) and depth (Hz)
const RUMBLE_FREQ: f32 = 8.0;
const RUMBLE_DEPTH: f32 = 15.0;

/// Live audio graph while the loop is playing
struct EngineVoice {
    osc: OscillatorNode,
    rumble: OscillatorNode,
    depth: GainNode,
    gain: GainNode,
}

/// Looping engine sound for the host page
pub struct EngineSound {
    ctx: Option<AudioContext>,
    voice: Option<EngineVoice>,
    volume: f32,
}

impl EngineSound {
    pub fn new(volume: f32) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - sound disabled");
        }
        Self {
            ctx,
            voice: None,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// False when the platform gave us no audio context at all
    pub fn is_available(&self) -> bool {
        self.ctx.is_some()
    }

    /// Start or stop the loop to match the session
    pub fn sync(&mut self, should_play: bool) {
        if should_play {
            self.play();
        } else {
            self.stop();
        }
    }

    /// Start the loop. Call from a user gesture, browsers block autoplay otherwise.
    pub fn play(&mut self) {
        if self.voice.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        self.voice = start_voice(ctx, self.volume);
        if self.voice.is_none() {
            log::warn!("Engine sound failed to start");
        }
    }

    pub fn stop(&mut self) {
        if let Some(voice) = self.voice.take() {
            voice.osc.stop().ok();
            voice.rumble.stop().ok();
            voice.depth.disconnect().ok();
            voice.gain.disconnect().ok();
        }
    }
}

impl Drop for EngineSound {
    fn drop(&mut self) {
        self.stop();
        if let Some(ctx) = &self.ctx {
            let _ = ctx.close();
        }
    }
}

/// Sawtooth drone with a slow sine wobbling its pitch
fn start_voice(ctx: &AudioContext, volume: f32) -> Option<EngineVoice> {
    let osc = ctx.create_oscillator().ok()?;
    osc.set_type(OscillatorType::Sawtooth);
    osc.frequency().set_value(ENGINE_FREQ);

    let rumble = ctx.create_oscillator().ok()?;
    rumble.set_type(OscillatorType::Sine);
    rumble.frequency().set_value(RUMBLE_FREQ);

    let depth = ctx.create_gain().ok()?;
    depth.gain().set_value(RUMBLE_DEPTH);
    rumble.connect_with_audio_node(&depth).ok()?;
    depth.connect_with_audio_param(&osc.frequency()).ok()?;

    let gain = ctx.create_gain().ok()?;
    gain.gain().set_value(volume);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    osc.start().ok()?;
    rumble.start().ok()?;

    Some(EngineVoice {
        osc,
        rumble,
        depth,
        gain,
    })
}
