//! Frame timing and deferred-action replay.
//!
//! This module holds the two halves of the frame synchronization point that
//! are independent of the backend's wiring: the monotonic frame clock, and
//! the interpreter that applies one captured [`InputAction`] to the sink.
//! The full per-frame pass lives in [`crate::backend::PlatformBackend::new_frame`].

use std::time::Instant;

use framebridge_core::{InputAction, UiKey};

use crate::sink::InputSink;

/// Delta time reported on the very first frame, before any previous
/// timestamp exists.
pub const FIRST_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Monotonic frame timer shared by all sources of one backend.
///
/// The clock measures the gap since the previous `tick` for *any* source –
/// two sources rendering alternately each see the interval since the other's
/// frame, which is what the UI's animation timing wants.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    /// Creates a clock with no previous frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock to `now` and returns the elapsed time in seconds.
    ///
    /// The first call ever returns exactly [`FIRST_FRAME_DELTA`].
    pub fn tick(&mut self, now: Instant) -> f32 {
        let delta = match self.last_frame {
            Some(previous) => now.duration_since(previous).as_secs_f32(),
            None => FIRST_FRAME_DELTA,
        };
        self.last_frame = Some(now);
        delta
    }
}

/// Applies one captured action to the UI-input-state.
///
/// Invoked once per action, in FIFO order, during the queue drain.
pub fn apply(action: InputAction, sink: &dyn InputSink) {
    match action {
        InputAction::Modifiers {
            ctrl,
            shift,
            alt,
            super_key,
        } => {
            sink.set_key_event(UiKey::ModCtrl, ctrl);
            sink.set_key_event(UiKey::ModShift, shift);
            sink.set_key_event(UiKey::ModAlt, alt);
            sink.set_key_event(UiKey::ModSuper, super_key);
        }
        InputAction::Key { key, pressed } => {
            sink.set_key_event(key, pressed);
        }
        InputAction::Text { text } => {
            sink.append_input_text(&text);
        }
        InputAction::Button { button, pressed } => {
            sink.set_mouse_button_event(button, pressed);
        }
        InputAction::PointerPosition { x, y } => {
            sink.set_mouse_position_event(x, y);
        }
        InputAction::Wheel { x, y } => {
            sink.set_mouse_wheel_event(x, y);
        }
        InputAction::Focus { gained } => {
            sink.set_focus_event(gained);
        }
    }
}
