//! Deferred input actions replayed at the frame synchronization point.
//!
//! # Why defer at all? (for beginners)
//!
//! Toolkit events arrive whenever the event loop feels like delivering them;
//! an immediate-mode UI wants its entire input state updated once, right
//! before it builds a frame.  The bridge therefore does not touch the UI when
//! an event comes in.  It *captures* the translated event as a plain-value
//! [`InputAction`] and appends it to the originating source's queue; the
//! frame synchronizer replays the queue in order when the next frame starts.
//!
//! Because an action owns every value it needs (no references into the
//! toolkit event, which is long gone by replay time), the queue is safe to
//! hold across the gap – and because actions are data rather than closures,
//! a queue can be inspected, asserted on in tests, and serialized into a
//! recorded input script.

use serde::{Deserialize, Serialize};

use crate::keymap::ui_key::UiKey;

/// Off-screen pointer position sentinel reported when the pointer leaves a
/// source's boundaries.
pub const OFF_SCREEN_POS: (f32, f32) = (-f32::MAX, -f32::MAX);

/// Degrees of wheel rotation that make up one scroll notch.
pub const WHEEL_NOTCH_DEGREES: f32 = 15.0;

/// Converts a wheel angle delta in degrees to scroll steps.
///
/// One step is one notch of a classic clicky wheel ([`WHEEL_NOTCH_DEGREES`]).
/// Used only when the platform provides no pixel-precision delta.
pub fn wheel_steps(degrees_x: f32, degrees_y: f32) -> (f32, f32) {
    (degrees_x / WHEEL_NOTCH_DEGREES, degrees_y / WHEEL_NOTCH_DEGREES)
}

/// Abstract mouse button identifier consumed by the UI-input-state.
///
/// The numeric value is the UI library's button index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

/// One captured UI-input-state mutation.
///
/// Each variant carries only plain values resolved at event time.  Actions
/// are applied in FIFO order, exactly once, by the frame synchronizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputAction {
    /// Modifier state snapshot, delivered *before* the key event it
    /// qualifies so the UI never pairs a key with stale modifiers.
    Modifiers {
        ctrl: bool,
        shift: bool,
        alt: bool,
        super_key: bool,
    },
    /// Abstract key press or release.
    Key { key: UiKey, pressed: bool },
    /// Decoded character text accompanying a key press.
    Text { text: String },
    /// Abstract mouse button press or release.
    Button { button: MouseButton, pressed: bool },
    /// Pointer position, or the off-screen sentinel after a leave.
    PointerPosition { x: f32, y: f32 },
    /// Wheel scroll in steps (angle path) or pixel-derived units.
    Wheel { x: f32, y: f32 },
    /// Focus gained or lost.
    Focus { gained: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_steps_converts_degrees_to_notches() {
        // Arrange / Act
        let steps = wheel_steps(120.0, 0.0);

        // Assert – 120 degrees is 8 notches
        assert_eq!(steps, (8.0, 0.0));
    }

    #[test]
    fn test_wheel_steps_single_notch() {
        assert_eq!(wheel_steps(15.0, -15.0), (1.0, -1.0));
    }

    #[test]
    fn test_wheel_steps_fractional_for_high_resolution_wheels() {
        let (x, y) = wheel_steps(0.0, 7.5);
        assert_eq!(x, 0.0);
        assert_eq!(y, 0.5);
    }

    #[test]
    fn test_off_screen_sentinel_is_extreme_negative() {
        let (x, y) = OFF_SCREEN_POS;
        assert_eq!(x, -f32::MAX);
        assert_eq!(y, -f32::MAX);
    }

    #[test]
    fn test_mouse_button_indices_match_the_ui_convention() {
        assert_eq!(MouseButton::Left as u8, 0);
        assert_eq!(MouseButton::Right as u8, 1);
        assert_eq!(MouseButton::Middle as u8, 2);
    }

    #[test]
    fn test_actions_capture_values_and_compare_structurally() {
        // Two actions captured from identical events must be equal so queue
        // contents can be asserted on directly.
        let a = InputAction::Key { key: UiKey::Enter, pressed: true };
        let b = InputAction::Key { key: UiKey::Enter, pressed: true };
        assert_eq!(a, b);

        let c = InputAction::Key { key: UiKey::Enter, pressed: false };
        assert_ne!(a, c);
    }
}
