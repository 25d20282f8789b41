//! The UI-input-state collaborator trait.
//!
//! The immediate-mode UI library owns an input-state object the backend must
//! feed.  [`InputSink`] is the exact surface the backend needs of it: event
//! mutators (applied when a source's queue drains), per-frame writers, and
//! the handful of flags the dispatcher and cursor updater read.
//!
//! Methods take `&self`; a production adapter wraps the UI library's context
//! with whatever interior mutability it already uses.  Test code uses
//! [`crate::mock::RecordingSink`].

use framebridge_core::{MouseButton, UiCursor, UiKey};

/// Interface to the UI library's input state.
pub trait InputSink {
    // ── Event mutators ────────────────────────────────────────────────────────

    /// Reports an abstract key press or release.
    ///
    /// Also used for the modifier-state pseudo-keys (`UiKey::Mod*`), which
    /// must arrive no later than the key event they qualify.
    fn set_key_event(&self, key: UiKey, pressed: bool);

    /// Reports an abstract mouse button press or release.
    fn set_mouse_button_event(&self, button: MouseButton, pressed: bool);

    /// Reports the pointer position, or the off-screen sentinel.
    fn set_mouse_position_event(&self, x: f32, y: f32);

    /// Reports wheel movement in scroll steps.
    fn set_mouse_wheel_event(&self, x: f32, y: f32);

    /// Reports focus gained or lost.
    fn set_focus_event(&self, gained: bool);

    /// Appends decoded character text for text-input purposes.
    fn append_input_text(&self, text: &str);

    /// Attaches the native virtual-key and scan codes to the most recent key
    /// translation.  Called synchronously at dispatch time, not deferred.
    fn set_key_event_native_data(&self, key: UiKey, native_virtual: u32, native_scan: u32);

    // ── Per-frame writers ─────────────────────────────────────────────────────

    /// Writes the logical display size for the frame being built.
    fn set_display_size(&self, width: f32, height: f32);

    /// Writes the framebuffer scale for the frame being built.
    fn set_display_scale(&self, x: f32, y: f32);

    /// Writes the elapsed time since the previous frame, in seconds.
    fn set_delta_time(&self, seconds: f32);

    // ── Readers ───────────────────────────────────────────────────────────────

    /// The cursor kind the UI currently wants shown.
    fn requested_cursor(&self) -> UiCursor;

    /// `true` when the UI draws a software cursor itself.
    fn draws_own_cursor(&self) -> bool;

    /// `true` when the host forbids the backend from changing native cursors.
    fn cursor_changes_disabled(&self) -> bool;

    /// `true` when multi-viewport support is enabled, switching pointer
    /// positions to screen space.
    fn multi_viewport_enabled(&self) -> bool;

    /// The pointer position last reported to the UI.
    fn last_mouse_position(&self) -> (f32, f32);

    // ── Registration ──────────────────────────────────────────────────────────

    /// Installs (`Some`) or clears (`None`) the backend identity string on
    /// the UI context.
    fn set_backend_info(&self, name: Option<&'static str>);
}
