//! Raw toolkit events at the translation boundary.
//!
//! The host adapter converts each toolkit event object into a
//! [`SurfaceEvent`] value before handing it to the event filter.  Every
//! field is plain data resolved by the adapter – the backend never touches a
//! live toolkit event.

use framebridge_core::{ModifierSet, NativeKeyCode};
use serde::{Deserialize, Serialize};

/// A raw input event produced by the host toolkit for a registered source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// The pointer entered the source's boundaries.
    PointerEnter {
        /// Position in surface-local coordinates.
        local: (f32, f32),
        /// Position in screen coordinates (multi-viewport path).
        global: (f32, f32),
    },
    /// The pointer left the source's boundaries.
    PointerLeave,
    /// The pointer moved within the source's boundaries.
    PointerMove {
        /// Position in surface-local coordinates.
        local: (f32, f32),
        /// Position in screen coordinates (multi-viewport path).
        global: (f32, f32),
    },
    /// The source gained keyboard focus.
    FocusIn,
    /// The source lost keyboard focus.
    FocusOut,
    /// A key was pressed or released.
    Key {
        /// Native key code (see `framebridge_core::keymap::native`).
        code: NativeKeyCode,
        /// Modifier state at the time of the event, including the keypad flag.
        modifiers: ModifierSet,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Platform virtual-key code (informational, forwarded verbatim).
        native_virtual: u32,
        /// Platform scan code (informational, forwarded verbatim).
        native_scan: u32,
        /// Decoded character text; empty for non-printing keys.
        text: String,
    },
    /// A pointer button was pressed or released.
    Button {
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The wheel was scrolled.
    ///
    /// `pixel_delta` is the high-precision path and wins when present.
    /// `angle_delta` is in degrees of wheel rotation; toolkits reporting
    /// eighths of a degree must divide by 8 in the adapter.  An event with
    /// neither delta produces no action.
    Wheel {
        pixel_delta: Option<(f32, f32)>,
        angle_delta: Option<(f32, f32)>,
    },
}

/// Native pointer button identifier used in [`SurfaceEvent`].
///
/// Only Left/Right/Middle have abstract equivalents; X1/X2 events are
/// silently dropped by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}
