//! Key code translation tables for toolkit-to-UI keyboard event mapping.
//!
//! The canonical representation is the abstract [`UiKey`] space.  Native
//! toolkit codes are translated to abstract keys at the event translation
//! boundary and never travel further.
//!
//! Two independent tables exist: the [`standard`] table for the main key
//! blocks, and the [`numpad`] table consulted first when the event carries
//! the keypad modifier.  The split mirrors how the toolkit reports keypad
//! keys: same code as the digit row, different modifier flag.

pub mod native;
pub mod numpad;
pub mod standard;
pub mod ui_key;

use tracing::trace;

use crate::modifiers::ModifierSet;
pub use native::NativeKeyCode;
pub use ui_key::UiKey;

/// Unified key translator for native toolkit key events.
pub struct KeyTranslator;

impl KeyTranslator {
    /// Translates a native key code plus its modifier context to a [`UiKey`].
    ///
    /// When the keypad modifier is active the numpad table takes precedence;
    /// codes absent there fall back to the standard table.  Codes absent from
    /// both tables return [`UiKey::None`].
    ///
    /// This function is pure; the once-per-code unmapped-key warning is owned
    /// by the dispatcher, which has the mutable state to deduplicate it.
    pub fn translate(code: NativeKeyCode, modifiers: ModifierSet) -> UiKey {
        if modifiers.keypad() {
            if let Some(key) = numpad::numpad_lookup(code) {
                return key;
            }
        }

        if let Some(key) = standard::standard_lookup(code) {
            return key;
        }

        if code != NativeKeyCode::NONE {
            trace!("native key code {:#x} has no abstract mapping", code.as_u32());
        }

        UiKey::None
    }
}
