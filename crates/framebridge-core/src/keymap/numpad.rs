//! Numpad native-to-abstract key translation table.
//!
//! The toolkit reuses the digit-row and symbol codes for keypad keys and
//! distinguishes them only by the keypad modifier flag on the event.  When
//! that flag is set, this table takes precedence over the standard table so
//! that keypad `7` arrives as [`UiKey::Keypad7`] rather than
//! [`UiKey::Digit7`].  Codes without a row here (arrows on a NumLock-off
//! keypad, for instance) fall through to the standard table.

use super::native::{codes, NativeKeyCode};
use super::ui_key::UiKey;

/// Looks up a native code in the numpad table.
pub fn numpad_lookup(code: NativeKeyCode) -> Option<UiKey> {
    match code {
        codes::DIGIT_0 => Some(UiKey::Keypad0),
        codes::DIGIT_1 => Some(UiKey::Keypad1),
        codes::DIGIT_2 => Some(UiKey::Keypad2),
        codes::DIGIT_3 => Some(UiKey::Keypad3),
        codes::DIGIT_4 => Some(UiKey::Keypad4),
        codes::DIGIT_5 => Some(UiKey::Keypad5),
        codes::DIGIT_6 => Some(UiKey::Keypad6),
        codes::DIGIT_7 => Some(UiKey::Keypad7),
        codes::DIGIT_8 => Some(UiKey::Keypad8),
        codes::DIGIT_9 => Some(UiKey::Keypad9),
        codes::PERIOD => Some(UiKey::KeypadDecimal),
        codes::SLASH => Some(UiKey::KeypadDivide),
        codes::ASTERISK => Some(UiKey::KeypadMultiply),
        codes::MINUS => Some(UiKey::KeypadSubtract),
        codes::PLUS => Some(UiKey::KeypadAdd),
        codes::EQUAL => Some(UiKey::KeypadEqual),
        codes::ENTER => Some(UiKey::KeypadEnter),
        _ => None,
    }
}
