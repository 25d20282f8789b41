//! Standard native-to-abstract key translation table.
//!
//! One row per native code.  Several native codes deliberately alias to the
//! same abstract key: the toolkit reports shifted symbols as their own codes
//! (`'!'`, `'@'`, …) and the UI wants the base key (`1`, `2`, …) plus the
//! shift modifier it already received through the modifier-state channel.
//! The alias rows are data, not derivation – keep them as explicit entries.

use super::native::{codes, NativeKeyCode};
use super::ui_key::UiKey;

/// Looks up a native code in the standard table.
///
/// Returns `None` (the Option, not the sentinel) when the code has no
/// standard-table entry so the caller can distinguish "unmapped" from a
/// mapping; [`crate::KeyTranslator::translate`] folds that into
/// [`UiKey::None`].
pub fn standard_lookup(code: NativeKeyCode) -> Option<UiKey> {
    match code {
        // ── Editing and navigation ───────────────────────────────────────────
        codes::TAB => Some(UiKey::Tab),
        codes::LEFT => Some(UiKey::LeftArrow),
        codes::RIGHT => Some(UiKey::RightArrow),
        codes::UP => Some(UiKey::UpArrow),
        codes::DOWN => Some(UiKey::DownArrow),
        codes::PAGE_UP => Some(UiKey::PageUp),
        codes::PAGE_DOWN => Some(UiKey::PageDown),
        codes::HOME => Some(UiKey::Home),
        codes::END => Some(UiKey::End),
        codes::INSERT => Some(UiKey::Insert),
        codes::DELETE => Some(UiKey::Delete),
        codes::BACKSPACE => Some(UiKey::Backspace),
        codes::SPACE => Some(UiKey::Space),
        codes::RETURN => Some(UiKey::Enter),
        codes::ENTER => Some(UiKey::Enter),
        codes::ESCAPE => Some(UiKey::Escape),

        // ── Modifiers ────────────────────────────────────────────────────────
        // The toolkit does not differentiate left/right Ctrl, Shift or Alt;
        // the side-agnostic codes map to the left-hand variants.
        codes::CONTROL => Some(UiKey::LeftCtrl),
        codes::SHIFT => Some(UiKey::LeftShift),
        codes::ALT => Some(UiKey::LeftAlt),
        codes::SUPER_L => Some(UiKey::LeftSuper),
        codes::SUPER_R => Some(UiKey::RightSuper),
        codes::MENU => Some(UiKey::Menu),

        // ── Digit row ────────────────────────────────────────────────────────
        codes::DIGIT_1 => Some(UiKey::Digit1),
        codes::DIGIT_2 => Some(UiKey::Digit2),
        codes::DIGIT_3 => Some(UiKey::Digit3),
        codes::DIGIT_4 => Some(UiKey::Digit4),
        codes::DIGIT_5 => Some(UiKey::Digit5),
        codes::DIGIT_6 => Some(UiKey::Digit6),
        codes::DIGIT_7 => Some(UiKey::Digit7),
        codes::DIGIT_8 => Some(UiKey::Digit8),
        codes::DIGIT_9 => Some(UiKey::Digit9),
        codes::DIGIT_0 => Some(UiKey::Digit0),

        // Shifted digit-row symbols alias to their base digit.
        codes::EXCLAM => Some(UiKey::Digit1),
        codes::AT => Some(UiKey::Digit2),
        codes::NUMBER_SIGN => Some(UiKey::Digit3),
        codes::DOLLAR => Some(UiKey::Digit4),
        codes::PERCENT => Some(UiKey::Digit5),
        codes::ASCII_CIRCUM => Some(UiKey::Digit6),
        codes::AMPERSAND => Some(UiKey::Digit7),
        codes::ASTERISK => Some(UiKey::Digit8),
        codes::PAREN_LEFT => Some(UiKey::Digit9),
        codes::PAREN_RIGHT => Some(UiKey::Digit0),

        // ── Letters ──────────────────────────────────────────────────────────
        codes::A => Some(UiKey::KeyA),
        codes::B => Some(UiKey::KeyB),
        codes::C => Some(UiKey::KeyC),
        codes::D => Some(UiKey::KeyD),
        codes::E => Some(UiKey::KeyE),
        codes::F => Some(UiKey::KeyF),
        codes::G => Some(UiKey::KeyG),
        codes::H => Some(UiKey::KeyH),
        codes::I => Some(UiKey::KeyI),
        codes::J => Some(UiKey::KeyJ),
        codes::K => Some(UiKey::KeyK),
        codes::L => Some(UiKey::KeyL),
        codes::M => Some(UiKey::KeyM),
        codes::N => Some(UiKey::KeyN),
        codes::O => Some(UiKey::KeyO),
        codes::P => Some(UiKey::KeyP),
        codes::Q => Some(UiKey::KeyQ),
        codes::R => Some(UiKey::KeyR),
        codes::S => Some(UiKey::KeyS),
        codes::T => Some(UiKey::KeyT),
        codes::U => Some(UiKey::KeyU),
        codes::V => Some(UiKey::KeyV),
        codes::W => Some(UiKey::KeyW),
        codes::X => Some(UiKey::KeyX),
        codes::Y => Some(UiKey::KeyY),
        codes::Z => Some(UiKey::KeyZ),

        // ── Function keys ────────────────────────────────────────────────────
        codes::F1 => Some(UiKey::F1),
        codes::F2 => Some(UiKey::F2),
        codes::F3 => Some(UiKey::F3),
        codes::F4 => Some(UiKey::F4),
        codes::F5 => Some(UiKey::F5),
        codes::F6 => Some(UiKey::F6),
        codes::F7 => Some(UiKey::F7),
        codes::F8 => Some(UiKey::F8),
        codes::F9 => Some(UiKey::F9),
        codes::F10 => Some(UiKey::F10),
        codes::F11 => Some(UiKey::F11),
        codes::F12 => Some(UiKey::F12),

        // ── Punctuation, shifted symbol aliased onto its base key ────────────
        codes::APOSTROPHE => Some(UiKey::Apostrophe),
        codes::QUOTE_DBL => Some(UiKey::Apostrophe),
        codes::COMMA => Some(UiKey::Comma),
        codes::LESS => Some(UiKey::Comma),
        codes::MINUS => Some(UiKey::Minus),
        codes::UNDERSCORE => Some(UiKey::Minus),
        codes::PERIOD => Some(UiKey::Period),
        codes::GREATER => Some(UiKey::Period),
        codes::SLASH => Some(UiKey::Slash),
        codes::QUESTION => Some(UiKey::Slash),
        codes::SEMICOLON => Some(UiKey::Semicolon),
        codes::COLON => Some(UiKey::Semicolon),
        codes::EQUAL => Some(UiKey::Equal),
        codes::PLUS => Some(UiKey::Equal),
        codes::BRACKET_LEFT => Some(UiKey::LeftBracket),
        codes::BRACE_LEFT => Some(UiKey::LeftBracket),
        codes::BACKSLASH => Some(UiKey::Backslash),
        codes::BAR => Some(UiKey::Backslash),
        codes::BRACKET_RIGHT => Some(UiKey::RightBracket),
        codes::BRACE_RIGHT => Some(UiKey::RightBracket),
        codes::QUOTE_LEFT => Some(UiKey::GraveAccent),
        codes::ASCII_TILDE => Some(UiKey::GraveAccent),

        // ── Locks and system keys ────────────────────────────────────────────
        codes::CAPS_LOCK => Some(UiKey::CapsLock),
        codes::SCROLL_LOCK => Some(UiKey::ScrollLock),
        codes::NUM_LOCK => Some(UiKey::NumLock),
        codes::PRINT => Some(UiKey::PrintScreen),
        codes::PAUSE => Some(UiKey::Pause),

        _ => None,
    }
}
