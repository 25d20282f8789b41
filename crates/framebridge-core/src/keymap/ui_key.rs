//! Abstract key identifiers for the immediate-mode UI input model.
//!
//! This is the canonical toolkit-independent key representation used
//! throughout FrameBridge. Native key codes are translated to [`UiKey`] at the
//! event translation boundary and never travel further.
//!
//! # What is an abstract key? (for beginners)
//!
//! A widget toolkit reports key events using its own numeric codes, and those
//! codes differ between toolkits and platforms.  An immediate-mode UI library
//! does not want to know about any of that: it asks "was *Enter* pressed?",
//! not "was native code 0x01000004 pressed?".  [`UiKey`] is that shared,
//! logical vocabulary.  Every variant names a key by what it *is*, not by
//! where any particular toolkit numbers it.
//!
//! # The `None` sentinel
//!
//! Not every native code has an abstract equivalent (media keys, IME keys,
//! vendor extras).  [`UiKey::None`] (value 0) stands in for any key that has
//! no mapping.  Key events still flow through with `None` so the UI observes
//! the press/release rhythm even for keys it cannot name.
//!
//! # Modifier-state pseudo-keys
//!
//! `ModCtrl`, `ModShift`, `ModAlt` and `ModSuper` are not physical keys.
//! They are the side-agnostic channel through which the backend reports the
//! *current modifier state* ahead of each key event, so the UI never sees a
//! key event qualified by stale modifiers.

use serde::{Deserialize, Serialize};

/// Abstract key identifier consumed by the UI-input-state.
///
/// The numeric value of each variant is a stable identifier used for queue
/// inspection and recorded input scripts; it carries no toolkit meaning.
/// [`UiKey::None`] represents any key that has no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum UiKey {
    /// Sentinel for keys with no abstract mapping.
    None = 0,

    // Editing and navigation (1–15)
    Tab = 1,
    LeftArrow = 2,
    RightArrow = 3,
    UpArrow = 4,
    DownArrow = 5,
    PageUp = 6,
    PageDown = 7,
    Home = 8,
    End = 9,
    Insert = 10,
    Delete = 11,
    Backspace = 12,
    Space = 13,
    Enter = 14,
    Escape = 15,

    // Physical modifier keys (16–24).  The right-hand variants are reserved
    // for toolkits that distinguish sides; the standard table maps the
    // side-agnostic native modifiers to the left-hand variants.
    LeftCtrl = 16,
    LeftShift = 17,
    LeftAlt = 18,
    LeftSuper = 19,
    RightCtrl = 20,
    RightShift = 21,
    RightAlt = 22,
    RightSuper = 23,
    Menu = 24,

    // Digit row (25–34)
    Digit0 = 25,
    Digit1 = 26,
    Digit2 = 27,
    Digit3 = 28,
    Digit4 = 29,
    Digit5 = 30,
    Digit6 = 31,
    Digit7 = 32,
    Digit8 = 33,
    Digit9 = 34,

    // Letters (35–60)
    KeyA = 35,
    KeyB = 36,
    KeyC = 37,
    KeyD = 38,
    KeyE = 39,
    KeyF = 40,
    KeyG = 41,
    KeyH = 42,
    KeyI = 43,
    KeyJ = 44,
    KeyK = 45,
    KeyL = 46,
    KeyM = 47,
    KeyN = 48,
    KeyO = 49,
    KeyP = 50,
    KeyQ = 51,
    KeyR = 52,
    KeyS = 53,
    KeyT = 54,
    KeyU = 55,
    KeyV = 56,
    KeyW = 57,
    KeyX = 58,
    KeyY = 59,
    KeyZ = 60,

    // Function keys (61–72)
    F1 = 61,
    F2 = 62,
    F3 = 63,
    F4 = 64,
    F5 = 65,
    F6 = 66,
    F7 = 67,
    F8 = 68,
    F9 = 69,
    F10 = 70,
    F11 = 71,
    F12 = 72,

    // Punctuation (73–83)
    Apostrophe = 73,
    Comma = 74,
    Minus = 75,
    Period = 76,
    Slash = 77,
    Semicolon = 78,
    Equal = 79,
    LeftBracket = 80,
    Backslash = 81,
    RightBracket = 82,
    GraveAccent = 83,

    // Locks and system keys (84–88)
    CapsLock = 84,
    ScrollLock = 85,
    NumLock = 86,
    PrintScreen = 87,
    Pause = 88,

    // Keypad (89–105)
    Keypad0 = 89,
    Keypad1 = 90,
    Keypad2 = 91,
    Keypad3 = 92,
    Keypad4 = 93,
    Keypad5 = 94,
    Keypad6 = 95,
    Keypad7 = 96,
    Keypad8 = 97,
    Keypad9 = 98,
    KeypadDecimal = 99,
    KeypadDivide = 100,
    KeypadMultiply = 101,
    KeypadSubtract = 102,
    KeypadAdd = 103,
    KeypadEnter = 104,
    KeypadEqual = 105,

    // Modifier-state pseudo-keys (200–203), side-agnostic.
    ModCtrl = 200,
    ModShift = 201,
    ModAlt = 202,
    ModSuper = 203,
}

impl UiKey {
    /// Converts a raw u16 identifier to a [`UiKey`].
    ///
    /// Returns [`UiKey::None`] if the value does not correspond to a known
    /// key variant.
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => UiKey::Tab,
            2 => UiKey::LeftArrow,
            3 => UiKey::RightArrow,
            4 => UiKey::UpArrow,
            5 => UiKey::DownArrow,
            6 => UiKey::PageUp,
            7 => UiKey::PageDown,
            8 => UiKey::Home,
            9 => UiKey::End,
            10 => UiKey::Insert,
            11 => UiKey::Delete,
            12 => UiKey::Backspace,
            13 => UiKey::Space,
            14 => UiKey::Enter,
            15 => UiKey::Escape,
            16 => UiKey::LeftCtrl,
            17 => UiKey::LeftShift,
            18 => UiKey::LeftAlt,
            19 => UiKey::LeftSuper,
            20 => UiKey::RightCtrl,
            21 => UiKey::RightShift,
            22 => UiKey::RightAlt,
            23 => UiKey::RightSuper,
            24 => UiKey::Menu,
            25 => UiKey::Digit0,
            26 => UiKey::Digit1,
            27 => UiKey::Digit2,
            28 => UiKey::Digit3,
            29 => UiKey::Digit4,
            30 => UiKey::Digit5,
            31 => UiKey::Digit6,
            32 => UiKey::Digit7,
            33 => UiKey::Digit8,
            34 => UiKey::Digit9,
            35 => UiKey::KeyA,
            36 => UiKey::KeyB,
            37 => UiKey::KeyC,
            38 => UiKey::KeyD,
            39 => UiKey::KeyE,
            40 => UiKey::KeyF,
            41 => UiKey::KeyG,
            42 => UiKey::KeyH,
            43 => UiKey::KeyI,
            44 => UiKey::KeyJ,
            45 => UiKey::KeyK,
            46 => UiKey::KeyL,
            47 => UiKey::KeyM,
            48 => UiKey::KeyN,
            49 => UiKey::KeyO,
            50 => UiKey::KeyP,
            51 => UiKey::KeyQ,
            52 => UiKey::KeyR,
            53 => UiKey::KeyS,
            54 => UiKey::KeyT,
            55 => UiKey::KeyU,
            56 => UiKey::KeyV,
            57 => UiKey::KeyW,
            58 => UiKey::KeyX,
            59 => UiKey::KeyY,
            60 => UiKey::KeyZ,
            61 => UiKey::F1,
            62 => UiKey::F2,
            63 => UiKey::F3,
            64 => UiKey::F4,
            65 => UiKey::F5,
            66 => UiKey::F6,
            67 => UiKey::F7,
            68 => UiKey::F8,
            69 => UiKey::F9,
            70 => UiKey::F10,
            71 => UiKey::F11,
            72 => UiKey::F12,
            73 => UiKey::Apostrophe,
            74 => UiKey::Comma,
            75 => UiKey::Minus,
            76 => UiKey::Period,
            77 => UiKey::Slash,
            78 => UiKey::Semicolon,
            79 => UiKey::Equal,
            80 => UiKey::LeftBracket,
            81 => UiKey::Backslash,
            82 => UiKey::RightBracket,
            83 => UiKey::GraveAccent,
            84 => UiKey::CapsLock,
            85 => UiKey::ScrollLock,
            86 => UiKey::NumLock,
            87 => UiKey::PrintScreen,
            88 => UiKey::Pause,
            89 => UiKey::Keypad0,
            90 => UiKey::Keypad1,
            91 => UiKey::Keypad2,
            92 => UiKey::Keypad3,
            93 => UiKey::Keypad4,
            94 => UiKey::Keypad5,
            95 => UiKey::Keypad6,
            96 => UiKey::Keypad7,
            97 => UiKey::Keypad8,
            98 => UiKey::Keypad9,
            99 => UiKey::KeypadDecimal,
            100 => UiKey::KeypadDivide,
            101 => UiKey::KeypadMultiply,
            102 => UiKey::KeypadSubtract,
            103 => UiKey::KeypadAdd,
            104 => UiKey::KeypadEnter,
            105 => UiKey::KeypadEqual,
            200 => UiKey::ModCtrl,
            201 => UiKey::ModShift,
            202 => UiKey::ModAlt,
            203 => UiKey::ModSuper,
            _ => UiKey::None,
        }
    }

    /// Returns the stable u16 identifier for this key.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns `true` if this is a physical modifier key.
    pub fn is_modifier_key(self) -> bool {
        matches!(
            self,
            UiKey::LeftCtrl
                | UiKey::LeftShift
                | UiKey::LeftAlt
                | UiKey::LeftSuper
                | UiKey::RightCtrl
                | UiKey::RightShift
                | UiKey::RightAlt
                | UiKey::RightSuper
        )
    }

    /// Returns `true` if this is a modifier-state pseudo-key rather than a
    /// physical key.
    pub fn is_modifier_state(self) -> bool {
        matches!(
            self,
            UiKey::ModCtrl | UiKey::ModShift | UiKey::ModAlt | UiKey::ModSuper
        )
    }

    /// Returns `true` if this is a keypad key.
    pub fn is_keypad(self) -> bool {
        (UiKey::Keypad0.as_u16()..=UiKey::KeypadEqual.as_u16()).contains(&self.as_u16())
    }
}
