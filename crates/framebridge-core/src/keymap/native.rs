//! Native key code space of the host toolkit.
//!
//! The toolkit reports each key event with a 32-bit code following a common
//! widget-toolkit convention: printable keys use their Latin-1 *uppercase*
//! code point (`'A'` = 0x41, `'!'` = 0x21), while editing, navigation,
//! function and modifier keys live in a dedicated block above 0x0100_0000.
//!
//! Note that printable codes identify the *symbol delivered*, not the
//! physical key: pressing Shift+1 on a US layout arrives as [`codes::EXCLAM`],
//! not as [`codes::DIGIT_1`] with a shift flag.  The standard translation
//! table therefore carries explicit alias rows folding shifted symbols back
//! onto their base keys.

use serde::{Deserialize, Serialize};

/// A raw key code as reported by the host toolkit.
///
/// `NativeKeyCode(0)` means "no key" and is never mapped or logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeKeyCode(pub u32);

impl NativeKeyCode {
    /// The "no key" code some toolkits report for synthetic or IME events.
    pub const NONE: NativeKeyCode = NativeKeyCode(0);

    /// Returns the raw toolkit code value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Named constants for every native key code the translation tables know.
///
/// Printable keys are their Latin-1 code points; the function-key block
/// starts at 0x0100_0000.
pub mod codes {
    use super::NativeKeyCode;

    // ── Printable keys (Latin-1 code points) ─────────────────────────────────
    pub const SPACE: NativeKeyCode = NativeKeyCode(0x20);
    pub const EXCLAM: NativeKeyCode = NativeKeyCode(0x21);
    pub const QUOTE_DBL: NativeKeyCode = NativeKeyCode(0x22);
    pub const NUMBER_SIGN: NativeKeyCode = NativeKeyCode(0x23);
    pub const DOLLAR: NativeKeyCode = NativeKeyCode(0x24);
    pub const PERCENT: NativeKeyCode = NativeKeyCode(0x25);
    pub const AMPERSAND: NativeKeyCode = NativeKeyCode(0x26);
    pub const APOSTROPHE: NativeKeyCode = NativeKeyCode(0x27);
    pub const PAREN_LEFT: NativeKeyCode = NativeKeyCode(0x28);
    pub const PAREN_RIGHT: NativeKeyCode = NativeKeyCode(0x29);
    pub const ASTERISK: NativeKeyCode = NativeKeyCode(0x2A);
    pub const PLUS: NativeKeyCode = NativeKeyCode(0x2B);
    pub const COMMA: NativeKeyCode = NativeKeyCode(0x2C);
    pub const MINUS: NativeKeyCode = NativeKeyCode(0x2D);
    pub const PERIOD: NativeKeyCode = NativeKeyCode(0x2E);
    pub const SLASH: NativeKeyCode = NativeKeyCode(0x2F);
    pub const DIGIT_0: NativeKeyCode = NativeKeyCode(0x30);
    pub const DIGIT_1: NativeKeyCode = NativeKeyCode(0x31);
    pub const DIGIT_2: NativeKeyCode = NativeKeyCode(0x32);
    pub const DIGIT_3: NativeKeyCode = NativeKeyCode(0x33);
    pub const DIGIT_4: NativeKeyCode = NativeKeyCode(0x34);
    pub const DIGIT_5: NativeKeyCode = NativeKeyCode(0x35);
    pub const DIGIT_6: NativeKeyCode = NativeKeyCode(0x36);
    pub const DIGIT_7: NativeKeyCode = NativeKeyCode(0x37);
    pub const DIGIT_8: NativeKeyCode = NativeKeyCode(0x38);
    pub const DIGIT_9: NativeKeyCode = NativeKeyCode(0x39);
    pub const COLON: NativeKeyCode = NativeKeyCode(0x3A);
    pub const SEMICOLON: NativeKeyCode = NativeKeyCode(0x3B);
    pub const LESS: NativeKeyCode = NativeKeyCode(0x3C);
    pub const EQUAL: NativeKeyCode = NativeKeyCode(0x3D);
    pub const GREATER: NativeKeyCode = NativeKeyCode(0x3E);
    pub const QUESTION: NativeKeyCode = NativeKeyCode(0x3F);
    pub const AT: NativeKeyCode = NativeKeyCode(0x40);
    pub const A: NativeKeyCode = NativeKeyCode(0x41);
    pub const B: NativeKeyCode = NativeKeyCode(0x42);
    pub const C: NativeKeyCode = NativeKeyCode(0x43);
    pub const D: NativeKeyCode = NativeKeyCode(0x44);
    pub const E: NativeKeyCode = NativeKeyCode(0x45);
    pub const F: NativeKeyCode = NativeKeyCode(0x46);
    pub const G: NativeKeyCode = NativeKeyCode(0x47);
    pub const H: NativeKeyCode = NativeKeyCode(0x48);
    pub const I: NativeKeyCode = NativeKeyCode(0x49);
    pub const J: NativeKeyCode = NativeKeyCode(0x4A);
    pub const K: NativeKeyCode = NativeKeyCode(0x4B);
    pub const L: NativeKeyCode = NativeKeyCode(0x4C);
    pub const M: NativeKeyCode = NativeKeyCode(0x4D);
    pub const N: NativeKeyCode = NativeKeyCode(0x4E);
    pub const O: NativeKeyCode = NativeKeyCode(0x4F);
    pub const P: NativeKeyCode = NativeKeyCode(0x50);
    pub const Q: NativeKeyCode = NativeKeyCode(0x51);
    pub const R: NativeKeyCode = NativeKeyCode(0x52);
    pub const S: NativeKeyCode = NativeKeyCode(0x53);
    pub const T: NativeKeyCode = NativeKeyCode(0x54);
    pub const U: NativeKeyCode = NativeKeyCode(0x55);
    pub const V: NativeKeyCode = NativeKeyCode(0x56);
    pub const W: NativeKeyCode = NativeKeyCode(0x57);
    pub const X: NativeKeyCode = NativeKeyCode(0x58);
    pub const Y: NativeKeyCode = NativeKeyCode(0x59);
    pub const Z: NativeKeyCode = NativeKeyCode(0x5A);
    pub const BRACKET_LEFT: NativeKeyCode = NativeKeyCode(0x5B);
    pub const BACKSLASH: NativeKeyCode = NativeKeyCode(0x5C);
    pub const BRACKET_RIGHT: NativeKeyCode = NativeKeyCode(0x5D);
    pub const ASCII_CIRCUM: NativeKeyCode = NativeKeyCode(0x5E);
    pub const UNDERSCORE: NativeKeyCode = NativeKeyCode(0x5F);
    pub const QUOTE_LEFT: NativeKeyCode = NativeKeyCode(0x60);
    pub const BRACE_LEFT: NativeKeyCode = NativeKeyCode(0x7B);
    pub const BAR: NativeKeyCode = NativeKeyCode(0x7C);
    pub const BRACE_RIGHT: NativeKeyCode = NativeKeyCode(0x7D);
    pub const ASCII_TILDE: NativeKeyCode = NativeKeyCode(0x7E);

    // ── Function block (above 0x0100_0000) ───────────────────────────────────
    pub const ESCAPE: NativeKeyCode = NativeKeyCode(0x0100_0000);
    pub const TAB: NativeKeyCode = NativeKeyCode(0x0100_0001);
    pub const BACKSPACE: NativeKeyCode = NativeKeyCode(0x0100_0003);
    /// The main Enter key on the primary key block.
    pub const RETURN: NativeKeyCode = NativeKeyCode(0x0100_0004);
    /// The Enter key on the numeric keypad.
    pub const ENTER: NativeKeyCode = NativeKeyCode(0x0100_0005);
    pub const INSERT: NativeKeyCode = NativeKeyCode(0x0100_0006);
    pub const DELETE: NativeKeyCode = NativeKeyCode(0x0100_0007);
    pub const PAUSE: NativeKeyCode = NativeKeyCode(0x0100_0008);
    pub const PRINT: NativeKeyCode = NativeKeyCode(0x0100_0009);
    pub const HOME: NativeKeyCode = NativeKeyCode(0x0100_0010);
    pub const END: NativeKeyCode = NativeKeyCode(0x0100_0011);
    pub const LEFT: NativeKeyCode = NativeKeyCode(0x0100_0012);
    pub const UP: NativeKeyCode = NativeKeyCode(0x0100_0013);
    pub const RIGHT: NativeKeyCode = NativeKeyCode(0x0100_0014);
    pub const DOWN: NativeKeyCode = NativeKeyCode(0x0100_0015);
    pub const PAGE_UP: NativeKeyCode = NativeKeyCode(0x0100_0016);
    pub const PAGE_DOWN: NativeKeyCode = NativeKeyCode(0x0100_0017);
    // The toolkit does not distinguish left/right for these three.
    pub const SHIFT: NativeKeyCode = NativeKeyCode(0x0100_0020);
    pub const CONTROL: NativeKeyCode = NativeKeyCode(0x0100_0021);
    pub const META: NativeKeyCode = NativeKeyCode(0x0100_0022);
    pub const ALT: NativeKeyCode = NativeKeyCode(0x0100_0023);
    pub const CAPS_LOCK: NativeKeyCode = NativeKeyCode(0x0100_0024);
    pub const NUM_LOCK: NativeKeyCode = NativeKeyCode(0x0100_0025);
    pub const SCROLL_LOCK: NativeKeyCode = NativeKeyCode(0x0100_0026);
    pub const F1: NativeKeyCode = NativeKeyCode(0x0100_0030);
    pub const F2: NativeKeyCode = NativeKeyCode(0x0100_0031);
    pub const F3: NativeKeyCode = NativeKeyCode(0x0100_0032);
    pub const F4: NativeKeyCode = NativeKeyCode(0x0100_0033);
    pub const F5: NativeKeyCode = NativeKeyCode(0x0100_0034);
    pub const F6: NativeKeyCode = NativeKeyCode(0x0100_0035);
    pub const F7: NativeKeyCode = NativeKeyCode(0x0100_0036);
    pub const F8: NativeKeyCode = NativeKeyCode(0x0100_0037);
    pub const F9: NativeKeyCode = NativeKeyCode(0x0100_0038);
    pub const F10: NativeKeyCode = NativeKeyCode(0x0100_0039);
    pub const F11: NativeKeyCode = NativeKeyCode(0x0100_003A);
    pub const F12: NativeKeyCode = NativeKeyCode(0x0100_003B);
    pub const SUPER_L: NativeKeyCode = NativeKeyCode(0x0100_0053);
    pub const SUPER_R: NativeKeyCode = NativeKeyCode(0x0100_0054);
    pub const MENU: NativeKeyCode = NativeKeyCode(0x0100_0055);
}
