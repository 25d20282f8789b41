//! Raw modifier bitset carried by toolkit key events.

use serde::{Deserialize, Serialize};

/// Modifier flags attached to a native key event.
///
/// Bit layout:
/// - Bit 0: Ctrl
/// - Bit 1: Shift
/// - Bit 2: Alt
/// - Bit 3: Super (Windows/Command/Meta)
/// - Bit 4: Keypad – the event originated on the numeric keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet(pub u8);

impl ModifierSet {
    pub const CTRL: u8 = 1 << 0;
    pub const SHIFT: u8 = 1 << 1;
    pub const ALT: u8 = 1 << 2;
    pub const SUPER: u8 = 1 << 3;
    pub const KEYPAD: u8 = 1 << 4;

    /// The empty modifier set.
    pub const NONE: ModifierSet = ModifierSet(0);

    /// Returns `true` if the Ctrl modifier is active.
    pub fn ctrl(&self) -> bool {
        self.0 & Self::CTRL != 0
    }

    /// Returns `true` if the Shift modifier is active.
    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns `true` if the Alt modifier is active.
    pub fn alt(&self) -> bool {
        self.0 & Self::ALT != 0
    }

    /// Returns `true` if the Super (Win/Cmd/Meta) modifier is active.
    pub fn super_key(&self) -> bool {
        self.0 & Self::SUPER != 0
    }

    /// Returns `true` if the event originated on the numeric keypad.
    pub fn keypad(&self) -> bool {
        self.0 & Self::KEYPAD != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_has_no_active_modifiers() {
        // Arrange
        let mods = ModifierSet::default();

        // Assert
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.alt());
        assert!(!mods.super_key());
        assert!(!mods.keypad());
        assert_eq!(mods, ModifierSet::NONE);
    }

    #[test]
    fn test_each_bit_activates_exactly_one_predicate() {
        let cases: &[(u8, fn(&ModifierSet) -> bool)] = &[
            (ModifierSet::CTRL, ModifierSet::ctrl),
            (ModifierSet::SHIFT, ModifierSet::shift),
            (ModifierSet::ALT, ModifierSet::alt),
            (ModifierSet::SUPER, ModifierSet::super_key),
            (ModifierSet::KEYPAD, ModifierSet::keypad),
        ];

        for &(bit, predicate) in cases {
            let mods = ModifierSet(bit);
            assert!(predicate(&mods), "bit {bit:#04b} should activate its predicate");

            let all_active = [mods.ctrl(), mods.shift(), mods.alt(), mods.super_key(), mods.keypad()]
                .iter()
                .filter(|&&b| b)
                .count();
            assert_eq!(all_active, 1, "bit {bit:#04b} should activate exactly one predicate");
        }
    }

    #[test]
    fn test_combined_bits_activate_all_their_predicates() {
        // Arrange
        let mods = ModifierSet(ModifierSet::CTRL | ModifierSet::SHIFT | ModifierSet::KEYPAD);

        // Assert
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(mods.keypad());
        assert!(!mods.alt());
        assert!(!mods.super_key());
    }
}
