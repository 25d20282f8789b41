//! Cursor kind translation between the UI library and the host toolkit.
//!
//! The UI reports the cursor it wants as an abstract [`UiCursor`]; the
//! toolkit surface accepts a concrete [`CursorShape`].  The mapping is a
//! total function: anything the table does not know collapses to the arrow.
//!
//! [`UiCursor::Hidden`] is the "no cursor" sentinel.  It also translates to
//! the arrow – callers decide *whether* to hide the cursor (by setting
//! [`CursorShape::Blank`]) before consulting this table, never after.

use serde::{Deserialize, Serialize};

/// Abstract cursor kind requested by the UI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiCursor {
    /// Sentinel: the UI wants no visible cursor.
    Hidden,
    Arrow,
    TextInput,
    ResizeNS,
    ResizeEW,
    Hand,
    ResizeAll,
    ResizeNESW,
    ResizeNWSE,
    NotAllowed,
}

/// Native cursor shape a toolkit surface can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorShape {
    Arrow,
    IBeam,
    SizeVertical,
    SizeHorizontal,
    PointingHand,
    SizeAll,
    SizeBDiag,
    SizeFDiag,
    Forbidden,
    /// Invisible cursor, used to hide the pointer over a surface.
    Blank,
}

/// Cursor kind translator.
pub struct CursorTranslator;

impl CursorTranslator {
    /// Translates an abstract cursor kind to a native shape.
    ///
    /// Total function; unknown kinds – including the [`UiCursor::Hidden`]
    /// sentinel – default to [`CursorShape::Arrow`].
    pub fn translate(cursor: UiCursor) -> CursorShape {
        match cursor {
            UiCursor::Arrow => CursorShape::Arrow,
            UiCursor::TextInput => CursorShape::IBeam,
            UiCursor::ResizeNS => CursorShape::SizeVertical,
            UiCursor::ResizeEW => CursorShape::SizeHorizontal,
            UiCursor::Hand => CursorShape::PointingHand,
            UiCursor::ResizeAll => CursorShape::SizeAll,
            UiCursor::ResizeNESW => CursorShape::SizeBDiag,
            UiCursor::ResizeNWSE => CursorShape::SizeFDiag,
            UiCursor::NotAllowed => CursorShape::Forbidden,
            UiCursor::Hidden => CursorShape::Arrow,
        }
    }
}
