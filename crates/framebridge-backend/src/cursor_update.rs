//! CursorStateUpdater: broadcasts the UI's requested cursor to all sources.
//!
//! Runs at the end of every frame synchronization pass.  Cost is
//! O(registered sources), which is one surface in the common case.

use framebridge_core::{CursorShape, CursorTranslator, UiCursor};

use crate::registry::SourceRegistry;
use crate::sink::InputSink;

/// Applies the UI's requested cursor (or hides it) on every registered
/// source.
///
/// Does nothing when the host has disabled cursor changes.  The cursor is
/// hidden – [`CursorShape::Blank`] – when the UI requests no cursor at all
/// or is drawing a software cursor itself; otherwise every surface gets the
/// translated requested kind.
pub fn update_cursor_state(sink: &dyn InputSink, registry: &SourceRegistry) {
    if sink.cursor_changes_disabled() {
        return;
    }

    let requested = sink.requested_cursor();
    let hide = requested == UiCursor::Hidden || sink.draws_own_cursor();

    for surface in registry.sources() {
        if hide {
            surface.set_cursor(CursorShape::Blank);
        } else {
            surface.set_cursor(CursorTranslator::translate(requested));
        }
    }
}
