//! Clipboard text bridge between the system clipboard and the UI library.
//!
//! The UI library polls clipboard text synchronously and may do so many
//! times per frame; hitting the system clipboard each time would be slow and,
//! on some platforms, can block.  The bridge therefore keeps a cached copy:
//! reads come from the cache, writes go straight to the system clipboard, and
//! the host's clipboard-changed signal refreshes the cache (which also picks
//! up our own writes once the toolkit echoes them back).

#[cfg(test)]
use mockall::automock;

use std::cell::RefCell;
use std::rc::Rc;

/// Interface to the host toolkit's system clipboard.
#[cfg_attr(test, automock)]
pub trait SystemClipboard {
    /// Reads the current clipboard text; empty string when the clipboard
    /// holds no text.
    fn read_text(&self) -> String;

    /// Replaces the clipboard contents with `text`.
    fn write_text(&self, text: &str);
}

/// Caching clipboard adapter exposed to the UI library.
pub struct ClipboardBridge {
    system: Rc<dyn SystemClipboard>,
    cache: RefCell<String>,
}

impl ClipboardBridge {
    /// Creates the bridge and primes the cache from the system clipboard.
    pub fn new(system: Rc<dyn SystemClipboard>) -> Self {
        let initial = system.read_text();
        Self {
            system,
            cache: RefCell::new(initial),
        }
    }

    /// Returns the cached clipboard text.
    pub fn text(&self) -> String {
        self.cache.borrow().clone()
    }

    /// Writes `text` to the system clipboard.
    ///
    /// The cache is not touched here; the toolkit's change signal (routed to
    /// [`refresh_from_system`](Self::refresh_from_system)) keeps it in sync
    /// for our own writes and everyone else's alike.
    pub fn set_text(&self, text: &str) {
        self.system.write_text(text);
    }

    /// Re-reads the system clipboard into the cache.  Call on the host's
    /// clipboard-changed notification.
    pub fn refresh_from_system(&self) {
        *self.cache.borrow_mut() = self.system.read_text();
    }
}
