//! Registry of active event sources and their deferred-action queues.
//!
//! Each registered source gets a stable [`SourceId`] issued from a monotonic
//! counter and an empty FIFO queue.  The two live and die together: a queue
//! exists if and only if its source is registered, and unregistering discards
//! any pending actions – there is no partial replay across unregister.
//!
//! Surfaces are held by `Weak` reference only.  Keying the arena by an issued
//! id rather than by the surface pointer means a toolkit that reuses memory
//! addresses can never make a stale handle resolve to the wrong queue.

use std::collections::{BTreeMap, VecDeque};
use std::rc::{Rc, Weak};

use framebridge_core::InputAction;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::surface::{EventSurface, SurfaceKind};

/// Stable identifier for a registered event source.
///
/// Ids are never reused within a registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(u64);

impl SourceId {
    /// Returns the raw id value, for logging and diagnostics.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

struct SourceEntry {
    surface: Weak<dyn EventSurface>,
    kind: SurfaceKind,
    queue: VecDeque<InputAction>,
}

/// Arena of per-source deferred-action queues.
#[derive(Default)]
pub struct SourceRegistry {
    entries: BTreeMap<SourceId, SourceEntry>,
    next_id: u64,
}

impl SourceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface and creates its empty queue.
    ///
    /// The surface's capability tag is read once here and cached for the
    /// lifetime of the registration.
    ///
    /// # Panics
    ///
    /// Panics if the same surface object is already registered – registering
    /// twice is a caller error, not a runtime condition.
    pub fn register(&mut self, surface: &Rc<dyn EventSurface>) -> SourceId {
        let new_ptr = Rc::as_ptr(surface) as *const ();
        assert!(
            !self
                .entries
                .values()
                .any(|entry| entry.surface.as_ptr() as *const () == new_ptr),
            "event source is already registered"
        );

        let id = SourceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let kind = surface.kind();
        self.entries.insert(
            id,
            SourceEntry {
                surface: Rc::downgrade(surface),
                kind,
                queue: VecDeque::new(),
            },
        );
        debug!("registered {kind:?} source {}", id.as_u64());
        id
    }

    /// Removes a source and discards its queue.
    ///
    /// Returns `false` without complaint when the id is not registered –
    /// toolkit object destruction order relative to backend teardown is not
    /// guaranteed, so a late unregister must be a no-op.
    pub fn unregister(&mut self, id: SourceId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                if !entry.queue.is_empty() {
                    debug!(
                        "unregistered source {} with {} pending actions discarded",
                        id.as_u64(),
                        entry.queue.len()
                    );
                } else {
                    debug!("unregistered source {}", id.as_u64());
                }
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the id refers to a registered source.
    pub fn is_registered(&self, id: SourceId) -> bool {
        self.entries.contains_key(&id)
    }

    /// The capability tag cached at registration, or `None` if unregistered.
    pub fn kind(&self, id: SourceId) -> Option<SurfaceKind> {
        self.entries.get(&id).map(|entry| entry.kind)
    }

    /// Upgrades the surface handle, or `None` if the id is unregistered or
    /// the toolkit already destroyed the object.
    pub fn surface(&self, id: SourceId) -> Option<Rc<dyn EventSurface>> {
        self.entries.get(&id).and_then(|entry| entry.surface.upgrade())
    }

    /// Appends an action to a source's queue.
    ///
    /// # Panics
    ///
    /// Panics if the source is not registered: enqueuing to an unregistered
    /// source is a contract violation by the event router.
    pub fn enqueue(&mut self, id: SourceId, action: InputAction) {
        self.entries
            .get_mut(&id)
            .unwrap_or_else(|| panic!("enqueue to unregistered source {}", id.as_u64()))
            .queue
            .push_back(action);
    }

    /// Pops the oldest pending action of a source, if any.
    ///
    /// # Panics
    ///
    /// Panics if the source is not registered.
    pub fn next_action(&mut self, id: SourceId) -> Option<InputAction> {
        self.entries
            .get_mut(&id)
            .unwrap_or_else(|| panic!("queue access for unregistered source {}", id.as_u64()))
            .queue
            .pop_front()
    }

    /// Number of pending actions for a source.
    ///
    /// # Panics
    ///
    /// Panics if the source is not registered.
    pub fn queue_len(&self, id: SourceId) -> usize {
        self.entries
            .get(&id)
            .unwrap_or_else(|| panic!("queue access for unregistered source {}", id.as_u64()))
            .queue
            .len()
    }

    /// Iterates over the still-live surfaces of all registered sources, in
    /// registration order.  Sources whose toolkit object is already gone are
    /// skipped.
    pub fn sources(&self) -> impl Iterator<Item = Rc<dyn EventSurface>> + '_ {
        self.entries.values().filter_map(|entry| entry.surface.upgrade())
    }

    /// Number of registered sources (live or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no sources are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
