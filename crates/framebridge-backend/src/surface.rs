//! The event source capability trait.
//!
//! An event source is one observed toolkit object – a window or a
//! widget-like surface.  The backend never owns it and never downcasts it;
//! it sees exactly the operations below, plus a capability tag.  Widgets
//! support repaint scheduling and pointer-motion tracking on their own
//! surface; windows only accept cursor assignment.
//!
//! Surfaces are registered as `Rc<dyn EventSurface>` and held by the
//! registry as `Weak` – the toolkit controls the object's lifetime.

use framebridge_core::CursorShape;
use serde::{Deserialize, Serialize};

/// Capability tag for a registered event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// A widget-like surface: supports repaint requests, cursor assignment
    /// and pointer-motion tracking.
    Widget,
    /// A top-level window: supports cursor assignment only.
    Window,
}

/// Interface to one observed toolkit object.
pub trait EventSurface {
    /// The capability tag of this surface.
    fn kind(&self) -> SurfaceKind;

    /// Schedules a repaint of the surface.  Only invoked for
    /// [`SurfaceKind::Widget`] sources.
    fn request_repaint(&self);

    /// Assigns a native cursor shape to the surface.
    fn set_cursor(&self, shape: CursorShape);

    /// Current surface size in pixels, re-read every frame to tolerate
    /// resizing.
    fn pixel_size(&self) -> (u32, u32);

    /// Enables or disables pointer-motion events without a pressed button.
    /// Only invoked for [`SurfaceKind::Widget`] sources, as a side effect of
    /// registration.
    fn set_pointer_tracking(&self, enabled: bool);
}
