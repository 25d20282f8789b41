//! # framebridge-backend
//!
//! The event translation and deferred-dispatch backend of FrameBridge.
//!
//! This crate observes raw events from a widget toolkit's event loop,
//! translates them into the abstract input model defined by
//! `framebridge-core`, buffers them per event source, and replays them into
//! an immediate-mode UI's input state once per rendered frame.
//!
//! Everything runs on the host event loop thread: there is no locking, no
//! atomics, and no cross-thread handoff.  Shared handles are `Rc`/`Weak`.
//!
//! # Integration sketch
//!
//! ```text
//! host setup
//!  └─ BackendSlot::init(sink, clipboard, options)   -- one slot per UI context
//!  └─ backend.register_source(surface)              -- one id per window/widget
//! event loop
//!  └─ backend.filter_event(id, &event)              -- translate + enqueue
//! render loop (per frame, per source)
//!  └─ backend.new_frame(id)                         -- timing, drain, cursors
//! ```
//!
//! The toolkit side is reached exclusively through the [`EventSurface`] and
//! [`SystemClipboard`] traits; the UI side through the [`InputSink`] trait.
//! The `mock` module ships recording implementations of all three for tests
//! and host bring-up.

pub mod backend;
pub mod clipboard;
pub mod cursor_update;
pub mod dispatcher;
pub mod events;
pub mod frame;
pub mod mock;
pub mod options;
pub mod registry;
pub mod sink;
pub mod surface;

pub use backend::{BackendSlot, PlatformBackend, BACKEND_NAME};
pub use clipboard::{ClipboardBridge, SystemClipboard};
pub use events::{PointerButton, SurfaceEvent};
pub use options::{BackendOptions, OptionsError};
pub use registry::{SourceId, SourceRegistry};
pub use sink::InputSink;
pub use surface::{EventSurface, SurfaceKind};
