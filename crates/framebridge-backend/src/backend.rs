//! PlatformBackend: the composition root, and the per-context slot.
//!
//! One [`PlatformBackend`] serves one UI context.  The host stores it in a
//! [`BackendSlot`] kept alongside that context and threads the slot (or the
//! backend borrowed from it) through every entry point – there is no global
//! lookup and no ambient "current context".
//!
//! # Entry points
//!
//! - [`BackendSlot::init`] / [`BackendSlot::shutdown`] – lifecycle, with the
//!   double-init / shutdown-without-init assertions.
//! - [`PlatformBackend::register_source`] / `unregister_source` – observer
//!   installation per toolkit object.
//! - [`PlatformBackend::filter_event`] – the single function the host routes
//!   all relevant events through.
//! - [`PlatformBackend::new_frame`] – once per rendered frame per source,
//!   before the UI starts building that frame.

use std::rc::Rc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::clipboard::{ClipboardBridge, SystemClipboard};
use crate::cursor_update;
use crate::dispatcher::InputEventDispatcher;
use crate::events::SurfaceEvent;
use crate::frame::{self, FrameClock};
use crate::options::BackendOptions;
use crate::registry::{SourceId, SourceRegistry};
use crate::sink::InputSink;
use crate::surface::{EventSurface, SurfaceKind};

/// Identity string installed on the UI context while a backend is alive.
pub const BACKEND_NAME: &str = "framebridge";

/// The event translation backend for one UI context.
pub struct PlatformBackend {
    sink: Rc<dyn InputSink>,
    registry: SourceRegistry,
    dispatcher: InputEventDispatcher,
    clock: FrameClock,
    clipboard: ClipboardBridge,
    want_update_monitors: bool,
    platform_interface_active: bool,
}

impl PlatformBackend {
    /// Constructs the backend state for one UI context.
    ///
    /// Installs the backend identity on the sink, primes the clipboard cache,
    /// runs the initial monitor enumeration, and brings up the platform
    /// interface seam when the sink reports multi-viewport enabled.
    pub fn new(
        sink: Rc<dyn InputSink>,
        system_clipboard: Rc<dyn SystemClipboard>,
        options: BackendOptions,
    ) -> Self {
        sink.set_backend_info(Some(BACKEND_NAME));

        let clipboard = ClipboardBridge::new(system_clipboard);
        let mut backend = Self {
            dispatcher: InputEventDispatcher::new(&options),
            registry: SourceRegistry::new(),
            clock: FrameClock::new(),
            clipboard,
            want_update_monitors: true,
            platform_interface_active: false,
            sink,
        };

        backend.update_monitors();
        if backend.sink.multi_viewport_enabled() {
            backend.init_platform_interface();
        }
        backend
    }

    // ── Source registration ───────────────────────────────────────────────────

    /// Registers a toolkit surface as an event source and returns its id.
    ///
    /// Widget-capable sources get pointer-motion tracking enabled as a side
    /// effect so move events arrive without a pressed button.
    ///
    /// # Panics
    ///
    /// Panics if the surface is already registered.
    pub fn register_source(&mut self, surface: Rc<dyn EventSurface>) -> SourceId {
        if surface.kind() == SurfaceKind::Widget {
            surface.set_pointer_tracking(true);
        }
        self.registry.register(&surface)
    }

    /// Removes a source and discards any pending actions.  A no-op for ids
    /// that are not (or no longer) registered.
    pub fn unregister_source(&mut self, id: SourceId) {
        if !self.registry.unregister(id) {
            debug!("unregister for unknown source {} ignored", id.as_u64());
        }
    }

    // ── Event entry point ─────────────────────────────────────────────────────

    /// Routes one raw toolkit event for a registered source.
    ///
    /// Returns whether the event was consumed; this backend observes without
    /// consuming, so the result is always `false` and the host forwards the
    /// event to its next filter.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not registered.
    pub fn filter_event(&mut self, source: SourceId, event: &SurfaceEvent) -> bool {
        self.dispatcher
            .dispatch(&mut self.registry, self.sink.as_ref(), source, event);

        // Any input-relevant event invalidates a widget's last paint.
        if self.registry.kind(source) == Some(SurfaceKind::Widget) {
            if let Some(surface) = self.registry.surface(source) {
                surface.request_repaint();
            }
        }

        false
    }

    // ── Frame synchronization ─────────────────────────────────────────────────

    /// Runs the frame synchronization pass for one source.
    ///
    /// Must be called exactly once per rendered frame per registered source,
    /// before the UI library begins building that frame's content.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not registered.
    pub fn new_frame(&mut self, source: SourceId) {
        let kind = self
            .registry
            .kind(source)
            .unwrap_or_else(|| panic!("new_frame for unregistered source {}", source.as_u64()));

        let Some(surface) = self.registry.surface(source) else {
            // The toolkit destroyed the object without unregistering; skip
            // the pass rather than feed the sink stale geometry.
            warn!(
                "new_frame for source {} whose surface is already destroyed",
                source.as_u64()
            );
            return;
        };

        // Display size is re-read every frame to accommodate resizing.
        let (width, height) = surface.pixel_size();
        self.sink.set_display_size(width as f32, height as f32);
        self.sink.set_display_scale(1.0, 1.0);

        if self.want_update_monitors {
            self.update_monitors();
        }

        let delta = self.clock.tick(Instant::now());
        self.sink.set_delta_time(delta);

        // Input that arrived since the last paint must be reflected by the
        // paint after this one.
        if self.registry.queue_len(source) > 0 && kind == SurfaceKind::Widget {
            surface.request_repaint();
        }

        while let Some(action) = self.registry.next_action(source) {
            frame::apply(action, self.sink.as_ref());
        }

        self.refresh_pointer_state();
        cursor_update::update_cursor_state(self.sink.as_ref(), &self.registry);
    }

    // ── Clipboard plumbing ────────────────────────────────────────────────────

    /// Cached clipboard text, for the UI library's get-clipboard hook.
    pub fn clipboard_text(&self) -> String {
        self.clipboard.text()
    }

    /// Writes clipboard text, for the UI library's set-clipboard hook.
    pub fn set_clipboard_text(&self, text: &str) {
        self.clipboard.set_text(text);
    }

    /// Refreshes the clipboard cache.  Route the toolkit's clipboard-changed
    /// signal here.
    pub fn notify_clipboard_changed(&self) {
        self.clipboard.refresh_from_system();
    }

    // ── Monitor / viewport extension seams ────────────────────────────────────

    /// Flags the monitor list as stale.  Route the toolkit's screen-added /
    /// screen-removed signals here.
    pub fn notify_monitor_change(&mut self) {
        self.want_update_monitors = true;
    }

    /// Re-enumerates monitors.  Extension seam for multi-viewport support;
    /// performs no work in the base backend beyond clearing the pending flag.
    fn update_monitors(&mut self) {
        self.want_update_monitors = false;
    }

    /// Pulls live pointer state on platforms that need it.  Extension seam;
    /// the base backend trusts event deltas and only traces the fallback a
    /// polling implementation would reconcile against.
    fn refresh_pointer_state(&self) {
        tracing::trace!(
            "pointer state refresh; fallback position {:?}",
            self.dispatcher.pointer_fallback_position()
        );
    }

    /// Brings up the multi-viewport platform interface.  Extension seam;
    /// performs no work in the base backend.
    fn init_platform_interface(&mut self) {
        self.platform_interface_active = true;
    }

    /// Tears down the multi-viewport platform interface.  Extension seam.
    fn shutdown_platform_interface(&mut self) {
        self.platform_interface_active = false;
    }
}

impl Drop for PlatformBackend {
    fn drop(&mut self) {
        if self.platform_interface_active {
            self.shutdown_platform_interface();
        }
        // Leave the UI context as we found it.
        self.sink.set_backend_info(None);
    }
}

/// Per-context storage for the backend instance.
///
/// The host embeds one slot next to each UI context it owns.  The slot
/// enforces the lifecycle contract: initializing an occupied slot and
/// shutting down an empty one are integration bugs and panic, while
/// unregistering through an empty slot is tolerated because toolkit object
/// destruction order relative to context teardown is not guaranteed.
#[derive(Default)]
pub struct BackendSlot {
    backend: Option<PlatformBackend>,
}

impl BackendSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs the backend for this context.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already initialized.
    pub fn init(
        &mut self,
        sink: Rc<dyn InputSink>,
        system_clipboard: Rc<dyn SystemClipboard>,
        options: BackendOptions,
    ) -> &mut PlatformBackend {
        assert!(
            self.backend.is_none(),
            "platform backend already initialized for this context"
        );
        self.backend
            .insert(PlatformBackend::new(sink, system_clipboard, options))
    }

    /// Tears down the backend.
    ///
    /// # Panics
    ///
    /// Panics if the slot was never initialized (or is already shut down).
    pub fn shutdown(&mut self) {
        assert!(
            self.backend.is_some(),
            "no platform backend to shut down, or already shut down"
        );
        self.backend = None;
    }

    /// The live backend, if initialized.
    pub fn backend(&mut self) -> Option<&mut PlatformBackend> {
        self.backend.as_mut()
    }

    /// Teardown-tolerant unregister: forwards to the backend when one is
    /// live, and is a silent no-op after shutdown.
    pub fn unregister_source(&mut self, id: SourceId) {
        if let Some(backend) = self.backend.as_mut() {
            backend.unregister_source(id);
        }
    }
}
