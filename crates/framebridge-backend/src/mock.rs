//! Recording test doubles for the backend's trait seams.
//!
//! Allows tests and host bring-up code to drive the backend without a real
//! toolkit or UI library: [`RecordingSink`] records every mutator call and
//! serves scripted reader state, [`RecordingSurface`] counts repaints and
//! cursor assignments, and [`RecordingClipboard`] is an in-memory system
//! clipboard.
//!
//! Everything uses `Cell`/`RefCell` – the backend is single-threaded by
//! contract, so the doubles are too.

use std::cell::{Cell, RefCell};

use framebridge_core::{CursorShape, MouseButton, UiCursor, UiKey};

use crate::clipboard::SystemClipboard;
use crate::sink::InputSink;
use crate::surface::{EventSurface, SurfaceKind};

/// One recorded [`InputSink`] mutator call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    KeyEvent { key: UiKey, pressed: bool },
    MouseButtonEvent { button: MouseButton, pressed: bool },
    MousePositionEvent { x: f32, y: f32 },
    MouseWheelEvent { x: f32, y: f32 },
    FocusEvent { gained: bool },
    InputText { text: String },
    KeyNativeData { key: UiKey, native_virtual: u32, native_scan: u32 },
    DisplaySize { width: f32, height: f32 },
    DisplayScale { x: f32, y: f32 },
    DeltaTime { seconds: f32 },
    BackendInfo { name: Option<&'static str> },
}

/// An [`InputSink`] that records mutator calls and serves scripted readers.
///
/// Reader state is public – set the fields a scenario needs and leave the
/// rest at their defaults.
pub struct RecordingSink {
    /// Every mutator call, in order.
    pub calls: RefCell<Vec<SinkCall>>,
    /// Served by [`InputSink::requested_cursor`].
    pub requested_cursor: Cell<UiCursor>,
    /// Served by [`InputSink::draws_own_cursor`].
    pub draws_own_cursor: Cell<bool>,
    /// Served by [`InputSink::cursor_changes_disabled`].
    pub cursor_changes_disabled: Cell<bool>,
    /// Served by [`InputSink::multi_viewport_enabled`].
    pub multi_viewport_enabled: Cell<bool>,
    /// Served by [`InputSink::last_mouse_position`].
    pub last_mouse_position: Cell<(f32, f32)>,
}

impl RecordingSink {
    /// Creates a sink with default reader state: arrow cursor, no flags set,
    /// pointer at the origin.
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            requested_cursor: Cell::new(UiCursor::Arrow),
            draws_own_cursor: Cell::new(false),
            cursor_changes_disabled: Cell::new(false),
            multi_viewport_enabled: Cell::new(false),
            last_mouse_position: Cell::new((0.0, 0.0)),
        }
    }

    /// Returns and clears the recorded calls.
    pub fn take_calls(&self) -> Vec<SinkCall> {
        self.calls.replace(Vec::new())
    }

    fn record(&self, call: SinkCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSink for RecordingSink {
    fn set_key_event(&self, key: UiKey, pressed: bool) {
        self.record(SinkCall::KeyEvent { key, pressed });
    }

    fn set_mouse_button_event(&self, button: MouseButton, pressed: bool) {
        self.record(SinkCall::MouseButtonEvent { button, pressed });
    }

    fn set_mouse_position_event(&self, x: f32, y: f32) {
        self.last_mouse_position.set((x, y));
        self.record(SinkCall::MousePositionEvent { x, y });
    }

    fn set_mouse_wheel_event(&self, x: f32, y: f32) {
        self.record(SinkCall::MouseWheelEvent { x, y });
    }

    fn set_focus_event(&self, gained: bool) {
        self.record(SinkCall::FocusEvent { gained });
    }

    fn append_input_text(&self, text: &str) {
        self.record(SinkCall::InputText { text: text.to_string() });
    }

    fn set_key_event_native_data(&self, key: UiKey, native_virtual: u32, native_scan: u32) {
        self.record(SinkCall::KeyNativeData { key, native_virtual, native_scan });
    }

    fn set_display_size(&self, width: f32, height: f32) {
        self.record(SinkCall::DisplaySize { width, height });
    }

    fn set_display_scale(&self, x: f32, y: f32) {
        self.record(SinkCall::DisplayScale { x, y });
    }

    fn set_delta_time(&self, seconds: f32) {
        self.record(SinkCall::DeltaTime { seconds });
    }

    fn requested_cursor(&self) -> UiCursor {
        self.requested_cursor.get()
    }

    fn draws_own_cursor(&self) -> bool {
        self.draws_own_cursor.get()
    }

    fn cursor_changes_disabled(&self) -> bool {
        self.cursor_changes_disabled.get()
    }

    fn multi_viewport_enabled(&self) -> bool {
        self.multi_viewport_enabled.get()
    }

    fn last_mouse_position(&self) -> (f32, f32) {
        self.last_mouse_position.get()
    }

    fn set_backend_info(&self, name: Option<&'static str>) {
        self.record(SinkCall::BackendInfo { name });
    }
}

/// An [`EventSurface`] that records what the backend does to it.
pub struct RecordingSurface {
    kind: SurfaceKind,
    /// Served by [`EventSurface::pixel_size`]; settable mid-test to simulate
    /// resizes.
    pub pixel_size: Cell<(u32, u32)>,
    /// Number of [`EventSurface::request_repaint`] calls.
    pub repaint_requests: Cell<u32>,
    /// Every cursor shape assigned, in order.
    pub cursor_history: RefCell<Vec<CursorShape>>,
    /// Last value passed to [`EventSurface::set_pointer_tracking`], `None`
    /// if never called.
    pub pointer_tracking: Cell<Option<bool>>,
}

impl RecordingSurface {
    fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            pixel_size: Cell::new((800, 600)),
            repaint_requests: Cell::new(0),
            cursor_history: RefCell::new(Vec::new()),
            pointer_tracking: Cell::new(None),
        }
    }

    /// A widget-capable surface.
    pub fn widget() -> Self {
        Self::new(SurfaceKind::Widget)
    }

    /// A window surface.
    pub fn window() -> Self {
        Self::new(SurfaceKind::Window)
    }
}

impl EventSurface for RecordingSurface {
    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn request_repaint(&self) {
        self.repaint_requests.set(self.repaint_requests.get() + 1);
    }

    fn set_cursor(&self, shape: CursorShape) {
        self.cursor_history.borrow_mut().push(shape);
    }

    fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size.get()
    }

    fn set_pointer_tracking(&self, enabled: bool) {
        self.pointer_tracking.set(Some(enabled));
    }
}

/// An in-memory [`SystemClipboard`].
pub struct RecordingClipboard {
    /// Current clipboard contents, directly settable to simulate another
    /// application writing the clipboard.
    pub contents: RefCell<String>,
}

impl RecordingClipboard {
    /// Creates a clipboard holding `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: RefCell::new(text.to_string()),
        }
    }
}

impl SystemClipboard for RecordingClipboard {
    fn read_text(&self) -> String {
        self.contents.borrow().clone()
    }

    fn write_text(&self, text: &str) {
        *self.contents.borrow_mut() = text.to_string();
    }
}
