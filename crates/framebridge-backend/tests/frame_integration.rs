//! Integration tests for the frame synchronization pass.
//!
//! Exercises `PlatformBackend::new_frame` end-to-end: frame timing, display
//! geometry, the extra-repaint rule, and the per-frame cursor refresh.

use std::rc::Rc;

use framebridge_backend::frame::FIRST_FRAME_DELTA;
use framebridge_backend::mock::{RecordingClipboard, RecordingSink, RecordingSurface, SinkCall};
use framebridge_backend::{BackendOptions, PlatformBackend, SurfaceEvent};
use framebridge_core::{CursorShape, UiCursor};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}

fn backend_and_sink() -> (PlatformBackend, Rc<RecordingSink>) {
    init_tracing();
    let sink = Rc::new(RecordingSink::new());
    let backend = PlatformBackend::new(
        sink.clone(),
        Rc::new(RecordingClipboard::with_text("")),
        BackendOptions::default(),
    );
    (backend, sink)
}

// ── Frame timing ──────────────────────────────────────────────────────────────

#[test]
fn test_the_first_frame_ever_reports_the_sixtieth_second_fallback() {
    let (mut backend, sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    let id = backend.register_source(widget.clone());
    sink.take_calls();

    backend.new_frame(id);

    let deltas: Vec<_> = sink
        .take_calls()
        .into_iter()
        .filter(|c| matches!(c, SinkCall::DeltaTime { .. }))
        .collect();
    assert_eq!(deltas, vec![SinkCall::DeltaTime { seconds: FIRST_FRAME_DELTA }]);
}

#[test]
fn test_the_frame_clock_is_shared_across_sources() {
    // The fallback applies to the first frame of the backend, not the first
    // frame of each source.
    let (mut backend, sink) = backend_and_sink();
    let first = Rc::new(RecordingSurface::widget());
    let second = Rc::new(RecordingSurface::widget());
    let id_first = backend.register_source(first.clone());
    let id_second = backend.register_source(second.clone());

    backend.new_frame(id_first);
    sink.take_calls();
    backend.new_frame(id_second);

    let second_delta = sink
        .take_calls()
        .into_iter()
        .find_map(|c| match c {
            SinkCall::DeltaTime { seconds } => Some(seconds),
            _ => None,
        })
        .expect("second frame must report a delta");
    assert_ne!(
        second_delta, FIRST_FRAME_DELTA,
        "only the very first frame uses the fallback"
    );
    assert!(second_delta >= 0.0);
}

// ── Display geometry ──────────────────────────────────────────────────────────

#[test]
fn test_display_size_and_unit_scale_are_written_every_frame() {
    let (mut backend, sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    widget.pixel_size.set((1920, 1080));
    let id = backend.register_source(widget.clone());
    sink.take_calls();

    backend.new_frame(id);
    let first: Vec<_> = sink.take_calls();
    widget.pixel_size.set((1280, 720));
    backend.new_frame(id);
    let second: Vec<_> = sink.take_calls();

    assert_eq!(first[0], SinkCall::DisplaySize { width: 1920.0, height: 1080.0 });
    assert_eq!(first[1], SinkCall::DisplayScale { x: 1.0, y: 1.0 });
    assert_eq!(second[0], SinkCall::DisplaySize { width: 1280.0, height: 720.0 });
    assert_eq!(second[1], SinkCall::DisplayScale { x: 1.0, y: 1.0 });
}

// ── Extra repaint rule ────────────────────────────────────────────────────────

#[test]
fn test_queued_input_triggers_one_extra_repaint_for_widgets_only() {
    let (mut backend, _sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    let window = Rc::new(RecordingSurface::window());
    let widget_id = backend.register_source(widget.clone());
    let window_id = backend.register_source(window.clone());

    // Both queues get one event.  The widget repaints once at dispatch.
    backend.filter_event(widget_id, &SurfaceEvent::FocusIn);
    backend.filter_event(window_id, &SurfaceEvent::FocusIn);
    assert_eq!(widget.repaint_requests.get(), 1);
    assert_eq!(window.repaint_requests.get(), 0);

    // Draining with pending input adds exactly one more widget repaint.
    backend.new_frame(widget_id);
    backend.new_frame(window_id);
    assert_eq!(widget.repaint_requests.get(), 2);
    assert_eq!(window.repaint_requests.get(), 0);

    // A frame with an empty queue adds none.
    backend.new_frame(widget_id);
    assert_eq!(widget.repaint_requests.get(), 2);
}

// ── Cursor refresh ────────────────────────────────────────────────────────────

#[test]
fn test_every_frame_broadcasts_the_requested_cursor_to_all_sources() {
    let (mut backend, sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    let window = Rc::new(RecordingSurface::window());
    let widget_id = backend.register_source(widget.clone());
    backend.register_source(window.clone());
    sink.requested_cursor.set(UiCursor::Hand);

    backend.new_frame(widget_id);

    assert_eq!(widget.cursor_history.borrow().as_slice(), &[CursorShape::PointingHand]);
    assert_eq!(window.cursor_history.borrow().as_slice(), &[CursorShape::PointingHand]);
}

#[test]
fn test_hidden_and_software_cursors_blank_the_native_cursor() {
    let (mut backend, sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    let id = backend.register_source(widget.clone());

    sink.requested_cursor.set(UiCursor::Hidden);
    backend.new_frame(id);

    sink.requested_cursor.set(UiCursor::Hand);
    sink.draws_own_cursor.set(true);
    backend.new_frame(id);

    assert_eq!(
        widget.cursor_history.borrow().as_slice(),
        &[CursorShape::Blank, CursorShape::Blank]
    );
}

#[test]
fn test_disabled_cursor_changes_leave_surfaces_untouched() {
    let (mut backend, sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    let id = backend.register_source(widget.clone());
    sink.cursor_changes_disabled.set(true);

    backend.new_frame(id);

    assert!(widget.cursor_history.borrow().is_empty());
}

// ── Monitor notification seam ─────────────────────────────────────────────────

#[test]
fn test_monitor_change_notification_is_absorbed_by_the_next_frame() {
    // The base backend's monitor enumeration is a stub; the notification
    // must simply not disturb the frame pass.
    let (mut backend, sink) = backend_and_sink();
    let widget = Rc::new(RecordingSurface::widget());
    let id = backend.register_source(widget.clone());
    sink.take_calls();

    backend.notify_monitor_change();
    backend.new_frame(id);

    let calls = sink.take_calls();
    assert!(matches!(calls[0], SinkCall::DisplaySize { .. }));
    assert!(calls.iter().any(|c| matches!(c, SinkCall::DeltaTime { .. })));
}
