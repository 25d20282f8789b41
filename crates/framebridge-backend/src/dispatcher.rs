//! InputEventDispatcher: translates raw toolkit events into deferred actions.
//!
//! The dispatcher is the write side of the bridge.  It receives one
//! [`SurfaceEvent`] at a time on the event loop thread and, for each:
//!
//! 1. updates the ownership state (focused / keyboard-active /
//!    pointer-active source) and the last valid pointer position
//!    synchronously;
//! 2. builds an [`InputAction`] capturing the translated values and appends
//!    it to the *originating* source's queue.
//!
//! Ownership state only disambiguates enter/leave and focus-out races; it
//! never routes actions.  Actions always land on the queue of the source
//! that produced the raw event.

use std::collections::HashSet;

use framebridge_core::{
    wheel_steps, InputAction, KeyTranslator, MouseButton, NativeKeyCode, UiKey, OFF_SCREEN_POS,
};
use tracing::{debug, trace, warn};

use crate::events::{PointerButton, SurfaceEvent};
use crate::options::BackendOptions;
use crate::registry::{SourceId, SourceRegistry};
use crate::sink::InputSink;

/// Maps a native pointer button to the UI's abstract button id.
///
/// Returns `None` for buttons the UI has no notion of; their events are
/// dropped by the dispatcher.
fn button_to_ui(button: PointerButton) -> Option<MouseButton> {
    match button {
        PointerButton::Left => Some(MouseButton::Left),
        PointerButton::Right => Some(MouseButton::Right),
        PointerButton::Middle => Some(MouseButton::Middle),
        PointerButton::X1 | PointerButton::X2 => None,
    }
}

/// Per-backend event dispatcher and ownership tracker.
pub struct InputEventDispatcher {
    focus_owner: Option<SourceId>,
    keyboard_owner: Option<SourceId>,
    pointer_owner: Option<SourceId>,
    last_valid_pointer_position: (f32, f32),
    /// Native codes already reported as unmapped, to keep the warning to one
    /// line per code per backend instance.
    logged_unmapped: HashSet<NativeKeyCode>,
    key_event_debug: bool,
    unmapped_key_warnings: bool,
}

impl InputEventDispatcher {
    /// Creates a dispatcher configured by the backend options.
    pub fn new(options: &BackendOptions) -> Self {
        Self {
            focus_owner: None,
            keyboard_owner: None,
            pointer_owner: None,
            last_valid_pointer_position: OFF_SCREEN_POS,
            logged_unmapped: HashSet::new(),
            key_event_debug: options.key_event_debug,
            unmapped_key_warnings: options.unmapped_key_warnings,
        }
    }

    /// The position to fall back on when frame logic needs a pointer
    /// position and the pointer has left every source.  Retained across
    /// leaves so it is never the off-screen sentinel once real motion has
    /// been seen.
    pub(crate) fn pointer_fallback_position(&self) -> (f32, f32) {
        self.last_valid_pointer_position
    }

    /// Handles one raw event for a registered source.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not registered (the queue invariant – see
    /// [`SourceRegistry::enqueue`]).
    pub fn dispatch(
        &mut self,
        registry: &mut SourceRegistry,
        sink: &dyn InputSink,
        source: SourceId,
        event: &SurfaceEvent,
    ) {
        match event {
            SurfaceEvent::PointerEnter { local, global }
            | SurfaceEvent::PointerMove { local, global } => {
                self.handle_pointer_position(registry, sink, source, *local, *global);
            }
            SurfaceEvent::PointerLeave => {
                self.handle_pointer_leave(registry, sink, source);
            }
            SurfaceEvent::FocusIn => {
                self.handle_focus(registry, source, true);
            }
            SurfaceEvent::FocusOut => {
                self.handle_focus(registry, source, false);
            }
            SurfaceEvent::Key {
                code,
                modifiers,
                pressed,
                native_virtual,
                native_scan,
                text,
            } => {
                self.handle_key(
                    registry,
                    sink,
                    source,
                    *code,
                    *modifiers,
                    *pressed,
                    *native_virtual,
                    *native_scan,
                    text,
                );
            }
            SurfaceEvent::Button { button, pressed } => {
                self.handle_button(registry, source, *button, *pressed);
            }
            SurfaceEvent::Wheel {
                pixel_delta,
                angle_delta,
            } => {
                self.handle_wheel(registry, source, *pixel_delta, *angle_delta);
            }
        }
    }

    // ── Per-kind handlers ─────────────────────────────────────────────────────

    fn handle_pointer_position(
        &mut self,
        registry: &mut SourceRegistry,
        sink: &dyn InputSink,
        source: SourceId,
        local: (f32, f32),
        global: (f32, f32),
    ) {
        let position = if sink.multi_viewport_enabled() {
            global
        } else {
            local
        };

        self.pointer_owner = Some(source);
        self.last_valid_pointer_position = position;

        registry.enqueue(
            source,
            InputAction::PointerPosition {
                x: position.0,
                y: position.1,
            },
        );
    }

    fn handle_pointer_leave(
        &mut self,
        registry: &mut SourceRegistry,
        sink: &dyn InputSink,
        source: SourceId,
    ) {
        if self.pointer_owner == Some(source) {
            self.pointer_owner = None;
            // Keep the position the UI last saw, not the sentinel, so frame
            // logic retains a usable fallback across the leave.
            self.last_valid_pointer_position = sink.last_mouse_position();
        }

        registry.enqueue(
            source,
            InputAction::PointerPosition {
                x: OFF_SCREEN_POS.0,
                y: OFF_SCREEN_POS.1,
            },
        );
    }

    fn handle_focus(&mut self, registry: &mut SourceRegistry, source: SourceId, gained: bool) {
        // Stale event guard: a focus-out for a source that does not own focus
        // is an ordinary toolkit ordering race and is dropped silently.
        if !gained && self.focus_owner != Some(source) {
            return;
        }

        self.focus_owner = if gained { Some(source) } else { None };
        registry.enqueue(source, InputAction::Focus { gained });
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_key(
        &mut self,
        registry: &mut SourceRegistry,
        sink: &dyn InputSink,
        source: SourceId,
        code: NativeKeyCode,
        modifiers: framebridge_core::ModifierSet,
        pressed: bool,
        native_virtual: u32,
        native_scan: u32,
        text: &str,
    ) {
        if self.keyboard_owner != Some(source) {
            trace!("keyboard-active source is now {}", source.as_u64());
        }
        self.keyboard_owner = Some(source);

        if self.key_event_debug {
            debug!(
                "{}: code={:#010x} scan={:#06x} virtual={:#06x} modifiers={:#07b}",
                if pressed { "key press" } else { "key release" },
                code.as_u32(),
                native_scan,
                native_virtual,
                modifiers.0,
            );
        }

        // Modifier state must be observed no later than the key event it
        // qualifies, so its action goes on the queue first.
        registry.enqueue(
            source,
            InputAction::Modifiers {
                ctrl: modifiers.ctrl(),
                shift: modifiers.shift(),
                alt: modifiers.alt(),
                super_key: modifiers.super_key(),
            },
        );

        let key = KeyTranslator::translate(code, modifiers);
        if key == UiKey::None
            && code != NativeKeyCode::NONE
            && self.unmapped_key_warnings
            && self.logged_unmapped.insert(code)
        {
            warn!("unknown native key code {:#x}", code.as_u32());
        }

        // Native data is attached immediately, not deferred.
        sink.set_key_event_native_data(key, native_virtual, native_scan);

        registry.enqueue(source, InputAction::Key { key, pressed });
        if pressed && !text.is_empty() {
            registry.enqueue(
                source,
                InputAction::Text {
                    text: text.to_string(),
                },
            );
        }
    }

    fn handle_button(
        &mut self,
        registry: &mut SourceRegistry,
        source: SourceId,
        button: PointerButton,
        pressed: bool,
    ) {
        let Some(ui_button) = button_to_ui(button) else {
            // No abstract id for this button; drop the event without touching
            // pointer ownership.
            return;
        };

        self.pointer_owner = Some(source);
        registry.enqueue(
            source,
            InputAction::Button {
                button: ui_button,
                pressed,
            },
        );
    }

    fn handle_wheel(
        &mut self,
        registry: &mut SourceRegistry,
        source: SourceId,
        pixel_delta: Option<(f32, f32)>,
        angle_delta: Option<(f32, f32)>,
    ) {
        self.pointer_owner = Some(source);

        if let Some((x, y)) = pixel_delta {
            registry.enqueue(source, InputAction::Wheel { x, y });
        } else if let Some((dx, dy)) = angle_delta {
            let (x, y) = wheel_steps(dx, dy);
            registry.enqueue(source, InputAction::Wheel { x, y });
        }
        // Neither delta present: nothing to report.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingSink, RecordingSurface, SinkCall};
    use framebridge_core::keymap::native::codes;
    use framebridge_core::ModifierSet;
    use std::rc::Rc;

    use crate::surface::EventSurface;

    struct Fixture {
        dispatcher: InputEventDispatcher,
        registry: SourceRegistry,
        sink: RecordingSink,
        // Surfaces must outlive the registry's Weak handles.
        _surfaces: Vec<Rc<dyn EventSurface>>,
    }

    fn fixture_with_sources(count: usize) -> (Fixture, Vec<SourceId>) {
        let mut registry = SourceRegistry::new();
        let mut surfaces: Vec<Rc<dyn EventSurface>> = Vec::new();
        let mut ids = Vec::new();
        for _ in 0..count {
            let surface: Rc<dyn EventSurface> = Rc::new(RecordingSurface::widget());
            ids.push(registry.register(&surface));
            surfaces.push(surface);
        }
        (
            Fixture {
                dispatcher: InputEventDispatcher::new(&BackendOptions::default()),
                registry,
                sink: RecordingSink::new(),
                _surfaces: surfaces,
            },
            ids,
        )
    }

    fn drain(registry: &mut SourceRegistry, id: SourceId) -> Vec<InputAction> {
        std::iter::from_fn(|| registry.next_action(id)).collect()
    }

    // ── Pointer enter / move ──────────────────────────────────────────────────

    #[test]
    fn test_pointer_move_enqueues_local_position_by_default() {
        // Arrange
        let (mut f, ids) = fixture_with_sources(1);

        // Act
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::PointerMove {
                local: (10.0, 20.0),
                global: (110.0, 220.0),
            },
        );

        // Assert
        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::PointerPosition { x: 10.0, y: 20.0 }]
        );
        assert_eq!(f.dispatcher.pointer_owner, Some(ids[0]));
        assert_eq!(f.dispatcher.last_valid_pointer_position, (10.0, 20.0));
    }

    #[test]
    fn test_pointer_move_uses_global_position_when_multi_viewport_enabled() {
        // Arrange
        let (mut f, ids) = fixture_with_sources(1);
        f.sink.multi_viewport_enabled.set(true);

        // Act
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::PointerEnter {
                local: (10.0, 20.0),
                global: (110.0, 220.0),
            },
        );

        // Assert
        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::PointerPosition { x: 110.0, y: 220.0 }]
        );
    }

    // ── Pointer leave ─────────────────────────────────────────────────────────

    #[test]
    fn test_leave_by_owner_clears_ownership_and_keeps_last_ui_position() {
        // Arrange
        let (mut f, ids) = fixture_with_sources(1);
        f.sink.last_mouse_position.set((42.0, 43.0));
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::PointerMove {
                local: (10.0, 20.0),
                global: (10.0, 20.0),
            },
        );
        drain(&mut f.registry, ids[0]);

        // Act
        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[0], &SurfaceEvent::PointerLeave);

        // Assert – ownership cleared, fallback is the UI's position
        assert_eq!(f.dispatcher.pointer_owner, None);
        assert_eq!(f.dispatcher.last_valid_pointer_position, (42.0, 43.0));
        // The action itself carries the off-screen sentinel.
        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::PointerPosition {
                x: OFF_SCREEN_POS.0,
                y: OFF_SCREEN_POS.1
            }]
        );
    }

    #[test]
    fn test_leave_by_non_owner_still_enqueues_sentinel_but_keeps_owner() {
        // Arrange – pointer owned by source A
        let (mut f, ids) = fixture_with_sources(2);
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::PointerMove {
                local: (1.0, 2.0),
                global: (1.0, 2.0),
            },
        );
        drain(&mut f.registry, ids[0]);

        // Act – B reports a leave
        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[1], &SurfaceEvent::PointerLeave);

        // Assert
        assert_eq!(f.dispatcher.pointer_owner, Some(ids[0]));
        assert_eq!(f.dispatcher.last_valid_pointer_position, (1.0, 2.0));
        assert_eq!(
            drain(&mut f.registry, ids[1]),
            vec![InputAction::PointerPosition {
                x: OFF_SCREEN_POS.0,
                y: OFF_SCREEN_POS.1
            }]
        );
    }

    // ── Focus ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_focus_in_takes_ownership_and_enqueues_gained() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[0], &SurfaceEvent::FocusIn);

        assert_eq!(f.dispatcher.focus_owner, Some(ids[0]));
        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::Focus { gained: true }]
        );
    }

    #[test]
    fn test_focus_out_by_owner_clears_ownership() {
        let (mut f, ids) = fixture_with_sources(1);
        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[0], &SurfaceEvent::FocusIn);
        drain(&mut f.registry, ids[0]);

        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[0], &SurfaceEvent::FocusOut);

        assert_eq!(f.dispatcher.focus_owner, None);
        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::Focus { gained: false }]
        );
    }

    #[test]
    fn test_stale_focus_out_is_ignored() {
        // Arrange – focus owned by A
        let (mut f, ids) = fixture_with_sources(2);
        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[0], &SurfaceEvent::FocusIn);
        drain(&mut f.registry, ids[0]);

        // Act – B reports losing focus it never had
        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[1], &SurfaceEvent::FocusOut);

        // Assert – no action, owner unchanged
        assert_eq!(f.dispatcher.focus_owner, Some(ids[0]));
        assert_eq!(drain(&mut f.registry, ids[1]), vec![]);
    }

    // ── Keys ──────────────────────────────────────────────────────────────────

    fn key_event(code: NativeKeyCode, modifiers: ModifierSet, pressed: bool, text: &str) -> SurfaceEvent {
        SurfaceEvent::Key {
            code,
            modifiers,
            pressed,
            native_virtual: 0x41,
            native_scan: 0x1E,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_key_press_enqueues_modifiers_then_key_then_text() {
        // Arrange
        let (mut f, ids) = fixture_with_sources(1);
        let mods = ModifierSet(ModifierSet::CTRL | ModifierSet::SHIFT);

        // Act
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(codes::A, mods, true, "a"),
        );

        // Assert – strict order
        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![
                InputAction::Modifiers {
                    ctrl: true,
                    shift: true,
                    alt: false,
                    super_key: false
                },
                InputAction::Key { key: UiKey::KeyA, pressed: true },
                InputAction::Text { text: "a".to_string() },
            ]
        );
        assert_eq!(f.dispatcher.keyboard_owner, Some(ids[0]));
    }

    #[test]
    fn test_key_release_never_enqueues_text() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(codes::A, ModifierSet::NONE, false, "a"),
        );

        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![
                InputAction::Modifiers {
                    ctrl: false,
                    shift: false,
                    alt: false,
                    super_key: false
                },
                InputAction::Key { key: UiKey::KeyA, pressed: false },
            ]
        );
    }

    #[test]
    fn test_key_press_with_empty_text_enqueues_no_text_action() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(codes::F1, ModifierSet::NONE, true, ""),
        );

        let actions = drain(&mut f.registry, ids[0]);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1], InputAction::Key { key: UiKey::F1, pressed: true });
    }

    #[test]
    fn test_native_key_data_is_attached_synchronously() {
        // Arrange
        let (mut f, ids) = fixture_with_sources(1);

        // Act – dispatch but do NOT drain
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(codes::A, ModifierSet::NONE, true, "a"),
        );

        // Assert – the sink saw the native data before any queue replay
        assert_eq!(
            f.sink.take_calls(),
            vec![SinkCall::KeyNativeData {
                key: UiKey::KeyA,
                native_virtual: 0x41,
                native_scan: 0x1E
            }]
        );
        assert_eq!(f.registry.queue_len(ids[0]), 2, "actions stay queued");
    }

    #[test]
    fn test_unmapped_key_still_enqueues_a_none_key_event() {
        let (mut f, ids) = fixture_with_sources(1);
        let unmapped = NativeKeyCode(0x0108_0000);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(unmapped, ModifierSet::NONE, true, ""),
        );
        // Dispatch the same code again; the warn dedup set must not affect
        // the queue contents.
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(unmapped, ModifierSet::NONE, false, ""),
        );

        let actions = drain(&mut f.registry, ids[0]);
        assert_eq!(actions[1], InputAction::Key { key: UiKey::None, pressed: true });
        assert_eq!(actions[3], InputAction::Key { key: UiKey::None, pressed: false });
        assert_eq!(f.dispatcher.logged_unmapped.len(), 1);
    }

    #[test]
    fn test_numpad_key_translates_through_the_numpad_table() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &key_event(codes::DIGIT_5, ModifierSet(ModifierSet::KEYPAD), true, "5"),
        );

        let actions = drain(&mut f.registry, ids[0]);
        assert_eq!(actions[1], InputAction::Key { key: UiKey::Keypad5, pressed: true });
    }

    // ── Buttons ───────────────────────────────────────────────────────────────

    #[test]
    fn test_mapped_buttons_enqueue_and_take_pointer_ownership() {
        let (mut f, ids) = fixture_with_sources(1);

        for (native, abstract_id) in [
            (PointerButton::Left, MouseButton::Left),
            (PointerButton::Right, MouseButton::Right),
            (PointerButton::Middle, MouseButton::Middle),
        ] {
            f.dispatcher.dispatch(
                &mut f.registry,
                &f.sink,
                ids[0],
                &SurfaceEvent::Button { button: native, pressed: true },
            );
            assert_eq!(
                f.registry.next_action(ids[0]),
                Some(InputAction::Button { button: abstract_id, pressed: true })
            );
        }
        assert_eq!(f.dispatcher.pointer_owner, Some(ids[0]));
    }

    #[test]
    fn test_unmapped_buttons_are_silently_dropped() {
        let (mut f, ids) = fixture_with_sources(1);

        for native in [PointerButton::X1, PointerButton::X2] {
            f.dispatcher.dispatch(
                &mut f.registry,
                &f.sink,
                ids[0],
                &SurfaceEvent::Button { button: native, pressed: true },
            );
        }

        assert_eq!(drain(&mut f.registry, ids[0]), vec![]);
        // Dropped events do not touch pointer ownership either.
        assert_eq!(f.dispatcher.pointer_owner, None);
    }

    // ── Wheel ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_wheel_prefers_pixel_delta_over_angle_delta() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::Wheel {
                pixel_delta: Some((3.0, -5.0)),
                angle_delta: Some((120.0, 0.0)),
            },
        );

        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::Wheel { x: 3.0, y: -5.0 }]
        );
    }

    #[test]
    fn test_wheel_angle_delta_converts_to_notch_steps() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::Wheel {
                pixel_delta: None,
                angle_delta: Some((120.0, 0.0)),
            },
        );

        assert_eq!(
            drain(&mut f.registry, ids[0]),
            vec![InputAction::Wheel { x: 8.0, y: 0.0 }]
        );
    }

    #[test]
    fn test_wheel_with_no_deltas_emits_nothing_but_claims_the_pointer() {
        let (mut f, ids) = fixture_with_sources(1);

        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[0],
            &SurfaceEvent::Wheel { pixel_delta: None, angle_delta: None },
        );

        assert_eq!(drain(&mut f.registry, ids[0]), vec![]);
        assert_eq!(f.dispatcher.pointer_owner, Some(ids[0]));
    }

    // ── Routing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_actions_route_to_the_originating_source_not_the_owner() {
        // Arrange – A owns focus and pointer
        let (mut f, ids) = fixture_with_sources(2);
        f.dispatcher
            .dispatch(&mut f.registry, &f.sink, ids[0], &SurfaceEvent::FocusIn);
        drain(&mut f.registry, ids[0]);

        // Act – B produces a key event while A holds ownership
        f.dispatcher.dispatch(
            &mut f.registry,
            &f.sink,
            ids[1],
            &key_event(codes::B, ModifierSet::NONE, true, "b"),
        );

        // Assert – everything landed on B's queue
        assert_eq!(f.registry.queue_len(ids[0]), 0);
        assert_eq!(f.registry.queue_len(ids[1]), 3);
    }
}
