//! # framebridge-core
//!
//! Shared library for FrameBridge containing the abstract key and cursor
//! spaces, the native-to-abstract translation tables, and the deferred
//! input-action data type.
//!
//! This crate is used by the event translation backend and by host adapters.
//! It has zero dependencies on OS APIs, UI frameworks, or windowing toolkits.
//!
//! # Architecture overview (for beginners)
//!
//! FrameBridge sits between a widget toolkit's event loop and an
//! immediate-mode UI library.  The toolkit speaks in *native* values (its own
//! key codes, cursor shapes, button numbers); the UI library speaks in
//! *abstract* values that mean the same thing on every platform.  This crate
//! defines both vocabularies and the pure tables that translate between them:
//!
//! - **`keymap`** – The abstract key identifier ([`UiKey`]), the native key
//!   code space, and the two translation tables (standard and numpad) that
//!   convert a native key press into an abstract key.
//!
//! - **`cursor`** – The abstract cursor kinds requested by the UI and the
//!   native cursor shapes a toolkit surface can display, with the total
//!   mapping between them.
//!
//! - **`action`** – The [`InputAction`] deferred action: a plain-value record
//!   of one UI-input-state mutation, captured at event time and replayed at
//!   the frame synchronization point.
//!
//! - **`modifiers`** – The raw modifier bitset carried by toolkit key events.

// Declare the top-level modules.  Rust will look for each in a file or
// subdirectory with the same name (e.g., src/keymap/mod.rs).
pub mod action;
pub mod cursor;
pub mod keymap;
pub mod modifiers;

// Re-export the most-used types at the crate root so callers can write
// `framebridge_core::UiKey` instead of `framebridge_core::keymap::ui_key::UiKey`.
pub use action::{wheel_steps, InputAction, MouseButton, OFF_SCREEN_POS, WHEEL_NOTCH_DEGREES};
pub use cursor::{CursorShape, CursorTranslator, UiCursor};
pub use keymap::native::NativeKeyCode;
pub use keymap::ui_key::UiKey;
pub use keymap::KeyTranslator;
pub use modifiers::ModifierSet;
