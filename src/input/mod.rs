//! Input handling: the pointer event type and the drag state machine that
//! converts raw events into rotation deltas.

/// Platform-agnostic pointer events.
pub mod event;

/// Drag session tracking and delta extraction.
pub mod drag;

pub use drag::DragTracker;
pub use event::PointerEvent;
