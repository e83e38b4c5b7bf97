/// Platform-agnostic pointer events.
///
/// These are fed into a [`DragTracker`](super::DragTracker), which turns
/// them into rotation deltas. Mouse and touch share one event family so a
/// mouse drag and a single-finger touch drag with the same coordinates are
/// indistinguishable downstream.
///
/// Touch variants carry the number of simultaneous contacts at the time of
/// the event; the tracker only recognizes single-contact gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary mouse button pressed at a viewport position.
    ButtonPressed {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
    },
    /// Primary mouse button released (or the cursor left the surface).
    ButtonReleased,
    /// Cursor moved to an absolute viewport position.
    CursorMoved {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
    },
    /// A touch contact began.
    TouchStarted {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
        /// Total simultaneous contacts, including this one.
        contacts: usize,
    },
    /// A touch contact moved.
    TouchMoved {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels.
        y: f32,
        /// Total simultaneous contacts at move time.
        contacts: usize,
    },
    /// A touch contact lifted.
    TouchEnded,
    /// A touch sequence was cancelled by the system.
    TouchCancelled,
}
