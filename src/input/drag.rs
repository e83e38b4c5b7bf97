//! Drag state machine: converts pointer events into rotation deltas.
//!
//! Owns the transient drag state (whether a drag is active and the last
//! pointer position) as an explicit session value rather than loose flags.

use glam::Vec2;

use super::event::PointerEvent;

/// Last-known pointer position while a drag is in progress.
///
/// The session's existence is the drag-active flag; deltas are only ever
/// computed against a recorded previous position.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    last: Vec2,
}

/// Tracks a pointer drag and emits per-move pixel deltas.
///
/// Mouse drags start on button press. Touch drags start only when exactly
/// one contact is present; moves reporting any other contact count are
/// ignored (not an error, not a new gesture). Release and cancel are
/// idempotent.
#[derive(Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    /// Create a tracker with no active drag.
    #[must_use]
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Process a pointer event, returning a pixel delta for moves that
    /// occur inside an active drag and `None` for everything else.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<Vec2> {
        match event {
            PointerEvent::ButtonPressed { x, y } => {
                self.begin(Vec2::new(x, y));
                None
            }
            PointerEvent::TouchStarted { x, y, contacts } => {
                if contacts == 1 {
                    self.begin(Vec2::new(x, y));
                }
                None
            }
            PointerEvent::CursorMoved { x, y } => self.motion(Vec2::new(x, y)),
            PointerEvent::TouchMoved { x, y, contacts } => {
                if contacts == 1 {
                    self.motion(Vec2::new(x, y))
                } else {
                    None
                }
            }
            PointerEvent::ButtonReleased
            | PointerEvent::TouchEnded
            | PointerEvent::TouchCancelled => {
                self.session = None;
                None
            }
        }
    }

    /// Start a session at `position` unless one is already active.
    fn begin(&mut self, position: Vec2) {
        if self.session.is_none() {
            self.session = Some(DragSession { last: position });
        }
    }

    /// Advance the session to `position`, yielding the delta since the
    /// previous sample. Moves with no active session are a no-op.
    fn motion(&mut self, position: Vec2) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        let delta = position - session.last;
        session.last = position;
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;
    use glam::Quat;

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle_event(PointerEvent::CursorMoved { x: 50.0, y: 50.0 }),
            None
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_mouse_drag_deltas() {
        let mut tracker = DragTracker::new();
        assert_eq!(
            tracker.handle_event(PointerEvent::ButtonPressed { x: 100.0, y: 100.0 }),
            None
        );
        assert!(tracker.is_dragging());
        assert_eq!(
            tracker.handle_event(PointerEvent::CursorMoved { x: 110.0, y: 100.0 }),
            Some(Vec2::new(10.0, 0.0))
        );
        // Deltas are relative to the previous sample, not the press point
        assert_eq!(
            tracker.handle_event(PointerEvent::CursorMoved { x: 105.0, y: 108.0 }),
            Some(Vec2::new(-5.0, 8.0))
        );
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(PointerEvent::ButtonPressed { x: 0.0, y: 0.0 });
        assert_eq!(tracker.handle_event(PointerEvent::ButtonReleased), None);
        assert_eq!(tracker.handle_event(PointerEvent::ButtonReleased), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_move_after_release_is_ignored() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(PointerEvent::ButtonPressed { x: 100.0, y: 100.0 });
        let _ = tracker.handle_event(PointerEvent::CursorMoved { x: 110.0, y: 100.0 });
        let _ = tracker.handle_event(PointerEvent::ButtonReleased);
        assert_eq!(
            tracker.handle_event(PointerEvent::CursorMoved { x: 200.0, y: 200.0 }),
            None
        );
    }

    #[test]
    fn test_two_contact_start_never_activates() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(PointerEvent::TouchStarted {
            x: 10.0,
            y: 10.0,
            contacts: 2,
        });
        assert!(!tracker.is_dragging());
        // Single-contact moves stay ignored until a clean one-contact start
        assert_eq!(
            tracker.handle_event(PointerEvent::TouchMoved {
                x: 20.0,
                y: 20.0,
                contacts: 1,
            }),
            None
        );
        let _ = tracker.handle_event(PointerEvent::TouchStarted {
            x: 20.0,
            y: 20.0,
            contacts: 1,
        });
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_multi_contact_moves_are_ignored_mid_drag() {
        let mut tracker = DragTracker::new();
        let _ = tracker.handle_event(PointerEvent::TouchStarted {
            x: 0.0,
            y: 0.0,
            contacts: 1,
        });
        // Second finger lands; its moves report two contacts
        assert_eq!(
            tracker.handle_event(PointerEvent::TouchMoved {
                x: 30.0,
                y: 0.0,
                contacts: 2,
            }),
            None
        );
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_touch_and_mouse_drags_are_equivalent() {
        let mut mouse = DragTracker::new();
        let mut touch = DragTracker::new();
        let mut mouse_orientation = Orientation::new();
        let mut touch_orientation = Orientation::new();

        let path = [(100.0, 100.0), (112.0, 95.0), (130.0, 140.0)];

        let _ = mouse.handle_event(PointerEvent::ButtonPressed {
            x: path[0].0,
            y: path[0].1,
        });
        let _ = touch.handle_event(PointerEvent::TouchStarted {
            x: path[0].0,
            y: path[0].1,
            contacts: 1,
        });
        for &(x, y) in &path[1..] {
            if let Some(delta) = mouse.handle_event(PointerEvent::CursorMoved { x, y }) {
                mouse_orientation.apply_drag(delta);
            }
            if let Some(delta) =
                touch.handle_event(PointerEvent::TouchMoved { x, y, contacts: 1 })
            {
                touch_orientation.apply_drag(delta);
            }
        }

        assert!(mouse_orientation
            .quat()
            .abs_diff_eq(touch_orientation.quat(), 1e-6));
    }

    #[test]
    fn test_end_to_end_drag_scenario() {
        let mut tracker = DragTracker::new();
        let mut orientation = Orientation::new();

        let events = [
            PointerEvent::ButtonPressed { x: 100.0, y: 100.0 },
            PointerEvent::CursorMoved { x: 110.0, y: 100.0 },
            PointerEvent::ButtonReleased,
            PointerEvent::CursorMoved { x: 200.0, y: 200.0 },
        ];
        for event in events {
            if let Some(delta) = tracker.handle_event(event) {
                orientation.apply_drag(delta);
            }
        }

        // 10 px of horizontal drag = 5 degrees about the vertical axis;
        // the post-release move must contribute nothing.
        let expected = Quat::from_rotation_y(5.0_f32.to_radians());
        assert!(
            orientation.quat().abs_diff_eq(expected, 1e-4),
            "got {:?}",
            orientation.quat()
        );
    }
}
