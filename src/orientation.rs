//! Object orientation and the drag-delta to rotation mapping.
//!
//! The orientation is a unit quaternion, composed incrementally from pointer
//! drag deltas. Increments are built from viewer-frame Euler angles and
//! pre-multiplied, so drag direction always maps to the visible tilt
//! direction regardless of how far the object has already been spun
//! (trackball-style control).

use glam::{EulerRot, Quat, Vec2};

/// Degrees of rotation per pixel of drag. Empirically chosen.
pub const DRAG_SENSITIVITY: f32 = 0.5;

/// Cumulative rotation of the rendered object as a unit quaternion.
///
/// The quaternion is re-normalized after every composition step so drift
/// never accumulates into a scaling artifact. Pitch and yaw are unbounded;
/// full 360°+ spins are expected behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    rotation: Quat,
}

impl Orientation {
    /// Identity orientation (object in its rest pose).
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }

    /// The current rotation quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        self.rotation
    }

    /// Apply a pointer drag delta (pixels) as an incremental rotation.
    ///
    /// Vertical motion maps to pitch, horizontal motion to yaw, both at
    /// [`DRAG_SENSITIVITY`] degrees per pixel; no roll is ever introduced.
    /// The increment is built from Euler angles in intrinsic X-then-Y order
    /// and pre-multiplied, i.e. applied around axes fixed in the viewer's
    /// frame rather than the object's own frame.
    pub fn apply_drag(&mut self, delta: Vec2) {
        let pitch = (delta.y * DRAG_SENSITIVITY).to_radians();
        let yaw = (delta.x * DRAG_SENSITIVITY).to_radians();
        let incremental = Quat::from_euler(EulerRot::XYZ, pitch, yaw, 0.0);
        self.rotation = (incremental * self.rotation).normalize();
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    fn quat_close(a: Quat, b: Quat) -> bool {
        // q and -q encode the same rotation
        a.abs_diff_eq(b, 1e-4) || a.abs_diff_eq(-b, 1e-4)
    }

    #[test]
    fn test_stays_normalized() {
        let mut orientation = Orientation::new();
        let deltas = [
            Vec2::new(10.0, 0.0),
            Vec2::new(-3.5, 7.2),
            Vec2::new(500.0, -250.0),
            Vec2::new(0.1, 0.1),
            Vec2::new(-1000.0, 1000.0),
        ];
        for delta in deltas {
            orientation.apply_drag(delta);
            assert!(
                (orientation.quat().length() - 1.0).abs() < TOLERANCE,
                "length drifted to {}",
                orientation.quat().length()
            );
        }
    }

    #[test]
    fn test_horizontal_drag_yaws_about_y() {
        let mut orientation = Orientation::new();
        // 10 px right at 0.5 deg/px = 5 degrees about the viewport's
        // vertical axis
        orientation.apply_drag(Vec2::new(10.0, 0.0));
        let expected = Quat::from_rotation_y(5.0_f32.to_radians());
        assert!(
            quat_close(orientation.quat(), expected),
            "got {:?}, expected {:?}",
            orientation.quat(),
            expected
        );
    }

    #[test]
    fn test_vertical_drag_pitches_about_x() {
        let mut orientation = Orientation::new();
        orientation.apply_drag(Vec2::new(0.0, 8.0));
        let expected = Quat::from_rotation_x(4.0_f32.to_radians());
        assert!(quat_close(orientation.quat(), expected));
    }

    #[test]
    fn test_single_axis_drag_symmetry() {
        // Inverting a drag is exact along a single axis; mixed-axis pairs
        // pick up a commutator residual because pitch and yaw increments
        // rotate about different axes.
        for delta in [Vec2::new(37.0, 0.0), Vec2::new(0.0, -12.0)] {
            let mut orientation = Orientation::new();
            orientation.apply_drag(delta);
            orientation.apply_drag(-delta);
            assert!(
                quat_close(orientation.quat(), Quat::IDENTITY),
                "did not return to identity for {delta:?}: {:?}",
                orientation.quat()
            );
        }
    }

    #[test]
    fn test_mixed_axis_drag_symmetry_residual() {
        // A mixed-axis drag and its negation do not cancel exactly: each
        // step is Rx(pitch) * Ry(yaw), and those factors do not commute.
        // The leftover rotation stays on the order of pitch * yaw.
        let mut orientation = Orientation::new();
        let delta = Vec2::new(37.0, -12.0);
        orientation.apply_drag(delta);
        orientation.apply_drag(-delta);
        let residual = orientation.quat().angle_between(Quat::IDENTITY);
        assert!(
            residual > 1e-3,
            "mixed-axis inversion cancelled exactly: {:?}",
            orientation.quat()
        );
        let pitch = (delta.y * DRAG_SENSITIVITY).to_radians();
        let yaw = (delta.x * DRAG_SENSITIVITY).to_radians();
        assert!(
            residual < 2.0 * pitch.abs() * yaw.abs(),
            "residual {residual} larger than the commutator bound"
        );
    }

    #[test]
    fn test_increment_is_viewer_frame() {
        // After a 90-degree yaw, a vertical drag must still pitch about the
        // viewer's X axis, not the object's rotated local axis.
        let mut orientation = Orientation::new();
        orientation.apply_drag(Vec2::new(180.0, 0.0)); // 90 deg yaw
        orientation.apply_drag(Vec2::new(0.0, 20.0)); // 10 deg pitch
        let expected = Quat::from_rotation_x(10.0_f32.to_radians())
            * Quat::from_rotation_y(90.0_f32.to_radians());
        assert!(quat_close(orientation.quat(), expected));
    }

    #[test]
    fn test_unbounded_accumulation() {
        // 1440 px at 0.5 deg/px = two full revolutions, back to identity.
        let mut orientation = Orientation::new();
        for _ in 0..144 {
            orientation.apply_drag(Vec2::new(10.0, 0.0));
        }
        assert!((orientation.quat().length() - 1.0).abs() < TOLERANCE);
        assert!(quat_close(orientation.quat(), Quat::IDENTITY));
    }
}
