/// Portal camera transform — maps a viewpoint through a source portal
/// into the coordinate frame of its destination.
///
/// This is deliberately NOT physically exact portal optics. The
/// offset is dampened, the virtual camera is held off the destination
/// plane, and the orientation only slowly tracks the real camera's
/// yaw; the goal is a stable, nausea-free illusion rather than a
/// faithful reprojection. The transform is pure and deterministic.
///
/// The mirror convention: entering one face and exiting the paired
/// face reads as a 180° turn, so the `right` and `forward` (normal)
/// basis components are negated in the destination frame while `up`
/// is preserved.

use glam::Vec3;
use super::portal::{Portal, WORLD_UP};

/// Within this distance of the source portal the strong dampening
/// applies.
pub const NEAR_DISTANCE: f32 = 5.0;

/// Offset dampening close to the portal surface. Suppresses the
/// disorienting parallax swim when the viewer walks right up to it.
pub const NEAR_DAMPENING: f32 = 0.05;

/// Offset dampening at range.
pub const FAR_DAMPENING: f32 = 0.2;

/// Minimum distance between the virtual camera and the destination
/// portal. Keeps the camera out of (and off the near plane of)
/// destination geometry.
pub const MIN_STANDOFF: f32 = 8.0;

/// How strongly the virtual camera's yaw follows the real camera.
/// Kept small so the destination view is near-static.
pub const ROTATION_SENSITIVITY: f32 = 0.1;

/// Fixed downward tilt on the virtual camera. Counteracts the
/// apparent upward tilt of the destination floor.
pub const DOWNWARD_TILT: f32 = 0.12;

const DEGENERATE_EPSILON: f32 = 1e-4;

/// A transformed viewpoint in the destination portal's frame.
///
/// `front` and `up` are unit length; `up` is pinned to world up
/// (no roll).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalView {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
}

/// Compute the virtual camera for rendering `source`'s surface: the
/// viewer's position and facing mapped through the portal pair into
/// `destination`'s frame.
pub fn transform_view(
    source: &Portal,
    destination: &Portal,
    viewer_pos: Vec3,
    viewer_front: Vec3,
    _viewer_up: Vec3,
) -> PortalView {
    // Lock the eye height to the portal's center so vertical jitter
    // (head bob, stairs) never reaches the transform.
    let mut eye = viewer_pos;
    eye.y = source.position().y;

    let offset = eye - source.position();
    let dampening = if offset.length() < NEAR_DISTANCE {
        NEAR_DAMPENING
    } else {
        FAR_DAMPENING
    };
    let offset = offset * dampening;

    // Source-local components, rebuilt mirrored in the destination
    // basis: right and forward negate, up carries over.
    let local = source.to_local(offset);
    let mut out_offset = destination.right() * -local.x
        + destination.up() * local.y
        + destination.normal() * -local.z;

    // Hold the virtual camera at least MIN_STANDOFF off the plane so
    // it can never sit inside or behind destination geometry.
    let len = out_offset.length();
    if len < DEGENERATE_EPSILON {
        out_offset = destination.normal() * MIN_STANDOFF;
    } else if len < MIN_STANDOFF {
        out_offset *= MIN_STANDOFF / len;
    }

    let position = destination.position() + out_offset;

    // Facing: same mirrored basis, but with a much smaller gain and
    // no vertical response at all — the view only slowly tracks the
    // real camera's yaw. A fixed downward tilt replaces the vertical
    // component.
    let front_local = source.to_local(viewer_front);
    let mut front = destination.right() * (-front_local.x * ROTATION_SENSITIVITY)
        + destination.normal() * (-front_local.z * ROTATION_SENSITIVITY);
    front.y = -DOWNWARD_TILT;

    // If the horizontal response collapsed (viewer looking straight
    // up/down the portal's up axis), aim at the destination center
    // instead, keeping the computed pitch.
    let horizontal = Vec3::new(front.x, 0.0, front.z);
    if horizontal.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        let pitch = front.y;
        let mut aim = destination.position() - position;
        aim.y = 0.0;
        front = if aim.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            -destination.normal()
        } else {
            aim.normalize()
        };
        front.y = pitch;
    }

    PortalView {
        position,
        front: front.normalize(),
        up: WORLD_UP,
    }
}

#[cfg(test)]
#[path = "camera_transform_tests.rs"]
mod tests;
