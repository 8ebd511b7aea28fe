/// Portal record — pure data for one planar rectangular portal.
///
/// Portals reference each other by integer id (arena+index pattern):
/// ids are assigned in insertion order and stay stable for the
/// system's lifetime; the collection is never repacked while
/// cross-references are live.

use glam::Vec3;
use crate::target::RenderTarget;

/// World up direction. Portal bases and transformed cameras both pin
/// their up vector here (no roll).
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Destination id meaning "unconnected"
pub const UNCONNECTED: i32 = -1;

const BASIS_EPSILON: f32 = 1e-6;

/// One planar rectangular portal.
///
/// `right`, `up`, `normal` always form a right-handed orthonormal
/// basis (`right x up == normal`), rebuilt from the normal and world
/// up at creation. A portal with destination [`UNCONNECTED`] never
/// participates in rendering or collision.
#[derive(Debug, Clone)]
pub struct Portal {
    id: i32,
    position: Vec3,
    normal: Vec3,
    right: Vec3,
    up: Vec3,
    width: f32,
    height: f32,
    destination: i32,
    active: bool,
    distance: f32,
    target: RenderTarget,
}

impl Portal {
    /// Internal only — created via PortalSystem::add_portal()
    pub(crate) fn new(
        id: i32,
        position: Vec3,
        normal: Vec3,
        width: f32,
        height: f32,
        target: RenderTarget,
    ) -> Self {
        let normal = normal.normalize_or(Vec3::Z);
        let (right, up) = basis_from_normal(normal);
        Self {
            id,
            position,
            normal,
            right,
            up,
            width,
            height,
            destination: UNCONNECTED,
            active: true,
            distance: f32::MAX,
            target,
        }
    }

    // ===== GETTERS =====

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Outward face direction (unit length)
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Rectangle extent along `right`
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Rectangle extent along `up`
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Destination portal id, or [`UNCONNECTED`]
    pub fn destination(&self) -> i32 {
        self.destination
    }

    pub fn is_connected(&self) -> bool {
        self.destination != UNCONNECTED
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last distance-to-viewer computed by `update_distances`
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Captured-view render target
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    // ===== MUTATORS (system-owned) =====

    pub(crate) fn set_destination(&mut self, destination: i32) {
        self.destination = destination;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    // ===== GEOMETRY =====

    /// Signed distance from a point to the portal plane.
    ///
    /// Positive on the `normal` (front) side.
    pub fn plane_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.position)
    }

    /// Decompose a world-space offset into (right, up, normal)
    /// components of this portal's basis.
    pub fn to_local(&self, offset: Vec3) -> Vec3 {
        Vec3::new(
            offset.dot(self.right),
            offset.dot(self.up),
            offset.dot(self.normal),
        )
    }
}

/// Build the right/up pair completing `normal` into a right-handed
/// orthonormal basis, using world up as the reference.
///
/// Falls back to world X when the normal is (anti)parallel to world up
/// (floor/ceiling portals).
fn basis_from_normal(normal: Vec3) -> (Vec3, Vec3) {
    let mut right = WORLD_UP.cross(normal);
    if right.length_squared() < BASIS_EPSILON {
        right = Vec3::X.cross(normal);
    }
    let right = right.normalize();
    let up = normal.cross(right).normalize();
    (right, up)
}

#[cfg(test)]
#[path = "portal_tests.rs"]
mod tests;
