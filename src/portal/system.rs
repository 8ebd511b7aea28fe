/// Portal system — owns every portal record and their render targets.
///
/// External code only reads portals or calls the documented mutators;
/// no other component holds mutable references to portal state. All
/// operations run synchronously on the rendering thread.

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use crate::engine_info;
use crate::engine_warn;
use crate::graphics_device::GraphicsDevice;
use crate::target::TargetManager;
use super::camera_transform;
use super::collision;
use super::compositor;
use super::portal::Portal;
use super::variation::RoomVariation;
use super::view_renderer;
use super::camera_transform::PortalView;

/// Portal system configuration
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Edge length of each portal's square render target
    pub target_size: u32,
    /// Number of nested portal reflections rendered before truncation
    pub max_recursion_depth: u32,
    /// Master toggle; when false every entry point is a no-op
    pub enabled: bool,
    /// Portals farther than this from the viewer are not composited
    pub surface_cull_distance: f32,
    /// Coarse cutoff for the collision test
    pub collision_range: f32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            target_size: 512,
            max_recursion_depth: 5,
            enabled: true,
            surface_cull_distance: 50.0,
            collision_range: collision::COLLISION_RANGE,
        }
    }
}

/// Owner and orchestrator of the portal subsystem.
///
/// Per-frame order (required for visual correctness, see
/// [`frame`](PortalSystem::frame)): fill all render targets deepest
/// level first, then the host's main scene pass, then the surface
/// compositor, then collision for the next frame's camera.
pub struct PortalSystem {
    portals: Vec<Portal>,
    variations: FxHashMap<i32, RoomVariation>,
    targets: TargetManager,
    config: PortalConfig,
}

impl PortalSystem {
    /// Create an empty system with the given configuration
    pub fn new(config: PortalConfig) -> Self {
        Self {
            portals: Vec::new(),
            variations: FxHashMap::default(),
            targets: TargetManager::new(),
            config,
        }
    }

    // ===== LIFECYCLE =====

    /// Add a portal and allocate its render target.
    ///
    /// Returns the new portal's id (assigned in insertion order,
    /// stable for the system's lifetime). The portal starts
    /// unconnected; connect it with [`connect`](PortalSystem::connect).
    pub fn add_portal(
        &mut self,
        device: &mut dyn GraphicsDevice,
        position: Vec3,
        normal: Vec3,
        width: f32,
        height: f32,
    ) -> i32 {
        let id = self.portals.len() as i32;
        let target = self.targets.allocate(device, self.config.target_size);
        self.portals.push(Portal::new(id, position, normal, width, height, target));
        engine_info!("portal3d::PortalSystem",
            "added portal {} at {:?} (normal {:?})", id, position, normal);
        id
    }

    /// Connect two portals bidirectionally: a's destination becomes b
    /// and b's destination becomes a.
    ///
    /// Out-of-range ids are ignored (bounds-checked no-op).
    pub fn connect(&mut self, a: i32, b: i32) {
        if !self.contains(a) || !self.contains(b) || a == b {
            engine_warn!("portal3d::PortalSystem",
                "ignoring connect({}, {}): invalid pair", a, b);
            return;
        }
        self.portals[a as usize].set_destination(b);
        self.portals[b as usize].set_destination(a);
    }

    /// Free every render target and drop all portals.
    ///
    /// Safe to call multiple times; the system can be repopulated with
    /// `add_portal` afterwards.
    pub fn shutdown(&mut self, device: &mut dyn GraphicsDevice) {
        self.targets.free_all(device);
        self.portals.clear();
        self.variations.clear();
    }

    // ===== CONFIG / TOGGLES =====

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Master toggle; while disabled every per-frame entry point
    /// returns immediately without touching the device.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Activate or deactivate one portal (bounds-checked no-op)
    pub fn set_active(&mut self, id: i32, active: bool) {
        if self.contains(id) {
            self.portals[id as usize].set_active(active);
        }
    }

    // ===== ACCESSORS =====

    pub fn portal(&self, id: i32) -> Option<&Portal> {
        if id < 0 {
            return None;
        }
        self.portals.get(id as usize)
    }

    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }

    /// Cosmetic parameters for the room behind `destination`, if set
    pub fn variation(&self, destination: i32) -> Option<&RoomVariation> {
        self.variations.get(&destination)
    }

    pub fn set_variation(&mut self, destination: i32, variation: RoomVariation) {
        self.variations.insert(destination, variation);
    }

    // ===== PER-FRAME =====

    /// Refresh each portal's cached distance-to-viewer
    pub fn update_distances(&mut self, viewer_pos: Vec3) {
        if !self.config.enabled {
            return;
        }
        for portal in &mut self.portals {
            let distance = (portal.position() - viewer_pos).length();
            portal.set_distance(distance);
        }
    }

    /// Test the viewer's motion segment against every portal and
    /// return the teleported position on a crossing.
    ///
    /// Always `None` while the system is disabled.
    pub fn check_collision(&self, old_pos: Vec3, new_pos: Vec3) -> Option<Vec3> {
        if !self.config.enabled {
            return None;
        }
        collision::check_collision(&self.portals, self.config.collision_range, old_pos, new_pos)
    }

    /// Fill every portal render target for this frame, deepest
    /// recursion level first. Must run before the main scene pass.
    pub fn render_views(
        &mut self,
        device: &mut dyn GraphicsDevice,
        render_scene: &mut dyn FnMut(&Mat4, &Mat4),
        viewer_pos: Vec3,
        viewer_front: Vec3,
        viewer_up: Vec3,
        projection: &Mat4,
    ) {
        if !self.config.enabled {
            return;
        }
        view_renderer::render_views(
            device,
            &self.portals,
            self.config.max_recursion_depth,
            render_scene,
            viewer_pos,
            viewer_front,
            viewer_up,
            projection,
        );
    }

    /// Composite the portal quads into the current framebuffer. Must
    /// run after the main scene pass.
    pub fn draw_surfaces(
        &mut self,
        device: &mut dyn GraphicsDevice,
        view: &Mat4,
        projection: &Mat4,
        viewer_pos: Vec3,
        time: f32,
    ) {
        if !self.config.enabled {
            return;
        }
        compositor::draw_surfaces(
            device,
            &self.portals,
            self.config.surface_cull_distance,
            view,
            projection,
            viewer_pos,
            time,
        );
    }

    /// Run the full per-frame render sequence in the required order:
    /// distance refresh, recursive target fill, the host's main scene
    /// pass, then the surface compositor.
    #[allow(clippy::too_many_arguments)]
    pub fn frame(
        &mut self,
        device: &mut dyn GraphicsDevice,
        render_scene: &mut dyn FnMut(&Mat4, &Mat4),
        view: &Mat4,
        projection: &Mat4,
        viewer_pos: Vec3,
        viewer_front: Vec3,
        viewer_up: Vec3,
        time: f32,
    ) {
        if !self.config.enabled {
            return;
        }
        self.update_distances(viewer_pos);
        self.render_views(device, render_scene, viewer_pos, viewer_front, viewer_up, projection);
        render_scene(view, projection);
        self.draw_surfaces(device, view, projection, viewer_pos, time);
    }

    /// Virtual camera for rendering `source`'s surface, exposed for
    /// hosts that drive their own passes.
    pub fn transformed_view(
        &self,
        source: i32,
        viewer_pos: Vec3,
        viewer_front: Vec3,
        viewer_up: Vec3,
    ) -> Option<PortalView> {
        let portal = self.portal(source)?;
        let destination = self.portal(portal.destination())?;
        Some(camera_transform::transform_view(
            portal,
            destination,
            viewer_pos,
            viewer_front,
            viewer_up,
        ))
    }

    fn contains(&self, id: i32) -> bool {
        id >= 0 && (id as usize) < self.portals.len()
    }
}

impl Default for PortalSystem {
    fn default() -> Self {
        Self::new(PortalConfig::default())
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
