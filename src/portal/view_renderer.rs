/// Recursive view renderer — fills every portal's render target,
/// deepest recursion level first.
///
/// Naive recursion (render a portal, whose scene contains portals,
/// which render again, ...) costs exponential draw calls in the
/// recursion depth. This pass flattens it into an explicit loop over
/// depth x portal: the deepest pass renders with whatever texture
/// content the targets already hold (stale frames are visually
/// negligible that far down the chain), and each shallower pass then
/// re-renders with one more level of correct nesting available to
/// sample. Cost is linear in depth x portal count.
///
/// Only the deepest pass clears a target; shallower passes draw over
/// the existing buffer so the nested portal quads composite.
///
/// The framebuffer binding and viewport are shared global state and
/// are restored exactly before returning.

use glam::{Mat4, Vec3};

use crate::graphics_device::{ClearValue, FramebufferBinding, GraphicsDevice, Viewport};
use super::camera_transform::transform_view;
use super::portal::Portal;

const CLEAR_VALUES: [ClearValue; 2] = [
    ClearValue::Color([0.05, 0.05, 0.08, 1.0]),
    ClearValue::DepthStencil { depth: 1.0, stencil: 0 },
];

/// Fill all portal render targets for this frame.
///
/// `render_scene` is invoked once per eligible portal per depth with
/// the transformed (view, projection) pair; issuing the scene's draw
/// calls is the callback's business.
pub(crate) fn render_views(
    device: &mut dyn GraphicsDevice,
    portals: &[Portal],
    max_depth: u32,
    render_scene: &mut dyn FnMut(&Mat4, &Mat4),
    viewer_pos: Vec3,
    viewer_front: Vec3,
    viewer_up: Vec3,
    projection: &Mat4,
) {
    if max_depth == 0 || portals.is_empty() {
        return;
    }

    let saved_framebuffer = device.current_framebuffer();
    let saved_viewport = device.viewport();

    // Deepest level first, back to the surface
    for depth in (0..max_depth).rev() {
        let deepest = depth == max_depth - 1;

        for portal in portals {
            if !portal.is_active() || !portal.is_connected() {
                continue;
            }
            let Some(destination) = portals.get(portal.destination() as usize) else {
                continue;
            };
            let Some(key) = portal.target().key() else {
                continue;
            };

            let view = transform_view(portal, destination, viewer_pos, viewer_front, viewer_up);
            let view_matrix =
                Mat4::look_at_rh(view.position, view.position + view.front, view.up);

            device.bind_framebuffer(FramebufferBinding::Target(key));
            device.set_viewport(Viewport::square(portal.target().size()));
            if deepest {
                device.clear(&CLEAR_VALUES);
            }

            render_scene(&view_matrix, projection);
        }
    }

    device.bind_framebuffer(saved_framebuffer);
    device.set_viewport(saved_viewport);
}

#[cfg(test)]
#[path = "view_renderer_tests.rs"]
mod tests;
