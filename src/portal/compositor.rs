/// Portal surface compositor — draws each portal's quad in the main
/// pass, textured with its just-filled render target.
///
/// The quads sit coincident with surrounding frame geometry, so the
/// depth test runs LessOrEqual with depth writes disabled and the
/// surface is inset slightly below the nominal extents. All state
/// changes are restored to the renderer's defaults before returning.

use glam::{Mat4, Vec3};

use crate::graphics_device::{CompareOp, GraphicsDevice};
use super::portal::Portal;

/// Portal quads render at this fraction of the nominal width/height,
/// keeping the surface inside its surrounding frame geometry.
pub const SURFACE_INSET: f32 = 0.85;

/// Draw the surface quads of every eligible portal.
///
/// A portal is drawn when it is active, connected, its target is
/// valid and it lies within `cull_distance` of the viewer.
pub(crate) fn draw_surfaces(
    device: &mut dyn GraphicsDevice,
    portals: &[Portal],
    cull_distance: f32,
    view: &Mat4,
    projection: &Mat4,
    viewer_pos: Vec3,
    time: f32,
) {
    device.set_depth_compare(CompareOp::LessOrEqual);
    device.set_depth_write(false);
    device.set_alpha_blend(true);

    for portal in portals {
        if !portal.is_active() || !portal.is_connected() {
            continue;
        }
        let Some(key) = portal.target().key() else {
            continue;
        };
        if (portal.position() - viewer_pos).length() > cull_distance {
            continue;
        }

        let model = surface_model(portal);
        device.draw_portal_quad(&model, view, projection, key, portal.is_active(), time);
    }

    // Back to the renderer's defaults
    device.set_depth_compare(CompareOp::Less);
    device.set_depth_write(true);
    device.set_alpha_blend(false);
}

/// Model matrix placing the unit quad at the portal: basis columns
/// scaled by the inset extents, position in the translation column.
pub(crate) fn surface_model(portal: &Portal) -> Mat4 {
    Mat4::from_cols(
        (portal.right() * portal.width() * SURFACE_INSET).extend(0.0),
        (portal.up() * portal.height() * SURFACE_INSET).extend(0.0),
        portal.normal().extend(0.0),
        portal.position().extend(1.0),
    )
}

#[cfg(test)]
#[path = "compositor_tests.rs"]
mod tests;
