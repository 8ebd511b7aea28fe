/// Plane-crossing collision and teleport resolver.
///
/// Detects whether the viewer's motion segment crossed a portal's
/// plane inside its rectangle and computes the teleported position in
/// the destination frame.
///
/// Note the deliberate asymmetry with the camera transform: rendering
/// uses the mirrored basis, but the physical teleport carries the
/// crossing offset by plain translation — crossing a portal must not
/// flip the player's own frame.

use glam::Vec3;
use super::portal::Portal;

/// Coarse distance cutoff: portals farther than this from the new
/// position are not tested.
pub const COLLISION_RANGE: f32 = 20.0;

/// The old position must be at least this far in front of the plane.
/// Filters out grazing starts and same-frame re-triggers.
pub const FRONT_THRESHOLD: f32 = 0.1;

/// Nudge along the destination normal after teleporting, so the next
/// frame cannot immediately detect a reverse crossing.
pub const EXIT_OFFSET: f32 = 0.5;

/// Test the motion segment `old_pos -> new_pos` against every
/// connected, active portal and return the teleported position for
/// the first crossing found.
///
/// Which portal wins when several cross simultaneously is undefined;
/// portals are spatially separated in practice.
pub fn check_collision(
    portals: &[Portal],
    range: f32,
    old_pos: Vec3,
    new_pos: Vec3,
) -> Option<Vec3> {
    for portal in portals {
        if !portal.is_active() || !portal.is_connected() {
            continue;
        }
        // Out-of-range destination ids are inert, never indexed
        let Some(destination) = portals.get(portal.destination() as usize) else {
            continue;
        };
        if (new_pos - portal.position()).length() > range {
            continue;
        }

        let d_old = portal.plane_distance(old_pos);
        let d_new = portal.plane_distance(new_pos);

        // Crossing: started in front, ended at or behind the plane
        if d_old <= FRONT_THRESHOLD || d_new > 0.0 {
            continue;
        }

        // Exact plane intersection along the segment
        let t = d_old / (d_old - d_new);
        let hit = old_pos + (new_pos - old_pos) * t;

        // Inside the rectangle?
        let local = portal.to_local(hit - portal.position());
        if local.x.abs() >= portal.width() * 0.5 || local.y.abs() >= portal.height() * 0.5 {
            continue;
        }

        // Plain translation of the crossing offset into the
        // destination frame, plus the anti-retrigger nudge.
        let carried = hit - portal.position();
        return Some(destination.position() + carried + destination.normal() * EXIT_OFFSET);
    }

    None
}

#[cfg(test)]
#[path = "collision_tests.rs"]
mod tests;
