use glam::Vec3;
use crate::target::RenderTarget;
use super::*;

fn make_portal(position: Vec3, normal: Vec3) -> Portal {
    Portal::new(0, position, normal, 4.0, 5.0, RenderTarget::new(None, 512))
}

fn assert_orthonormal_right_handed(portal: &Portal) {
    let r = portal.right();
    let u = portal.up();
    let n = portal.normal();

    assert!((r.length() - 1.0).abs() < 1e-5);
    assert!((u.length() - 1.0).abs() < 1e-5);
    assert!((n.length() - 1.0).abs() < 1e-5);

    assert!(r.dot(u).abs() < 1e-5);
    assert!(r.dot(n).abs() < 1e-5);
    assert!(u.dot(n).abs() < 1e-5);

    // right x up == normal
    assert!((r.cross(u) - n).length() < 1e-5);
}

#[test]
fn test_basis_axis_aligned_normals() {
    for normal in [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Z,
        Vec3::NEG_Z,
    ] {
        let portal = make_portal(Vec3::ZERO, normal);
        assert_orthonormal_right_handed(&portal);
        // Wall portals keep their up aligned with world up
        assert!((portal.up() - WORLD_UP).length() < 1e-5);
    }
}

#[test]
fn test_basis_vertical_normal_fallback() {
    // Floor/ceiling portals: world up is parallel to the normal
    for normal in [Vec3::Y, Vec3::NEG_Y] {
        let portal = make_portal(Vec3::ZERO, normal);
        assert_orthonormal_right_handed(&portal);
    }
}

#[test]
fn test_basis_oblique_normal() {
    let portal = make_portal(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.3, -0.5));
    assert_orthonormal_right_handed(&portal);
}

#[test]
fn test_unnormalized_normal_is_normalized() {
    let portal = make_portal(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
    assert!((portal.normal() - Vec3::Z).length() < 1e-5);
}

#[test]
fn test_plane_distance_signs() {
    let portal = make_portal(Vec3::new(0.0, 0.0, 2.0), Vec3::Z);

    assert!(portal.plane_distance(Vec3::new(0.0, 0.0, 5.0)) > 0.0);
    assert!(portal.plane_distance(Vec3::new(0.0, 0.0, -5.0)) < 0.0);
    assert_eq!(portal.plane_distance(Vec3::new(3.0, 7.0, 2.0)), 0.0);
}

#[test]
fn test_to_local_decomposition() {
    let portal = make_portal(Vec3::ZERO, Vec3::Z);
    // right = X, up = Y, normal = Z for this portal
    let local = portal.to_local(Vec3::new(1.0, 2.0, 3.0));
    assert!((local - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
}

#[test]
fn test_new_portal_starts_unconnected_and_active() {
    let portal = make_portal(Vec3::ZERO, Vec3::X);
    assert_eq!(portal.destination(), UNCONNECTED);
    assert!(!portal.is_connected());
    assert!(portal.is_active());
    assert_eq!(portal.width(), 4.0);
    assert_eq!(portal.height(), 5.0);
}
