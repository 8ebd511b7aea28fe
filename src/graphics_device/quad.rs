/// Portal quad geometry — a unit rectangle in the XY plane
///
/// The quad spans [-0.5, 0.5] on X and Y with its face normal on +Z,
/// so a portal's model matrix scales it by the portal's (inset)
/// width/height and rotates it into the portal's right/up/normal
/// basis. UVs cover the full captured texture.

use bytemuck::{Pod, Zeroable};

/// Vertex layout for the portal quad (position + UV)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Two triangles, counter-clockwise when viewed from +Z
pub const PORTAL_QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { position: [-0.5, -0.5, 0.0], uv: [0.0, 0.0] },
    QuadVertex { position: [ 0.5, -0.5, 0.0], uv: [1.0, 0.0] },
    QuadVertex { position: [ 0.5,  0.5, 0.0], uv: [1.0, 1.0] },
    QuadVertex { position: [-0.5, -0.5, 0.0], uv: [0.0, 0.0] },
    QuadVertex { position: [ 0.5,  0.5, 0.0], uv: [1.0, 1.0] },
    QuadVertex { position: [-0.5,  0.5, 0.0], uv: [0.0, 1.0] },
];

/// Vertex data as bytes for upload into a backend vertex buffer
pub fn quad_vertex_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&PORTAL_QUAD_VERTICES)
}
