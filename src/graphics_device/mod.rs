//! Graphics device module — the GPU seam of the portal subsystem
//!
//! Everything that touches the GPU goes through the `GraphicsDevice`
//! trait: off-screen render target lifetime, framebuffer/viewport
//! binding, clears, depth/blend state and the portal quad draw call.
//! Backend implementations (Vulkan, OpenGL, ...) live in the host
//! application.

pub mod graphics_device;
pub mod quad;

pub use graphics_device::*;
pub use quad::{QuadVertex, PORTAL_QUAD_VERTICES, quad_vertex_bytes};

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
