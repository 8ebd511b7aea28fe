/*!
# Portal3D Engine

Recursive portal rendering subsystem for 3D worlds.

A portal is a planar rectangular surface that shows a live, recursively
correct view into another part of the world and teleports the viewer
when physically crossed. This crate owns the portal records, their
off-screen render targets, the portal camera math, the multi-pass
recursive view renderer, the surface compositor and the plane-crossing
collision resolver.

Everything GPU-facing goes through the [`graphics_device::GraphicsDevice`]
trait; backend implementations (Vulkan, OpenGL, ...) are provided by the
host application. Scene content is likewise the host's business: the
view renderer hands a (view, projection) pair to a callback and the
host issues the draw calls.

## Per-frame flow

1. `PortalSystem::render_views` — fills every portal's render target,
   deepest recursion level first.
2. The host renders its main scene pass.
3. `PortalSystem::draw_surfaces` — composites the portal quads using
   the just-filled targets.
4. `PortalSystem::check_collision` — decides teleportation before the
   next frame's camera is finalized.

`PortalSystem::frame` bundles steps 1–3 in the required order.
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics_device;
pub mod target;
pub mod portal;

// Main portal3d namespace module
pub mod portal3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // GPU seam
    pub mod gfx {
        pub use crate::graphics_device::*;
    }

    // Render target management
    pub mod target {
        pub use crate::target::{RenderTarget, TargetManager};
    }

    // Portal subsystem
    pub use crate::portal::{
        Portal, PortalConfig, PortalSystem, PortalView, RoomVariation,
    };
}

// Re-export math library at crate root
pub use glam;
