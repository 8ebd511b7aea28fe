//! Portal subsystem — the core of the crate
//!
//! Portal records with stable integer ids, the portal camera
//! transform, the deepest-first recursive view renderer, the surface
//! compositor and the plane-crossing teleport resolver, all owned and
//! orchestrated by `PortalSystem`.

mod portal;
mod variation;
mod camera_transform;
mod collision;
mod view_renderer;
mod compositor;
mod system;

pub use portal::{Portal, UNCONNECTED, WORLD_UP};
pub use variation::RoomVariation;
pub use camera_transform::{
    transform_view, PortalView,
    NEAR_DISTANCE, NEAR_DAMPENING, FAR_DAMPENING,
    MIN_STANDOFF, ROTATION_SENSITIVITY, DOWNWARD_TILT,
};
pub use collision::{check_collision, COLLISION_RANGE, FRONT_THRESHOLD, EXIT_OFFSET};
pub use compositor::SURFACE_INSET;
pub use system::{PortalConfig, PortalSystem};
