/// Central render target manager for the portal subsystem.
///
/// Allocates one square off-screen color+depth target per portal
/// through the graphics device and owns their GPU lifetime. There is
/// no resize operation; quality changes reallocate.

use crate::engine_error;
use crate::engine_debug;
use crate::graphics_device::{GraphicsDevice, TargetKey};
use super::render_target::RenderTarget;

/// Tracks every live target so teardown can free them even if an
/// individual record was lost.
pub struct TargetManager {
    live: Vec<TargetKey>,
}

impl TargetManager {
    /// Create a new empty target manager
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    /// Allocate a square color+depth target of the given edge length.
    ///
    /// On backend failure the error is logged and an *invalid* record
    /// is returned; the owning portal then degrades to a blank/stale
    /// surface and every render pass skips it.
    pub fn allocate(&mut self, device: &mut dyn GraphicsDevice, size: u32) -> RenderTarget {
        match device.create_render_target(size) {
            Ok(key) => {
                engine_debug!("portal3d::TargetManager",
                    "allocated {0}x{0} render target", size);
                self.live.push(key);
                RenderTarget::new(Some(key), size)
            }
            Err(err) => {
                engine_error!("portal3d::TargetManager",
                    "render target allocation failed, portal will render blank: {}", err);
                RenderTarget::new(None, size)
            }
        }
    }

    /// Release a target and both of its attachments.
    ///
    /// Idempotent: freeing an already-freed or invalid record is a
    /// no-op.
    pub fn free(&mut self, device: &mut dyn GraphicsDevice, target: &mut RenderTarget) {
        if let Some(key) = target.take_key() {
            self.live.retain(|k| *k != key);
            device.destroy_render_target(key);
        }
    }

    /// Release every live target (system teardown).
    ///
    /// Safe to call multiple times.
    pub fn free_all(&mut self, device: &mut dyn GraphicsDevice) {
        for key in self.live.drain(..) {
            device.destroy_render_target(key);
        }
    }

    /// Number of live targets
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Default for TargetManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "target_manager_tests.rs"]
mod tests;
