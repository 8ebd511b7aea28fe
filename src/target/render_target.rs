/// Render target record — a portal's captured-view buffer.
///
/// Wraps the device-owned color+depth target key. An invalid record
/// (allocation failed) stays in place so the owning portal keeps
/// rendering as a blank/stale surface instead of crashing; it is
/// skipped by every fill and composite pass.

use crate::graphics_device::TargetKey;

/// Handle to one off-screen color+depth target.
///
/// Created via `TargetManager::allocate()`.
#[derive(Debug, Clone, Copy)]
pub struct RenderTarget {
    key: Option<TargetKey>,
    size: u32,
}

impl RenderTarget {
    /// Internal only — created via TargetManager::allocate()
    pub(crate) fn new(key: Option<TargetKey>, size: u32) -> Self {
        Self { key, size }
    }

    /// Device key, if the target was allocated successfully
    pub fn key(&self) -> Option<TargetKey> {
        self.key
    }

    /// Edge length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether rendering into this target is possible
    pub fn is_valid(&self) -> bool {
        self.key.is_some()
    }

    /// Drop the key on free; subsequent frees become no-ops
    pub(crate) fn take_key(&mut self) -> Option<TargetKey> {
        self.key.take()
    }
}
