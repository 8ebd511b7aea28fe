/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Records every command as a string so tests can assert on exact
/// call sequences (state save/restore, clear placement, draw counts).

use glam::Mat4;
use slotmap::SlotMap;

use super::graphics_device::{
    ClearValue, CompareOp, FramebufferBinding, GraphicsDevice, TargetKey, Viewport,
};
use crate::error::{Error, Result};

/// Recorded state of one mock render target
#[derive(Debug, Clone, Copy)]
pub struct MockTarget {
    pub size: u32,
}

/// Command-recording mock device
pub struct MockGraphicsDevice {
    /// Live render targets
    pub targets: SlotMap<TargetKey, MockTarget>,
    /// Every command issued, in order
    pub commands: Vec<String>,
    /// When true, `create_render_target` reports an incomplete target
    pub fail_target_creation: bool,

    bound: FramebufferBinding,
    viewport: Viewport,
    depth_compare: CompareOp,
    depth_write: bool,
    alpha_blend: bool,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            targets: SlotMap::with_key(),
            commands: Vec::new(),
            fail_target_creation: false,
            bound: FramebufferBinding::Default,
            viewport: Viewport::square(1024),
            depth_compare: CompareOp::Less,
            depth_write: true,
            alpha_blend: false,
        }
    }

    /// Number of portal quad draw calls recorded so far
    pub fn draw_call_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| c.starts_with("draw_portal_quad"))
            .count()
    }

    /// Number of scene clears recorded so far
    pub fn clear_count(&self) -> usize {
        self.commands.iter().filter(|c| c.starts_with("clear")).count()
    }

    /// Number of live render targets
    pub fn live_target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn depth_compare(&self) -> CompareOp {
        self.depth_compare
    }

    pub fn depth_write(&self) -> bool {
        self.depth_write
    }

    pub fn alpha_blend(&self) -> bool {
        self.alpha_blend
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_render_target(&mut self, size: u32) -> Result<TargetKey> {
        if self.fail_target_creation {
            self.commands.push(format!("create_render_target({}) -> incomplete", size));
            return Err(Error::TargetIncomplete(format!("mock target, edge {}", size)));
        }
        let key = self.targets.insert(MockTarget { size });
        self.commands.push(format!("create_render_target({})", size));
        Ok(key)
    }

    fn destroy_render_target(&mut self, key: TargetKey) {
        // Dead keys are a no-op, matching real backends' handle reuse rules
        if self.targets.remove(key).is_some() {
            self.commands.push("destroy_render_target".to_string());
        }
    }

    fn bind_framebuffer(&mut self, binding: FramebufferBinding) {
        self.bound = binding;
        let name = match binding {
            FramebufferBinding::Default => "default".to_string(),
            FramebufferBinding::Target(key) => {
                format!("target(size={})", self.targets.get(key).map_or(0, |t| t.size))
            }
        };
        self.commands.push(format!("bind_framebuffer({})", name));
    }

    fn current_framebuffer(&self) -> FramebufferBinding {
        self.bound
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.commands.push(format!(
            "set_viewport({}x{})",
            viewport.width as u32, viewport.height as u32
        ));
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, values: &[ClearValue]) {
        self.commands.push(format!("clear({} values)", values.len()));
    }

    fn set_depth_compare(&mut self, op: CompareOp) {
        self.depth_compare = op;
        self.commands.push(format!("set_depth_compare({:?})", op));
    }

    fn set_depth_write(&mut self, enabled: bool) {
        self.depth_write = enabled;
        self.commands.push(format!("set_depth_write({})", enabled));
    }

    fn set_alpha_blend(&mut self, enabled: bool) {
        self.alpha_blend = enabled;
        self.commands.push(format!("set_alpha_blend({})", enabled));
    }

    fn draw_portal_quad(
        &mut self,
        _model: &Mat4,
        _view: &Mat4,
        _projection: &Mat4,
        captured: TargetKey,
        active: bool,
        time: f32,
    ) {
        let size = self.targets.get(captured).map_or(0, |t| t.size);
        self.commands.push(format!(
            "draw_portal_quad(size={}, active={}, time={})",
            size, active, time
        ));
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
