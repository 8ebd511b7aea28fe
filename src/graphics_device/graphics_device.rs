/// GraphicsDevice trait — backend interface for the portal subsystem
///
/// The portal system never owns ambient GPU state: the device is
/// passed down into every rendering entry point, and any component
/// that rebinds the framebuffer or viewport reads the prior state
/// through this trait and restores it before returning.

use glam::Mat4;
use slotmap::new_key_type;
use crate::error::Result;

new_key_type! {
    /// Stable key for an off-screen render target owned by the device.
    ///
    /// Keys stay valid until their target is destroyed; destroying an
    /// already-dead key is a no-op.
    pub struct TargetKey;
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-target viewport with the standard [0, 1] depth range
    pub fn square(size: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size as f32,
            height: size as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Clear value for an attachment
#[derive(Debug, Clone, Copy)]
pub enum ClearValue {
    /// Color clear value (RGBA)
    Color([f32; 4]),
    /// Depth/stencil clear value
    DepthStencil { depth: f32, stencil: u32 },
}

/// Comparison operator for the depth test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Pass if value < reference (renderer default)
    Less,
    /// Pass if value <= reference (coincident-surface compositing)
    LessOrEqual,
    /// Always pass
    Always,
}

/// Current framebuffer binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferBinding {
    /// The swapchain / window surface
    Default,
    /// An off-screen render target
    Target(TargetKey),
}

/// Backend interface for everything the portal subsystem asks of the GPU
///
/// The framebuffer binding and viewport are shared global state:
/// callers that rebind them must save the prior values via
/// [`current_framebuffer`](GraphicsDevice::current_framebuffer) /
/// [`viewport`](GraphicsDevice::viewport) and restore them afterwards.
pub trait GraphicsDevice: Send + Sync {
    /// Create a square off-screen color+depth render target
    ///
    /// # Arguments
    ///
    /// * `size` - Edge length in pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the backend reports the target incomplete.
    fn create_render_target(&mut self, size: u32) -> Result<TargetKey>;

    /// Destroy a render target and both of its attachments
    ///
    /// Destroying a key that is already dead is a no-op.
    fn destroy_render_target(&mut self, key: TargetKey);

    /// Bind a framebuffer (default surface or off-screen target)
    fn bind_framebuffer(&mut self, binding: FramebufferBinding);

    /// Currently bound framebuffer
    fn current_framebuffer(&self) -> FramebufferBinding;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport);

    /// Current viewport
    fn viewport(&self) -> Viewport;

    /// Clear attachments of the currently bound framebuffer
    fn clear(&mut self, values: &[ClearValue]);

    /// Set the depth test comparison
    fn set_depth_compare(&mut self, op: CompareOp);

    /// Enable or disable depth writes
    fn set_depth_write(&mut self, enabled: bool);

    /// Enable or disable standard alpha blending
    fn set_alpha_blend(&mut self, enabled: bool);

    /// Draw one portal quad
    ///
    /// Samples `captured` (a portal's filled render target) as the
    /// quad's texture. `active` and `time` feed the portal shader's
    /// uniforms for shader-side animation of inactive/active surfaces.
    fn draw_portal_quad(
        &mut self,
        model: &Mat4,
        view: &Mat4,
        projection: &Mat4,
        captured: TargetKey,
        active: bool,
        time: f32,
    );
}
