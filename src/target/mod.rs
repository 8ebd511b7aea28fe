//! Render target management module
//!
//! One square off-screen color+depth target per portal. The manager
//! owns their GPU lifetime; allocation failure degrades to an invalid
//! handle that rendering skips, never a crash.

mod render_target;
mod target_manager;

pub use render_target::RenderTarget;
pub use target_manager::TargetManager;
