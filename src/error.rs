//! Error types for the Portal3D subsystem
//!
//! Faults in this subsystem are absorbed locally: an incomplete render
//! target degrades to a blank/stale portal, an out-of-range id becomes
//! a bounds-checked no-op. The error type exists at the boundary where
//! a backend reports a failure (target creation) so callers can log
//! and degrade instead of crashing.

use std::fmt;

/// Result type for Portal3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Portal3D subsystem errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Off-screen render target could not be completed by the backend
    TargetIncomplete(String),

    /// Invalid resource (target key, portal id, ...)
    InvalidResource(String),

    /// Initialization failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TargetIncomplete(msg) => write!(f, "Render target incomplete: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
