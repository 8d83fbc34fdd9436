//! Drawer error types
//!
//! Drawer operations themselves are total. Errors only come from loading
//! configuration and from platform queries the host chooses to surface.

use drawer_platform::PlatformError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawerError {
    /// Configuration text could not be parsed
    #[error("Invalid drawer configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Padding must be a finite, non-negative length
    #[error("Invalid drawer padding: {0}")]
    InvalidPadding(f32),

    /// The deferred re-open delay must be positive
    #[error("Deferred delay must be greater than zero")]
    InvalidDelay,

    /// A platform query failed
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type for drawer configuration
pub type Result<T> = std::result::Result<T, DrawerError>;
