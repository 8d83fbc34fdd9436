//! Drawer Platform Abstraction Layer
//!
//! This crate provides the platform-facing pieces a drawer overlay needs
//! from its host, without depending on any windowing backend.
//!
//! # Architecture
//!
//! - [`ScreenGeometry`] - Injected provider for screen height and safe-area insets
//! - [`SafeAreaInsets`] - Insets reserved by notches, status bars, home indicators
//! - [`DragEvent`] - Vertical drag input as delivered by the host gesture pipeline
//!
//! Geometry is always injected. Hosts wrap their platform query (UIKit,
//! Android insets, winit monitor size) in a [`ScreenGeometry`] implementation,
//! and tests use [`FixedGeometry`].
//!
//! # Example
//!
//! ```
//! use drawer_platform::{FixedGeometry, SafeAreaInsets, ScreenGeometry};
//!
//! let geometry = FixedGeometry::new(844.0).with_insets(SafeAreaInsets::vertical(47.0, 34.0));
//! assert_eq!(geometry.available_height(), Some(763.0));
//! ```

mod error;
mod geometry;
mod input;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use geometry::{FixedGeometry, SafeAreaInsets, ScreenGeometry};
pub use input::{DragEvent, DragPhase};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::geometry::{FixedGeometry, SafeAreaInsets, ScreenGeometry};
    pub use crate::input::{DragEvent, DragPhase};
}
