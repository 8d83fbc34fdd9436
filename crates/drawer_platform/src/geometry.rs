//! Screen geometry and safe-area insets
//!
//! The drawer needs two facts from the platform: the full screen height and
//! the vertical safe-area insets. Both are queried through [`ScreenGeometry`]
//! so the host decides where they come from.

use std::rc::Rc;

use crate::error::{PlatformError, Result};

/// Insets reserved by the system at each screen edge, in logical points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl SafeAreaInsets {
    /// No insets
    pub const ZERO: SafeAreaInsets = SafeAreaInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets with only the vertical edges set
    pub const fn vertical(top: f32, bottom: f32) -> Self {
        Self::new(top, 0.0, bottom, 0.0)
    }

    /// Combined top and bottom inset
    pub fn vertical_total(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<(f32, f32, f32, f32)> for SafeAreaInsets {
    /// Converts the `(top, left, bottom, right)` tuple returned by mobile backends
    fn from((top, left, bottom, right): (f32, f32, f32, f32)) -> Self {
        Self::new(top, left, bottom, right)
    }
}

/// Provider of screen geometry
///
/// Implemented by the host for its platform. Queries may fail before a
/// window exists; the provided methods turn those failures into the
/// fallbacks the drawer expects.
pub trait ScreenGeometry {
    /// Full screen height in logical points
    fn screen_height(&self) -> Result<f32>;

    /// Safe-area insets of the window hosting the drawer
    fn safe_area_insets(&self) -> Result<SafeAreaInsets>;

    /// Safe-area insets, or zero insets when the platform cannot report them
    fn insets_or_zero(&self) -> SafeAreaInsets {
        match self.safe_area_insets() {
            Ok(insets) => insets,
            Err(err) => {
                tracing::debug!("safe-area insets unavailable, using zero: {}", err);
                SafeAreaInsets::ZERO
            }
        }
    }

    /// Vertical space left after removing the safe-area insets
    ///
    /// Returns `None` when no screen is available at all.
    fn available_height(&self) -> Option<f32> {
        match self.screen_height() {
            Ok(height) => Some(height - self.insets_or_zero().vertical_total()),
            Err(err) => {
                tracing::debug!("screen height unavailable: {}", err);
                None
            }
        }
    }
}

impl<G: ScreenGeometry + ?Sized> ScreenGeometry for Rc<G> {
    fn screen_height(&self) -> Result<f32> {
        (**self).screen_height()
    }

    fn safe_area_insets(&self) -> Result<SafeAreaInsets> {
        (**self).safe_area_insets()
    }
}

impl<G: ScreenGeometry + ?Sized> ScreenGeometry for Box<G> {
    fn screen_height(&self) -> Result<f32> {
        (**self).screen_height()
    }

    fn safe_area_insets(&self) -> Result<SafeAreaInsets> {
        (**self).safe_area_insets()
    }
}

/// Geometry with fixed values
///
/// Used by headless hosts and tests. Either value may be left unset to
/// mimic a platform that has no window yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedGeometry {
    screen_height: Option<f32>,
    insets: Option<SafeAreaInsets>,
}

impl FixedGeometry {
    /// Geometry with a known screen height and zero insets
    pub fn new(screen_height: f32) -> Self {
        Self {
            screen_height: Some(screen_height),
            insets: Some(SafeAreaInsets::ZERO),
        }
    }

    /// Geometry that reports nothing, as before the first window exists
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Set the safe-area insets
    pub fn with_insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = Some(insets);
        self
    }

    /// Drop the safe-area insets so their query fails
    pub fn without_insets(mut self) -> Self {
        self.insets = None;
        self
    }
}

impl ScreenGeometry for FixedGeometry {
    fn screen_height(&self) -> Result<f32> {
        self.screen_height
            .ok_or_else(|| PlatformError::Unavailable("no screen attached".to_string()))
    }

    fn safe_area_insets(&self) -> Result<SafeAreaInsets> {
        self.insets
            .ok_or_else(|| PlatformError::Unavailable("no window attached".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_height_subtracts_vertical_insets() {
        let geometry = FixedGeometry::new(844.0).with_insets(SafeAreaInsets::new(47.0, 10.0, 34.0, 10.0));
        assert_eq!(geometry.available_height(), Some(763.0));
    }

    #[test]
    fn test_missing_insets_degrade_to_zero() {
        let geometry = FixedGeometry::new(800.0).without_insets();
        assert_eq!(geometry.insets_or_zero(), SafeAreaInsets::ZERO);
        assert_eq!(geometry.available_height(), Some(800.0));
    }

    #[test]
    fn test_missing_screen_has_no_available_height() {
        let geometry = FixedGeometry::unavailable();
        assert!(geometry.screen_height().is_err());
        assert_eq!(geometry.available_height(), None);
    }

    #[test]
    fn test_shared_geometry_delegates() {
        let geometry: Rc<dyn ScreenGeometry> = Rc::new(FixedGeometry::new(600.0));
        assert_eq!(geometry.available_height(), Some(600.0));
    }

    #[test]
    fn test_insets_from_mobile_tuple() {
        let insets = SafeAreaInsets::from((20.0, 0.0, 34.0, 0.0));
        assert_eq!(insets.vertical_total(), 54.0);
    }
}
