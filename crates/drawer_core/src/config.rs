//! Drawer configuration
//!
//! Everything a host decides when it declares a drawer: the edge it slides
//! from, the padding kept at the far edge, overlay styling, and timing.
//! Config can be built in code or loaded from TOML:
//!
//! ```
//! use drawer_core::{DrawerConfig, DrawerDirection};
//!
//! let config = DrawerConfig::from_toml_str(r#"
//!     direction = "bottom"
//!     padding = 34.0
//!     overlay_color = { r = 0.0, g = 0.0, b = 0.0 }
//! "#).unwrap();
//!
//! assert_eq!(config.direction, DrawerDirection::Bottom);
//! assert_eq!(config.padding, 34.0);
//! ```

use std::time::Duration;

use drawer_animation::SpringConfig;
use drawer_platform::ScreenGeometry;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::direction::DrawerDirection;
use crate::error::{DrawerError, Result};

/// Delay before re-opening after a layout change
pub const DEFAULT_DEFERRED_DELAY_MS: u64 = 300;

/// Drawer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Edge the drawer slides from
    pub direction: DrawerDirection,
    /// Inset kept free at the far edge (home indicator, tab bar)
    pub padding: f32,
    /// Color of the dimming overlay behind the drawer
    pub overlay_color: Color,
    /// Overlay opacity when the drawer is fully open
    pub overlay_max_opacity: f32,
    /// Blur applied to the parent view when the drawer is fully open
    pub max_blur_radius: f32,
    /// Delay before deferred re-opens, in milliseconds
    pub deferred_delay_ms: u64,
    /// Spring used for animated state changes
    pub spring: SpringConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            direction: DrawerDirection::Top,
            padding: 0.0,
            overlay_color: Color::WHITE,
            overlay_max_opacity: 0.4,
            max_blur_radius: 3.0,
            deferred_delay_ms: DEFAULT_DEFERRED_DELAY_MS,
            spring: SpringConfig::drawer(),
        }
    }
}

impl DrawerConfig {
    pub fn new(direction: DrawerDirection) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: DrawerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the controller relies on
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(DrawerError::InvalidPadding(self.padding));
        }
        if self.deferred_delay_ms == 0 {
            return Err(DrawerError::InvalidDelay);
        }
        Ok(())
    }

    /// Set the edge the drawer slides from
    pub fn direction(mut self, direction: DrawerDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the far-edge padding
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Use the platform's safe-area inset at the drawer's far edge as padding
    ///
    /// Unlike the fullscreen check, this surfaces platform failures since
    /// the host asked for the inset explicitly.
    pub fn safe_area_padding(mut self, geometry: &dyn ScreenGeometry) -> Result<Self> {
        let insets = geometry.safe_area_insets()?;
        self.padding = match self.direction {
            DrawerDirection::Top => insets.bottom,
            DrawerDirection::Bottom => insets.top,
        };
        Ok(self)
    }

    /// Set the overlay color
    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    /// Set the overlay opacity at fully open
    pub fn overlay_max_opacity(mut self, opacity: f32) -> Self {
        self.overlay_max_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the parent blur radius at fully open
    pub fn max_blur_radius(mut self, radius: f32) -> Self {
        self.max_blur_radius = radius.max(0.0);
        self
    }

    /// Set the deferred re-open delay, saturating at `u64::MAX` milliseconds
    pub fn deferred_delay(mut self, delay: Duration) -> Self {
        self.deferred_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the spring for animated changes
    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn deferred_delay_duration(&self) -> Duration {
        Duration::from_millis(self.deferred_delay_ms)
    }
}

/// Visual slots a host attaches to a drawer
///
/// The core never looks inside these; they ride along so the renderer can
/// fetch them from the same place it reads the drawer state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawerSlots<C, B = (), O = ()> {
    pub content: C,
    pub background: B,
    pub overlay: O,
}

impl<C> DrawerSlots<C> {
    /// Slots with only content
    pub fn content(content: C) -> Self {
        Self {
            content,
            background: (),
            overlay: (),
        }
    }
}

impl<C, B, O> DrawerSlots<C, B, O> {
    /// Replace the background slot
    pub fn background<B2>(self, background: B2) -> DrawerSlots<C, B2, O> {
        DrawerSlots {
            content: self.content,
            background,
            overlay: self.overlay,
        }
    }

    /// Replace the overlay slot
    pub fn overlay<O2>(self, overlay: O2) -> DrawerSlots<C, B, O2> {
        DrawerSlots {
            content: self.content,
            background: self.background,
            overlay,
        }
    }
}
