//! Enter/exit transition
//!
//! When the drawer is inserted or removed, it slides in from (or out to)
//! its edge by its visible length. A fullscreen drawer additionally has to
//! travel across the safe-area inset at its leading edge, otherwise it
//! would stop short of leaving the screen.

use drawer_platform::SafeAreaInsets;

use crate::direction::DrawerDirection;

/// One endpoint (or intermediate frame) of the move transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerMove {
    pub direction: DrawerDirection,
    /// Distance from the resting position, positive while off screen
    pub drawer_offset: f32,
    pub is_fullscreen: bool,
}

impl DrawerMove {
    /// Off-screen endpoint: the drawer is moved out by its full length
    pub fn active(direction: DrawerDirection, drawer_length: f32, is_fullscreen: bool) -> Self {
        Self {
            direction,
            drawer_offset: drawer_length,
            is_fullscreen,
        }
    }

    /// Resting endpoint
    pub fn identity(direction: DrawerDirection, is_fullscreen: bool) -> Self {
        Self {
            direction,
            drawer_offset: 0.0,
            is_fullscreen,
        }
    }

    /// Frame between `self` and `to`, `progress` in 0..=1
    pub fn interpolate(&self, to: &DrawerMove, progress: f32) -> DrawerMove {
        let t = progress.clamp(0.0, 1.0);
        DrawerMove {
            drawer_offset: self.drawer_offset + (to.drawer_offset - self.drawer_offset) * t,
            ..*to
        }
    }

    /// Inset the drawer crosses while leaving the screen
    pub fn leading_safe_area(&self, insets: &SafeAreaInsets) -> f32 {
        match self.direction {
            DrawerDirection::Top => insets.bottom,
            DrawerDirection::Bottom => insets.top,
        }
    }

    /// Offset including the leading inset when fullscreen and off screen
    pub fn effective_offset(&self, insets: &SafeAreaInsets) -> f32 {
        if self.is_fullscreen && self.drawer_offset > 0.0 {
            self.drawer_offset + self.leading_safe_area(insets)
        } else {
            self.drawer_offset
        }
    }

    /// Screen-space translation to apply to the drawer for this frame
    pub fn translation(&self, insets: &SafeAreaInsets) -> f32 {
        -self.direction.vertical_offset(self.effective_offset(insets))
    }

    /// Non-fullscreen drawers clip their content while moving
    pub fn clips_content(&self) -> bool {
        !self.is_fullscreen
    }

    /// Input only reaches the drawer once it has fully arrived
    pub fn allows_hit_testing(&self) -> bool {
        self.drawer_offset == 0.0
    }
}
