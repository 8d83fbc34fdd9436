//! Spring-backed scalar for renderers
//!
//! The drawer core publishes target values together with the style they
//! should be reached with. Renderers keep one [`AnimatedScalar`] per visual
//! property and tick them each frame.

use crate::spring::{Spring, SpringConfig};
use crate::style::AnimationStyle;

/// A single animated value
#[derive(Clone, Copy, Debug)]
pub struct AnimatedScalar {
    spring: Spring,
}

impl AnimatedScalar {
    pub fn new(initial: f32) -> Self {
        Self {
            spring: Spring::new(SpringConfig::drawer(), initial),
        }
    }

    /// Move toward `target` using `style`
    ///
    /// `AnimationStyle::None` jumps straight to the target. A spring keeps
    /// the current velocity when only the target changes.
    pub fn animate_to(&mut self, target: f32, style: AnimationStyle) {
        match style {
            AnimationStyle::None => self.spring.snap_to(target),
            AnimationStyle::Spring(config) => {
                if self.spring.config() != config {
                    self.spring = Spring::new(config, self.spring.value());
                }
                self.spring.set_target(target);
            }
        }
    }

    /// Advance by `dt` seconds; returns true while still moving
    pub fn tick(&mut self, dt: f32) -> bool {
        self.spring.step(dt);
        if self.spring.is_settled() {
            let target = self.spring.target();
            self.spring.snap_to(target);
            return false;
        }
        true
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    pub fn is_animating(&self) -> bool {
        !self.spring.is_settled()
    }
}

impl Default for AnimatedScalar {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_style_snaps() {
        let mut scalar = AnimatedScalar::new(0.0);
        scalar.animate_to(-120.0, AnimationStyle::None);
        assert_eq!(scalar.value(), -120.0);
        assert!(!scalar.is_animating());
    }

    #[test]
    fn test_spring_style_converges() {
        let mut scalar = AnimatedScalar::new(-200.0);
        scalar.animate_to(0.0, AnimationStyle::default());
        assert!(scalar.is_animating());

        let mut frames = 0;
        while scalar.tick(1.0 / 60.0) && frames < 240 {
            frames += 1;
        }

        assert!(frames < 240);
        assert_eq!(scalar.value(), 0.0);
    }
}
