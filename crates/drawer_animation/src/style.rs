//! Animation styles requested for state changes

use crate::spring::SpringConfig;

/// How a state change should be presented
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStyle {
    /// Apply immediately (live drag tracking, layout resets)
    None,
    /// Animate toward the new values with a spring
    Spring(SpringConfig),
}

impl AnimationStyle {
    /// Spring animation with the given config, or none
    pub fn animated(animated: bool, spring: SpringConfig) -> Self {
        if animated {
            AnimationStyle::Spring(spring)
        } else {
            AnimationStyle::None
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, AnimationStyle::Spring(_))
    }
}

impl Default for AnimationStyle {
    fn default() -> Self {
        AnimationStyle::Spring(SpringConfig::drawer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_selects_style() {
        let spring = SpringConfig::stiff();
        assert_eq!(AnimationStyle::animated(true, spring), AnimationStyle::Spring(spring));
        assert_eq!(AnimationStyle::animated(false, spring), AnimationStyle::None);
        assert!(!AnimationStyle::None.is_animated());
    }
}
