//! Drag input events
//!
//! Gesture recognition belongs to the host. What reaches the drawer is the
//! vertical translation of the active drag, measured from where the finger
//! went down, reported once per movement tick.

/// Drag gesture phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Finger is down and moving
    #[default]
    Changed,
    /// Finger lifted
    Ended,
}

/// A vertical drag update
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// Drag in progress with the accumulated vertical translation
    Changed {
        /// Translation from the gesture origin, positive toward the bottom of the screen
        translation_y: f32,
    },
    /// Drag finished
    Ended,
}

impl DragEvent {
    /// Interpret a tracked gesture translation
    ///
    /// Gesture state resets to zero when the finger lifts, so a translation
    /// of exactly zero marks the end of the drag.
    pub fn from_translation(translation_y: f32) -> Self {
        if translation_y == 0.0 {
            DragEvent::Ended
        } else {
            DragEvent::Changed { translation_y }
        }
    }

    pub fn phase(&self) -> DragPhase {
        match self {
            DragEvent::Changed { .. } => DragPhase::Changed,
            DragEvent::Ended => DragPhase::Ended,
        }
    }

    /// Translation carried by the event, zero once ended
    pub fn translation_y(&self) -> f32 {
        match self {
            DragEvent::Changed { translation_y } => *translation_y,
            DragEvent::Ended => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_translation_ends_drag() {
        assert_eq!(DragEvent::from_translation(0.0), DragEvent::Ended);
        assert_eq!(DragEvent::from_translation(0.0).phase(), DragPhase::Ended);
    }

    #[test]
    fn test_nonzero_translation_is_movement() {
        let event = DragEvent::from_translation(-12.5);
        assert_eq!(event.phase(), DragPhase::Changed);
        assert_eq!(event.translation_y(), -12.5);
    }
}
