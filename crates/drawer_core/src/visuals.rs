//! Render values derived from the drawer state
//!
//! [`DrawerVisuals`] is what a renderer needs to paint one frame: the
//! translations, the clip length, and the strength of the dimming overlay
//! and parent blur. [`AnimatedVisuals`] smooths those values over time,
//! following the animation style attached to each state change.

use drawer_animation::AnimatedScalar;

use crate::color::Color;
use crate::config::DrawerConfig;
use crate::direction::{DrawerDirection, VerticalEdge};
use crate::observer::StateChange;
use crate::state::DrawerState;

/// Values for painting the drawer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerVisuals {
    /// Screen-space translation of the whole drawer
    pub drawer_translation: f32,
    /// Screen-space translation of the content inside the drawer frame
    pub content_translation: f32,
    /// Height of the clipped drawer frame
    pub frame_length: f32,
    /// Opacity of the overlay color
    pub overlay_opacity: f32,
    /// Overlay color with `overlay_opacity` folded into its alpha
    pub overlay_color: Color,
    /// Blur radius applied to the parent view
    pub blur_radius: f32,
    /// Edge the content is pinned to inside the frame
    pub content_alignment: VerticalEdge,
    /// Edge the drawer is pinned to inside the overlay
    pub overlay_alignment: VerticalEdge,
}

impl DrawerVisuals {
    pub fn new(state: &DrawerState, config: &DrawerConfig) -> Self {
        let direction = config.direction;
        let open = state.open_percentage();
        let overlay_opacity = open * config.overlay_max_opacity;
        Self {
            drawer_translation: direction.vertical_offset(state.drawer_offset()),
            content_translation: direction.vertical_offset(state.scroll_content_offset()),
            frame_length: state.visible_drawer_length(),
            overlay_opacity,
            overlay_color: tinted(config.overlay_color, overlay_opacity),
            blur_radius: open * config.max_blur_radius,
            content_alignment: direction.content_alignment(),
            overlay_alignment: direction.overlay_alignment(),
        }
    }
}

fn tinted(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.a * opacity)
}

/// Spring-smoothed [`DrawerVisuals`]
#[derive(Clone, Debug)]
pub struct AnimatedVisuals {
    config: DrawerConfig,
    drawer_translation: AnimatedScalar,
    content_translation: AnimatedScalar,
    frame_length: AnimatedScalar,
    overlay_opacity: AnimatedScalar,
    blur_radius: AnimatedScalar,
}

impl AnimatedVisuals {
    /// Start at the values of `state` with nothing in motion
    pub fn new(state: &DrawerState, config: DrawerConfig) -> Self {
        let visuals = DrawerVisuals::new(state, &config);
        Self {
            config,
            drawer_translation: AnimatedScalar::new(visuals.drawer_translation),
            content_translation: AnimatedScalar::new(visuals.content_translation),
            frame_length: AnimatedScalar::new(visuals.frame_length),
            overlay_opacity: AnimatedScalar::new(visuals.overlay_opacity),
            blur_radius: AnimatedScalar::new(visuals.blur_radius),
        }
    }

    /// Retarget every value from a committed change
    pub fn apply(&mut self, change: &StateChange) {
        let target = DrawerVisuals::new(&change.current, &self.config);
        let style = change.animation;
        self.drawer_translation.animate_to(target.drawer_translation, style);
        self.content_translation.animate_to(target.content_translation, style);
        self.frame_length.animate_to(target.frame_length, style);
        self.overlay_opacity.animate_to(target.overlay_opacity, style);
        self.blur_radius.animate_to(target.blur_radius, style);
    }

    /// Advance all values by `dt` seconds; returns true while any is moving
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;
        for scalar in self.scalars_mut() {
            animating |= scalar.tick(dt);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        [
            &self.drawer_translation,
            &self.content_translation,
            &self.frame_length,
            &self.overlay_opacity,
            &self.blur_radius,
        ]
        .iter()
        .any(|scalar| scalar.is_animating())
    }

    /// Values for the current frame
    pub fn current(&self) -> DrawerVisuals {
        let direction: DrawerDirection = self.config.direction;
        let overlay_opacity = self.overlay_opacity.value().clamp(0.0, 1.0);
        DrawerVisuals {
            drawer_translation: self.drawer_translation.value(),
            content_translation: self.content_translation.value(),
            frame_length: self.frame_length.value(),
            overlay_opacity,
            overlay_color: tinted(self.config.overlay_color, overlay_opacity),
            blur_radius: self.blur_radius.value().max(0.0),
            content_alignment: direction.content_alignment(),
            overlay_alignment: direction.overlay_alignment(),
        }
    }

    fn scalars_mut(&mut self) -> [&mut AnimatedScalar; 5] {
        [
            &mut self.drawer_translation,
            &mut self.content_translation,
            &mut self.frame_length,
            &mut self.overlay_opacity,
            &mut self.blur_radius,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DrawerPatch;
    use drawer_animation::AnimationStyle;

    fn snap_change(previous: &DrawerState, current: DrawerState) -> StateChange {
        StateChange {
            previous: *previous,
            current,
            animation: AnimationStyle::None,
        }
    }

    fn open_state() -> DrawerState {
        DrawerState::new().copy_with(
            DrawerPatch::new()
                .max_screen_length(800.0)
                .full_content_length(300.0)
                .is_open(true),
        )
    }

    #[test]
    fn test_visuals_scale_with_open_percentage() {
        let config = DrawerConfig::default();
        let state = open_state().copy_with(DrawerPatch::new().drawer_offset(-150.0));
        let visuals = DrawerVisuals::new(&state, &config);

        assert!((visuals.overlay_opacity - 0.2).abs() < 1e-6);
        assert!((visuals.blur_radius - 1.5).abs() < 1e-6);
        assert_eq!(visuals.frame_length, 300.0);
    }

    #[test]
    fn test_visuals_follow_direction() {
        let state = open_state().copy_with(
            DrawerPatch::new()
                .drawer_offset(-20.0)
                .scroll_content_offset(10.0),
        );

        let top = DrawerVisuals::new(&state, &DrawerConfig::new(DrawerDirection::Top));
        assert_eq!(top.drawer_translation, 20.0);
        assert_eq!(top.content_translation, -10.0);
        assert_eq!(top.overlay_alignment, VerticalEdge::Bottom);

        let bottom = DrawerVisuals::new(&state, &DrawerConfig::new(DrawerDirection::Bottom));
        assert_eq!(bottom.drawer_translation, -20.0);
        assert_eq!(bottom.content_translation, 10.0);
        assert_eq!(bottom.content_alignment, VerticalEdge::Bottom);
    }

    #[test]
    fn test_closed_drawer_has_no_overlay() {
        let visuals = DrawerVisuals::new(&DrawerState::new(), &DrawerConfig::default());
        assert_eq!(visuals.overlay_opacity, 0.0);
        assert_eq!(visuals.overlay_color.a, 0.0);
        assert_eq!(visuals.blur_radius, 0.0);
    }

    #[test]
    fn test_overlay_color_carries_opacity() {
        let config = DrawerConfig::default().overlay_color(Color::rgba(0.0, 0.0, 0.0, 0.5));
        let visuals = DrawerVisuals::new(&open_state(), &config);

        assert!((visuals.overlay_opacity - 0.4).abs() < 1e-6);
        let [r, g, b, a] = visuals.overlay_color.to_array();
        assert_eq!((r, g, b), (0.0, 0.0, 0.0));
        assert!((a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_animated_visuals_snap_on_none() {
        let closed = DrawerState::new().copy_with(
            DrawerPatch::new()
                .max_screen_length(800.0)
                .full_content_length(300.0),
        );
        let mut visuals = AnimatedVisuals::new(&closed, DrawerConfig::default());

        visuals.apply(&snap_change(&closed, open_state()));
        assert!(!visuals.is_animating());
        assert!((visuals.current().overlay_opacity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_animated_visuals_spring_toward_target() {
        let open = open_state();
        let mut visuals = AnimatedVisuals::new(&open, DrawerConfig::default());
        let dragged = open.copy_with(DrawerPatch::new().drawer_offset(-120.0));
        visuals.apply(&snap_change(&open, dragged));

        let settled = dragged.copy_with(DrawerPatch::new().drawer_offset(0.0));
        visuals.apply(&StateChange {
            previous: dragged,
            current: settled,
            animation: AnimationStyle::default(),
        });
        assert!(visuals.is_animating());

        visuals.tick(1.0 / 60.0);
        let midway = visuals.current().drawer_translation;
        assert!(midway > 0.0 && midway < 120.0);

        let mut frames = 0;
        while visuals.tick(1.0 / 60.0) && frames < 240 {
            frames += 1;
        }
        assert_eq!(visuals.current().drawer_translation, 0.0);
    }
}
