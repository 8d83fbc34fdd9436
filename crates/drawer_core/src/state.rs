//! Drawer geometry and mode
//!
//! [`DrawerState`] is an immutable value. Every change produces a new
//! state through [`DrawerState::copy_with`], and the controller swaps the
//! whole value at once, so renderers never observe a half-applied update.

/// Fraction of the drawer length the content may be overscrolled at either end
/// before the drag is handed to the drawer itself
pub const OVERSCROLL_TOLERANCE: f32 = 0.05;

/// A drag released further than `visible_drawer_length / SNAP_CLOSE_DIVISOR`
/// toward closed dismisses the drawer
pub const SNAP_CLOSE_DIVISOR: f32 = 3.0;

/// Snapshot of the drawer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerState {
    /// Displacement from the resting open position. 0 is fully open, negative is toward closed.
    drawer_offset: f32,
    /// Logical open/closed mode
    is_open: bool,
    /// Measured height of the hosting viewport
    max_screen_length: f32,
    /// Natural height of the drawer content
    full_content_length: f32,
    /// Raw drag delta at the last content-scroll tick, used to continue smoothly
    /// when the drag switches from scrolling content to moving the drawer
    last_scroll_drag: f32,
    /// The visible drawer fills the safe viewport
    is_full_screen: bool,
    /// Scroll position of the content inside the drawer
    scroll_content_offset: f32,
    /// Scroll position captured when the current gesture started
    initial_offset: f32,
    /// Inset kept free at the far edge
    drawer_padding: f32,
}

impl DrawerState {
    /// A closed drawer with nothing measured yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawer_offset(&self) -> f32 {
        self.drawer_offset
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn max_screen_length(&self) -> f32 {
        self.max_screen_length
    }

    pub fn full_content_length(&self) -> f32 {
        self.full_content_length
    }

    pub fn last_scroll_drag(&self) -> f32 {
        self.last_scroll_drag
    }

    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen
    }

    pub fn scroll_content_offset(&self) -> f32 {
        self.scroll_content_offset
    }

    pub fn initial_offset(&self) -> f32 {
        self.initial_offset
    }

    pub fn drawer_padding(&self) -> f32 {
        self.drawer_padding
    }

    /// Longest the drawer may be: the viewport minus the padding
    pub fn max_drawer_length(&self) -> f32 {
        self.max_screen_length - self.drawer_padding
    }

    /// Length of the drawer on screen: the content, capped at the maximum
    pub fn visible_drawer_length(&self) -> f32 {
        self.full_content_length.min(self.max_drawer_length())
    }

    /// How far the content can scroll before reaching its end
    pub fn max_scroll_offset(&self) -> f32 {
        self.full_content_length - self.max_drawer_length()
    }

    /// True when the content is taller than the drawer can show
    pub fn content_overflows(&self) -> bool {
        self.full_content_length >= self.max_drawer_length()
    }

    /// 0..=1 proportionally to how open the drawer is
    ///
    /// Always 0 while closed or while the visible length is not positive.
    /// A padding larger than the viewport makes the visible length negative,
    /// which also reports 0 instead of a ratio of negative lengths.
    pub fn open_percentage(&self) -> f32 {
        let visible = self.visible_drawer_length();
        if !self.is_open || visible <= 0.0 {
            return 0.0;
        }

        let value = (visible - self.drawer_offset.abs()) / visible;
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, 1.0)
    }

    /// Whether a content scroll position lies within the scrollable range,
    /// widened by the overscroll tolerance at both ends
    ///
    /// The upper bound extends past the content end; the lower bound is a
    /// flat fraction of the drawer length below zero.
    pub fn accepts_content_scroll(&self, offset: f32) -> bool {
        let max_drawer_length = self.max_drawer_length();
        let tolerance = max_drawer_length * OVERSCROLL_TOLERANCE;
        offset <= (self.full_content_length - max_drawer_length) + tolerance && offset >= -tolerance
    }

    /// Offset beyond which a released drag closes the drawer
    pub fn snap_close_threshold(&self) -> f32 {
        -self.visible_drawer_length() / SNAP_CLOSE_DIVISOR
    }

    /// New state with the fields set in `patch` replaced
    pub fn copy_with(&self, patch: DrawerPatch) -> DrawerState {
        DrawerState {
            drawer_offset: patch.drawer_offset.unwrap_or(self.drawer_offset),
            is_open: patch.is_open.unwrap_or(self.is_open),
            max_screen_length: patch.max_screen_length.unwrap_or(self.max_screen_length),
            full_content_length: patch.full_content_length.unwrap_or(self.full_content_length),
            last_scroll_drag: patch.last_scroll_drag.unwrap_or(self.last_scroll_drag),
            is_full_screen: patch.is_full_screen.unwrap_or(self.is_full_screen),
            scroll_content_offset: patch
                .scroll_content_offset
                .unwrap_or(self.scroll_content_offset),
            initial_offset: patch.initial_offset.unwrap_or(self.initial_offset),
            drawer_padding: patch.drawer_padding.unwrap_or(self.drawer_padding),
        }
    }
}

/// Partial update for [`DrawerState::copy_with`]
///
/// Unset fields are copied from the receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerPatch {
    drawer_offset: Option<f32>,
    is_open: Option<bool>,
    max_screen_length: Option<f32>,
    full_content_length: Option<f32>,
    last_scroll_drag: Option<f32>,
    is_full_screen: Option<bool>,
    scroll_content_offset: Option<f32>,
    initial_offset: Option<f32>,
    drawer_padding: Option<f32>,
}

impl DrawerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawer_offset(mut self, value: f32) -> Self {
        self.drawer_offset = Some(value);
        self
    }

    pub fn is_open(mut self, value: bool) -> Self {
        self.is_open = Some(value);
        self
    }

    pub fn max_screen_length(mut self, value: f32) -> Self {
        self.max_screen_length = Some(value);
        self
    }

    pub fn full_content_length(mut self, value: f32) -> Self {
        self.full_content_length = Some(value);
        self
    }

    pub fn last_scroll_drag(mut self, value: f32) -> Self {
        self.last_scroll_drag = Some(value);
        self
    }

    pub fn is_full_screen(mut self, value: bool) -> Self {
        self.is_full_screen = Some(value);
        self
    }

    pub fn scroll_content_offset(mut self, value: f32) -> Self {
        self.scroll_content_offset = Some(value);
        self
    }

    pub fn initial_offset(mut self, value: f32) -> Self {
        self.initial_offset = Some(value);
        self
    }

    pub fn drawer_padding(mut self, value: f32) -> Self {
        self.drawer_padding = Some(value);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(screen: f32, content: f32, padding: f32) -> DrawerState {
        DrawerState::new().copy_with(
            DrawerPatch::new()
                .max_screen_length(screen)
                .full_content_length(content)
                .drawer_padding(padding),
        )
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let state = measured(800.0, 400.0, 20.0).copy_with(DrawerPatch::new().drawer_offset(-12.0));
        assert!(DrawerPatch::new().is_empty());
        assert_eq!(state.copy_with(DrawerPatch::new()), state);
    }

    #[test]
    fn test_patch_overrides_only_given_fields() {
        let state = measured(800.0, 400.0, 20.0);
        let next = state.copy_with(DrawerPatch::new().is_open(true).scroll_content_offset(30.0));

        assert!(next.is_open());
        assert_eq!(next.scroll_content_offset(), 30.0);
        assert_eq!(next.max_screen_length(), 800.0);
        assert_eq!(next.full_content_length(), 400.0);
        assert_eq!(next.drawer_padding(), 20.0);
        assert_eq!(next.drawer_offset(), 0.0);
    }

    #[test]
    fn test_derived_lengths() {
        let fits = measured(800.0, 400.0, 20.0);
        assert_eq!(fits.max_drawer_length(), 780.0);
        assert_eq!(fits.visible_drawer_length(), 400.0);
        assert!(!fits.content_overflows());

        let overflows = measured(800.0, 1200.0, 20.0);
        assert_eq!(overflows.visible_drawer_length(), 780.0);
        assert_eq!(overflows.max_scroll_offset(), 420.0);
        assert!(overflows.content_overflows());
    }

    #[test]
    fn test_visible_length_equals_content_when_it_fits() {
        for (screen, content, padding) in [(800.0, 0.0, 0.0), (800.0, 799.0, 0.0), (600.0, 580.0, 20.0)] {
            let state = measured(screen, content, padding);
            assert!(state.visible_drawer_length() <= state.max_drawer_length());
            assert_eq!(state.visible_drawer_length(), content);
        }
    }

    #[test]
    fn test_open_percentage_bounds() {
        let base = measured(800.0, 300.0, 0.0);
        assert_eq!(base.open_percentage(), 0.0);

        let open = base.copy_with(DrawerPatch::new().is_open(true));
        assert_eq!(open.open_percentage(), 1.0);

        let half = open.copy_with(DrawerPatch::new().drawer_offset(-150.0));
        assert!((half.open_percentage() - 0.5).abs() < 1e-6);

        let beyond = open.copy_with(DrawerPatch::new().drawer_offset(-900.0));
        assert_eq!(beyond.open_percentage(), 0.0);

        for offset in [-1000.0, -300.0, -1.0, 0.0, 25.0, 400.0] {
            let p = open.copy_with(DrawerPatch::new().drawer_offset(offset)).open_percentage();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_open_percentage_before_layout_is_zero() {
        let state = DrawerState::new().copy_with(DrawerPatch::new().is_open(true));
        assert_eq!(state.visible_drawer_length(), 0.0);
        assert_eq!(state.open_percentage(), 0.0);
    }

    #[test]
    fn test_open_percentage_with_padding_past_viewport_is_zero() {
        let state = measured(100.0, 50.0, 140.0).copy_with(DrawerPatch::new().is_open(true));
        assert_eq!(state.visible_drawer_length(), -40.0);
        assert_eq!(state.open_percentage(), 0.0);

        let dragged = state.copy_with(DrawerPatch::new().drawer_offset(-10.0));
        assert_eq!(dragged.open_percentage(), 0.0);
    }

    #[test]
    fn test_content_scroll_band_is_asymmetric() {
        // max drawer length 100, content 200: band is [-5, 105]
        let state = measured(100.0, 200.0, 0.0);
        assert!(state.accepts_content_scroll(0.0));
        assert!(state.accepts_content_scroll(95.0));
        assert!(state.accepts_content_scroll(-4.0));
        assert!(!state.accepts_content_scroll(-6.0));
        assert!(!state.accepts_content_scroll(106.0));
    }

    #[test]
    fn test_snap_threshold() {
        let state = measured(100.0, 90.0, 0.0);
        assert_eq!(state.snap_close_threshold(), -30.0);
    }
}
