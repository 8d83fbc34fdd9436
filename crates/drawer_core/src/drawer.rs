//! Drawer presenter
//!
//! [`Drawer`] is the glue between a hosting screen and its
//! [`DrawerController`]. The host forwards layout and input events it
//! already receives (appearance, size changes, drag translations, overlay
//! taps) and asks the presenter what to render.
//!
//! # Warm-up
//!
//! The content's natural height is unknown until it has been laid out once.
//! The first time the drawer opens, the renderer lays the content out
//! invisibly ([`RenderPhase::WarmingUp`]) and reports its height. Once that
//! is done it calls [`Drawer::on_warm_up_complete`], and the drawer re-opens
//! with an entry transition sized to the measured content.
//!
//! # Example
//!
//! ```
//! use drawer_core::{Drawer, DrawerConfig, DrawerSlots, RenderPhase};
//! use drawer_platform::FixedGeometry;
//!
//! let mut drawer = Drawer::new(
//!     DrawerConfig::default(),
//!     DrawerSlots::content("settings"),
//!     FixedGeometry::new(800.0),
//!     (),
//! );
//! drawer.on_viewport_measured(800.0);
//! drawer.on_presented_changed(true);
//! assert_eq!(drawer.render_phase(), RenderPhase::WarmingUp);
//!
//! drawer.on_content_measured(320.0);
//! drawer.on_warm_up_complete();
//! assert_eq!(drawer.render_phase(), RenderPhase::Visible);
//! assert_eq!(drawer.state().visible_drawer_length(), 320.0);
//! ```

use drawer_animation::Clock;
use drawer_platform::{DragEvent, ScreenGeometry};

use crate::config::{DrawerConfig, DrawerSlots};
use crate::controller::DrawerController;
use crate::error::Result;
use crate::host::DrawerHost;
use crate::observer::{StateChange, SubscriptionId};
use crate::state::DrawerState;
use crate::transition::DrawerMove;
use crate::visuals::DrawerVisuals;

/// What the renderer should draw for the drawer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    /// Closed; only the parent view is drawn
    Hidden,
    /// Open for the first time; lay out the content invisibly to measure it
    WarmingUp,
    /// Draw the drawer with its overlay
    Visible,
}

/// A drawer attached to a host screen
pub struct Drawer<C = (), B = (), O = ()> {
    controller: DrawerController,
    config: DrawerConfig,
    slots: DrawerSlots<C, B, O>,
    warmed_up: bool,
}

impl<C, B, O> Drawer<C, B, O> {
    pub fn new<G, H>(config: DrawerConfig, slots: DrawerSlots<C, B, O>, geometry: G, host: H) -> Self
    where
        G: ScreenGeometry + 'static,
        H: DrawerHost + 'static,
    {
        let controller = DrawerController::new(geometry, host)
            .with_spring(config.spring)
            .with_padding(config.padding);

        Self {
            controller,
            config,
            slots,
            warmed_up: false,
        }
    }

    /// Like [`Drawer::new`], rejecting a config that fails [`DrawerConfig::validate`]
    pub fn try_new<G, H>(
        config: DrawerConfig,
        slots: DrawerSlots<C, B, O>,
        geometry: G,
        host: H,
    ) -> Result<Self>
    where
        G: ScreenGeometry + 'static,
        H: DrawerHost + 'static,
    {
        config.validate()?;
        Ok(Self::new(config, slots, geometry, host))
    }

    /// Use a different time source for deferred re-opens
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.controller = self.controller.with_clock(clock);
        self
    }

    pub fn state(&self) -> &DrawerState {
        self.controller.state()
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn slots(&self) -> &DrawerSlots<C, B, O> {
        &self.slots
    }

    pub fn controller(&self) -> &DrawerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawerController {
        &mut self.controller
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + 'static,
    {
        self.controller.subscribe(observer)
    }

    // =========================================================================
    // Host lifecycle
    // =========================================================================

    /// The host screen appeared
    ///
    /// A drawer that should already be presented opens after the deferred
    /// delay so the first layout pass can finish.
    pub fn on_appear(&mut self, is_presented: bool) {
        if is_presented {
            self.controller
                .schedule_deferred(self.config.deferred_delay_duration(), |controller| {
                    controller.set_open_requested(true)
                });
        }
        self.on_padding_changed(self.config.padding);
    }

    /// The host changed the far-edge padding
    pub fn on_padding_changed(&mut self, padding: f32) {
        self.config.padding = padding;
        if padding != self.controller.state().drawer_padding() {
            self.controller.update_drawer_padding(padding);
        }
    }

    /// The host's "is presented" flag changed
    pub fn on_presented_changed(&mut self, presented: bool) {
        self.controller.set_open_requested(presented);
    }

    /// First measurement of the hosting viewport
    pub fn on_viewport_measured(&mut self, height: f32) {
        self.controller.update_max_screen_length(height);
    }

    /// The hosting viewport changed height (rotation, keyboard, split view)
    ///
    /// An open drawer is closed instantly and re-opened once the new layout
    /// has settled, without telling the host it was ever closed.
    pub fn on_viewport_height_changed(&mut self, height: f32) {
        if self.controller.state().is_open() {
            tracing::debug!("Drawer: viewport resized to {} while open, re-opening", height);
            self.controller.set_open_with(false, false, false);
            self.controller
                .schedule_deferred(self.config.deferred_delay_duration(), |controller| {
                    controller.set_open_with(true, true, false)
                });
        }
        self.controller.update_max_screen_length(height);
    }

    /// The content was laid out at its natural size
    pub fn on_content_measured(&mut self, height: f32) {
        self.controller.update_full_content_length(height);
    }

    /// The invisible measuring pass finished
    ///
    /// Ignored unless the drawer is still open and measuring; a report that
    /// arrives after the host dismissed the drawer must not re-open it.
    pub fn on_warm_up_complete(&mut self) {
        if self.render_phase() != RenderPhase::WarmingUp {
            return;
        }
        self.controller.set_open_with(false, false, false);
        self.warmed_up = true;
        self.controller.set_open_with(true, true, false);
    }

    /// The drawer content was removed after its exit transition
    pub fn on_content_disappear(&mut self) {
        self.warmed_up = false;
        self.controller.notify_disappeared();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Forward the tracked drag translation; zero ends the drag
    pub fn on_drag_translation(&mut self, translation_y: f32) {
        self.on_drag(DragEvent::from_translation(translation_y));
    }

    pub fn on_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Changed { translation_y } => {
                self.controller.on_drag_delta(translation_y, self.config.direction)
            }
            DragEvent::Ended => self.controller.on_drag_ended(),
        }
    }

    /// Tapping the dimmed overlay dismisses an open drawer
    pub fn on_overlay_tap(&mut self) {
        if self.controller.state().is_open() {
            self.controller.set_open(false);
        }
    }

    /// Run a due deferred callback; call once per frame
    pub fn poll(&mut self) -> bool {
        self.controller.poll_deferred()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn render_phase(&self) -> RenderPhase {
        if !self.controller.state().is_open() {
            RenderPhase::Hidden
        } else if !self.warmed_up {
            RenderPhase::WarmingUp
        } else {
            RenderPhase::Visible
        }
    }

    pub fn visuals(&self) -> DrawerVisuals {
        DrawerVisuals::new(self.controller.state(), &self.config)
    }

    /// Off-screen endpoint of the entry/exit transition
    pub fn entry_move(&self) -> DrawerMove {
        let state = self.controller.state();
        DrawerMove::active(
            self.config.direction,
            state.visible_drawer_length(),
            state.is_full_screen(),
        )
    }

    /// Resting endpoint of the entry/exit transition
    pub fn resting_move(&self) -> DrawerMove {
        DrawerMove::identity(self.config.direction, self.controller.state().is_full_screen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::DrawerDirection;
    use crate::error::DrawerError;
    use crate::host::HostCallbacks;
    use drawer_animation::ManualClock;
    use drawer_platform::FixedGeometry;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn recording_host(log: &Rc<RefCell<Vec<String>>>) -> HostCallbacks {
        HostCallbacks::new()
            .on_close({
                let log = Rc::clone(log);
                move || log.borrow_mut().push("close".into())
            })
            .on_presented_changed({
                let log = Rc::clone(log);
                move |p| log.borrow_mut().push(format!("presented:{}", p))
            })
            .on_disappear({
                let log = Rc::clone(log);
                move || log.borrow_mut().push("disappear".into())
            })
    }

    fn drawer(config: DrawerConfig, log: &Rc<RefCell<Vec<String>>>, clock: &ManualClock) -> Drawer<&'static str> {
        Drawer::new(
            config,
            DrawerSlots::content("content"),
            FixedGeometry::new(800.0),
            recording_host(log),
        )
        .with_clock(clock.clone())
    }

    fn visible_drawer(log: &Rc<RefCell<Vec<String>>>, clock: &ManualClock) -> Drawer<&'static str> {
        let mut drawer = drawer(DrawerConfig::default(), log, clock);
        drawer.on_viewport_measured(800.0);
        drawer.on_presented_changed(true);
        drawer.on_content_measured(300.0);
        drawer.on_warm_up_complete();
        drawer
    }

    #[test]
    fn test_appear_presented_opens_after_delay() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::default(), &log, &clock);

        drawer.on_appear(true);
        assert!(!drawer.state().is_open());

        clock.advance(Duration::from_millis(299));
        assert!(!drawer.poll());
        clock.advance(Duration::from_millis(1));
        assert!(drawer.poll());
        assert!(drawer.state().is_open());
        assert_eq!(drawer.render_phase(), RenderPhase::WarmingUp);
    }

    #[test]
    fn test_appear_not_presented_schedules_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::default().padding(12.0), &log, &clock);

        drawer.on_appear(false);
        assert!(!drawer.controller().has_pending_deferred());
        assert_eq!(drawer.state().drawer_padding(), 12.0);
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let negative = Drawer::try_new(
            DrawerConfig::default().padding(-8.0),
            DrawerSlots::content(()),
            FixedGeometry::new(800.0),
            (),
        );
        assert!(matches!(negative, Err(DrawerError::InvalidPadding(p)) if p == -8.0));

        let zero_delay = Drawer::try_new(
            DrawerConfig::default().deferred_delay(Duration::ZERO),
            DrawerSlots::content(()),
            FixedGeometry::new(800.0),
            (),
        );
        assert!(matches!(zero_delay, Err(DrawerError::InvalidDelay)));

        let valid = Drawer::try_new(
            DrawerConfig::default().padding(34.0),
            DrawerSlots::content(()),
            FixedGeometry::new(800.0),
            (),
        );
        assert!(valid.is_ok_and(|drawer| drawer.state().drawer_padding() == 34.0));
    }

    #[test]
    fn test_padding_change_commits_only_when_different() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::default(), &log, &clock);
        let commits = Rc::new(RefCell::new(0));
        drawer.subscribe({
            let commits = Rc::clone(&commits);
            move |_| *commits.borrow_mut() += 1
        });

        drawer.on_padding_changed(0.0);
        assert_eq!(*commits.borrow(), 0);
        drawer.on_padding_changed(34.0);
        assert_eq!(*commits.borrow(), 1);
        assert_eq!(drawer.config().padding, 34.0);
    }

    #[test]
    fn test_warm_up_reopens_silently() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::default(), &log, &clock);
        drawer.on_viewport_measured(800.0);
        drawer.on_presented_changed(true);
        drawer.on_content_measured(300.0);

        let opens = Rc::new(RefCell::new(Vec::new()));
        drawer.subscribe({
            let opens = Rc::clone(&opens);
            move |c: &StateChange| opens.borrow_mut().push(c.current.is_open())
        });
        drawer.on_warm_up_complete();

        assert_eq!(*opens.borrow(), vec![false, true]);
        assert_eq!(drawer.render_phase(), RenderPhase::Visible);
        assert!(log.borrow().is_empty());

        // Already warm: nothing more happens
        drawer.on_warm_up_complete();
        assert_eq!(opens.borrow().len(), 2);
    }

    #[test]
    fn test_warm_up_after_dismiss_stays_closed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::default(), &log, &clock);
        drawer.on_viewport_measured(800.0);
        drawer.on_presented_changed(true);
        drawer.on_presented_changed(false);

        drawer.on_content_measured(300.0);
        drawer.on_warm_up_complete();

        assert!(!drawer.state().is_open());
        assert_eq!(drawer.render_phase(), RenderPhase::Hidden);
        assert_eq!(*log.borrow(), vec!["close", "presented:false"]);

        // The next presentation still measures first
        drawer.on_presented_changed(true);
        assert_eq!(drawer.render_phase(), RenderPhase::WarmingUp);
    }

    #[test]
    fn test_drag_translation_dismisses() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = visible_drawer(&log, &clock);

        // Default direction is Top: positive screen deltas move toward closed
        drawer.on_drag_translation(150.0);
        assert_eq!(drawer.state().drawer_offset(), -150.0);
        assert_eq!(drawer.visuals().drawer_translation, 150.0);

        drawer.on_drag_translation(0.0);
        assert!(!drawer.state().is_open());
        assert_eq!(drawer.render_phase(), RenderPhase::Hidden);
        assert_eq!(*log.borrow(), vec!["close", "presented:false"]);

        drawer.on_content_disappear();
        assert_eq!(log.borrow().last().map(String::as_str), Some("disappear"));
    }

    #[test]
    fn test_drag_respects_configured_direction() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::new(DrawerDirection::Bottom), &log, &clock);
        drawer.on_viewport_measured(800.0);
        drawer.on_content_measured(300.0);
        drawer.on_presented_changed(true);

        drawer.on_drag(DragEvent::Changed { translation_y: 150.0 });
        assert_eq!(drawer.state().drawer_offset(), 0.0);
        drawer.on_drag(DragEvent::Changed { translation_y: -50.0 });
        assert_eq!(drawer.state().drawer_offset(), -50.0);
        drawer.on_drag(DragEvent::Ended);
        assert!(drawer.state().is_open());
    }

    #[test]
    fn test_overlay_tap_closes_open_drawer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = visible_drawer(&log, &clock);

        drawer.on_overlay_tap();
        assert!(!drawer.state().is_open());
        drawer.on_overlay_tap();
        assert_eq!(*log.borrow(), vec!["close", "presented:false"]);
    }

    #[test]
    fn test_resize_while_open_reopens_without_host_close() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = visible_drawer(&log, &clock);

        drawer.on_viewport_height_changed(600.0);
        assert!(!drawer.state().is_open());
        assert_eq!(drawer.state().max_screen_length(), 600.0);

        clock.advance(Duration::from_millis(300));
        assert!(drawer.poll());
        assert!(drawer.state().is_open());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_resize_while_closed_only_measures() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let mut drawer = drawer(DrawerConfig::default(), &log, &clock);

        drawer.on_viewport_height_changed(640.0);
        assert_eq!(drawer.state().max_screen_length(), 640.0);
        assert!(!drawer.controller().has_pending_deferred());
    }

    #[test]
    fn test_entry_move_uses_visible_length() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let clock = ManualClock::new();
        let drawer = visible_drawer(&log, &clock);

        let entry = drawer.entry_move();
        assert_eq!(entry.drawer_offset, 300.0);
        // 800pt viewport with no insets is the whole screen
        assert!(entry.is_fullscreen);
        assert!(drawer.resting_move().allows_hit_testing());
        assert_eq!(drawer.slots().content, "content");
    }
}
