//! Drawer controller
//!
//! Owns the live [`DrawerState`] and turns measurements, drag ticks and
//! open/close commands into new states. Every operation builds a candidate
//! state and hands it to a single commit step, which notifies the host on
//! internal closes and publishes the change to observers.
//!
//! # Threading
//!
//! The controller is `!Send`: callbacks are plain `FnMut` closures and commits
//! are not synchronised. Keep each controller on the thread (or local task)
//! that owns the drawer, and poll deferred callbacks from that same thread.
//!
//! # Example
//!
//! ```
//! use drawer_core::{DrawerController, DrawerDirection};
//! use drawer_platform::FixedGeometry;
//!
//! let mut controller = DrawerController::new(FixedGeometry::new(800.0), ());
//! controller.update_max_screen_length(800.0);
//! controller.update_full_content_length(400.0);
//! controller.set_open_requested(true);
//!
//! // Drag a top drawer 90pt toward the bottom edge and let go
//! controller.on_drag_delta(90.0, DrawerDirection::Top);
//! assert_eq!(controller.state().drawer_offset(), -90.0);
//! controller.on_drag_ended();
//! assert_eq!(controller.state().drawer_offset(), 0.0);
//! assert!(controller.state().is_open());
//! ```

use std::time::Duration;

use drawer_animation::{AnimationStyle, Clock, DeferredTimer, SpringConfig, SystemClock};
use drawer_platform::ScreenGeometry;

use crate::direction::DrawerDirection;
use crate::host::DrawerHost;
use crate::observer::{Observers, StateChange, SubscriptionId};
use crate::state::{DrawerPatch, DrawerState};

/// Callback run by the deferred timer with access to the controller
pub type DeferredCallback = Box<dyn FnOnce(&mut DrawerController)>;

/// Drives a single drawer instance
pub struct DrawerController {
    state: DrawerState,
    geometry: Box<dyn ScreenGeometry>,
    host: Box<dyn DrawerHost>,
    observers: Observers,
    timer: DeferredTimer<DeferredCallback>,
    spring: SpringConfig,
}

impl DrawerController {
    /// Create a controller for a newly mounted drawer
    pub fn new<G, H>(geometry: G, host: H) -> Self
    where
        G: ScreenGeometry + 'static,
        H: DrawerHost + 'static,
    {
        Self {
            state: DrawerState::new(),
            geometry: Box::new(geometry),
            host: Box::new(host),
            observers: Observers::new(),
            timer: DeferredTimer::new(SystemClock::new()),
            spring: SpringConfig::drawer(),
        }
    }

    /// Use a different time source for deferred callbacks
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.timer = DeferredTimer::new(clock);
        self
    }

    /// Spring used for animated commits
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Initial padding, applied before any observer exists
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.state = self.state.copy_with(DrawerPatch::new().drawer_padding(padding));
        self
    }

    /// Current state
    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    /// Observe committed state changes
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // =========================================================================
    // Measurements
    // =========================================================================

    /// The hosting viewport was measured
    ///
    /// The drawer is fullscreen when the space left by the safe-area insets
    /// equals the maximum drawer length for this height.
    pub fn update_max_screen_length(&mut self, height: f32) {
        let max_drawer_length = height - self.state.drawer_padding();
        let is_full_screen = self
            .geometry
            .available_height()
            .is_some_and(|available| available == max_drawer_length);

        let candidate = self.state.copy_with(
            DrawerPatch::new()
                .max_screen_length(height)
                .is_full_screen(is_full_screen),
        );
        self.commit(candidate, self.animated(true), true);
    }

    /// The drawer content was measured at its natural size
    pub fn update_full_content_length(&mut self, height: f32) {
        let candidate = self
            .state
            .copy_with(DrawerPatch::new().full_content_length(height));
        self.commit(candidate, self.animated(true), true);
    }

    /// Change the far-edge padding without animating
    pub fn update_drawer_padding(&mut self, padding: f32) {
        let candidate = self
            .state
            .copy_with(DrawerPatch::new().drawer_padding(padding));
        self.commit(candidate, AnimationStyle::None, true);
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    /// Host-driven show/hide; ignored when already in the requested mode
    pub fn set_open_requested(&mut self, open: bool) {
        if open != self.state.is_open() {
            self.set_open(open);
        }
    }

    /// Open or close with animation, notifying the host on close
    pub fn set_open(&mut self, open: bool) {
        self.set_open_with(open, true, true);
    }

    /// Open or close
    ///
    /// Closing scrolls the content back to the top.
    pub fn set_open_with(&mut self, open: bool, animated: bool, notify_host: bool) {
        let scroll = if open {
            self.state.scroll_content_offset()
        } else {
            0.0
        };
        let candidate = self
            .state
            .copy_with(DrawerPatch::new().is_open(open).scroll_content_offset(scroll));
        self.commit(candidate, self.animated(animated), notify_host);
    }

    // =========================================================================
    // Gesture
    // =========================================================================

    /// Track one movement tick of an active drag
    ///
    /// `delta` is the gesture's translation from where it started. When the
    /// content fits, only the drawer offset moves. When it overflows, the
    /// drag scrolls the content until it leaves the tolerance band, then
    /// moves the drawer from the point where scrolling stopped.
    pub fn on_drag_delta(&mut self, delta: f32, direction: DrawerDirection) {
        let state = self.state;
        let signed_delta = direction.vertical_offset(delta);

        let candidate = if !state.content_overflows() {
            Self::offset_toward_closed(state, signed_delta)
        } else {
            let candidate_scroll = state.initial_offset() + signed_delta;
            if state.accepts_content_scroll(candidate_scroll) {
                state.copy_with(
                    DrawerPatch::new()
                        .last_scroll_drag(delta)
                        .scroll_content_offset(candidate_scroll),
                )
            } else {
                let drawer_delta = direction.vertical_offset(delta - state.last_scroll_drag());
                Self::offset_toward_closed(state, drawer_delta)
            }
        };

        self.commit(candidate, AnimationStyle::None, true);
    }

    /// The finger lifted: snap open or closed and settle the content scroll
    pub fn on_drag_ended(&mut self) {
        let state = self.state;

        let is_open = state.drawer_offset() > state.snap_close_threshold();
        let mut settled = state.copy_with(DrawerPatch::new().drawer_offset(0.0).is_open(is_open));

        // Pull stretched content back inside its scroll range
        let max_scroll = settled.max_scroll_offset();
        if settled.scroll_content_offset() > max_scroll {
            settled = settled.copy_with(
                DrawerPatch::new()
                    .last_scroll_drag(0.0)
                    .scroll_content_offset(max_scroll),
            );
        }
        if settled.scroll_content_offset() < 0.0 {
            settled = settled.copy_with(
                DrawerPatch::new()
                    .last_scroll_drag(0.0)
                    .scroll_content_offset(0.0),
            );
        }

        // Baseline for the next gesture
        settled = settled.copy_with(DrawerPatch::new().initial_offset(settled.scroll_content_offset()));

        self.commit(settled, self.animated(true), true);
    }

    /// Apply a drawer offset only when it points toward closed
    fn offset_toward_closed(state: DrawerState, offset: f32) -> DrawerState {
        if offset < 0.0 {
            state.copy_with(DrawerPatch::new().drawer_offset(offset))
        } else {
            state
        }
    }

    // =========================================================================
    // Deferred callbacks
    // =========================================================================

    /// Run `callback` once after `delay`, replacing any pending callback
    pub fn schedule_deferred<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce(&mut DrawerController) + 'static,
    {
        self.timer.schedule(delay, Box::new(callback));
    }

    /// Drop the pending callback, if any
    pub fn cancel_deferred(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn has_pending_deferred(&self) -> bool {
        self.timer.is_pending()
    }

    /// Run the pending callback if it is due; returns true if one ran
    pub fn poll_deferred(&mut self) -> bool {
        match self.timer.poll() {
            Some(callback) => {
                callback(self);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Host
    // =========================================================================

    /// Tell the host the drawer content has left the screen
    pub fn notify_disappeared(&mut self) {
        self.host.on_disappear();
    }

    fn animated(&self, animated: bool) -> AnimationStyle {
        AnimationStyle::animated(animated, self.spring)
    }

    fn commit(&mut self, candidate: DrawerState, animation: AnimationStyle, notify_host: bool) {
        if self.state.is_open() && !candidate.is_open() && notify_host {
            tracing::debug!("DrawerController: closing, notifying host");
            self.host.on_close();
            self.host.update_presented(false);
        }

        if candidate == self.state {
            return;
        }

        let previous = std::mem::replace(&mut self.state, candidate);
        tracing::trace!(
            "DrawerController: commit open={} offset={} scroll={} animated={}",
            candidate.is_open(),
            candidate.drawer_offset(),
            candidate.scroll_content_offset(),
            animation.is_animated()
        );
        self.observers.notify(&StateChange {
            previous,
            current: candidate,
            animation,
        });
    }
}
