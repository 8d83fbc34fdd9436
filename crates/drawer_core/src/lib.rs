//! Drawer Core
//!
//! This crate provides the model behind a draggable drawer overlay: a panel
//! that slides in from the top or bottom edge over a dimmed parent view,
//! follows the finger while dragged, and snaps open or closed on release.
//!
//! - **State**: [`DrawerState`], an immutable value updated through [`DrawerPatch`]
//! - **Controller**: [`DrawerController`], the single commit point for every change
//! - **Gesture Handoff**: Overflowing content scrolls first, then the drawer moves
//! - **Presenter**: [`Drawer`], host lifecycle (warm-up, resize re-open, overlay tap)
//! - **Visuals**: [`DrawerVisuals`] and [`AnimatedVisuals`] for renderers
//! - **Config**: [`DrawerConfig`], buildable in code or loaded from TOML
//!
//! # Example
//!
//! ```rust
//! use drawer_core::{DrawerConfig, DrawerController, DrawerDirection};
//! use drawer_platform::FixedGeometry;
//!
//! let config = DrawerConfig::new(DrawerDirection::Bottom);
//! let mut controller = DrawerController::new(FixedGeometry::new(800.0), ())
//!     .with_spring(config.spring);
//!
//! controller.update_max_screen_length(800.0);
//! controller.update_full_content_length(240.0);
//! controller.set_open_requested(true);
//!
//! controller.on_drag_delta(-120.0, config.direction);
//! controller.on_drag_ended();
//! assert!(!controller.state().is_open());
//! ```

pub mod color;
pub mod config;
pub mod controller;
pub mod direction;
pub mod drawer;
pub mod error;
pub mod host;
pub mod observer;
pub mod state;
pub mod transition;
pub mod visuals;

pub use color::Color;
pub use config::{DrawerConfig, DrawerSlots, DEFAULT_DEFERRED_DELAY_MS};
pub use controller::{DeferredCallback, DrawerController};
pub use direction::{DrawerDirection, VerticalEdge};
pub use drawer::{Drawer, RenderPhase};
pub use error::{DrawerError, Result};
pub use host::{DrawerHost, HostCallbacks};
pub use observer::{Observers, StateChange, SubscriptionId};
pub use state::{DrawerPatch, DrawerState, OVERSCROLL_TOLERANCE, SNAP_CLOSE_DIVISOR};
pub use transition::DrawerMove;
pub use visuals::{AnimatedVisuals, DrawerVisuals};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DrawerConfig, DrawerSlots};
    pub use crate::controller::DrawerController;
    pub use crate::direction::DrawerDirection;
    pub use crate::drawer::{Drawer, RenderPhase};
    pub use crate::host::{DrawerHost, HostCallbacks};
    pub use crate::observer::StateChange;
    pub use crate::state::DrawerState;
    pub use crate::visuals::{AnimatedVisuals, DrawerVisuals};
}
