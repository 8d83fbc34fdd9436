//! Drawer Animation System
//!
//! Animation primitives shared by the drawer core and its renderers.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Animation Styles**: Each published state change says whether it animates
//! - **Animated Scalars**: Per-property springs a renderer ticks every frame
//! - **Deferred Timer**: Single-slot cancellable callback over an injectable clock

pub mod animated;
pub mod spring;
pub mod style;
pub mod timer;

pub use animated::AnimatedScalar;
pub use spring::{Spring, SpringConfig};
pub use style::AnimationStyle;
pub use timer::{Clock, DeferredTimer, ManualClock, SystemClock, TimerId};
