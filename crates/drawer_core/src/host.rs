//! Callbacks into the hosting screen

/// Outputs the drawer sends to its host
///
/// All methods default to no-ops so hosts implement only what they need.
pub trait DrawerHost {
    /// The drawer is about to close because of an internal action
    /// (drag dismissal, overlay tap). Fired before the state flips.
    fn on_close(&mut self) {}

    /// Keep the host's "is presented" flag in sync after an internal close
    fn update_presented(&mut self, _presented: bool) {}

    /// The drawer content left the screen after its exit transition
    fn on_disappear(&mut self) {}
}

/// Host that ignores every callback
impl DrawerHost for () {}

/// [`DrawerHost`] built from closures
#[derive(Default)]
pub struct HostCallbacks {
    on_close: Option<Box<dyn FnMut()>>,
    update_presented: Option<Box<dyn FnMut(bool)>>,
    on_disappear: Option<Box<dyn FnMut()>>,
}

impl HostCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the close handler
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Set the presented-flag updater
    pub fn on_presented_changed<F>(mut self, handler: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        self.update_presented = Some(Box::new(handler));
        self
    }

    /// Set the disappear handler
    pub fn on_disappear<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_disappear = Some(Box::new(handler));
        self
    }
}

impl DrawerHost for HostCallbacks {
    fn on_close(&mut self) {
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }

    fn update_presented(&mut self, presented: bool) {
        if let Some(handler) = self.update_presented.as_mut() {
            handler(presented);
        }
    }

    fn on_disappear(&mut self) {
        if let Some(handler) = self.on_disappear.as_mut() {
            handler();
        }
    }
}
