//! Deferred callbacks
//!
//! The drawer occasionally needs to act after a layout pass has settled,
//! e.g. re-opening after the viewport was resized. [`DeferredTimer`] holds at
//! most one pending entry: scheduling replaces whatever was pending.
//!
//! Nothing here spawns threads. The owner polls the timer from its own
//! event loop, so due entries fire on the thread that owns the drawer.
//! Time comes from a [`Clock`], which tests replace with [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced by hand
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the timer.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Identifier of a scheduled entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Pending<T> {
    id: TimerId,
    due: Duration,
    payload: T,
}

/// Single-slot cancellable timer
pub struct DeferredTimer<T> {
    clock: Box<dyn Clock>,
    pending: Option<Pending<T>>,
    next_id: u64,
}

impl<T> DeferredTimer<T> {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            pending: None,
            next_id: 0,
        }
    }

    /// Schedule `payload` to become due after `delay`, cancelling any pending entry
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerId {
        if let Some(previous) = self.pending.take() {
            tracing::debug!("DeferredTimer: replacing pending {:?}", previous.id);
        }

        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            due: self.clock.now().saturating_add(delay),
            payload,
        });
        tracing::debug!("DeferredTimer: scheduled {:?} in {:?}", id, delay);
        id
    }

    /// Drop the pending entry; returns true if there was one
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                tracing::debug!("DeferredTimer: cancelled {:?}", pending.id);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Identifier of the pending entry, if any
    pub fn pending_id(&self) -> Option<TimerId> {
        self.pending.as_ref().map(|p| p.id)
    }

    /// Take the pending payload if its delay has elapsed
    pub fn poll(&mut self) -> Option<T> {
        let due = self.pending.as_ref()?.due;
        if self.clock.now() < due {
            return None;
        }

        let pending = self.pending.take()?;
        tracing::debug!("DeferredTimer: firing {:?}", pending.id);
        Some(pending.payload)
    }
}
