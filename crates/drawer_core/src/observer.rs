//! State change subscriptions
//!
//! Renderers subscribe to the controller and receive every committed
//! state together with the animation it should be presented with.

use drawer_animation::AnimationStyle;
use slotmap::{new_key_type, SlotMap};

use crate::state::DrawerState;

new_key_type! {
    /// Handle returned by `subscribe`, used to unsubscribe
    pub struct SubscriptionId;
}

/// A committed state change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateChange {
    pub previous: DrawerState,
    pub current: DrawerState,
    pub animation: AnimationStyle,
}

type Observer = Box<dyn FnMut(&StateChange)>;

/// Registry of state observers
#[derive(Default)]
pub struct Observers {
    observers: SlotMap<SubscriptionId, Observer>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + 'static,
    {
        self.observers.insert(Box::new(observer))
    }

    /// Remove an observer; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, change: &StateChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DrawerPatch;
    use std::cell::Cell;
    use std::rc::Rc;

    fn change() -> StateChange {
        let previous = DrawerState::new();
        StateChange {
            previous,
            current: previous.copy_with(DrawerPatch::new().is_open(true)),
            animation: AnimationStyle::None,
        }
    }

    #[test]
    fn test_notify_and_unsubscribe() {
        let mut observers = Observers::new();
        let calls = Rc::new(Cell::new(0));

        let id = observers.subscribe({
            let calls = Rc::clone(&calls);
            move |c: &StateChange| {
                assert!(c.current.is_open());
                calls.set(calls.get() + 1);
            }
        });
        assert_eq!(observers.len(), 1);

        observers.notify(&change());
        assert_eq!(calls.get(), 1);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&change());
        assert_eq!(calls.get(), 1);
        assert!(observers.is_empty());
    }
}
