//! Redraw subscriptions.
//!
//! Callbacks carry no payload; they only say "state changed". They run
//! synchronously, in subscription order, after every board mutation.

use serde::{Deserialize, Serialize};

/// Handle returned by `GameSession::observe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

/// Ordered list of subscribed callbacks.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u32,
    callbacks: Vec<(ObserverId, Box<dyn FnMut()>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Box<dyn FnMut()>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    /// Drop a subscription. Returns false for an unknown ID.
    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&mut self) {
        for (_, callback) in &mut self.callbacks {
            callback();
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("subscribed", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_notify_and_unsubscribe() {
        let hits = Rc::new(Cell::new(0));
        let mut observers = Observers::default();

        let counter = Rc::clone(&hits);
        let first = observers.subscribe(Box::new(move || counter.set(counter.get() + 1)));
        let counter = Rc::clone(&hits);
        let second = observers.subscribe(Box::new(move || counter.set(counter.get() + 10)));
        assert_ne!(first, second);

        observers.notify();
        assert_eq!(hits.get(), 11);

        assert!(observers.unsubscribe(second));
        assert!(!observers.unsubscribe(second));
        observers.notify();
        assert_eq!(hits.get(), 12);
    }
}
