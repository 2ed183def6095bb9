//! # singularis_event - Synchronous Multicast Notifier
//!
//! A typed observer list:
//! - Listeners subscribe with a closure and get a [`SubscriberId`] back
//! - [`Notifier::broadcast`] calls every listener before it returns
//! - Delivery follows subscription order
//! - No queuing, filtering or coalescing: one broadcast, one call per listener
//!
//! The notifier is owned by whatever publishes through it. Because
//! broadcasting borrows the notifier mutably, a listener can never re-enter
//! its owner while the owner is mid-update.

use std::collections::BTreeMap;
use std::fmt;

/// Listener callback
pub type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Subscription handle returned by [`Notifier::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(pub u64);

/// Multicast channel for events of type `E`
pub struct Notifier<E> {
    /// Keyed by id, so iteration order is subscription order
    listeners: BTreeMap<SubscriberId, Listener<E>>,
    next_id: u64,
}

impl<E> Notifier<E> {
    /// Create a notifier with no listeners
    pub fn new() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Deliver an event to every listener, synchronously
    pub fn broadcast(&mut self, event: &E) {
        for listener in self.listeners.values_mut() {
            listener(event);
        }
    }

    /// Check whether an id is still subscribed
    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.listeners.contains_key(&id)
    }

    /// Number of listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{Listener, Notifier, SubscriberId};
}
