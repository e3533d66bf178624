//! Shared observable state.
//!
//! A [`Store`] is a cloneable handle onto one optional value. Handles are
//! passed explicitly to the components that read or write them; every clone
//! sees the same value, and subscribers are woken on every write.

use std::sync::Arc;

use tokio::sync::watch;

use crate::types::{BidContext, GameState};

/// Store holding the active bid, if any.
pub type BidStore = Store<BidContext>;

/// Store holding the last fetched game state, if any.
pub type GameStore = Store<GameState>;

/// Cloneable handle onto a single optional value.
#[derive(Debug)]
pub struct Store<T> {
    tx: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Store<T> {
    /// Creates an unset store.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tx: Arc::new(watch::Sender::new(None)),
        }
    }

    /// Creates a store holding `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            tx: Arc::new(watch::Sender::new(Some(value))),
        }
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(Some(value));
    }

    /// Unsets the value and notifies subscribers.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Applies `f` to the value in place and notifies subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Option<T>),
    {
        self.tx.send_modify(f);
    }

    /// Returns true if a value is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Subscribes to changes made after this call.
    #[must_use]
    pub fn subscribe(&self) -> StoreSubscriber<T> {
        StoreSubscriber {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T: Clone> Store<T> {
    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.tx.borrow().clone()
    }
}

/// Receiving side of a [`Store`].
#[derive(Debug)]
pub struct StoreSubscriber<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> StoreSubscriber<T> {
    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.rx.borrow().clone()
    }

    /// Waits for the next write and returns the new value.
    ///
    /// Returns `None` once every handle to the store has been dropped.
    pub async fn changed(&mut self) -> Option<Option<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
