//! Dispatcher for middleware action dispatch
//!
//! When middleware (or a thunk) needs to dispatch follow-up actions, it uses the
//! Dispatcher. Dispatched values are queued and re-enter the full middleware
//! chain once the current dispatch has finished, so a handler never recurses
//! into the store while the store is borrowed.

use crate::action::Dispatchable;
use std::sync::mpsc::{self, Receiver, Sender};

/// Dispatcher for sending values through the middleware chain
pub struct Dispatcher<S> {
    tx: Sender<Dispatchable<S>>,
}

impl<S> Dispatcher<S> {
    /// Create a new dispatcher with the sending half of the store's queue
    pub fn new(tx: Sender<Dispatchable<S>>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher together with the receiving end of its queue
    pub fn channel() -> (Self, Receiver<Dispatchable<S>>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }

    /// Queue a value to be processed through the middleware chain
    pub fn dispatch(&self, value: impl Into<Dispatchable<S>>) {
        if let Err(e) = self.tx.send(value.into()) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_dispatch_queues_in_order() {
        let (dispatcher, rx) = Dispatcher::<()>::channel();
        dispatcher.dispatch(Action::new("foo"));
        dispatcher.clone().dispatch(Action::new("bar"));

        let kinds: Vec<String> = rx.try_iter().map(|value| value.describe()).collect();
        assert_eq!(kinds, vec!["foo", "bar"]);
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (dispatcher, rx) = Dispatcher::<()>::channel();
        drop(rx);
        dispatcher.dispatch(Action::new("foo"));
    }
}
