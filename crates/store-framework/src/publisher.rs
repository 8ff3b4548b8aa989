//! Snapshot publication.
//!
//! Every state change the actor makes is pushed into a `watch` channel. Subscribers only
//! ever see the latest snapshot; intermediate values may be skipped by slow readers.

use tokio::sync::watch;

/// Write half of the snapshot channel, owned by the actor.
pub struct Publisher<S> {
    sender: watch::Sender<S>,
}

impl<S: Clone> Publisher<S> {
    /// Creates a publisher seeded with `initial` and the first subscriber.
    pub fn new(initial: S) -> (Self, watch::Receiver<S>) {
        let (sender, receiver) = watch::channel(initial);
        (Self { sender }, receiver)
    }

    /// Replaces the published snapshot. Never fails, even without subscribers.
    pub fn publish(&self, state: &S) {
        self.sender.send_replace(state.clone());
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }
}
