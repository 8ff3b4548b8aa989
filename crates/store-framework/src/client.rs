//! # Generic Client
//!
//! The cloneable handle used to talk to a [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `StoreActor`.
///
/// Holds the request sender and a snapshot receiver, so cloning is cheap. Every request
/// method returns `Result<_, FrameworkError>`; a closed actor surfaces as
/// [`FrameworkError::StoreClosed`].
#[derive(Clone)]
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    updates: watch::Receiver<S>,
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, updates: watch::Receiver<S>) -> Self {
        Self { sender, updates }
    }

    pub async fn dispatch(&self, event: S::Event) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    pub async fn execute(&self, command: S::Command) -> Result<S::Output, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Execute {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)?
    }

    /// A fresh receiver of published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.updates.clone()
    }

    /// The most recently published snapshot, without a round trip to the actor.
    pub fn latest(&self) -> S {
        self.updates.borrow().clone()
    }
}
