//! # Store Messages
//!
//! The request envelope exchanged between [`StoreClient`](crate::StoreClient) and
//! [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the store actor.
///
/// - **Dispatch**: reduce one [`StoreState::Event`] and answer with the new snapshot.
/// - **Execute**: run one [`StoreState::Command`] to completion and answer with its output.
/// - **Snapshot**: answer with the current state, unchanged.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Dispatch {
        event: S::Event,
        respond_to: Response<S>,
    },
    Execute {
        command: S::Command,
        respond_to: Response<S::Output>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}
