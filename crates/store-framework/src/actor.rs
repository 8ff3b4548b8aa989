//! # Store Actor
//!
//! The "server" half of the framework. A `StoreActor` owns one state tree and the
//! receiving end of its request channel, and processes requests sequentially.

use crate::client::StoreClient;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::publisher::Publisher;
use crate::state::StoreState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a state tree.
///
/// # Concurrency Model
/// Requests are handled one at a time inside [`StoreActor::run`]. A command that awaits
/// its context keeps the loop busy until it resolves, so no lock is needed on `state`
/// and no two commands ever interleave. Requests sent meanwhile wait in the channel.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the actor and a client.
/// 2.  **Wire**: pass collaborators into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// # Operations
///
/// * **Dispatch**: reduce the event, publish, answer with a clone of the new state.
/// * **Execute**: run the command (which publishes its own intermediate snapshots),
///   publish the final state, answer with the output or the boxed command error.
/// * **Snapshot**: answer with a clone of the current state.
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: Publisher<S>,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a new `StoreActor` seeded with `initial` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `initial` - The state the actor starts from. It is also the first snapshot seen
    ///   by subscribers.
    pub fn new(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, updates) = Publisher::new(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StoreClient::new(sender, updates);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every command. Collaborators can therefore be built after
    /// the actor itself, and swapped for mocks in tests.
    pub async fn run(mut self, context: S::Context) {
        // Keep only the type name (e.g. "DashboardState")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        let mut processed: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            processed += 1;
            match msg {
                StoreRequest::Dispatch { event, respond_to } => {
                    debug!(state_type, ?event, "Dispatch");
                    self.state.apply(event, &self.publisher);
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Execute {
                    command,
                    respond_to,
                } => {
                    debug!(state_type, ?command, "Execute");
                    let result = self
                        .state
                        .execute(command, &self.publisher, &context)
                        .await
                        .map_err(|e| FrameworkError::CommandFailed(Box::new(e)));
                    match &result {
                        Ok(output) => {
                            debug!(state_type, ?output, "Command output");
                            info!(state_type, "Command ok");
                        }
                        Err(e) => warn!(state_type, error = %e, "Command failed"),
                    }
                    self.publisher.publish(&self.state);
                    let _ = respond_to.send(result);
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, processed, "Shutdown");
    }
}
