//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real [`StoreClient<S>`] whose requests are answered from
//! a queue of expectations instead of a running [`StoreActor`](crate::StoreActor). It is
//! the tool for testing code *around* a client (argument mapping, output decoding, error
//! mapping) without reducing any state.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockClient | Real StoreActor |
//! |---------|------------|-----------------|
//! | **State** | None, answers are scripted | Real reducer and commands |
//! | **Determinism** | Total | Subject to the scheduler and the context |
//! | **Error Injection** | `return_err` | Requires a failing context |
//! | **Use Case** | Client wrappers | The state itself, or the full system |
//!
//! ## Fluent expectations
//!
//! ```rust,ignore
//! let mut mock = MockClient::<DashboardState>::new(initial.clone());
//! mock.expect_execute().return_err(FrameworkError::StoreClosed);
//!
//! let client = DashboardClient::new(mock.client());
//! assert!(client.add_product(draft).await.is_err());
//! mock.verify();
//! ```
//!
//! ## Inspecting payloads
//!
//! When the test needs to look at what was sent, use [`create_mock_client`] and the
//! `expect_*` helper functions, which hand back the payload together with the responder.

use crate::{FrameworkError, StoreClient, StoreRequest, StoreState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client, in order.
enum Expectation<S: StoreState> {
    Dispatch {
        response: Result<S, FrameworkError>,
    },
    Execute {
        response: Result<S::Output, FrameworkError>,
    },
    Snapshot {
        response: Result<S, FrameworkError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<S: StoreState> {
    client: StoreClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> MockClient<S> {
    /// Creates a new mock with no expectations. `initial` seeds the snapshot channel.
    pub fn new(initial: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (updates_tx, updates) = watch::channel(initial);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            // Keeps the snapshot channel open for the lifetime of the mock.
            let _keep_alive = updates_tx;
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { respond_to, .. },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Execute { respond_to, .. },
                        Some(Expectation::Execute { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, updates),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<S, S> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Dispatch { response }
        })
    }

    /// Expects an `execute` request.
    pub fn expect_execute(&mut self) -> ExpectationBuilder<S, S::Output> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Execute { response }
        })
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<S, S> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Snapshot { response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<S: StoreState, T> {
    expectations: Expectations<S>,
    make: fn(Result<T, FrameworkError>) -> Expectation<S>,
}

impl<S: StoreState, T> ExpectationBuilder<S, T> {
    fn new(
        expectations: Expectations<S>,
        make: fn(Result<T, FrameworkError>) -> Expectation<S>,
    ) -> Self {
        Self { expectations, make }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.make)(response));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with the `expect_*` helpers, asserts on
/// the payload and answers through the returned responder.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
    initial: S,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (updates_tx, updates) = watch::channel(initial);
    // The sender half is dropped here, the receiver keeps returning the seed snapshot.
    drop(updates_tx);
    (StoreClient::new(sender, updates), receiver)
}

/// Helper to verify that the next message is a Dispatch request.
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Event, oneshot::Sender<Result<S, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Execute request.
pub async fn expect_execute<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Command, oneshot::Sender<Result<S::Output, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Execute {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}
