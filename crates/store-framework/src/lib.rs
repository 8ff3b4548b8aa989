//! # Store Framework
//!
//! Building blocks for owning an application state tree inside a single Tokio task and
//! driving it with messages. It is the **Actor Model** applied to a **reducer-style**
//! state container: one actor owns the state, every change arrives as a message, and
//! messages are handled strictly in arrival order.
//!
//! ## Why an actor around a reducer?
//!
//! - **Single owner**: the state is never shared mutably. Clients only ever see cloned
//!   snapshots.
//! - **Ordering**: a dispatched event is reduced and published before the next message
//!   is looked at, so derived data can never be observed half-updated.
//! - **Async effects**: commands may await external collaborators (a persistence
//!   gateway, a remote service). While a command is suspended the actor does not pick up
//!   new work, which gives "one mutation in flight" for free.
//! - **Observability of intermediate states**: commands publish snapshots through a
//!   [`Publisher`] while they run, so a subscriber can render a busy flag.
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`StoreState`]) - your state tree, its events and its commands
//! 2. **Runtime Layer** ([`StoreActor`]) - message processing and snapshot publication
//! 3. **Interface Layer** ([`StoreClient`], [`DomainClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_framework::{Publisher, StoreActor, StoreState};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! #[derive(Debug)]
//! enum CounterEvent {
//!     Add(i64),
//! }
//!
//! #[derive(Debug)]
//! enum CounterCommand {
//!     AddLater(i64),
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl StoreState for Counter {
//!     type Event = CounterEvent;
//!     type Command = CounterCommand;
//!     type Output = i64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn reduce(&mut self, event: CounterEvent) {
//!         match event {
//!             CounterEvent::Add(n) => self.value += n,
//!         }
//!     }
//!
//!     async fn execute(
//!         &mut self,
//!         command: CounterCommand,
//!         publisher: &Publisher<Self>,
//!         _ctx: &(),
//!     ) -> Result<i64, CounterError> {
//!         match command {
//!             CounterCommand::AddLater(n) => {
//!                 tokio::task::yield_now().await;
//!                 self.apply(CounterEvent::Add(n), publisher);
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::new(8, Counter::default());
//!     tokio::spawn(actor.run(()));
//!
//!     let state = client.dispatch(CounterEvent::Add(2)).await.unwrap();
//!     assert_eq!(state.value, 2);
//!
//!     let value = client.execute(CounterCommand::AddLater(3)).await.unwrap();
//!     assert_eq!(value, 5);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Collaborators are injected at **runtime** via [`StoreActor::run`], not at
//! construction time. The state type declares what it needs through
//! [`StoreState::Context`]; the orchestrator decides which implementation to hand over
//! (a simulated backend in the demo, a scripted mock in tests).
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations instead of running
//! a real actor. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod publisher;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::DomainClient;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use publisher::Publisher;
pub use state::StoreState;
