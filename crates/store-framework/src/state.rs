//! # StoreState Trait
//!
//! The contract a state tree implements to be owned by a [`StoreActor`](crate::StoreActor).
//!
//! A state type declares two vocabularies:
//!
//! - **Events** are synchronous and pure: [`StoreState::reduce`] folds one event into the
//!   state. Anything that must be recomputed after a change (derived lists, clamped
//!   indices) is recomputed inside `reduce`.
//! - **Commands** are asynchronous: [`StoreState::execute`] may await collaborators taken
//!   from the injected [`StoreState::Context`] and dispatches events to itself through
//!   [`StoreState::apply`] as it goes.

use crate::publisher::Publisher;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any state tree must implement to be managed by `StoreActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so that commands can await external calls. The `Context`
/// associated type is handed to every command and is supplied late, through
/// [`StoreActor::run`](crate::StoreActor::run).
#[async_trait]
pub trait StoreState: Clone + Send + Sync + 'static {
    /// Synchronous state transitions.
    type Event: Send + Sync + Debug;

    /// Asynchronous operations that may suspend on the context.
    type Command: Send + Sync + Debug;

    /// The result type returned by commands.
    type Output: Send + Sync + Debug;

    /// The runtime collaborators injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type returned by commands.
    ///
    /// One error enum per state type rather than one per command keeps the client side
    /// to a single `match`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fold a single event into the state.
    fn reduce(&mut self, event: Self::Event);

    /// Reduce an event and publish the resulting snapshot to subscribers.
    fn apply(&mut self, event: Self::Event, publisher: &Publisher<Self>) {
        self.reduce(event);
        publisher.publish(self);
    }

    /// Run an asynchronous command against the state.
    async fn execute(
        &mut self,
        command: Self::Command,
        publisher: &Publisher<Self>,
        ctx: &Self::Context,
    ) -> Result<Self::Output, Self::Error>;
}
