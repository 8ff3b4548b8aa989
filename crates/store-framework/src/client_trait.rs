//! # DomainClient Trait
//!
//! Common interface for state-specific clients: default `snapshot` and `dispatch`
//! methods built on top of a generic [`StoreClient`].
use crate::{FrameworkError, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for state-specific clients to inherit the standard store operations.
///
/// Implementors provide access to the inner [`StoreClient`] and a mapping from
/// [`FrameworkError`] into their own error type; `snapshot`, `dispatch` and `subscribe`
/// come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl DomainClient<DashboardState> for DashboardClient {
///     type Error = DashboardError;
///
///     fn inner(&self) -> &StoreClient<DashboardState> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         DashboardError::Communication(e.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait DomainClient<S: StoreState>: Send + Sync {
    /// The state-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state from the actor.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Reduce one event and return the resulting state.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: S::Event) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }

    /// Subscribe to published snapshots.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
