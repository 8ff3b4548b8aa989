//! # Persistence Gateway
//!
//! The async boundary every product mutation crosses before it reaches the catalog.
//! The dashboard only applies a change once the gateway has resolved it.
//!
//! - [`SimulatedGateway`]: sleeps, then succeeds. Stands in for a backend.
//! - [`MockGateway`]: scripted answers for tests, including rejections.

mod error;
pub mod mock;
mod simulated;

pub use error::GatewayError;
pub use mock::{GatewayCall, MockGateway};
pub use simulated::{GatewayLatency, SimulatedGateway};

use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;
use std::sync::Arc;

/// Result of a successful update: the id and the data to write into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdated {
    pub id: ProductId,
    pub draft: ProductDraft,
}

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persists a new product. The gateway assigns the id and both timestamps.
    async fn create(&self, draft: ProductDraft) -> Result<Product, GatewayError>;

    async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductUpdated, GatewayError>;

    async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError>;

    async fn delete_many(&self, ids: Vec<ProductId>) -> Result<Vec<ProductId>, GatewayError>;
}

/// The gateway handle injected into the dashboard actor.
pub type SharedGateway = Arc<dyn PersistenceGateway>;
