use super::{GatewayError, PersistenceGateway, ProductUpdated};
use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::debug;

/// Artificial delay per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayLatency {
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub delete_many: Duration,
}

impl GatewayLatency {
    /// No delay at all.
    pub fn zero() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn uniform(delay: Duration) -> Self {
        Self {
            create: delay,
            update: delay,
            delete: delay,
            delete_many: delay,
        }
    }
}

impl Default for GatewayLatency {
    fn default() -> Self {
        Self {
            create: Duration::from_millis(500),
            update: Duration::from_millis(500),
            delete: Duration::from_millis(300),
            delete_many: Duration::from_millis(500),
        }
    }
}

/// Backend stand-in: waits for the configured latency, then succeeds.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    latency: GatewayLatency,
}

impl SimulatedGateway {
    pub fn new(latency: GatewayLatency) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PersistenceGateway for SimulatedGateway {
    async fn create(&self, draft: ProductDraft) -> Result<Product, GatewayError> {
        tokio::time::sleep(self.latency.create).await;
        let product = Product::from_draft(ProductId::generate(), draft, Utc::now());
        debug!(id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductUpdated, GatewayError> {
        tokio::time::sleep(self.latency.update).await;
        debug!(%id, "Updated product");
        Ok(ProductUpdated { id, draft })
    }

    async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError> {
        tokio::time::sleep(self.latency.delete).await;
        debug!(%id, "Deleted product");
        Ok(id)
    }

    async fn delete_many(&self, ids: Vec<ProductId>) -> Result<Vec<ProductId>, GatewayError> {
        tokio::time::sleep(self.latency.delete_many).await;
        debug!(count = ids.len(), "Deleted products");
        Ok(ids)
    }
}
