use super::DashboardConfig;
use crate::clients::DashboardClient;
use crate::dashboard::DashboardState;
use crate::gateway::{SharedGateway, SimulatedGateway};
use crate::model::Product;
use crate::seed;
use std::sync::Arc;
use store_framework::StoreActor;
use tracing::{error, info};

/// Runtime orchestrator for the dashboard.
///
/// Owns the task running the dashboard actor and hands out the client used to drive it.
///
/// # Example
///
/// ```ignore
/// let system = DashboardSystem::new(&DashboardConfig::default());
///
/// system.client.search("coffee").await?;
/// let view = system.client.view().await?;
///
/// system.shutdown().await?;
/// ```
pub struct DashboardSystem {
    pub client: DashboardClient,

    /// Actor task handle, awaited on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl DashboardSystem {
    /// Starts a dashboard over a generated sample catalog, backed by the simulated gateway.
    pub fn new(config: &DashboardConfig) -> Self {
        let products = seed::seeded_catalog(config.seed_products, config.rng_seed);
        let gateway = SimulatedGateway::new(config.gateway_latency());
        Self::start(config, products, Arc::new(gateway))
    }

    /// Starts a dashboard over `products` with an explicit gateway.
    pub fn start(config: &DashboardConfig, products: Vec<Product>, gateway: SharedGateway) -> Self {
        let initial = DashboardState::new(products, config.page_size);
        info!(
            products = initial.products().len(),
            page_size = config.page_size.get(),
            "Starting dashboard"
        );

        let (actor, store_client) = StoreActor::new(config.channel_buffer, initial);
        let handle = tokio::spawn(actor.run(gateway));

        Self {
            client: DashboardClient::new(store_client),
            handle,
        }
    }

    /// Drops the client and waits for the actor to drain its queue and stop.
    ///
    /// Clones of the client held elsewhere keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Dashboard task failed: {:?}", e);
            return Err(format!("Dashboard task failed: {:?}", e));
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}
