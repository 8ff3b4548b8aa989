//! # Inventory Dashboard demo
//!
//! Starts a dashboard over a generated catalog and walks through a typical session:
//! filtering, sorting, adding a product, then deleting it again after confirmation.
//!
//! ```bash
//! RUST_LOG=info cargo run -p inventory-dashboard
//! INVENTORY_CONFIG=dashboard.toml RUST_LOG=debug cargo run -p inventory-dashboard
//! ```

use inventory_dashboard::lifecycle::{DashboardConfig, DashboardSystem};
use inventory_dashboard::model::{Category, CategoryFilter, ProductDraft, SortField};
use rust_decimal::Decimal;
use store_framework::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = DashboardConfig::from_env()?;
    info!(?config, "Starting inventory dashboard");
    let system = DashboardSystem::new(&config);
    let client = &system.client;

    let span = tracing::info_span!("browsing");
    async {
        client.set_category(CategoryFilter::Only(Category::Electronics)).await?;
        client.set_in_stock_only(true).await?;
        client.sort_by(SortField::Price).await?;
        let state = client.sort_by(SortField::Price).await?;

        let window = state.page_window();
        info!(
            shown = state.current_page().len(),
            start = window.start_item,
            end = window.end_item,
            total = window.total_items,
            "Electronics in stock, most expensive first"
        );
        for product in state.current_page() {
            info!(
                id = %product.id,
                name = %product.name,
                price = %product.price,
                stock = product.stock_quantity
            );
        }
        client.clear_filters().await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("editing");
    let outcome = async {
        client.open_add_dialog().await?;
        let draft = ProductDraft {
            name: "Mechanical Keyboard".to_string(),
            category: Category::Electronics,
            stock_quantity: 12,
            price: Decimal::new(14999, 2),
            description: Some("Hot-swappable switches".to_string()),
        };
        client.submit_product_form(draft).await?;

        let state = client.state().await?;
        let Some(added) = state.products().first().cloned() else {
            return Ok(());
        };
        info!(id = %added.id, total = state.products().len(), "Product added");

        client.open_delete_confirm(added.id.clone()).await?;
        client.confirm_delete().await?;
        let stats = client.state().await?.stats();
        info!(
            total = stats.total,
            low_stock = stats.low_stock,
            out_of_stock = stats.out_of_stock,
            "Product deleted"
        );
        Ok::<_, inventory_dashboard::dashboard::DashboardError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = outcome {
        error!(error = %e, "Editing session failed");
    }

    system.shutdown().await?;
    info!("Dashboard demo completed");
    Ok(())
}
