use chrono::Utc;
use inventory_dashboard::dashboard::DashboardError;
use inventory_dashboard::gateway::{GatewayCall, MockGateway};
use inventory_dashboard::lifecycle::{DashboardConfig, DashboardSystem};
use inventory_dashboard::model::{Category, Product, ProductDraft, ProductId};
use rust_decimal::Decimal;
use std::sync::Arc;

fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: Category::Food,
        stock_quantity: 20,
        price: Decimal::new(450, 2),
        description: Some("Fair trade".to_string()),
    }
}

fn catalog() -> Vec<Product> {
    ["Green Tea", "Black Tea", "Oolong"]
        .into_iter()
        .enumerate()
        .map(|(n, name)| {
            Product::from_draft(ProductId::new(format!("t{n}")), draft(name), Utc::now())
        })
        .collect()
}

fn start(gateway: &MockGateway) -> DashboardSystem {
    DashboardSystem::start(&DashboardConfig::default(), catalog(), Arc::new(gateway.clone()))
}

#[tokio::test]
async fn test_rejected_add_leaves_catalog_untouched() {
    let gateway = MockGateway::new();
    gateway.expect_create().return_err("Server unavailable");
    let system = start(&gateway);
    let client = &system.client;

    client.open_add_dialog().await.unwrap();
    let result = client.submit_product_form(draft("Matcha")).await;
    assert_eq!(result, Err(DashboardError::Gateway("Server unavailable".to_string())));

    let state = client.state().await.unwrap();
    assert_eq!(state.products().len(), 3);
    assert_eq!(state.error(), Some("Server unavailable"));
    assert!(!state.is_busy());
    assert!(!state.dialog().is_open());

    gateway.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_delete_keeps_product_and_selection() {
    let gateway = MockGateway::new();
    gateway.expect_delete().return_err("Product is referenced by an order");
    let system = start(&gateway);
    let client = &system.client;
    let id = ProductId::new("t1");

    client.toggle_selection(id.clone()).await.unwrap();
    client.open_delete_confirm(id.clone()).await.unwrap();
    let result = client.confirm_delete().await;
    assert!(matches!(result, Err(DashboardError::Gateway(_))));

    let state = client.state().await.unwrap();
    assert!(state.catalog().contains(&id));
    assert!(state.selection().contains(&id));
    assert!(!state.dialog().is_open());
    assert_eq!(state.error(), Some("Product is referenced by an order"));

    let state = client.dismiss_error().await.unwrap();
    assert_eq!(state.error(), None);

    gateway.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_next_mutation_clears_previous_error() {
    let gateway = MockGateway::new();
    gateway.expect_update().return_err("");
    gateway.expect_update().echo();
    let system = start(&gateway);
    let client = &system.client;
    let id = ProductId::new("t2");

    let result = client.update_product(id.clone(), draft("Oolong Reserve")).await;
    assert_eq!(result, Err(DashboardError::Gateway("Failed to update product".to_string())));
    assert_eq!(client.state().await.unwrap().error(), Some("Failed to update product"));

    let updated = client.update_product(id.clone(), draft("Oolong Reserve")).await.unwrap();
    assert_eq!(updated, id);
    let state = client.state().await.unwrap();
    assert_eq!(state.error(), None);
    assert_eq!(state.catalog().get(&id).map(|p| p.name.as_str()), Some("Oolong Reserve"));

    assert_eq!(
        gateway.calls(),
        vec![
            GatewayCall::Update(id.clone(), draft("Oolong Reserve")),
            GatewayCall::Update(id, draft("Oolong Reserve")),
        ]
    );
    gateway.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_batch_delete() {
    let gateway = MockGateway::new();
    gateway.expect_delete_many().return_err("Batch limit exceeded");
    let system = start(&gateway);
    let client = &system.client;

    client.select_all_on_page().await.unwrap();
    client.open_batch_delete_confirm().await.unwrap();
    let result = client.confirm_batch_delete().await;
    assert_eq!(result, Err(DashboardError::Gateway("Batch limit exceeded".to_string())));

    let state = client.state().await.unwrap();
    assert_eq!(state.products().len(), 3);
    assert_eq!(state.selection().len(), 3);
    assert!(!state.is_busy());

    gateway.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_form_keeps_dialog_open() {
    let gateway = MockGateway::new();
    let system = start(&gateway);
    let client = &system.client;

    client.open_add_dialog().await.unwrap();
    let mut invalid = draft("Chai");
    invalid.price = Decimal::ZERO;
    let result = client.submit_product_form(invalid).await;

    match result {
        Err(DashboardError::Validation(errors)) => assert_eq!(errors.errors().len(), 1),
        other => panic!("Expected validation error, got {other:?}"),
    }
    let state = client.state().await.unwrap();
    assert!(state.dialog().is_open());
    assert!(gateway.calls().is_empty());

    gateway.verify();
    system.shutdown().await.unwrap();
}
