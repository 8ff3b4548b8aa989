use super::{DashboardError, DashboardEvent, DashboardState};
use crate::dialog::{DialogKind, DialogState};
use crate::gateway::{GatewayError, SharedGateway};
use crate::model::{Product, ProductDraft, ProductId};
use chrono::Utc;
use store_framework::{Publisher, StoreState};
use tracing::{debug, info, warn};

/// Mutations that go through the persistence gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    AddProduct(ProductDraft),
    UpdateProduct { id: ProductId, draft: ProductDraft },
    DeleteProduct(ProductId),
    /// An empty list resolves immediately without a gateway call.
    DeleteProducts(Vec<ProductId>),
    /// Deletes the target of the open delete confirmation, then closes it.
    ConfirmDelete,
    /// Deletes the whole selection, then closes the batch confirmation.
    ConfirmBatchDelete,
    /// Adds or updates depending on which product dialog is open.
    SubmitProductForm(ProductDraft),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Added(Product),
    Updated(ProductId),
    Removed(Vec<ProductId>),
    /// The command had nothing to act on.
    Nothing,
}

impl DashboardState {
    pub(crate) async fn run_command(
        &mut self,
        command: DashboardCommand,
        publisher: &Publisher<Self>,
        gateway: &SharedGateway,
    ) -> Result<CommandOutput, DashboardError> {
        match command {
            DashboardCommand::AddProduct(draft) => {
                self.add_product(draft, publisher, gateway).await
            }
            DashboardCommand::UpdateProduct { id, draft } => {
                self.update_product(id, draft, publisher, gateway).await
            }
            DashboardCommand::DeleteProduct(id) => {
                self.delete_product(id, publisher, gateway).await
            }
            DashboardCommand::DeleteProducts(ids) => {
                self.delete_products(ids, publisher, gateway).await
            }
            DashboardCommand::ConfirmDelete => {
                let Some(id) = self.dialog.delete_target().cloned() else {
                    debug!("No delete confirmation open");
                    return Ok(CommandOutput::Nothing);
                };
                let result = self.delete_product(id, publisher, gateway).await;
                self.apply(DashboardEvent::CloseDialog(DialogKind::ConfirmDelete), publisher);
                result
            }
            DashboardCommand::ConfirmBatchDelete => {
                if self.dialog.kind() != Some(DialogKind::ConfirmBatchDelete) {
                    debug!("No batch delete confirmation open");
                    return Ok(CommandOutput::Nothing);
                }
                let ids = self.selection.ids();
                let result = self.delete_products(ids, publisher, gateway).await;
                self.apply(
                    DashboardEvent::CloseDialog(DialogKind::ConfirmBatchDelete),
                    publisher,
                );
                result
            }
            DashboardCommand::SubmitProductForm(draft) => match self.dialog.clone() {
                DialogState::AddProduct => {
                    draft.validate()?;
                    let result = self.add_product(draft, publisher, gateway).await;
                    self.apply(DashboardEvent::CloseDialog(DialogKind::AddProduct), publisher);
                    result
                }
                DialogState::EditProduct(product) => {
                    draft.validate()?;
                    let result = self.update_product(product.id, draft, publisher, gateway).await;
                    self.apply(DashboardEvent::CloseDialog(DialogKind::EditProduct), publisher);
                    result
                }
                _ => {
                    debug!("No product form open");
                    Ok(CommandOutput::Nothing)
                }
            },
        }
    }

    async fn add_product(
        &mut self,
        draft: ProductDraft,
        publisher: &Publisher<Self>,
        gateway: &SharedGateway,
    ) -> Result<CommandOutput, DashboardError> {
        draft.validate()?;
        self.apply(DashboardEvent::MutationPending, publisher);
        match gateway.create(draft).await {
            Ok(product) if self.catalog.contains(&product.id) => {
                let error = DashboardError::DuplicateProduct(product.id);
                warn!(%error, "Gateway returned an existing product id");
                self.apply(DashboardEvent::MutationFailed(error.to_string()), publisher);
                Err(error)
            }
            Ok(product) => {
                info!(id = %product.id, name = %product.name, "Product added");
                self.apply(DashboardEvent::ProductAdded(product.clone()), publisher);
                Ok(CommandOutput::Added(product))
            }
            Err(e) => Err(self.reject(e, "Failed to add product", publisher)),
        }
    }

    async fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
        publisher: &Publisher<Self>,
        gateway: &SharedGateway,
    ) -> Result<CommandOutput, DashboardError> {
        draft.validate()?;
        self.apply(DashboardEvent::MutationPending, publisher);
        match gateway.update(id, draft).await {
            Ok(updated) => {
                info!(id = %updated.id, "Product updated");
                let id = updated.id.clone();
                self.apply(
                    DashboardEvent::ProductUpdated {
                        id: updated.id,
                        draft: updated.draft,
                        at: Utc::now(),
                    },
                    publisher,
                );
                Ok(CommandOutput::Updated(id))
            }
            Err(e) => Err(self.reject(e, "Failed to update product", publisher)),
        }
    }

    async fn delete_product(
        &mut self,
        id: ProductId,
        publisher: &Publisher<Self>,
        gateway: &SharedGateway,
    ) -> Result<CommandOutput, DashboardError> {
        self.apply(DashboardEvent::MutationPending, publisher);
        match gateway.delete(id).await {
            Ok(id) => {
                info!(%id, "Product deleted");
                self.apply(DashboardEvent::ProductsRemoved(vec![id.clone()]), publisher);
                Ok(CommandOutput::Removed(vec![id]))
            }
            Err(e) => Err(self.reject(e, "Failed to delete product", publisher)),
        }
    }

    async fn delete_products(
        &mut self,
        ids: Vec<ProductId>,
        publisher: &Publisher<Self>,
        gateway: &SharedGateway,
    ) -> Result<CommandOutput, DashboardError> {
        if ids.is_empty() {
            debug!("Nothing to delete");
            return Ok(CommandOutput::Removed(Vec::new()));
        }
        self.apply(DashboardEvent::MutationPending, publisher);
        match gateway.delete_many(ids).await {
            Ok(ids) => {
                info!(count = ids.len(), "Products deleted");
                self.apply(DashboardEvent::ProductsRemoved(ids.clone()), publisher);
                Ok(CommandOutput::Removed(ids))
            }
            Err(e) => Err(self.reject(e, "Failed to delete products", publisher)),
        }
    }

    /// Records a gateway rejection in the state and turns it into the caller's error.
    fn reject(
        &mut self,
        error: GatewayError,
        fallback: &str,
        publisher: &Publisher<Self>,
    ) -> DashboardError {
        let message = match error.message().trim() {
            "" => fallback.to_string(),
            _ => error.message().to_string(),
        };
        warn!(error = %message, "Gateway rejected mutation");
        self.apply(DashboardEvent::MutationFailed(message.clone()), publisher);
        DashboardError::Gateway(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayCall, MockGateway, PersistenceGateway, ProductUpdated};
    use crate::model::{Category, PageSize};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};
    use tokio::sync::watch;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: Category::Books,
            stock_quantity: 3,
            price: Decimal::new(1250, 2),
            description: None,
        }
    }

    fn setup() -> (DashboardState, Publisher<DashboardState>, MockGateway, SharedGateway) {
        let products = ["a", "b", "c"]
            .into_iter()
            .map(|id| {
                Product::from_draft(ProductId::new(id), draft(&format!("Book {id}")), Utc::now())
            })
            .collect();
        let state = DashboardState::new(products, PageSize::Ten);
        let (publisher, _updates) = Publisher::new(state.clone());
        let mock = MockGateway::new();
        let gateway: SharedGateway = Arc::new(mock.clone());
        (state, publisher, mock, gateway)
    }

    #[tokio::test]
    async fn test_blank_rejection_uses_fallback_message() {
        let (mut state, publisher, mock, gateway) = setup();
        mock.expect_delete_many().return_err("   ");

        let result = state
            .execute(
                DashboardCommand::DeleteProducts(vec![ProductId::new("a")]),
                &publisher,
                &gateway,
            )
            .await;

        assert_eq!(result, Err(DashboardError::Gateway("Failed to delete products".to_string())));
        assert_eq!(state.error(), Some("Failed to delete products"));
        assert!(!state.is_busy());
        assert_eq!(state.products().len(), 3);
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_gateway() {
        let (mut state, publisher, mock, gateway) = setup();
        state.reduce(DashboardEvent::OpenAddDialog);

        let result = state
            .execute(DashboardCommand::SubmitProductForm(draft("x")), &publisher, &gateway)
            .await;

        assert!(matches!(result, Err(DashboardError::Validation(_))));
        assert_eq!(state.dialog(), &DialogState::AddProduct);
        assert_eq!(state.error(), None);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch_skips_gateway_and_closes_dialog() {
        let (mut state, publisher, mock, gateway) = setup();
        state.reduce(DashboardEvent::OpenBatchDeleteConfirm);

        let result = state
            .execute(DashboardCommand::ConfirmBatchDelete, &publisher, &gateway)
            .await;

        assert_eq!(result, Ok(CommandOutput::Removed(Vec::new())));
        assert!(!state.dialog().is_open());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_without_open_dialog_does_nothing() {
        let (mut state, publisher, mock, gateway) = setup();
        state.reduce(DashboardEvent::OpenAddDialog);

        let result = state.execute(DashboardCommand::ConfirmDelete, &publisher, &gateway).await;
        assert_eq!(result, Ok(CommandOutput::Nothing));
        assert_eq!(state.dialog(), &DialogState::AddProduct);

        state.reduce(DashboardEvent::CloseAllDialogs);
        let result = state
            .execute(DashboardCommand::SubmitProductForm(draft("Atlas")), &publisher, &gateway)
            .await;
        assert_eq!(result, Ok(CommandOutput::Nothing));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_in_edit_dialog_updates_the_edited_product() {
        let (mut state, publisher, mock, gateway) = setup();
        mock.expect_update().echo();
        let target = state.catalog().get(&ProductId::new("b")).cloned().unwrap();
        state.reduce(DashboardEvent::OpenEditDialog(target));

        let result = state
            .execute(DashboardCommand::SubmitProductForm(draft("Atlas")), &publisher, &gateway)
            .await;

        assert_eq!(result, Ok(CommandOutput::Updated(ProductId::new("b"))));
        assert_eq!(mock.calls(), vec![GatewayCall::Update(ProductId::new("b"), draft("Atlas"))]);
        let updated = state.catalog().get(&ProductId::new("b")).unwrap();
        assert_eq!(updated.name, "Atlas");
        assert!(updated.updated_at >= updated.created_at);
        assert!(!state.dialog().is_open());
        mock.verify();
    }

    /// Forwards to a mock and records the busy flag subscribers saw during each call.
    struct BusyRecordingGateway {
        inner: MockGateway,
        updates: watch::Receiver<DashboardState>,
        seen_busy: Mutex<Vec<bool>>,
    }

    impl BusyRecordingGateway {
        fn record(&self) {
            let busy = self.updates.borrow().is_busy();
            self.seen_busy.lock().unwrap().push(busy);
        }
    }

    #[async_trait]
    impl PersistenceGateway for BusyRecordingGateway {
        async fn create(&self, draft: ProductDraft) -> Result<Product, GatewayError> {
            self.record();
            self.inner.create(draft).await
        }

        async fn update(
            &self,
            id: ProductId,
            draft: ProductDraft,
        ) -> Result<ProductUpdated, GatewayError> {
            self.record();
            self.inner.update(id, draft).await
        }

        async fn delete(&self, id: ProductId) -> Result<ProductId, GatewayError> {
            self.record();
            self.inner.delete(id).await
        }

        async fn delete_many(&self, ids: Vec<ProductId>) -> Result<Vec<ProductId>, GatewayError> {
            self.record();
            self.inner.delete_many(ids).await
        }
    }

    #[tokio::test]
    async fn test_subscribers_see_busy_during_gateway_call_then_settled() {
        let (mut state, publisher, mock, _) = setup();
        mock.expect_create().echo();
        let observer = Arc::new(BusyRecordingGateway {
            inner: mock.clone(),
            updates: publisher.subscribe(),
            seen_busy: Mutex::new(Vec::new()),
        });
        let gateway: SharedGateway = observer.clone();
        let mut updates = publisher.subscribe();

        state
            .execute(DashboardCommand::AddProduct(draft("Atlas")), &publisher, &gateway)
            .await
            .unwrap();

        assert_eq!(*observer.seen_busy.lock().unwrap(), vec![true]);
        let latest = updates.borrow_and_update().clone();
        assert!(!latest.is_busy());
        assert_eq!(latest.products().len(), 4);
        assert_eq!(latest.products()[0].name, "Atlas");
        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_id_from_gateway_is_reported_not_added() {
        let (mut state, publisher, mock, gateway) = setup();
        let existing = state.catalog().get(&ProductId::new("a")).cloned().unwrap();
        mock.expect_create().return_ok(existing);
        state.reduce(DashboardEvent::SetSelection(vec![ProductId::new("b")]));

        let result = state
            .execute(DashboardCommand::AddProduct(draft("Atlas")), &publisher, &gateway)
            .await;

        assert_eq!(result, Err(DashboardError::DuplicateProduct(ProductId::new("a"))));
        assert_eq!(state.error(), Some("Product a already exists"));
        assert_eq!(state.products().len(), 3);
        assert!(state.selection().contains(&ProductId::new("b")));
        assert!(!state.is_busy());
        mock.verify();
    }
}
