//! # Dashboard Client
//!
//! Provides a high-level API for driving the dashboard actor.
//! It wraps a `StoreClient<DashboardState>` and exposes one method per user intent.
use crate::dashboard::{
    CommandOutput, DashboardCommand, DashboardError, DashboardEvent, DashboardState, DashboardView,
};
use crate::dialog::DialogKind;
use crate::model::{
    CategoryFilter, FilterPatch, PageSize, Product, ProductDraft, ProductId, SortField, SortState,
};
use async_trait::async_trait;
use store_framework::{DomainClient, FrameworkError, StoreClient};
use tracing::{debug, instrument};

/// Client for interacting with the dashboard actor.
///
/// Event methods answer with the state after the event. Command methods answer with
/// what the gateway produced; a rejection comes back as [`DashboardError::Gateway`]
/// and is also visible in [`DashboardState::error`].
#[derive(Clone)]
pub struct DashboardClient {
    inner: StoreClient<DashboardState>,
}

impl DashboardClient {
    pub fn new(inner: StoreClient<DashboardState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DomainClient<DashboardState> for DashboardClient {
    type Error = DashboardError;

    fn inner(&self) -> &StoreClient<DashboardState> {
        &self.inner
    }

    /// Recovers the dashboard's own error from a failed command.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::CommandFailed(source) => match source.downcast::<DashboardError>() {
                Ok(error) => *error,
                Err(other) => DashboardError::Communication(other.to_string()),
            },
            other => DashboardError::Communication(other.to_string()),
        }
    }
}

impl DashboardClient {
    // Reads

    pub async fn state(&self) -> Result<DashboardState, DashboardError> {
        self.snapshot().await
    }

    pub async fn view(&self) -> Result<DashboardView, DashboardError> {
        let state = self.snapshot().await?;
        Ok(DashboardView::from(&state))
    }

    // Filters, sort, pagination

    #[instrument(skip(self))]
    pub async fn set_category(
        &self,
        category: CategoryFilter,
    ) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SetFilters(FilterPatch::category(category)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_in_stock_only(&self, enabled: bool) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SetFilters(FilterPatch::in_stock_only(enabled)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SetFilters(FilterPatch::search(term)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_filters(&self, patch: FilterPatch) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SetFilters(patch)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_filters(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::ClearFilters).await
    }

    /// Column header click.
    #[instrument(skip(self))]
    pub async fn sort_by(&self, field: SortField) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SortBy(field)).await
    }

    #[instrument(skip(self))]
    pub async fn set_sort(&self, sort: SortState) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SetSort(sort)).await
    }

    #[instrument(skip(self))]
    pub async fn go_to_page(&self, page: usize) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::GoToPage(page)).await
    }

    #[instrument(skip(self))]
    pub async fn next_page(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::NextPage).await
    }

    #[instrument(skip(self))]
    pub async fn previous_page(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::PreviousPage).await
    }

    #[instrument(skip(self))]
    pub async fn set_page_size(&self, size: PageSize) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SetPageSize(size)).await
    }

    // Selection

    #[instrument(skip(self))]
    pub async fn toggle_selection(&self, id: ProductId) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::ToggleSelection(id)).await
    }

    #[instrument(skip(self))]
    pub async fn select_all_on_page(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::SelectAllOnPage).await
    }

    #[instrument(skip(self))]
    pub async fn clear_selection(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::ClearSelection).await
    }

    // Dialogs

    #[instrument(skip(self))]
    pub async fn open_add_dialog(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::OpenAddDialog).await
    }

    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn open_edit_dialog(
        &self,
        product: Product,
    ) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::OpenEditDialog(product)).await
    }

    #[instrument(skip(self))]
    pub async fn open_delete_confirm(
        &self,
        id: ProductId,
    ) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::OpenDeleteConfirm(id)).await
    }

    #[instrument(skip(self))]
    pub async fn open_batch_delete_confirm(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::OpenBatchDeleteConfirm).await
    }

    #[instrument(skip(self))]
    pub async fn close_dialog(&self, kind: DialogKind) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::CloseDialog(kind)).await
    }

    #[instrument(skip(self))]
    pub async fn close_all_dialogs(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::CloseAllDialogs).await
    }

    #[instrument(skip(self))]
    pub async fn dismiss_error(&self) -> Result<DashboardState, DashboardError> {
        self.dispatch(DashboardEvent::DismissError).await
    }

    // Mutations

    async fn run(&self, command: DashboardCommand) -> Result<CommandOutput, DashboardError> {
        debug!("Sending command");
        self.inner.execute(command).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, DashboardError> {
        match self.run(DashboardCommand::AddProduct(draft)).await? {
            CommandOutput::Added(product) => Ok(product),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<ProductId, DashboardError> {
        match self.run(DashboardCommand::UpdateProduct { id, draft }).await? {
            CommandOutput::Updated(id) => Ok(id),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<ProductId, DashboardError> {
        match self.run(DashboardCommand::DeleteProduct(id)).await? {
            CommandOutput::Removed(mut ids) if ids.len() == 1 => Ok(ids.remove(0)),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_products(
        &self,
        ids: Vec<ProductId>,
    ) -> Result<Vec<ProductId>, DashboardError> {
        match self.run(DashboardCommand::DeleteProducts(ids)).await? {
            CommandOutput::Removed(ids) => Ok(ids),
            other => Err(unexpected(other)),
        }
    }

    /// Deletes the product awaiting confirmation and closes the dialog.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&self) -> Result<CommandOutput, DashboardError> {
        self.run(DashboardCommand::ConfirmDelete).await
    }

    /// Deletes every selected product and closes the dialog.
    #[instrument(skip(self))]
    pub async fn confirm_batch_delete(&self) -> Result<CommandOutput, DashboardError> {
        self.run(DashboardCommand::ConfirmBatchDelete).await
    }

    #[instrument(skip(self))]
    pub async fn submit_product_form(
        &self,
        draft: ProductDraft,
    ) -> Result<CommandOutput, DashboardError> {
        self.run(DashboardCommand::SubmitProductForm(draft)).await
    }
}

fn unexpected(output: CommandOutput) -> DashboardError {
    DashboardError::UnexpectedOutput(format!("{output:?}"))
}
