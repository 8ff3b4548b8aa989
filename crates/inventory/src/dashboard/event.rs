use super::DashboardState;
use crate::dialog::DialogKind;
use crate::model::{
    FilterPatch, FilterState, PageSize, Product, ProductDraft, ProductId, SortField, SortState,
};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Synchronous state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// Merges the patch into the filters and returns to page 1.
    SetFilters(FilterPatch),
    ClearFilters,
    SetSort(SortState),
    /// Column header click, see [`SortState::toggled`].
    SortBy(SortField),
    /// Out-of-range pages are clamped.
    GoToPage(usize),
    NextPage,
    PreviousPage,
    /// Changes the page size and returns to page 1.
    SetPageSize(PageSize),

    ToggleSelection(ProductId),
    /// Selects the current page, or clears the selection if it already is the current page.
    SelectAllOnPage,
    SetSelection(Vec<ProductId>),
    ClearSelection,

    OpenAddDialog,
    OpenEditDialog(Product),
    OpenDeleteConfirm(ProductId),
    OpenBatchDeleteConfirm,
    /// Closes the dialog only if it is the one open.
    CloseDialog(DialogKind),
    CloseAllDialogs,

    MutationPending,
    /// A product whose id is already in the catalog is dropped and the selection is
    /// kept. The add command reports that case as [`DashboardError::DuplicateProduct`].
    ///
    /// [`DashboardError::DuplicateProduct`]: super::DashboardError::DuplicateProduct
    ProductAdded(Product),
    ProductUpdated {
        id: ProductId,
        draft: ProductDraft,
        at: DateTime<Utc>,
    },
    ProductsRemoved(Vec<ProductId>),
    MutationFailed(String),
    DismissError,
}

impl DashboardState {
    pub(crate) fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::SetFilters(patch) => {
                self.filters.merge(patch);
                self.pagination.current_page = 1;
            }
            DashboardEvent::ClearFilters => {
                self.filters = FilterState::default();
                self.pagination.current_page = 1;
            }
            DashboardEvent::SetSort(sort) => self.sort = sort,
            DashboardEvent::SortBy(field) => self.sort = self.sort.toggled(field),
            DashboardEvent::GoToPage(page) => self.pagination.current_page = page,
            DashboardEvent::NextPage => {
                self.pagination.current_page = self.pagination.current_page.saturating_add(1);
            }
            DashboardEvent::PreviousPage => {
                self.pagination.current_page = self.pagination.current_page.saturating_sub(1);
            }
            DashboardEvent::SetPageSize(size) => {
                self.pagination.items_per_page = size;
                self.pagination.current_page = 1;
            }

            DashboardEvent::ToggleSelection(id) => self.selection.toggle(id),
            DashboardEvent::SelectAllOnPage => {
                let visible = self.visible_ids();
                self.selection.select_all_on_page(&visible);
            }
            DashboardEvent::SetSelection(ids) => self.selection.replace(ids),
            DashboardEvent::ClearSelection => self.selection.clear(),

            DashboardEvent::OpenAddDialog => self.dialog.open_add(),
            DashboardEvent::OpenEditDialog(product) => self.dialog.open_edit(product),
            DashboardEvent::OpenDeleteConfirm(id) => self.dialog.open_delete_confirm(id),
            DashboardEvent::OpenBatchDeleteConfirm => self.dialog.open_batch_delete_confirm(),
            DashboardEvent::CloseDialog(kind) => {
                if !self.dialog.close(kind) {
                    debug!(?kind, "Close ignored, dialog not open");
                }
            }
            DashboardEvent::CloseAllDialogs => self.dialog.close_all(),

            DashboardEvent::MutationPending => {
                self.busy = true;
                self.error = None;
            }
            DashboardEvent::ProductAdded(product) => {
                let id = product.id.clone();
                if self.catalog.add(product) {
                    self.selection.clear();
                } else {
                    warn!(%id, "Duplicate product id, record not added");
                }
                self.busy = false;
            }
            DashboardEvent::ProductUpdated { id, draft, at } => {
                if !self.catalog.update(&id, &draft, at) {
                    debug!(%id, "Update for unknown product ignored");
                }
                self.selection.clear();
                self.busy = false;
            }
            DashboardEvent::ProductsRemoved(ids) => {
                let removed = self.catalog.remove_many(&ids);
                debug!(requested = ids.len(), removed, "Products removed");
                self.selection.prune(&ids);
                self.busy = false;
            }
            DashboardEvent::MutationFailed(message) => {
                self.busy = false;
                self.error = Some(message);
            }
            DashboardEvent::DismissError => self.error = None,
        }

        self.refresh();
    }
}
