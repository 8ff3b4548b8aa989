use super::{CommandOutput, DashboardCommand, DashboardError, DashboardEvent};
use crate::catalog::ProductCatalog;
use crate::dialog::DialogState;
use crate::gateway::SharedGateway;
use crate::model::{FilterState, PageSize, PaginationState, Product, ProductId, SortState};
use crate::pipeline::{self, PageWindow};
use crate::selection::SelectionSet;
use crate::stats::{CategoryBreakdown, InventoryStats};
use async_trait::async_trait;
use serde::Serialize;
use store_framework::{Publisher, StoreState};

/// Everything the dashboard shows, plus the catalog it is derived from.
///
/// Fields are only changed through [`DashboardEvent`]s so the derived list and the page
/// number always agree with the catalog, filters and sort order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub(crate) catalog: ProductCatalog,
    pub(crate) filters: FilterState,
    pub(crate) sort: SortState,
    pub(crate) pagination: PaginationState,
    /// Filtered and sorted catalog.
    pub(crate) view: Vec<Product>,
    pub(crate) selection: SelectionSet,
    pub(crate) dialog: DialogState,
    pub(crate) busy: bool,
    pub(crate) error: Option<String>,
}

impl DashboardState {
    pub fn new(products: Vec<Product>, page_size: PageSize) -> Self {
        let mut state = Self {
            catalog: ProductCatalog::new(products),
            filters: FilterState::default(),
            sort: SortState::default(),
            pagination: PaginationState::new(page_size),
            view: Vec::new(),
            selection: SelectionSet::default(),
            dialog: DialogState::default(),
            busy: false,
            error: None,
        };
        state.refresh();
        state
    }

    /// Derives the view again and clamps the current page into range.
    pub(crate) fn refresh(&mut self) {
        self.view = pipeline::derive_view(self.catalog.as_slice(), &self.filters, &self.sort);
        self.pagination.total_items = self.view.len();
        self.pagination.current_page = pipeline::clamp_page(
            self.pagination.current_page,
            self.view.len(),
            self.pagination.items_per_page,
        );
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// All products in catalog order, newest additions first.
    pub fn products(&self) -> &[Product] {
        self.catalog.as_slice()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// The filtered, sorted list across all pages.
    pub fn filtered(&self) -> &[Product] {
        &self.view
    }

    pub fn current_page(&self) -> &[Product] {
        pipeline::page_slice(
            &self.view,
            self.pagination.current_page,
            self.pagination.items_per_page,
        )
    }

    /// Ids of the rows on the current page, in display order.
    pub fn visible_ids(&self) -> Vec<ProductId> {
        self.current_page().iter().map(|p| p.id.clone()).collect()
    }

    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(self.view.len(), self.pagination.items_per_page)
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(
            self.pagination.current_page,
            self.pagination.items_per_page,
            self.view.len(),
        )
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// State of the header checkbox.
    pub fn all_on_page_selected(&self) -> bool {
        self.selection.covers(&self.visible_ids())
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Stock summary over the whole catalog, ignoring filters.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_products(self.catalog.iter())
    }

    pub fn category_breakdown(&self) -> CategoryBreakdown {
        CategoryBreakdown::from_products(self.catalog.iter())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Vec::new(), PageSize::default())
    }
}

#[async_trait]
impl StoreState for DashboardState {
    type Event = DashboardEvent;
    type Command = DashboardCommand;
    type Output = CommandOutput;
    type Context = SharedGateway;
    type Error = DashboardError;

    fn reduce(&mut self, event: DashboardEvent) {
        self.handle_event(event);
    }

    async fn execute(
        &mut self,
        command: DashboardCommand,
        publisher: &Publisher<Self>,
        gateway: &SharedGateway,
    ) -> Result<CommandOutput, DashboardError> {
        self.run_command(command, publisher, gateway).await
    }
}
