use super::DashboardState;
use crate::dialog::DialogState;
use crate::model::{FilterState, PageSize, Product, ProductId, SortState};
use crate::pipeline::PageWindow;
use crate::stats::InventoryStats;
use serde::Serialize;

/// Flattened snapshot of what a dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Rows of the current page.
    pub items: Vec<Product>,
    pub filters: FilterState,
    pub has_active_filters: bool,
    pub sort: SortState,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: PageSize,
    pub window: PageWindow,
    pub selected: Vec<ProductId>,
    pub all_on_page_selected: bool,
    pub dialog: DialogState,
    pub busy: bool,
    pub error: Option<String>,
    pub stats: InventoryStats,
}

impl From<&DashboardState> for DashboardView {
    fn from(state: &DashboardState) -> Self {
        Self {
            items: state.current_page().to_vec(),
            filters: state.filters().clone(),
            has_active_filters: state.filters().has_active_filters(),
            sort: state.sort(),
            current_page: state.pagination().current_page,
            total_pages: state.total_pages(),
            page_size: state.pagination().items_per_page,
            window: state.page_window(),
            selected: state.selection().ids(),
            all_on_page_selected: state.all_on_page_selected(),
            dialog: state.dialog().clone(),
            busy: state.is_busy(),
            error: state.error().map(str::to_string),
            stats: state.stats(),
        }
    }
}
