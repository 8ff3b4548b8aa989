use crate::model::CategoryFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Active filter bar values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub in_stock_only: bool,
    pub search_term: String,
}

impl FilterState {
    /// Applies the fields present in `patch`, leaving the others untouched.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(in_stock_only) = patch.in_stock_only {
            self.in_stock_only = in_stock_only;
        }
        if let Some(search_term) = patch.search_term {
            self.search_term = search_term;
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.category.is_wildcard() || self.in_stock_only || self.search_needle().is_some()
    }

    /// Trimmed, case-folded search term, or `None` when blank.
    pub fn search_needle(&self) -> Option<String> {
        let term = self.search_term.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }
}

/// Partial filter update. `None` fields are left as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub category: Option<CategoryFilter>,
    pub in_stock_only: Option<bool>,
    pub search_term: Option<String>,
}

impl FilterPatch {
    pub fn category(category: impl Into<CategoryFilter>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn in_stock_only(enabled: bool) -> Self {
        Self {
            in_stock_only: Some(enabled),
            ..Self::default()
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Resets every filter to its default.
    pub fn cleared() -> Self {
        let defaults = FilterState::default();
        Self {
            category: Some(defaults.category),
            in_stock_only: Some(defaults.in_stock_only),
            search_term: Some(defaults.search_term),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    Name,
    Category,
    StockQuantity,
    Price,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column header click: the active column flips direction, any other column
    /// sorts ascending by `field`.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field {
            self.direction.reversed()
        } else {
            SortDirection::Ascending
        };
        Self { field, direction }
    }
}

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported page size {0}, expected one of 5, 10, 25, 50")]
pub struct InvalidPageSize(pub usize);

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// 1-based.
    pub current_page: usize,
    pub items_per_page: PageSize,
    /// Size of the filtered list.
    pub total_items: usize,
}

impl PaginationState {
    pub fn new(items_per_page: PageSize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            total_items: 0,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
