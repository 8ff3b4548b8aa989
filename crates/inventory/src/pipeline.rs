//! Derives the visible product list from the catalog: filter, then sort, then paginate.
//!
//! Everything here is pure. The dashboard reruns [`derive_view`] and [`clamp_page`]
//! after every change to the catalog, the filters, the sort order or the page size.

use crate::model::{FilterState, PageSize, Product, SortDirection, SortField, SortState};
use serde::Serialize;
use std::cmp::Ordering;

/// Filtered and sorted copy of `products`.
///
/// Filters apply in a fixed order (category, stock, search) and the sort is stable,
/// so records that compare equal keep their catalog order.
pub fn derive_view(products: &[Product], filters: &FilterState, sort: &SortState) -> Vec<Product> {
    let needle = filters.search_needle();
    let mut view: Vec<Product> = products
        .iter()
        .filter(|product| filters.category.matches(product.category))
        .filter(|product| !filters.in_stock_only || product.is_in_stock())
        .filter(|product| needle.as_deref().map_or(true, |n| matches_search(product, n)))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    view
}

/// `needle` must already be trimmed and lowercase.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || product.category.label().to_lowercase().contains(needle)
}

/// Ascending comparison of two products on one field.
///
/// Records without a description sort after every described record.
pub fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(&a.name, &b.name),
        SortField::Category => compare_text(a.category.label(), b.category.label()),
        SortField::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Description => match (&a.description, &b.description) {
            (Some(a), Some(b)) => compare_text(a, b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
        },
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Case-insensitive first; exact text breaks ties so the order is total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Number of pages for `total_items`, never less than one.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Clamps a requested 1-based page into `[1, total_pages]`.
pub fn clamp_page(requested: usize, total_items: usize, page_size: PageSize) -> usize {
    requested.clamp(1, total_pages(total_items, page_size))
}

/// Items on the given 1-based page. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// "Showing `start_item`-`end_item` of `total_items`", 1-based and inclusive.
/// All zero for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start_item: usize,
    pub end_item: usize,
    pub total_items: usize,
}

impl PageWindow {
    pub fn new(page: usize, page_size: PageSize, total_items: usize) -> Self {
        if total_items == 0 {
            return Self {
                start_item: 0,
                end_item: 0,
                total_items,
            };
        }
        let size = page_size.get();
        let start_item = (page.max(1) - 1).saturating_mul(size).min(total_items - 1) + 1;
        let end_item = (start_item - 1 + size).min(total_items);
        Self {
            start_item,
            end_item,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryFilter, ProductDraft, ProductId};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, category: Category, stock: u32, cents: i64) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(cents);
        let draft = ProductDraft {
            name: name.to_string(),
            category,
            stock_quantity: stock,
            price: Decimal::new(cents, 2),
            description: None,
        };
        Product::from_draft(ProductId::new(id), draft, at)
    }

    fn catalog() -> Vec<Product> {
        let mut described = product("p4", "Yoga Mat", Category::Sports, 9, 2999);
        described.description = Some("Non-slip PORTABLE mat".to_string());
        vec![
            product("p1", "banana", Category::Food, 0, 99),
            product("p2", "Apple", Category::Food, 5, 150),
            product("p3", "Laptop Pro", Category::Electronics, 2, 129_900),
            described,
            product("p5", "Garden Hose", Category::HomeAndGarden, 0, 1_850),
        ]
    }

    fn ids(view: &[Product]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_sorted_by_name_case_insensitive() {
        let view = derive_view(&catalog(), &FilterState::default(), &SortState::default());
        assert_eq!(ids(&view), ["p2", "p1", "p5", "p3", "p4"]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let filters = FilterState {
            in_stock_only: true,
            ..FilterState::default()
        };
        let sort = SortState::new(SortField::Price, SortDirection::Descending);
        let once = derive_view(&catalog(), &filters, &sort);
        assert_eq!(derive_view(&once, &filters, &sort), once);
    }

    #[test]
    fn test_category_and_stock_filters() {
        let filters = FilterState {
            category: CategoryFilter::Only(Category::Food),
            in_stock_only: true,
            search_term: String::new(),
        };
        let view = derive_view(&catalog(), &filters, &SortState::default());
        assert_eq!(ids(&view), ["p2"]);
        assert!(view.iter().all(|p| p.stock_quantity > 0));
    }

    #[test]
    fn test_search_checks_name_description_and_category_label() {
        let search = |term: &str| {
            let filters = FilterState {
                search_term: term.to_string(),
                ..FilterState::default()
            };
            let view = derive_view(&catalog(), &filters, &SortState::default());
            let found: Vec<String> = view.iter().map(|p| p.id.to_string()).collect();
            found
        };
        assert_eq!(search("  PRO "), ["p3"]);
        assert_eq!(search("portable"), ["p4"]);
        assert_eq!(search("garden"), ["p5"]);
        assert_eq!(search("food"), ["p2", "p1"]);
        assert_eq!(search("   ").len(), 5);
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn test_price_descending_reverses_ascending() {
        let asc = derive_view(
            &catalog(),
            &FilterState::default(),
            &SortState::new(SortField::Price, SortDirection::Ascending),
        );
        let mut desc = derive_view(
            &catalog(),
            &FilterState::default(),
            &SortState::new(SortField::Price, SortDirection::Descending),
        );
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(ids(&asc), ["p1", "p2", "p5", "p4", "p3"]);
    }

    #[test]
    fn test_missing_descriptions_group_after_described_rows() {
        let words = ["zebra", "apple", "Mango", "kiwi", "banana", "Cherry", "date"];
        let products: Vec<Product> = (0..24)
            .map(|i| {
                let mut p = product(&format!("d{i}"), "Item", Category::Other, 1, 100);
                if i % 3 != 1 {
                    p.description = Some(format!("{} {i}", words[i % words.len()]));
                }
                p
            })
            .collect();

        let view = derive_view(
            &products,
            &FilterState::default(),
            &SortState::new(SortField::Description, SortDirection::Ascending),
        );
        let described: Vec<&str> = view
            .iter()
            .filter_map(|p| p.description.as_deref())
            .collect();
        assert_eq!(described.len(), 16);
        assert_eq!(&described[..2], ["apple 15", "apple 8"]);
        assert!(described.windows(2).all(|w| compare_text(w[0], w[1]) != Ordering::Greater));
        assert!(view[..16].iter().all(|p| p.description.is_some()));
        assert!(view[16..].iter().all(|p| p.description.is_none()));
        let missing: Vec<&str> = ids(&view[16..]);
        assert_eq!(missing, ["d1", "d4", "d7", "d10", "d13", "d16", "d19", "d22"]);
    }

    #[test]
    fn test_descending_description_puts_missing_first() {
        let view = derive_view(
            &catalog(),
            &FilterState::default(),
            &SortState::new(SortField::Description, SortDirection::Descending),
        );
        assert_eq!(ids(&view), ["p1", "p2", "p3", "p5", "p4"]);
    }

    #[test]
    fn test_sort_by_stock_and_timestamps() {
        let by_stock = derive_view(
            &catalog(),
            &FilterState::default(),
            &SortState::new(SortField::StockQuantity, SortDirection::Descending),
        );
        assert_eq!(ids(&by_stock), ["p4", "p2", "p3", "p1", "p5"]);

        let by_created = derive_view(
            &catalog(),
            &FilterState::default(),
            &SortState::new(SortField::CreatedAt, SortDirection::Ascending),
        );
        assert_eq!(ids(&by_created), ["p1", "p2", "p5", "p4", "p3"]);
    }

    #[test]
    fn test_clamp_page_for_23_items_of_10() {
        for (requested, expected) in [(0, 1), (1, 1), (2, 2), (3, 3), (99, 3)] {
            assert_eq!(clamp_page(requested, 23, PageSize::Ten), expected);
        }
        assert_eq!(clamp_page(4, 0, PageSize::Ten), 1);
        assert_eq!(total_pages(0, PageSize::Five), 1);
        assert_eq!(total_pages(50, PageSize::TwentyFive), 2);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<usize> = (1..=23).collect();
        assert_eq!(page_slice(&items, 1, PageSize::Ten), &items[0..10]);
        assert_eq!(page_slice(&items, 3, PageSize::Ten), &[21, 22, 23]);
        assert!(page_slice(&items, 4, PageSize::Ten).is_empty());
        assert!(page_slice::<usize>(&[], 1, PageSize::Ten).is_empty());
    }

    #[test]
    fn test_page_window() {
        assert_eq!(
            PageWindow::new(3, PageSize::Ten, 23),
            PageWindow {
                start_item: 21,
                end_item: 23,
                total_items: 23,
            }
        );
        assert_eq!(
            PageWindow::new(1, PageSize::Five, 3),
            PageWindow {
                start_item: 1,
                end_item: 3,
                total_items: 3,
            }
        );
        assert_eq!(
            PageWindow::new(1, PageSize::Ten, 0),
            PageWindow {
                start_item: 0,
                end_item: 0,
                total_items: 0,
            }
        );
    }
}
