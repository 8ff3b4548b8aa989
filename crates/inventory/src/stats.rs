//! Stock and category summaries over the whole catalog.

use crate::model::{Category, Product};
use serde::Serialize;
use std::fmt::Display;

/// Highest quantity still reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn of(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            q if q <= LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    /// Any positive quantity, low stock included.
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventoryStats {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(InventoryStats::default(), |mut stats, product| {
                stats.total += 1;
                match StockStatus::of(product.stock_quantity) {
                    StockStatus::OutOfStock => stats.out_of_stock += 1,
                    StockStatus::LowStock => {
                        stats.low_stock += 1;
                        stats.in_stock += 1;
                    }
                    StockStatus::InStock => stats.in_stock += 1,
                }
                stats
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// Share of the catalog, rounded to one decimal place.
    pub percentage: f64,
}

/// One entry per category in [`Category::ALL`] order, empty categories included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub shares: Vec<CategoryShare>,
}

impl CategoryBreakdown {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut counts = [0usize; Category::ALL.len()];
        for product in products {
            if let Some(slot) = Category::ALL.iter().position(|c| *c == product.category) {
                counts[slot] += 1;
            }
        }
        let total: usize = counts.iter().sum();

        let shares = Category::ALL
            .into_iter()
            .zip(counts)
            .map(|(category, count)| CategoryShare {
                category,
                count,
                percentage: percentage(count, total),
            })
            .collect();
        Self { shares }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryShare> {
        self.shares.iter().find(|share| share.category == category)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductDraft, ProductId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product(id: &str, category: Category, stock: u32) -> Product {
        let draft = ProductDraft {
            name: format!("Item {id}"),
            category,
            stock_quantity: stock,
            price: Decimal::TEN,
            description: None,
        };
        Product::from_draft(ProductId::new(id), draft, Utc::now())
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::of(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::of(1), StockStatus::LowStock);
        assert_eq!(StockStatus::of(10), StockStatus::LowStock);
        assert_eq!(StockStatus::of(11), StockStatus::InStock);
        assert_eq!(StockStatus::of(11).to_string(), "In Stock");
    }

    #[test]
    fn test_inventory_stats() {
        let products = vec![
            product("a", Category::Food, 0),
            product("b", Category::Food, 4),
            product("c", Category::Books, 40),
        ];
        let stats = InventoryStats::from_products(&products);
        assert_eq!(
            stats,
            InventoryStats {
                total: 3,
                in_stock: 2,
                low_stock: 1,
                out_of_stock: 1
            }
        );
    }

    #[test]
    fn test_category_breakdown_covers_every_category() {
        let products = vec![
            product("a", Category::Food, 1),
            product("b", Category::Food, 1),
            product("c", Category::Books, 1),
        ];
        let breakdown = CategoryBreakdown::from_products(&products);
        assert_eq!(breakdown.shares.len(), Category::ALL.len());
        let food = breakdown.get(Category::Food).unwrap();
        assert_eq!((food.count, food.percentage), (2, 66.7));
        assert_eq!(breakdown.get(Category::Books).map(|s| s.percentage), Some(33.3));
        assert_eq!(breakdown.get(Category::Other).map(|s| s.count), Some(0));

        let empty = CategoryBreakdown::from_products(&[]);
        assert!(empty.shares.iter().all(|s| s.percentage == 0.0));
    }
}
