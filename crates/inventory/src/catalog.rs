//! The authoritative, ordered product list.

use crate::model::{Product, ProductDraft, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds a catalog, keeping the first record for any repeated id.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .filter(|product| seen.insert(product.id.clone()))
            .collect();
        Self { products }
    }

    /// Inserts at the front. Returns `false` and leaves the catalog unchanged
    /// when the id is already present.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.products.insert(0, product);
        true
    }

    /// Replaces the mutable fields of `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &ProductId, draft: &ProductDraft, at: DateTime<Utc>) -> bool {
        match self.products.iter_mut().find(|product| &product.id == id) {
            Some(product) => {
                product.apply_draft(draft, at);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &ProductId) -> bool {
        self.remove_many(std::slice::from_ref(id)) == 1
    }

    /// Removes every record whose id is listed. Returns how many were removed.
    pub fn remove_many(&mut self, ids: &[ProductId]) -> usize {
        let doomed: HashSet<&ProductId> = ids.iter().collect();
        let before = self.products.len();
        self.products.retain(|product| !doomed.contains(&product.id));
        before - self.products.len()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        let draft = ProductDraft {
            name: format!("Item {id}"),
            category: Category::Other,
            stock_quantity: 1,
            price: Decimal::ONE,
            description: None,
        };
        Product::from_draft(ProductId::new(id), draft, Utc::now())
    }

    #[test]
    fn test_add_inserts_at_front_and_rejects_duplicates() {
        let mut catalog = ProductCatalog::new(vec![product("a")]);
        assert!(catalog.add(product("b")));
        assert!(!catalog.add(product("a")));
        let ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_new_drops_repeated_ids() {
        let mut first = product("a");
        first.stock_quantity = 7;
        let catalog = ProductCatalog::new(vec![first, product("a"), product("b")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProductId::new("a")).map(|p| p.stock_quantity), Some(7));
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let mut catalog = ProductCatalog::new(vec![product("a")]);
        let before = catalog.clone();
        let draft = product("z").to_draft();
        assert!(!catalog.update(&ProductId::new("z"), &draft, Utc::now()));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_update_replaces_fields_in_place() {
        let mut catalog = ProductCatalog::new(vec![product("a"), product("b")]);
        let mut draft = catalog.as_slice()[1].to_draft();
        draft.name = "Renamed".to_string();
        assert!(catalog.update(&ProductId::new("b"), &draft, Utc::now()));
        assert_eq!(catalog.as_slice()[1].name, "Renamed");
        assert_eq!(catalog.as_slice()[1].id, ProductId::new("b"));
    }

    #[test]
    fn test_remove_many_counts_only_present_ids() {
        let mut catalog = ProductCatalog::new(vec![product("a"), product("b"), product("c")]);
        let removed =
            catalog.remove_many(&[ProductId::new("a"), ProductId::new("x"), ProductId::new("c")]);
        assert_eq!(removed, 2);
        assert!(catalog.contains(&ProductId::new("b")));
        assert!(!catalog.remove(&ProductId::new("a")));
        assert!(catalog.remove(&ProductId::new("b")));
        assert!(catalog.is_empty());
    }
}
