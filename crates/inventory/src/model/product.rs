use crate::model::{Category, ProductDraft};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Unique product identifier, assigned by the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh `product-<uuid>` identifier.
    pub fn generate() -> Self {
        Self(format!("product-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub stock_quantity: u32,
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new record from form data. Both timestamps are set to `at`.
    pub fn from_draft(id: ProductId, draft: ProductDraft, at: DateTime<Utc>) -> Self {
        let draft = draft.normalized();
        Self {
            id,
            name: draft.name,
            category: draft.category,
            stock_quantity: draft.stock_quantity,
            price: draft.price,
            description: draft.description,
            created_at: at,
            updated_at: at,
        }
    }

    /// Replaces every mutable field. `id` and `created_at` are kept.
    pub fn apply_draft(&mut self, draft: &ProductDraft, at: DateTime<Utc>) {
        let draft = draft.clone().normalized();
        self.name = draft.name;
        self.category = draft.category;
        self.stock_quantity = draft.stock_quantity;
        self.price = draft.price;
        self.description = draft.description;
        self.updated_at = at;
    }

    /// Form data pre-filled from this record, as the edit dialog shows it.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category,
            stock_quantity: self.stock_quantity,
            price: self.price,
            description: self.description.clone(),
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
