use crate::model::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MAX_STOCK_QUANTITY: u32 = 999_999;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Upper price bound, 999 999.99.
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999, 2)
}

/// Form data for creating or editing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub stock_quantity: u32,
    pub price: Decimal,
    pub description: Option<String>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Electronics,
            stock_quantity: 0,
            price: Decimal::ZERO,
            description: None,
        }
    }
}

/// Which form field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    StockQuantity,
    Price,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required")]
    NameRequired,
    #[error("Product name must be at least 2 characters")]
    NameTooShort,
    #[error("Product name must be less than 100 characters")]
    NameTooLong,
    #[error("Stock quantity is too large")]
    StockTooHigh,
    #[error("Price must be greater than 0")]
    PriceNotPositive,
    #[error("Price is too large")]
    PriceTooHigh,
    #[error("Description must be less than 500 characters")]
    DescriptionTooLong,
}

impl ValidationError {
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::NameRequired
            | ValidationError::NameTooShort
            | ValidationError::NameTooLong => DraftField::Name,
            ValidationError::StockTooHigh => DraftField::StockQuantity,
            ValidationError::PriceNotPositive | ValidationError::PriceTooHigh => DraftField::Price,
            ValidationError::DescriptionTooLong => DraftField::Description,
        }
    }
}

/// Every violation found in a draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// First violation for a field, for inline display next to the input.
    pub fn for_field(&self, field: DraftField) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field() == field)
    }
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        let name_chars = self.name.trim().chars().count();
        if name_chars == 0 {
            errors.push(ValidationError::NameRequired);
        } else if name_chars < NAME_MIN_CHARS {
            errors.push(ValidationError::NameTooShort);
        } else if name_chars > NAME_MAX_CHARS {
            errors.push(ValidationError::NameTooLong);
        }

        if self.stock_quantity > MAX_STOCK_QUANTITY {
            errors.push(ValidationError::StockTooHigh);
        }

        if self.price <= Decimal::ZERO {
            errors.push(ValidationError::PriceNotPositive);
        } else if self.price > max_price() {
            errors.push(ValidationError::PriceTooHigh);
        }

        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_CHARS {
                errors.push(ValidationError::DescriptionTooLong);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Trims the name and turns a blank description into `None`.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self
    }
}
