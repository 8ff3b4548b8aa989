//! Error types for the dashboard.

use crate::model::{ProductId, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    /// The persistence gateway rejected a mutation. Carries the message that was also
    /// stored in the dashboard's error field.
    #[error("{0}")]
    Gateway(String),

    /// The gateway answered a create with an id the catalog already holds. The
    /// catalog is left unchanged.
    #[error("Product {0} already exists")]
    DuplicateProduct(ProductId),

    /// The submitted form data is invalid. Nothing was sent to the gateway.
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Dashboard communication error: {0}")]
    Communication(String),

    /// A command answered with an output that does not fit the request.
    #[error("Unexpected command output: {0}")]
    UnexpectedOutput(String),
}

impl From<String> for DashboardError {
    fn from(msg: String) -> Self {
        DashboardError::Communication(msg)
    }
}
