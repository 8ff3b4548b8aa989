//! Pure data structures: the product record, its form payload and the query parameters
//! (filters, sort, pagination) the dashboard derives its view from.

pub mod category;
pub mod draft;
pub mod product;
pub mod query;

pub use category::*;
pub use draft::*;
pub use product::*;
pub use query::*;
