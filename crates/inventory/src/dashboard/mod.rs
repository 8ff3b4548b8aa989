//! # Dashboard
//!
//! The single state tree behind the inventory dashboard, owned by a
//! [`StoreActor`](store_framework::StoreActor).
//!
//! ## Structure
//!
//! - [`state`] - [`DashboardState`] and its read accessors
//! - [`event`] - [`DashboardEvent`], the synchronous reducer vocabulary
//! - [`command`] - [`DashboardCommand`], mutations that go through the persistence gateway
//! - [`error`] - [`DashboardError`]
//! - [`view`] - [`DashboardView`], a flattened snapshot for rendering
//!
//! ## Data flow
//!
//! Every event ends with the same recompute: the filtered, sorted list is derived again
//! from the catalog and the current page is clamped into range. Commands wrap one
//! gateway call between two events:
//!
//! ```text
//! MutationPending        busy = true, error cleared
//!     gateway.create / update / delete / delete_many (awaited)
//! ProductAdded | ProductUpdated | ProductsRemoved   on success
//! MutationFailed(message)                           on rejection
//! ```
//!
//! Each of those events is published, so a subscriber sees the busy flag go up and
//! come back down. While a command is awaiting the gateway, other requests wait in the
//! actor's queue.
//!
//! ## Usage
//!
//! ```rust
//! use inventory_dashboard::dashboard::{DashboardCommand, DashboardState};
//! use inventory_dashboard::gateway::{GatewayLatency, SharedGateway, SimulatedGateway};
//! use inventory_dashboard::model::{Category, PageSize, ProductDraft};
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//! use store_framework::StoreActor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = StoreActor::new(16, DashboardState::new(Vec::new(), PageSize::Ten));
//!     let gateway: SharedGateway = Arc::new(SimulatedGateway::new(GatewayLatency::zero()));
//!     tokio::spawn(actor.run(gateway));
//!
//!     let draft = ProductDraft {
//!         name: "Desk Lamp".to_string(),
//!         category: Category::HomeAndGarden,
//!         stock_quantity: 4,
//!         price: Decimal::new(3450, 2),
//!         description: None,
//!     };
//!     client.execute(DashboardCommand::AddProduct(draft)).await?;
//!
//!     let state = client.snapshot().await?;
//!     assert_eq!(state.products().len(), 1);
//!     assert!(!state.is_busy());
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod error;
pub mod event;
pub mod state;
pub mod view;

pub use command::*;
pub use error::*;
pub use event::*;
pub use state::*;
pub use view::*;
