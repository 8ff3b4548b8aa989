//! # Inventory Dashboard
//!
//! State core of a product inventory dashboard: a catalog of products, the filtered,
//! sorted and paginated view over it, multi-select, modal dialogs, and mutations that
//! go through an asynchronous persistence gateway.
//!
//! The whole state lives in one [`DashboardState`](dashboard::DashboardState) owned by a
//! [`store_framework::StoreActor`]. Callers drive it through
//! [`DashboardClient`](clients::DashboardClient).
//!
//! - **[model]**: products, form drafts and query parameters
//! - **[catalog]**, **[pipeline]**, **[selection]**, **[dialog]**: the pure building blocks
//! - **[dashboard]**: the state tree, its events and its commands
//! - **[gateway]**: the persistence boundary, simulated and mocked
//! - **[stats]**, **[seed]**: summaries and sample data
//! - **[clients]**, **[lifecycle]**: the typed client and the runtime orchestrator

pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod dialog;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod pipeline;
pub mod seed;
pub mod selection;
pub mod stats;
