//! # System Lifecycle
//!
//! Starting, wiring and stopping the dashboard.
//!
//! ## Wiring
//!
//! The dashboard actor is created first and receives its persistence gateway only when
//! it starts running (`actor.run(gateway)`). [`DashboardSystem::new`] wires the
//! [`SimulatedGateway`](crate::gateway::SimulatedGateway); tests call
//! [`DashboardSystem::start`] with a [`MockGateway`](crate::gateway::MockGateway) or a
//! zero-latency simulated gateway instead.
//!
//! ## Shutdown
//!
//! 1. **Drop the client** - closes the request channel
//! 2. **Actor drains** - requests already queued are still processed
//! 3. **Await the task** - [`DashboardSystem::shutdown`] returns once the actor has stopped
//!
//! ## Configuration
//!
//! [`DashboardConfig`] is read from the TOML file named by `INVENTORY_CONFIG`, falling
//! back to defaults. Logging is configured separately through `RUST_LOG`, see
//! [`store_framework::tracing::setup_tracing`].

pub mod config;
pub mod dashboard_system;

pub use config::*;
pub use dashboard_system::*;
