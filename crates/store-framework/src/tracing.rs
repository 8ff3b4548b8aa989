//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used by binaries built on the
//! framework.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format**, module paths hidden (`state_type` fields identify the store)
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, shutdown and the number of processed requests
//! - **Events**: every dispatched event at `debug`
//! - **Commands**: the command at `debug`, its outcome at `info`/`warn`
//! - **Client calls**: `#[instrument]` spans on domain client methods
//!
//! ```bash
//! RUST_LOG=info cargo run     # compact
//! RUST_LOG=debug cargo run    # events and command payloads
//! ```
//!
//! With `RUST_LOG=debug` an add-product flow reads roughly as:
//!
//! ```text
//! DEBUG Execute state_type="DashboardState" command=AddProduct(ProductDraft { .. })
//! DEBUG Created product id=product-5f0c… name=Desk Lamp
//! INFO  Product added id=product-5f0c… name=Desk Lamp
//! INFO  Command ok state_type="DashboardState"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
