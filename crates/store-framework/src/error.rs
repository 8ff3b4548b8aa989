//! # Framework Errors
//!
//! Errors raised by the plumbing between clients and the store actor. Errors produced by
//! the state itself travel boxed inside [`FrameworkError::CommandFailed`] and can be
//! recovered with `downcast`.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Command failed: {0}")]
    CommandFailed(Box<dyn std::error::Error + Send + Sync>),
}
