//! Shared error types for the services crate.

use thiserror::Error;

use hub_core::model::{UserError, UserId};

/// Errors emitted by `ProgressStore` and the services built on it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] UserError),
    #[error("no learner named {0}")]
    NotFound(UserId),
    #[error("progress store lock poisoned: {0}")]
    Poisoned(String),
}
