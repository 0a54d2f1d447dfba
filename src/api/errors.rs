//! Request-layer error types
//!
//! Errors raised before or while dispatching a request. Store errors pass
//! through unchanged; shape problems never reach the store.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handling
pub type RequestResult<T> = Result<T, RequestError>;

/// Request-layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Malformed JSON or a missing required field
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Unrecognized operation name
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Pass-through store error
    #[error(transparent)]
    Store(#[from] StoreError),
}
