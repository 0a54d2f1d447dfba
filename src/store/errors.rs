//! Store error types
//!
//! The store has exactly one domain error kind: a lookup that does not
//! resolve to a stored record. Payload shape problems are rejected by the
//! request layer before the store is touched.

use thiserror::Error;

use super::record::RecordId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the given identifier
    #[error("record {0} not found")]
    NotFound(RecordId),
}

impl StoreError {
    /// The identifier that failed to resolve.
    pub fn id(&self) -> RecordId {
        match self {
            StoreError::NotFound(id) => *id,
        }
    }
}
