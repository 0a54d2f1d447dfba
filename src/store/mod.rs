//! Record Store for recstore
//!
//! The authoritative in-memory collection of records and its deterministic
//! CRUD semantics.
//!
//! # Design Principles
//!
//! - Insertion order preserved for enumeration
//! - Identifiers are unique, counter-assigned, and immutable
//! - Reads return owned clones, never aliases into the collection
//! - Exactly one domain error kind: `NotFound`
//!
//! # Supported Operations
//!
//! - find_all / find_by_id / find_where
//! - insert
//! - replace (full) / update (partial merge)
//! - delete

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::{Record, RecordData, RecordId, ID_KEY};
pub use store::RecordStore;
