//! recstore - A strict, deterministic, in-memory record store
//!
//! An ordered collection of uniquely identified records with CRUD
//! semantics, plus a transport-agnostic JSON request layer.

pub mod api;
pub mod observability;
pub mod store;
