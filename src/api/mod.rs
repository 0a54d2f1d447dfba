//! Request layer for recstore
//!
//! Parses raw JSON requests, dispatches to the record store behind a
//! single global lock, and shapes every outcome into the uniform envelope
//! `{ action, message, success, data }`.
//!
//! # Design Principles
//!
//! - Single global mutex for all operations
//! - Payload shape rejected here, never inside the store
//! - Store errors passed through unchanged into the envelope message
//! - Failures always carry `data: null`
//!
//! # Supported Operations
//!
//! - list / get
//! - insert
//! - replace / update
//! - delete

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{RequestError, RequestResult};
pub use handler::RequestHandler;
pub use request::Request;
pub use response::{Action, Response};
