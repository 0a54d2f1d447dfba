//! Observability for recstore
//!
//! Structured JSON logs: synchronous, one event per line, deterministic
//! key ordering.

mod logger;

pub use logger::{OpLogger, Severity};
