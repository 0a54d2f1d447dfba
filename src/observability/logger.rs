//! Structured operation log
//!
//! One log line = one event, as a single JSON object with deterministic
//! key ordering. Synchronous, unbuffered; errors go to stderr. Logging is
//! best-effort and never affects operation results.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Rejected requests
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Emits one JSON line per event.
pub struct OpLogger;

impl OpLogger {
    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, String)]) {
        let line = Self::format(severity, event, fields);
        if severity >= Severity::Warn {
            let _ = writeln!(io::stderr(), "{}", line);
        } else {
            let _ = writeln!(io::stdout(), "{}", line);
        }
    }

    // BTreeMap gives alphabetical key order; event and severity sort ahead
    // of the field keys used by the handler, which all carry an "op_" prefix.
    fn format(severity: Severity, event: &str, fields: &[(&str, String)]) -> String {
        let mut entry = BTreeMap::new();
        entry.insert("event", event.to_string());
        entry.insert("severity", severity.as_str().to_string());
        for (key, value) in fields {
            entry.insert(*key, value.clone());
        }
        serde_json::to_string(&entry).unwrap_or_else(|_| String::from("{}"))
    }
}
