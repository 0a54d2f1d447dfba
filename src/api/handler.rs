//! Request handler
//!
//! Owns the record store behind a single mutex and serializes every
//! request: parse, dispatch, shape the outcome into the response envelope.
//! Concurrent callers observe strict before/after ordering; no operation
//! ever sees a partially applied mutation.

use std::sync::Mutex;

use serde_json::Value;

use crate::observability::{OpLogger, Severity};
use crate::store::{Record, RecordStore};

use super::errors::{RequestError, RequestResult};
use super::request::Request;
use super::response::{Action, Response};

/// Request handler with a global execution lock
pub struct RequestHandler {
    store: Mutex<RecordStore>,
}

impl RequestHandler {
    /// Wrap a store. The handler takes ownership; all further access goes
    /// through requests.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Handle a raw JSON request string.
    pub fn handle(&self, json_request: &str) -> Response {
        // Acquire the lock at request entry; released when the guard drops
        let mut store = self.store.lock().expect("Lock poisoned");

        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                // Shape errors predate a dispatched operation; READ is the
                // neutral classification.
                OpLogger::log(
                    Severity::Warn,
                    "request_rejected",
                    &[("op_reason", e.to_string())],
                );
                return Response::failure(Action::Read, e.to_string());
            }
        };

        let action = action_of(&request);
        let result = dispatch(&mut store, request);

        match result {
            Ok((message, data)) => {
                OpLogger::log(
                    Severity::Info,
                    "request_handled",
                    &[
                        ("op_action", action.as_str().to_string()),
                        ("op_outcome", message.clone()),
                    ],
                );
                Response::success(action, message, data)
            }
            Err(e) => {
                OpLogger::log(
                    Severity::Error,
                    "request_failed",
                    &[
                        ("op_action", action.as_str().to_string()),
                        ("op_reason", e.to_string()),
                    ],
                );
                Response::failure(action, e.to_string())
            }
        }
    }
}

fn action_of(request: &Request) -> Action {
    match request {
        Request::List | Request::Get { .. } => Action::Read,
        Request::Insert { .. } => Action::Insert,
        Request::Replace { .. } | Request::Update { .. } => Action::Update,
        Request::Delete { .. } => Action::Delete,
    }
}

fn dispatch(store: &mut RecordStore, request: Request) -> RequestResult<(String, Value)> {
    match request {
        Request::List => {
            let records = store.find_all();
            let message = format!("retrieved {} records", records.len());
            Ok((message, records_value(&records)))
        }
        Request::Get { id } => {
            let record = store.find_by_id(id).map_err(RequestError::from)?;
            Ok((format!("record {} retrieved", id), record.to_value()))
        }
        Request::Insert { data } => {
            let record = store.insert(data);
            Ok((format!("record {} inserted", record.id()), record.to_value()))
        }
        Request::Replace { id, data } => {
            let record = store.replace(id, data).map_err(RequestError::from)?;
            Ok((format!("record {} replaced", id), record.to_value()))
        }
        Request::Update { id, partial } => {
            let record = store.update(id, partial).map_err(RequestError::from)?;
            Ok((format!("record {} updated", id), record.to_value()))
        }
        Request::Delete { id } => {
            let confirmed = store.delete(id).map_err(RequestError::from)?;
            Ok((format!("record {} deleted", id), Value::Bool(confirmed)))
        }
    }
}

fn records_value(records: &[Record]) -> Value {
    Value::Array(records.iter().map(Record::to_value).collect())
}
