//! Request parsing
//!
//! JSON request parsing for all supported operations. Malformed JSON,
//! unknown ops, and missing fields are rejected here, before the store is
//! touched.

use serde::Deserialize;
use serde_json::Value;

use crate::store::{RecordData, RecordId};

use super::errors::{RequestError, RequestResult};

/// Typed request, one variant per supported operation.
#[derive(Debug, Clone)]
pub enum Request {
    /// All records
    List,
    /// One record by id
    Get { id: RecordId },
    /// New record from a payload
    Insert { data: RecordData },
    /// Full replacement of an existing record
    Replace { id: RecordId, data: RecordData },
    /// Partial merge into an existing record
    Update { id: RecordId, partial: RecordData },
    /// Remove a record
    Delete { id: RecordId },
}

/// Raw request for parsing
#[derive(Debug, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    record: Option<Value>,
}

impl Request {
    /// Parse a request from a JSON string.
    pub fn parse(json: &str) -> RequestResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| RequestError::InvalidRequest(format!("invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "list" => Ok(Request::List),
            "get" => Ok(Request::Get { id: required_id(&raw)? }),
            "insert" => Ok(Request::Insert {
                data: required_record(raw.record)?,
            }),
            "replace" => Ok(Request::Replace {
                id: required_id(&raw)?,
                data: required_record(raw.record)?,
            }),
            "update" => Ok(Request::Update {
                id: required_id(&raw)?,
                partial: required_record(raw.record)?,
            }),
            "delete" => Ok(Request::Delete { id: required_id(&raw)? }),
            other => Err(RequestError::UnknownAction(other.to_string())),
        }
    }
}

fn required_id(raw: &RawRequest) -> RequestResult<RecordId> {
    raw.id
        .ok_or_else(|| RequestError::InvalidRequest("missing id".to_string()))
}

fn required_record(record: Option<Value>) -> RequestResult<RecordData> {
    let value = record
        .ok_or_else(|| RequestError::InvalidRequest("missing record".to_string()))?;
    match value {
        Value::Object(_) => Ok(RecordData::from_value(value)),
        _ => Err(RequestError::InvalidRequest(
            "record must be a JSON object".to_string(),
        )),
    }
}
