//! Record types for recstore
//!
//! A record is a unique identifier plus an ordered map of domain fields.
//! Field shape is unconstrained at this layer; validation belongs to the
//! caller before a payload reaches the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key on the wire; never part of a record's field map.
pub const ID_KEY: &str = "id";

/// Opaque unique record identifier.
///
/// Generated by the store's monotonic counter, starting at 1. Callers treat
/// it as a token: there is no arithmetic API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub(crate) fn new(raw: u64) -> Self {
        RecordId(raw)
    }

    pub(crate) fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record's fields without an identifier.
///
/// This is the payload type accepted by insert/replace/update. Construction
/// strips any `id` key so a stored identifier can never be forged or altered
/// through a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordData {
    fields: Map<String, Value>,
}

impl RecordData {
    /// Build from a field map, dropping any `id` entry.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove(ID_KEY);
        Self { fields }
    }

    /// Build from any JSON value; non-objects become an empty payload.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::new(fields),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub(crate) fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// A stored record: identifier plus domain fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: Map<String, Value>,
}

impl Record {
    pub(crate) fn new(id: RecordId, data: RecordData) -> Self {
        Self {
            id,
            fields: data.into_fields(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Overwrite every field present in `partial`, keeping the rest.
    /// The identifier is not part of the field map and cannot be touched.
    pub(crate) fn merge(&mut self, partial: RecordData) {
        for (key, value) in partial.into_fields() {
            self.fields.insert(key, value);
        }
    }

    /// Wire form: the field map with `id` injected as the first key.
    pub fn to_value(&self) -> Value {
        let mut out = Map::with_capacity(self.fields.len() + 1);
        out.insert(ID_KEY.to_string(), Value::from(self.id.raw()));
        for (key, value) in &self.fields {
            out.insert(key.clone(), value.clone());
        }
        Value::Object(out)
    }
}
