//! The record store
//!
//! An ordered, in-memory collection of uniquely identified records with
//! deterministic CRUD semantics:
//!
//! - enumeration preserves insertion order
//! - identifiers come from a monotonic counter and are immutable
//! - replace keeps the record's position in the collection
//! - every failed lookup leaves the store unchanged
//!
//! All reads hand out owned clones; callers never hold aliases into the
//! collection.

use super::errors::{StoreError, StoreResult};
use super::record::{Record, RecordData, RecordId};

/// In-memory, process-lifetime record collection.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store. The first inserted record gets id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with seed payloads, inserted in order.
    pub fn with_seed(seed: impl IntoIterator<Item = RecordData>) -> Self {
        let mut store = Self::new();
        for data in seed {
            store.insert(data);
        }
        store
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order. Infallible; empty store gives an
    /// empty vec.
    pub fn find_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// First record whose id matches. Side-effect free.
    pub fn find_by_id(&self, id: RecordId) -> StoreResult<Record> {
        self.position(id)
            .map(|idx| self.records[idx].clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// All records matching the predicate, in insertion order.
    pub fn find_where<P>(&self, predicate: P) -> Vec<Record>
    where
        P: Fn(&Record) -> bool,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Assign a fresh id to the payload, append, and return the stored
    /// record. Performs no field validation.
    pub fn insert(&mut self, data: RecordData) -> Record {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;

        let record = Record::new(id, data);
        self.records.push(record.clone());
        record
    }

    /// Full replacement: the stored record becomes `data` with the original
    /// id, at the same position. Fields absent from `data` are dropped.
    pub fn replace(&mut self, id: RecordId, data: RecordData) -> StoreResult<Record> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;

        let record = Record::new(id, data);
        self.records[idx] = record.clone();
        Ok(record)
    }

    /// Partial update: every field present in `partial` overwrites the
    /// stored value; absent fields are retained. The id is never altered.
    pub fn update(&mut self, id: RecordId, partial: RecordData) -> StoreResult<Record> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;

        self.records[idx].merge(partial);
        Ok(self.records[idx].clone())
    }

    /// Remove the record. Absence is an error, never `false`, so "nothing
    /// to delete" stays distinguishable from a refused deletion.
    pub fn delete(&mut self, id: RecordId) -> StoreResult<bool> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;

        self.records.remove(idx);
        Ok(true)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
