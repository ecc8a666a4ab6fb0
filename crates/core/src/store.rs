//! In-memory record store: the authoritative client-side copy of the
//! customer collection.

use crate::record::{Customer, CustomerFields};
use crate::types::CustomerId;

/// Ordered collection of customer records, keyed by unique id.
///
/// Insertion order reflects fetch/creation order; no sorting is implied.
/// All operations are synchronous and local. Mutations trust the server:
/// the entry synchronizer calls them only after a confirmed response (or
/// the initial fetch).
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Customer>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection, used after the initial fetch.
    pub fn replace_all(&mut self, records: Vec<Customer>) {
        self.records = records;
    }

    /// Replace the editable fields of the record with `id`, identifier
    /// unchanged. A missing id is a silent no-op; callers only operate on
    /// ids taken from the collection itself.
    pub fn apply_update(&mut self, id: CustomerId, fields: CustomerFields) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.fields = fields;
        }
    }

    /// Append a newly created record under its server-assigned id.
    ///
    /// Ids are unique by contract with the backend; duplicates are not
    /// defended against here.
    pub fn apply_insert(&mut self, id: CustomerId, fields: CustomerFields) {
        self.records.push(Customer { id, fields });
    }

    /// Remove the record with `id`. A missing id is a no-op.
    pub fn apply_delete(&mut self, id: CustomerId) {
        self.records.retain(|r| r.id != id);
    }

    /// The record with `id`, if present.
    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Snapshot of the collection, in insertion order.
    pub fn records(&self) -> &[Customer] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
