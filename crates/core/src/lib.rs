//! Pure domain logic for the customer directory editor.
//!
//! This crate has **zero I/O dependencies**: the field schema, the per-field
//! validator, the record/draft types, and the in-memory record store are all
//! plain synchronous code. Network synchronization lives in `rigdesk-client`
//! (backend adapters) and `rigdesk-sync` (the entry synchronizer).

pub mod error;
pub mod record;
pub mod schema;
pub mod store;
pub mod types;
pub mod validate;

pub use error::CoreError;
pub use record::{Customer, CustomerFields, Draft};
pub use schema::{field_def, FieldDef, FieldKind, CUSTOMER_FIELDS};
pub use store::RecordStore;
pub use types::CustomerId;
