//! FleetOps domain crate.
//!
//! Holds the wire enumerations, the insertable row types for every entity, and
//! the [`RecordStore`](store::RecordStore) abstraction with an in-memory and a
//! PostgreSQL implementation.

pub mod auth;
pub mod models;
pub mod records;
pub mod store;

pub use records::{EntityKind, NewRecord, RecordId};
pub use store::{MemoryStore, PgStore, RecordStore, StoreError};
