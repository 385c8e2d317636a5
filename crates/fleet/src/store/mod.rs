//! Record store abstraction.
//!
//! The seeder only needs three operations from persistence: create a row,
//! create a homogeneous batch of rows, and empty a table. Identifiers are
//! generated by the store and are sequential per entity after a clear.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::records::{EntityKind, NewRecord, RecordId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Batch mixes {expected} rows with {found} rows")]
    MixedBatch {
        expected: EntityKind,
        found: EntityKind,
    },
    #[error("Duplicate value {key:?} for unique column of {entity}")]
    UniqueViolation { entity: EntityKind, key: String },
    #[error("{entity} row references missing {target} #{id}")]
    MissingReference {
        entity: EntityKind,
        target: EntityKind,
        id: RecordId,
    },
    #[error("Cannot clear {entity}: still referenced by {referenced_by}")]
    StillReferenced {
        entity: EntityKind,
        referenced_by: EntityKind,
    },
    #[error("Store rejected write to {0}")]
    Rejected(EntityKind),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts one row and returns its generated identifier.
    async fn create_one(&self, record: &NewRecord) -> Result<RecordId, StoreError>;

    /// Inserts a batch of rows of a single entity, returning identifiers in input order.
    ///
    /// The batch is atomic: either every row is created or none is.
    async fn create_many(&self, records: &[NewRecord]) -> Result<Vec<RecordId>, StoreError>;

    /// Deletes every row of the entity and restarts its identifier sequence.
    async fn clear_all(&self, kind: EntityKind) -> Result<u64, StoreError>;
}

/// Returns the entity of a batch, rejecting batches that mix entities.
pub fn batch_kind(records: &[NewRecord]) -> Result<Option<EntityKind>, StoreError> {
    let Some(first) = records.first() else {
        return Ok(None);
    };
    let expected = first.kind();

    for record in &records[1..] {
        let found = record.kind();
        if found != expected {
            return Err(StoreError::MixedBatch { expected, found });
        }
    }

    Ok(Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserRole, VehicleTypeName};
    use crate::records::{NewUser, NewVehicleType};

    fn vehicle_type() -> NewRecord {
        NewVehicleType {
            name: VehicleTypeName::Van,
            description: "Light commercial van".into(),
        }
        .into()
    }

    fn user() -> NewRecord {
        NewUser {
            email: "ops@example.com".into(),
            password_hash: "hash".into(),
            full_name: "Ops".into(),
            role: UserRole::Manager,
            is_active: true,
        }
        .into()
    }

    #[test]
    fn test_empty_batch_has_no_kind() {
        assert!(batch_kind(&[]).unwrap().is_none());
    }

    #[test]
    fn test_homogeneous_batch_reports_kind() {
        let kind = batch_kind(&[vehicle_type(), vehicle_type()]).unwrap();
        assert_eq!(kind, Some(EntityKind::VehicleType));
    }

    #[test]
    fn test_mixed_batch_is_rejected() {
        let err = batch_kind(&[vehicle_type(), user()]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::MixedBatch {
                expected: EntityKind::VehicleType,
                found: EntityKind::User
            }
        ));
    }
}
