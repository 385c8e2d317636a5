//! In-process record store.
//!
//! Behaves like the relational schema where it matters to the seeder: unique
//! columns, foreign keys that must resolve on insert, tables that cannot be
//! cleared while referenced, and identifier sequences that restart on clear.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::{RecordStore, StoreError, batch_kind};
use crate::records::{EntityKind, NewRecord, RecordId};

#[derive(Debug, Clone)]
struct Table {
    next_id: RecordId,
    rows: Vec<(RecordId, NewRecord)>,
    unique_keys: HashSet<String>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
            unique_keys: HashSet::new(),
        }
    }
}

impl Table {
    fn contains(&self, id: RecordId) -> bool {
        id >= 1 && id < self.next_id
    }
}

#[derive(Debug, Default)]
struct Tables {
    by_kind: BTreeMap<EntityKind, Table>,
    reject_writes_to: Option<EntityKind>,
}

impl Tables {
    fn check_references(&self, record: &NewRecord) -> Result<(), StoreError> {
        for (target, id) in record.references() {
            let exists = self
                .by_kind
                .get(&target)
                .is_some_and(|table| table.contains(id));
            if !exists {
                return Err(StoreError::MissingReference {
                    entity: record.kind(),
                    target,
                    id,
                });
            }
        }
        Ok(())
    }

    fn check_writable(&self, kind: EntityKind) -> Result<(), StoreError> {
        if self.reject_writes_to == Some(kind) {
            return Err(StoreError::Rejected(kind));
        }
        Ok(())
    }

    fn insert_unchecked(&mut self, record: NewRecord) -> RecordId {
        let table = self.by_kind.entry(record.kind()).or_default();
        let id = table.next_id;
        table.next_id += 1;
        if let Some(key) = record.unique_key() {
            table.unique_keys.insert(key.to_string());
        }
        table.rows.push((id, record));
        id
    }
}

/// Record store backed by in-memory tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write to `kind` fail, to exercise abort paths.
    pub fn rejecting_writes_to(kind: EntityKind) -> Self {
        Self {
            tables: Mutex::new(Tables {
                reject_writes_to: Some(kind),
                ..Default::default()
            }),
        }
    }

    /// Returns the rows of an entity in insertion order.
    pub async fn rows(&self, kind: EntityKind) -> Vec<(RecordId, NewRecord)> {
        let tables = self.tables.lock().await;
        tables
            .by_kind
            .get(&kind)
            .map(|table| table.rows.clone())
            .unwrap_or_default()
    }

    /// Returns the number of rows of an entity.
    pub async fn count(&self, kind: EntityKind) -> usize {
        let tables = self.tables.lock().await;
        tables.by_kind.get(&kind).map_or(0, |table| table.rows.len())
    }

    /// Returns every non-empty table.
    pub async fn snapshot(&self) -> BTreeMap<EntityKind, Vec<(RecordId, NewRecord)>> {
        let tables = self.tables.lock().await;
        tables
            .by_kind
            .iter()
            .filter(|(_, table)| !table.rows.is_empty())
            .map(|(kind, table)| (*kind, table.rows.clone()))
            .collect()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_one(&self, record: &NewRecord) -> Result<RecordId, StoreError> {
        let mut ids = self.create_many(std::slice::from_ref(record)).await?;
        // create_many returns one id per input row
        Ok(ids.remove(0))
    }

    async fn create_many(&self, records: &[NewRecord]) -> Result<Vec<RecordId>, StoreError> {
        let Some(kind) = batch_kind(records)? else {
            return Ok(Vec::new());
        };

        let mut tables = self.tables.lock().await;
        tables.check_writable(kind)?;

        // Validate the whole batch before inserting anything
        let existing_keys = tables
            .by_kind
            .get(&kind)
            .map(|table| table.unique_keys.clone())
            .unwrap_or_default();
        let mut batch_keys = HashSet::new();
        for record in records {
            tables.check_references(record)?;
            if let Some(key) = record.unique_key()
                && (existing_keys.contains(key) || !batch_keys.insert(key))
            {
                return Err(StoreError::UniqueViolation {
                    entity: kind,
                    key: key.to_string(),
                });
            }
        }

        let ids = records
            .iter()
            .map(|record| tables.insert_unchecked(record.clone()))
            .collect::<Vec<_>>();

        debug!("Inserted {} {} rows", ids.len(), kind);
        Ok(ids)
    }

    async fn clear_all(&self, kind: EntityKind) -> Result<u64, StoreError> {
        let mut tables = self.tables.lock().await;

        for (other, table) in &tables.by_kind {
            if *other == kind {
                continue;
            }
            let referenced = table
                .rows
                .iter()
                .any(|(_, row)| row.references().iter().any(|(target, _)| *target == kind));
            if referenced {
                return Err(StoreError::StillReferenced {
                    entity: kind,
                    referenced_by: *other,
                });
            }
        }

        let removed = tables
            .by_kind
            .remove(&kind)
            .map_or(0, |table| table.rows.len());
        Ok(removed as u64)
    }
}
