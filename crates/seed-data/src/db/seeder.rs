//! Record store seeding.

use fleet::auth::AuthError;
use fleet::models::UserRole;
use fleet::records::{
    NewAuditLog, NewDriver, NewExpense, NewFuelLog, NewIncidentReport, NewMaintenanceLog,
    NewTrip, NewTripWaypoint, NewUser, NewVehicle, NewVehicleDocument, NewVehicleLocation,
    NewVehicleType,
};
use fleet::{EntityKind, NewRecord, RecordId, RecordStore, StoreError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::builders::FleetDataset;
use crate::generators::AuditTarget;
use crate::reference::TripClass;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Password hashing failed: {0}")]
    Auth(#[from] AuthError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("No vehicle or driver available for {0:?} trips")]
    EmptyPool(TripClass),
    #[error("Fleet has no vehicle able to run trips")]
    NoTripVehicles,
    #[error("Fixture references unknown {0}")]
    UnknownFixture(String),
    #[error("No active user with role {}", .0.as_str())]
    MissingRole(UserRole),
    #[error("{entity} position {position} has no stored identifier")]
    UnresolvedReference { entity: EntityKind, position: usize },
    #[error("Store returned {found} identifiers for {expected} {entity} rows")]
    IdCountMismatch {
        entity: EntityKind,
        expected: usize,
        found: usize,
    },
    #[error("Invalid date: {0}")]
    Time(#[from] time::error::ComponentRange),
}

/// Store identifiers of every persisted row, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeededIds {
    pub vehicle_types: Vec<RecordId>,
    pub users: Vec<RecordId>,
    pub vehicles: Vec<RecordId>,
    pub drivers: Vec<RecordId>,
    pub trips: Vec<RecordId>,
    pub fuel_logs: Vec<RecordId>,
    pub maintenance_logs: Vec<RecordId>,
    pub expenses: Vec<RecordId>,
    pub incidents: Vec<RecordId>,
    pub documents: Vec<RecordId>,
    pub locations: Vec<RecordId>,
    pub waypoints: Vec<RecordId>,
    pub audit_logs: Vec<RecordId>,
}

/// Maps a generator position to the identifier the store gave that row.
fn resolve(ids: &[RecordId], entity: EntityKind, position: usize) -> Result<RecordId, SeedError> {
    ids.get(position)
        .copied()
        .ok_or(SeedError::UnresolvedReference { entity, position })
}

fn resolve_opt(
    ids: &[RecordId],
    entity: EntityKind,
    position: Option<usize>,
) -> Result<Option<RecordId>, SeedError> {
    position.map(|p| resolve(ids, entity, p)).transpose()
}

/// Writes generated fleet data to a [`RecordStore`].
pub struct Seeder<'a> {
    store: &'a dyn RecordStore,
    batch_size: usize,
}

impl<'a> Seeder<'a> {
    /// Creates a new seeder writing to `store`.
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self {
            store,
            batch_size: 50,
        }
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Empties every table, dependents first. Returns the number of deleted rows.
    pub async fn clear_all(&self) -> Result<u64, SeedError> {
        let mut deleted = 0;
        for kind in EntityKind::CLEAR_ORDER {
            let rows = self.store.clear_all(kind).await?;
            debug!("Cleared {} {}", rows, kind);
            deleted += rows;
        }
        info!("Cleared {} existing rows", deleted);
        Ok(deleted)
    }

    /// Persists a dataset. The store is expected to be empty.
    ///
    /// Each tier completes before the next one reads its identifiers. The
    /// first failure aborts the run; rows already written stay in place until
    /// the next clear.
    pub async fn seed(&self, data: &FleetDataset) -> Result<SeededIds, SeedError> {
        let mut ids = SeededIds::default();
        let base = &data.base;

        ids.vehicle_types = self
            .create_each(
                EntityKind::VehicleType,
                base.vehicle_types.iter().map(|t| {
                    NewVehicleType {
                        name: t.name,
                        description: t.description.clone(),
                    }
                    .into()
                }),
            )
            .await?;

        ids.users = self
            .create_each(
                EntityKind::User,
                base.users.iter().map(|u| {
                    NewUser {
                        email: u.email.clone(),
                        password_hash: u.password_hash.clone(),
                        full_name: u.full_name.clone(),
                        role: u.role,
                        is_active: u.is_active,
                    }
                    .into()
                }),
            )
            .await?;

        let vehicles = base
            .vehicles
            .iter()
            .map(|v| {
                Ok(NewVehicle {
                    license_plate: v.license_plate.clone(),
                    make: v.make.clone(),
                    model: v.model.clone(),
                    year: v.year,
                    color: v.color.clone(),
                    vin: v.vin.clone(),
                    vehicle_type_id: resolve(
                        &ids.vehicle_types,
                        EntityKind::VehicleType,
                        v.vehicle_type,
                    )?,
                    status: v.status,
                    odometer_km: v.odometer_km,
                    capacity_weight_kg: v.capacity_weight_kg,
                    capacity_volume_m3: v.capacity_volume_m3,
                    region: v.region.clone(),
                    acquisition_cost: v.acquisition_cost,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.vehicles = self.create_each(EntityKind::Vehicle, vehicles).await?;

        ids.drivers = self
            .create_each(
                EntityKind::Driver,
                base.drivers.iter().map(|d| {
                    NewDriver {
                        license_number: d.license_number.clone(),
                        full_name: d.full_name.clone(),
                        phone: d.phone.clone(),
                        email: d.email.clone(),
                        date_of_birth: d.date_of_birth,
                        license_expiry: d.license_expiry,
                        license_class: d.license_class.as_str().to_string(),
                        status: d.status,
                        safety_score: d.safety_score,
                    }
                    .into()
                }),
            )
            .await?;

        let trips = data
            .trips
            .iter()
            .map(|t| {
                Ok(NewTrip {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, t.vehicle)?,
                    driver_id: resolve(&ids.drivers, EntityKind::Driver, t.driver)?,
                    origin: t.route.origin.to_string(),
                    destination: t.route.destination.to_string(),
                    distance_estimated_km: t.route.distance_km,
                    distance_actual_km: t.distance_actual_km,
                    cargo_weight_kg: t.cargo_weight_kg,
                    cargo_description: t.cargo_description.clone(),
                    revenue: t.revenue,
                    client_name: t.client_name.clone(),
                    invoice_reference: t.invoice_reference.clone(),
                    status: t.status,
                    dispatched_at: t.dispatched_at,
                    completed_at: t.completed_at,
                    cancelled_reason: t.cancelled_reason.clone(),
                    created_at: t.created_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.trips = self.create_batched(EntityKind::Trip, trips).await?;

        let fuel_logs = data
            .fuel_logs
            .iter()
            .map(|f| {
                Ok(NewFuelLog {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, f.vehicle)?,
                    trip_id: resolve_opt(&ids.trips, EntityKind::Trip, f.trip)?,
                    liters: f.liters,
                    cost_per_liter: f.cost_per_liter,
                    total_cost: f.total_cost,
                    odometer_km: f.odometer_km,
                    station: f.station.clone(),
                    logged_at: f.logged_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.fuel_logs = self.create_batched(EntityKind::FuelLog, fuel_logs).await?;

        let maintenance_logs = data
            .maintenance_logs
            .iter()
            .map(|m| {
                Ok(NewMaintenanceLog {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, m.vehicle)?,
                    service_type: m.service_type,
                    description: m.description.clone(),
                    cost: m.cost,
                    odometer_km: m.odometer_km,
                    technician: m.technician.clone(),
                    shop: m.shop.clone(),
                    service_date: m.service_date,
                    next_service_due: m.next_service_due,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.maintenance_logs = self
            .create_batched(EntityKind::MaintenanceLog, maintenance_logs)
            .await?;

        let expenses = data
            .expenses
            .iter()
            .map(|e| {
                Ok(NewExpense {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, e.vehicle)?,
                    trip_id: resolve_opt(&ids.trips, EntityKind::Trip, e.trip)?,
                    amount: e.amount,
                    category: e.category,
                    description: e.description.clone(),
                    logged_by: resolve(&ids.users, EntityKind::User, e.logged_by)?,
                    incurred_at: e.incurred_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.expenses = self.create_batched(EntityKind::Expense, expenses).await?;

        let incidents = data
            .incidents
            .iter()
            .map(|i| {
                Ok(NewIncidentReport {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, i.vehicle)?,
                    driver_id: resolve(&ids.drivers, EntityKind::Driver, i.driver)?,
                    trip_id: resolve_opt(&ids.trips, EntityKind::Trip, i.trip)?,
                    reported_by: resolve(&ids.users, EntityKind::User, i.reported_by)?,
                    incident_type: i.incident_type,
                    title: i.title.clone(),
                    description: i.description.clone(),
                    incident_date: i.incident_date,
                    location: i.location.clone(),
                    injuries: i.injuries,
                    damage_estimate: i.damage_estimate,
                    status: i.status,
                    resolution: i.resolution.clone(),
                    resolved_at: i.resolved_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.incidents = self
            .create_batched(EntityKind::IncidentReport, incidents)
            .await?;

        let documents = data
            .documents
            .iter()
            .map(|d| {
                Ok(NewVehicleDocument {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, d.vehicle)?,
                    document_type: d.document_type,
                    document_number: d.document_number.clone(),
                    issuer: d.issuer.clone(),
                    issued_at: d.issued_at,
                    expires_at: d.expires_at,
                    is_active: d.is_active,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.documents = self
            .create_batched(EntityKind::VehicleDocument, documents)
            .await?;

        let locations = data
            .locations
            .iter()
            .map(|l| {
                Ok(NewVehicleLocation {
                    vehicle_id: resolve(&ids.vehicles, EntityKind::Vehicle, l.vehicle)?,
                    latitude: l.latitude,
                    longitude: l.longitude,
                    speed_kmh: l.speed_kmh,
                    heading: l.heading,
                    accuracy_m: l.accuracy_m,
                    recorded_at: l.recorded_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.locations = self
            .create_batched(EntityKind::VehicleLocation, locations)
            .await?;

        let waypoints = data
            .waypoints
            .iter()
            .map(|w| {
                Ok(NewTripWaypoint {
                    trip_id: resolve(&ids.trips, EntityKind::Trip, w.trip)?,
                    sequence: w.sequence,
                    location: w.location.clone(),
                    latitude: w.latitude,
                    longitude: w.longitude,
                    scheduled_at: w.scheduled_at,
                    arrived_at: w.arrived_at,
                    departed_at: w.departed_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.waypoints = self
            .create_batched(EntityKind::TripWaypoint, waypoints)
            .await?;

        let audit_logs = data
            .audit_logs
            .iter()
            .map(|a| {
                let entity_id = match a.target {
                    AuditTarget::Vehicle(p) => resolve(&ids.vehicles, EntityKind::Vehicle, p)?,
                    AuditTarget::Driver(p) => resolve(&ids.drivers, EntityKind::Driver, p)?,
                    AuditTarget::User(p) => resolve(&ids.users, EntityKind::User, p)?,
                };
                Ok(NewAuditLog {
                    user_id: resolve(&ids.users, EntityKind::User, a.user)?,
                    entity_name: a.target.entity_name().to_string(),
                    entity_id,
                    action: a.action,
                    payload: a.payload.clone(),
                    created_at: a.created_at,
                }
                .into())
            })
            .collect::<Result<Vec<NewRecord>, SeedError>>()?;
        ids.audit_logs = self.create_batched(EntityKind::AuditLog, audit_logs).await?;

        Ok(ids)
    }

    /// Creates rows one at a time. Used for the small fixture tiers.
    async fn create_each(
        &self,
        entity: EntityKind,
        records: impl IntoIterator<Item = NewRecord>,
    ) -> Result<Vec<RecordId>, SeedError> {
        let records: Vec<NewRecord> = records.into_iter().collect();
        info!("Seeding {} {}...", records.len(), entity);

        let mut ids = Vec::with_capacity(records.len());
        for record in &records {
            ids.push(self.store.create_one(record).await?);
        }

        info!("Seeded {} {}", ids.len(), entity);
        Ok(ids)
    }

    /// Creates rows in batches of `batch_size`.
    async fn create_batched(
        &self,
        entity: EntityKind,
        records: Vec<NewRecord>,
    ) -> Result<Vec<RecordId>, SeedError> {
        info!("Seeding {} {}...", records.len(), entity);

        let mut ids = Vec::with_capacity(records.len());
        for chunk in records.chunks(self.batch_size) {
            let created = self.store.create_many(chunk).await?;
            if created.len() != chunk.len() {
                return Err(SeedError::IdCountMismatch {
                    entity,
                    expected: chunk.len(),
                    found: created.len(),
                });
            }
            ids.extend(created);
            debug!("  Seeded {}/{} {}", ids.len(), records.len(), entity);
        }

        info!("Seeded {} {}", ids.len(), entity);
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet::MemoryStore;

    #[test]
    fn test_resolve_maps_positions() {
        let ids = vec![10, 11, 12];
        assert_eq!(resolve(&ids, EntityKind::Trip, 2).unwrap(), 12);
        assert_eq!(resolve_opt(&ids, EntityKind::Trip, None).unwrap(), None);
    }

    #[test]
    fn test_resolve_out_of_range_fails() {
        let err = resolve(&[1, 2], EntityKind::Vehicle, 5).unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnresolvedReference {
                entity: EntityKind::Vehicle,
                position: 5
            }
        ));
    }

    #[test]
    fn test_batch_size_never_zero() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(&store).with_batch_size(0);
        assert_eq!(seeder.batch_size, 1);
    }

    #[tokio::test]
    async fn test_clear_empty_store() {
        let store = MemoryStore::new();
        let deleted = Seeder::new(&store).clear_all().await.unwrap();
        assert_eq!(deleted, 0);
    }
}
