//! Insertable rows for every persisted entity.
//!
//! Foreign keys are [`RecordId`]s handed out by a [`RecordStore`](crate::store::RecordStore);
//! a row can only be built once the rows it references have been created.

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::models::{
    AuditAction, DriverStatus, ExpenseCategory, IncidentStatus, IncidentType,
    MaintenanceServiceType, TripStatus, UserRole, VehicleDocumentType, VehicleStatus,
    VehicleTypeName,
};

/// Store-generated identifier, sequential per entity.
pub type RecordId = i64;

/// Every entity the record store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityKind {
    VehicleType,
    User,
    Vehicle,
    Driver,
    Trip,
    FuelLog,
    MaintenanceLog,
    Expense,
    IncidentReport,
    VehicleDocument,
    VehicleLocation,
    TripWaypoint,
    AuditLog,
}

impl EntityKind {
    /// Order in which tables must be emptied so that no row is deleted while
    /// another row still references it.
    pub const CLEAR_ORDER: [EntityKind; 13] = [
        EntityKind::AuditLog,
        EntityKind::TripWaypoint,
        EntityKind::IncidentReport,
        EntityKind::VehicleDocument,
        EntityKind::VehicleLocation,
        EntityKind::Expense,
        EntityKind::FuelLog,
        EntityKind::MaintenanceLog,
        EntityKind::Trip,
        EntityKind::Vehicle,
        EntityKind::Driver,
        EntityKind::User,
        EntityKind::VehicleType,
    ];

    /// Returns the backing table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::VehicleType => "vehicle_types",
            EntityKind::User => "users",
            EntityKind::Vehicle => "vehicles",
            EntityKind::Driver => "drivers",
            EntityKind::Trip => "trips",
            EntityKind::FuelLog => "fuel_logs",
            EntityKind::MaintenanceLog => "maintenance_logs",
            EntityKind::Expense => "expenses",
            EntityKind::IncidentReport => "incident_reports",
            EntityKind::VehicleDocument => "vehicle_documents",
            EntityKind::VehicleLocation => "vehicle_locations",
            EntityKind::TripWaypoint => "trip_waypoints",
            EntityKind::AuditLog => "audit_logs",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVehicleType {
    pub name: VehicleTypeName,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVehicle {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub vin: Option<String>,
    pub vehicle_type_id: RecordId,
    pub status: VehicleStatus,
    pub odometer_km: f64,
    pub capacity_weight_kg: f64,
    pub capacity_volume_m3: f64,
    pub region: String,
    pub acquisition_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDriver {
    pub license_number: String,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date_of_birth: Date,
    pub license_expiry: Date,
    pub license_class: String,
    pub status: DriverStatus,
    pub safety_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrip {
    pub vehicle_id: RecordId,
    pub driver_id: RecordId,
    pub origin: String,
    pub destination: String,
    pub distance_estimated_km: f64,
    pub distance_actual_km: Option<f64>,
    pub cargo_weight_kg: f64,
    pub cargo_description: String,
    pub revenue: Option<f64>,
    pub client_name: String,
    pub invoice_reference: Option<String>,
    pub status: TripStatus,
    pub dispatched_at: Option<OffsetDateTime>,
    pub completed_at: Option<OffsetDateTime>,
    pub cancelled_reason: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFuelLog {
    pub vehicle_id: RecordId,
    pub trip_id: Option<RecordId>,
    pub liters: f64,
    pub cost_per_liter: f64,
    pub total_cost: f64,
    pub odometer_km: f64,
    pub station: String,
    pub logged_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMaintenanceLog {
    pub vehicle_id: RecordId,
    pub service_type: MaintenanceServiceType,
    pub description: String,
    pub cost: f64,
    pub odometer_km: f64,
    pub technician: String,
    pub shop: String,
    pub service_date: Date,
    pub next_service_due: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub vehicle_id: RecordId,
    pub trip_id: Option<RecordId>,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    pub logged_by: RecordId,
    pub incurred_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIncidentReport {
    pub vehicle_id: RecordId,
    pub driver_id: RecordId,
    pub trip_id: Option<RecordId>,
    pub reported_by: RecordId,
    pub incident_type: IncidentType,
    pub title: String,
    pub description: String,
    pub incident_date: OffsetDateTime,
    pub location: String,
    pub injuries: bool,
    pub damage_estimate: f64,
    pub status: IncidentStatus,
    pub resolution: Option<String>,
    pub resolved_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVehicleDocument {
    pub vehicle_id: RecordId,
    pub document_type: VehicleDocumentType,
    pub document_number: String,
    pub issuer: String,
    pub issued_at: Date,
    pub expires_at: Date,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVehicleLocation {
    pub vehicle_id: RecordId,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_kmh: f64,
    pub heading: f64,
    pub accuracy_m: f64,
    pub recorded_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTripWaypoint {
    pub trip_id: RecordId,
    pub sequence: i32,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scheduled_at: OffsetDateTime,
    pub arrived_at: Option<OffsetDateTime>,
    pub departed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAuditLog {
    pub user_id: RecordId,
    pub entity_name: String,
    pub entity_id: RecordId,
    pub action: AuditAction,
    pub payload: serde_json::Value,
    pub created_at: OffsetDateTime,
}

/// A row of any entity, as accepted by the record store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "entity", content = "row")]
pub enum NewRecord {
    VehicleType(NewVehicleType),
    User(NewUser),
    Vehicle(NewVehicle),
    Driver(NewDriver),
    Trip(NewTrip),
    FuelLog(NewFuelLog),
    MaintenanceLog(NewMaintenanceLog),
    Expense(NewExpense),
    IncidentReport(NewIncidentReport),
    VehicleDocument(NewVehicleDocument),
    VehicleLocation(NewVehicleLocation),
    TripWaypoint(NewTripWaypoint),
    AuditLog(NewAuditLog),
}

impl NewRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            NewRecord::VehicleType(_) => EntityKind::VehicleType,
            NewRecord::User(_) => EntityKind::User,
            NewRecord::Vehicle(_) => EntityKind::Vehicle,
            NewRecord::Driver(_) => EntityKind::Driver,
            NewRecord::Trip(_) => EntityKind::Trip,
            NewRecord::FuelLog(_) => EntityKind::FuelLog,
            NewRecord::MaintenanceLog(_) => EntityKind::MaintenanceLog,
            NewRecord::Expense(_) => EntityKind::Expense,
            NewRecord::IncidentReport(_) => EntityKind::IncidentReport,
            NewRecord::VehicleDocument(_) => EntityKind::VehicleDocument,
            NewRecord::VehicleLocation(_) => EntityKind::VehicleLocation,
            NewRecord::TripWaypoint(_) => EntityKind::TripWaypoint,
            NewRecord::AuditLog(_) => EntityKind::AuditLog,
        }
    }

    /// Foreign keys carried by this row.
    pub fn references(&self) -> Vec<(EntityKind, RecordId)> {
        let mut refs = Vec::new();
        match self {
            NewRecord::VehicleType(_) | NewRecord::User(_) | NewRecord::Driver(_) => {}
            NewRecord::Vehicle(v) => refs.push((EntityKind::VehicleType, v.vehicle_type_id)),
            NewRecord::Trip(t) => {
                refs.push((EntityKind::Vehicle, t.vehicle_id));
                refs.push((EntityKind::Driver, t.driver_id));
            }
            NewRecord::FuelLog(f) => {
                refs.push((EntityKind::Vehicle, f.vehicle_id));
                refs.extend(f.trip_id.map(|id| (EntityKind::Trip, id)));
            }
            NewRecord::MaintenanceLog(m) => refs.push((EntityKind::Vehicle, m.vehicle_id)),
            NewRecord::Expense(e) => {
                refs.push((EntityKind::Vehicle, e.vehicle_id));
                refs.extend(e.trip_id.map(|id| (EntityKind::Trip, id)));
                refs.push((EntityKind::User, e.logged_by));
            }
            NewRecord::IncidentReport(i) => {
                refs.push((EntityKind::Vehicle, i.vehicle_id));
                refs.push((EntityKind::Driver, i.driver_id));
                refs.extend(i.trip_id.map(|id| (EntityKind::Trip, id)));
                refs.push((EntityKind::User, i.reported_by));
            }
            NewRecord::VehicleDocument(d) => refs.push((EntityKind::Vehicle, d.vehicle_id)),
            NewRecord::VehicleLocation(l) => refs.push((EntityKind::Vehicle, l.vehicle_id)),
            NewRecord::TripWaypoint(w) => refs.push((EntityKind::Trip, w.trip_id)),
            NewRecord::AuditLog(a) => refs.push((EntityKind::User, a.user_id)),
        }
        refs
    }

    /// Value of the row's unique column, if the entity has one.
    pub fn unique_key(&self) -> Option<&str> {
        match self {
            NewRecord::Vehicle(v) => Some(&v.license_plate),
            NewRecord::Driver(d) => Some(&d.license_number),
            NewRecord::User(u) => Some(&u.email),
            _ => None,
        }
    }
}

macro_rules! impl_from_row {
    ($($variant:ident => $row:ty),* $(,)?) => {
        $(
            impl From<$row> for NewRecord {
                fn from(row: $row) -> Self {
                    NewRecord::$variant(row)
                }
            }
        )*
    };
}

impl_from_row! {
    VehicleType => NewVehicleType,
    User => NewUser,
    Vehicle => NewVehicle,
    Driver => NewDriver,
    Trip => NewTrip,
    FuelLog => NewFuelLog,
    MaintenanceLog => NewMaintenanceLog,
    Expense => NewExpense,
    IncidentReport => NewIncidentReport,
    VehicleDocument => NewVehicleDocument,
    VehicleLocation => NewVehicleLocation,
    TripWaypoint => NewTripWaypoint,
    AuditLog => NewAuditLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_clear_order_covers_every_entity_once() {
        let kinds: HashSet<EntityKind> = EntityKind::CLEAR_ORDER.iter().copied().collect();
        assert_eq!(kinds.len(), EntityKind::CLEAR_ORDER.len());
        assert_eq!(EntityKind::CLEAR_ORDER[0], EntityKind::AuditLog);
        assert_eq!(EntityKind::CLEAR_ORDER[12], EntityKind::VehicleType);
    }

    #[test]
    fn test_expense_references_vehicle_trip_and_user() {
        let record = NewRecord::from(NewExpense {
            vehicle_id: 3,
            trip_id: Some(7),
            amount: 120.0,
            category: ExpenseCategory::Toll,
            description: "Toll".into(),
            logged_by: 2,
            incurred_at: OffsetDateTime::UNIX_EPOCH,
        });

        assert_eq!(record.kind(), EntityKind::Expense);
        assert_eq!(
            record.references(),
            vec![
                (EntityKind::Vehicle, 3),
                (EntityKind::Trip, 7),
                (EntityKind::User, 2)
            ]
        );
        assert!(record.unique_key().is_none());
    }
}
