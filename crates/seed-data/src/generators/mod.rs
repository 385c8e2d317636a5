//! Entity generators for fleet data.
//!
//! Generators never talk to a store. References between generated records
//! are positions into the collections they were generated from; the
//! [`Seeder`](crate::db::Seeder) maps them to store identifiers.
//!
//! - [`FleetGenerator`]: vehicle types, users, vehicles and drivers from fixtures
//! - [`TripGenerator`]: monthly trips plus today's completed trips
//! - [`FuelGenerator`], [`MaintenanceGenerator`], [`ExpenseGenerator`]: costs
//! - [`IncidentGenerator`], [`DocumentGenerator`]: safety and compliance
//! - [`LocationGenerator`], [`WaypointGenerator`]: live telemetry and stops
//! - [`AuditGenerator`]: a fixed audit trail

pub mod audit;
pub mod base;
pub mod document;
pub mod expense;
pub mod fuel;
pub mod incident;
pub mod location;
pub mod maintenance;
pub mod trip;
pub mod waypoint;

pub use audit::{AuditGenerator, AuditTarget, GeneratedAuditLog};
pub use base::{
    BaseFleet, ClassPool, FleetGenerator, FleetPools, GeneratedDriver, GeneratedUser,
    GeneratedVehicle, GeneratedVehicleType,
};
pub use document::{DocumentGenerator, GeneratedDocument};
pub use expense::{ExpenseGenerator, GeneratedExpense};
pub use fuel::{FuelGenerator, GeneratedFuelLog};
pub use incident::{GeneratedIncident, IncidentGenerator};
pub use location::{GeneratedLocation, LocationGenerator};
pub use maintenance::{GeneratedMaintenanceLog, MaintenanceGenerator};
pub use trip::{GeneratedTrip, TripGenerator};
pub use waypoint::{GeneratedWaypoint, WaypointGenerator};
