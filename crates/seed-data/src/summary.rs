//! Run summary of a generated dataset.

use std::collections::BTreeMap;

use fleet::EntityKind;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::builders::FleetDataset;
use crate::random::round2;

/// Aggregate figures describing a dataset, for logs and for the `seed` binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedSummary {
    pub seed: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub anchor: OffsetDateTime,
    /// Rows per table.
    pub counts: BTreeMap<&'static str, usize>,
    pub trips_by_status: BTreeMap<&'static str, usize>,
    /// Trips per `YYYY-MM` of their planned departure.
    pub trips_by_month: BTreeMap<String, usize>,
    pub total_revenue: f64,
    pub fuel_spend: f64,
    pub expense_spend: f64,
    pub open_incidents: usize,
    pub draws: u64,
}

impl SeedSummary {
    pub fn from_dataset(data: &FleetDataset) -> Self {
        let base = &data.base;
        let counts = [
            (EntityKind::VehicleType, base.vehicle_types.len()),
            (EntityKind::User, base.users.len()),
            (EntityKind::Vehicle, base.vehicles.len()),
            (EntityKind::Driver, base.drivers.len()),
            (EntityKind::Trip, data.trips.len()),
            (EntityKind::FuelLog, data.fuel_logs.len()),
            (EntityKind::MaintenanceLog, data.maintenance_logs.len()),
            (EntityKind::Expense, data.expenses.len()),
            (EntityKind::IncidentReport, data.incidents.len()),
            (EntityKind::VehicleDocument, data.documents.len()),
            (EntityKind::VehicleLocation, data.locations.len()),
            (EntityKind::TripWaypoint, data.waypoints.len()),
            (EntityKind::AuditLog, data.audit_logs.len()),
        ]
        .into_iter()
        .map(|(kind, count)| (kind.table_name(), count))
        .collect();

        let mut trips_by_status = BTreeMap::new();
        let mut trips_by_month = BTreeMap::new();
        for trip in &data.trips {
            *trips_by_status.entry(trip.status.as_str()).or_insert(0) += 1;
            let date = trip.planned_departure.date();
            let label = format!("{:04}-{:02}", date.year(), u8::from(date.month()));
            *trips_by_month.entry(label).or_insert(0) += 1;
        }

        Self {
            seed: data.seed,
            anchor: data.anchor,
            counts,
            trips_by_status,
            trips_by_month,
            total_revenue: round2(data.trips.iter().filter_map(|t| t.revenue).sum()),
            fuel_spend: round2(data.fuel_logs.iter().map(|f| f.total_cost).sum()),
            expense_spend: round2(data.expenses.iter().map(|e| e.amount).sum()),
            open_incidents: data
                .incidents
                .iter()
                .filter(|i| !i.status.is_settled())
                .count(),
            draws: data.draws,
        }
    }

    /// Total rows across every table.
    pub fn total_rows(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn log(&self) {
        info!("Seed completed! seed={} anchor={}", self.seed, self.anchor);
        for (table, count) in &self.counts {
            info!("  {}: {}", table, count);
        }
        for (status, count) in &self.trips_by_status {
            info!("  trips {}: {}", status, count);
        }
        info!("  Revenue: {:.2}", self.total_revenue);
        info!("  Fuel spend: {:.2}", self.fuel_spend);
        info!("  Expense spend: {:.2}", self.expense_spend);
        info!("  Open incidents: {}", self.open_incidents);
        info!("  Random draws: {}", self.draws);
    }
}
