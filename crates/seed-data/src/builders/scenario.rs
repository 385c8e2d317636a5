//! Fluent builder for a complete fleet dataset.

use std::time::Instant;

use fleet::RecordStore;
use serde::Serialize;
use time::{OffsetDateTime, UtcOffset};
use tracing::info;

use crate::config::{MonthPlan, SeedConfig};
use crate::db::{SeedError, SeededIds, Seeder};
use crate::generators::{
    AuditGenerator, BaseFleet, DocumentGenerator, ExpenseGenerator, FleetGenerator, FuelGenerator,
    GeneratedAuditLog, GeneratedDocument, GeneratedExpense, GeneratedFuelLog, GeneratedIncident,
    GeneratedLocation, GeneratedMaintenanceLog, GeneratedTrip, GeneratedWaypoint,
    IncidentGenerator, LocationGenerator, MaintenanceGenerator, TripGenerator, WaypointGenerator,
};
use crate::random::SeededRandom;
use crate::summary::SeedSummary;

/// Everything one run generates, before persistence.
#[derive(Debug, Clone)]
pub struct FleetDataset {
    pub seed: u64,
    /// Reference "now" every relative date was computed from.
    pub anchor: OffsetDateTime,
    pub months: Vec<MonthPlan>,
    pub base: BaseFleet,
    /// Monthly trips in plan order, followed by today's trips.
    pub trips: Vec<GeneratedTrip>,
    pub fuel_logs: Vec<GeneratedFuelLog>,
    pub maintenance_logs: Vec<GeneratedMaintenanceLog>,
    pub expenses: Vec<GeneratedExpense>,
    pub incidents: Vec<GeneratedIncident>,
    pub documents: Vec<GeneratedDocument>,
    pub locations: Vec<GeneratedLocation>,
    pub waypoints: Vec<GeneratedWaypoint>,
    pub audit_logs: Vec<GeneratedAuditLog>,
    /// Number of values drawn from the generator.
    pub draws: u64,
}

/// Timing of a seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent clearing and seeding the store (milliseconds).
    pub seeding_time_ms: u64,
    pub draws: u64,
}

/// Result of building and seeding a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub summary: SeedSummary,
    pub ids: SeededIds,
    pub metrics: SeedMetrics,
}

/// Builder for a seeding run.
///
/// # Example
///
/// ```rust,ignore
/// let report = FleetScenario::new()
///     .with_seed(42)
///     .with_months(vec![MonthPlan::new(2025, 3, 12)])
///     .build(&store)
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FleetScenario {
    config: SeedConfig,
}

impl FleetScenario {
    /// Creates a scenario with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Pins "now". Without an anchor the wall clock is read once per run.
    pub fn with_anchor(mut self, anchor: OffsetDateTime) -> Self {
        self.config.anchor = Some(anchor);
        self
    }

    /// Sets an explicit month plan; the last entry is the current month.
    pub fn with_months(mut self, months: Vec<MonthPlan>) -> Self {
        self.config.months = Some(months);
        self
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Sets the password every seeded user logs in with.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.config.default_password = password.into();
        self
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Generates the dataset without touching any store.
    pub fn build_data(&self) -> Result<FleetDataset, SeedError> {
        self.config.validate()?;

        let anchor = self
            .config
            .anchor
            .unwrap_or_else(OffsetDateTime::now_utc)
            .to_offset(UtcOffset::UTC);
        let today = anchor.date();
        let months = self.config.resolve_months(today);
        let mut rng = SeededRandom::new(self.config.seed);

        let base = FleetGenerator::with_password(self.config.default_password.as_str())
            .generate(today)?;

        let mut trip_generator = TripGenerator::new();
        let mut trips = trip_generator.generate(&months, &base, anchor, &mut rng)?;
        trips.extend(trip_generator.today_trips(&base, anchor)?);

        let fuel_logs = FuelGenerator::generate(&trips, &base, anchor, &mut rng);
        let maintenance_logs = MaintenanceGenerator::generate(&base, today, &mut rng);
        let expenses = ExpenseGenerator::generate(&trips, &base, &mut rng)?;
        let incidents = IncidentGenerator::generate(&trips, &base, anchor, &mut rng)?;
        let documents = DocumentGenerator::generate(&base, today, &mut rng);
        let locations = LocationGenerator::generate(&base, anchor, &mut rng);
        let waypoints = WaypointGenerator::generate(&trips, anchor, &mut rng);
        let audit_logs = AuditGenerator::generate(&base, anchor)?;

        Ok(FleetDataset {
            seed: self.config.seed,
            anchor,
            months,
            base,
            trips,
            fuel_logs,
            maintenance_logs,
            expenses,
            incidents,
            documents,
            locations,
            waypoints,
            audit_logs,
            draws: rng.draws(),
        })
    }

    /// Generates the dataset, then replaces the store's contents with it.
    ///
    /// Generation happens first, so a generation failure leaves the store
    /// untouched.
    pub async fn build(&self, store: &dyn RecordStore) -> Result<SeedReport, SeedError> {
        let gen_start = Instant::now();
        let data = self.build_data()?;
        let generation_time_ms = gen_start.elapsed().as_millis() as u64;
        info!(
            "Generated dataset for seed {} in {}ms ({} draws)",
            data.seed, generation_time_ms, data.draws
        );

        let seed_start = Instant::now();
        let seeder = Seeder::new(store).with_batch_size(self.config.batch_size);
        seeder.clear_all().await?;
        let ids = seeder.seed(&data).await?;
        let seeding_time_ms = seed_start.elapsed().as_millis() as u64;

        let summary = SeedSummary::from_dataset(&data);
        summary.log();

        Ok(SeedReport {
            summary,
            ids,
            metrics: SeedMetrics {
                generation_time_ms,
                seeding_time_ms,
                draws: data.draws,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet::models::TripStatus;
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    fn scenario() -> FleetScenario {
        FleetScenario::new()
            .with_anchor(ANCHOR)
            .with_months(vec![MonthPlan::new(2025, 3, 12)])
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = scenario().build_data().unwrap();
        let b = scenario().build_data().unwrap();

        assert_eq!(a.trips, b.trips);
        assert_eq!(a.fuel_logs, b.fuel_logs);
        assert_eq!(a.locations, b.locations);
        assert_eq!(a.draws, b.draws);
    }

    #[test]
    fn test_other_seed_changes_trips() {
        let a = scenario().build_data().unwrap();
        let b = scenario().with_seed(7).build_data().unwrap();
        assert_ne!(a.trips, b.trips);
    }

    #[test]
    fn test_today_trips_follow_monthly_trips() {
        let data = scenario().build_data().unwrap();
        assert_eq!(data.trips.len(), 15);
        for trip in &data.trips[12..] {
            assert_eq!(trip.status, TripStatus::Completed);
            assert_eq!(trip.dispatched_at.map(|d| d.date()), Some(ANCHOR.date()));
        }
    }

    #[test]
    fn test_default_plan_covers_twelve_months() {
        let data = FleetScenario::new()
            .with_anchor(ANCHOR)
            .build_data()
            .unwrap();
        assert_eq!(data.months.len(), 12);
        assert_eq!(data.months[11], MonthPlan::new(2025, 3, 36));
        assert_eq!(data.trips.len(), 300 + 3);
    }

    #[test]
    fn test_anchor_is_normalized_to_utc() {
        let data = FleetScenario::new()
            .with_anchor(datetime!(2025-03-20 16:00 +05:30))
            .with_months(vec![MonthPlan::new(2025, 3, 12)])
            .build_data()
            .unwrap();
        assert_eq!(data.anchor, ANCHOR);
        assert_eq!(data.anchor.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = scenario().with_batch_size(0).build_data().unwrap_err();
        assert!(matches!(err, SeedError::InvalidConfig(_)));
    }
}
