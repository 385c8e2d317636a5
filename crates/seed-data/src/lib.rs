//! Deterministic demo data for FleetOps.
//!
//! Generates a self-consistent year of fleet operations (vehicles, drivers,
//! trips, fuel, maintenance, expenses, incidents, documents, GPS telemetry,
//! waypoints and an audit trail) from a single seed, and writes it through a
//! [`RecordStore`](fleet::RecordStore).
//!
//! The same seed and anchor always produce the same dataset.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let store = MemoryStore::new();
//! let report = FleetScenario::new()
//!     .with_seed(42)
//!     .with_months(vec![MonthPlan::new(2025, 3, 12)])
//!     .build(&store)
//!     .await?;
//! report.summary.log();
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod random;
pub mod reference;
pub mod summary;

// Re-export the store types seeding runs need
pub use fleet::{EntityKind, MemoryStore, PgStore, RecordId, RecordStore, StoreError};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{FleetDataset, FleetScenario, SeedMetrics, SeedReport};
    pub use crate::config::{MonthPlan, SeedConfig};
    pub use crate::db::{SeedError, SeededIds, Seeder};
    pub use crate::generators::{
        AuditGenerator, DocumentGenerator, ExpenseGenerator, FleetGenerator, FuelGenerator,
        IncidentGenerator, LocationGenerator, MaintenanceGenerator, TripGenerator,
        WaypointGenerator,
    };
    pub use crate::random::SeededRandom;
    pub use crate::summary::SeedSummary;
    pub use crate::{EntityKind, MemoryStore, PgStore, RecordStore};
}
