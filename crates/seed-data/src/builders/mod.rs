//! Fluent builder API for seeding runs.
//!
//! The [`FleetScenario`] generates a complete [`FleetDataset`] from a seed and
//! optionally persists it through a record store.

mod scenario;

pub use scenario::{FleetDataset, FleetScenario, SeedMetrics, SeedReport};
