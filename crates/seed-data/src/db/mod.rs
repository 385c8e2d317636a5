//! Persistence of generated fleet data.
//!
//! The [`Seeder`] empties the record store and writes a generated
//! [`FleetDataset`](crate::builders::FleetDataset) tier by tier, turning the
//! positional references of the generators into store identifiers.

mod seeder;

pub use seeder::{SeedError, SeededIds, Seeder};
