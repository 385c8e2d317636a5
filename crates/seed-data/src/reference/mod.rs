//! Static reference data: routes, trip classes, pick-lists and fixtures.

pub mod catalog;
pub mod classes;
pub mod fixtures;
pub mod incidents;
pub mod routes;

pub use classes::TripClass;
pub use fixtures::LicenseClass;
pub use incidents::{INCIDENTS, IncidentNarrative};
pub use routes::{GeoPoint, ROUTES, Route, RouteKind, routes_of};
