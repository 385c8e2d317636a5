//! Incident reports from curated narratives.

use fleet::models::{IncidentStatus, IncidentType, UserRole};
use time::{Duration, OffsetDateTime};

use super::base::BaseFleet;
use super::trip::GeneratedTrip;
use crate::db::SeedError;
use crate::random::SeededRandom;
use crate::reference::INCIDENTS;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIncident {
    pub vehicle: usize,
    pub driver: usize,
    /// Most recent completed trip of the pair before the incident.
    pub trip: Option<usize>,
    /// Position in [`BaseFleet::users`].
    pub reported_by: usize,
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

pub struct IncidentGenerator;

impl IncidentGenerator {
    pub fn generate(
        trips: &[GeneratedTrip],
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Result<Vec<GeneratedIncident>, SeedError> {
        let reported_by = fleet.first_active(UserRole::SafetyOfficer)?;
        let vehicles = fleet.pools.trip_capable_vehicles();
        if vehicles.is_empty() {
            return Err(SeedError::NoTripVehicles);
        }
        let today = anchor.date();

        INCIDENTS
            .iter()
            .map(|narrative| {
                let vehicle = *rng.pick(&vehicles);
                let class = fleet.vehicles[vehicle].trip_class().ok_or_else(|| {
                    SeedError::UnknownFixture(format!(
                        "incident vehicle {}",
                        fleet.vehicles[vehicle].license_plate
                    ))
                })?;
                let drivers = &fleet.pools.for_class(class).drivers;
                if drivers.is_empty() {
                    return Err(SeedError::EmptyPool(class));
                }
                let driver = *rng.pick(drivers);

                let incident_date = (today - Duration::days(narrative.days_ago))
                    .with_hms(narrative.hour, 0, 0)?
                    .assume_utc();
                let trip = last_trip_before(trips, vehicle, driver, incident_date);
                let resolved_at = narrative
                    .resolution_hours
                    .map(|hours| (incident_date + Duration::hours(hours)).min(anchor));

                Ok(GeneratedIncident {
                    vehicle,
                    driver,
                    trip,
                    reported_by,
                    incident_type: narrative.incident_type,
                    title: narrative.title.to_string(),
                    description: narrative.description.to_string(),
                    incident_date,
                    location: narrative.location.to_string(),
                    injuries: narrative.injuries,
                    damage_estimate: narrative.damage_estimate,
                    status: narrative.status,
                    resolution: narrative.resolution.map(str::to_string),
                    resolved_at,
                })
            })
            .collect()
    }
}

/// Latest completed trip of the vehicle and driver dispatched on or before `at`.
fn last_trip_before(
    trips: &[GeneratedTrip],
    vehicle: usize,
    driver: usize,
    at: OffsetDateTime,
) -> Option<usize> {
    trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| trip.is_completed() && trip.vehicle == vehicle && trip.driver == driver)
        .filter_map(|(position, trip)| {
            trip.dispatched_at
                .filter(|dispatched| *dispatched <= at)
                .map(|dispatched| (position, dispatched))
        })
        .max_by_key(|(_, dispatched)| *dispatched)
        .map(|(position, _)| position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthPlan;
    use crate::generators::{FleetGenerator, TripGenerator};
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    fn generate() -> (BaseFleet, Vec<GeneratedTrip>, Vec<GeneratedIncident>) {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let mut rng = SeededRandom::new(42);
        let months = MonthPlan::trailing(ANCHOR.date(), &crate::config::DEFAULT_MONTHLY_TRIPS);
        let trips = TripGenerator::new()
            .generate(&months, &fleet, ANCHOR, &mut rng)
            .unwrap();
        let incidents = IncidentGenerator::generate(&trips, &fleet, ANCHOR, &mut rng).unwrap();
        (fleet, trips, incidents)
    }

    #[test]
    fn test_resolution_fields_follow_status() {
        let (_, _, incidents) = generate();
        assert_eq!(incidents.len(), 30);
        for incident in &incidents {
            let settled = incident.status.is_settled();
            assert_eq!(incident.resolution.is_some(), settled);
            assert_eq!(incident.resolved_at.is_some(), settled);
            if let Some(resolved_at) = incident.resolved_at {
                assert!(incident.incident_date <= resolved_at);
                assert!(resolved_at <= ANCHOR);
            }
        }
    }

    #[test]
    fn test_driver_is_licensed_for_vehicle() {
        let (fleet, _, incidents) = generate();
        for incident in &incidents {
            let class = fleet.vehicles[incident.vehicle].trip_class().unwrap();
            assert!(fleet.drivers[incident.driver].license_class.serves(class));
        }
    }

    #[test]
    fn test_linked_trip_precedes_incident() {
        let (_, trips, incidents) = generate();
        for incident in &incidents {
            if let Some(position) = incident.trip {
                let trip = &trips[position];
                assert!(trip.is_completed());
                assert_eq!(trip.vehicle, incident.vehicle);
                assert_eq!(trip.driver, incident.driver);
                assert!(trip.dispatched_at.unwrap() <= incident.incident_date);
            }
        }
    }

    #[test]
    fn test_reported_by_safety_officer() {
        let (fleet, _, incidents) = generate();
        for incident in &incidents {
            assert_eq!(fleet.users[incident.reported_by].role, UserRole::SafetyOfficer);
        }
    }
}
