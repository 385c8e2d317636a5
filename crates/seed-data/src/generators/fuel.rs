//! Fuel logs for completed trips.

use time::OffsetDateTime;

use super::base::BaseFleet;
use super::trip::GeneratedTrip;
use crate::random::{SeededRandom, round_to, round2};
use crate::reference::catalog::FUEL_STATIONS;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFuelLog {
    pub vehicle: usize,
    /// Position in the trip list.
    pub trip: Option<usize>,
    pub liters: f64,
    pub cost_per_liter: f64,
    pub total_cost: f64,
    pub odometer_km: f64,
    pub station: String,
    pub logged_at: OffsetDateTime,
}

/// Probability that a long-haul trip needed a top-up on the way.
const TOP_UP_CHANCE: f64 = 0.4;

pub struct FuelGenerator;

impl FuelGenerator {
    /// One refuel per completed trip, plus an occasional top-up on long hauls.
    pub fn generate(
        trips: &[GeneratedTrip],
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Vec<GeneratedFuelLog> {
        let today = anchor.date();
        let mut logs = Vec::new();

        for (position, trip) in trips.iter().enumerate() {
            let Some(completed_at) = trip.completed_at else {
                continue;
            };
            let vehicle = &fleet.vehicles[trip.vehicle];

            let (min_use, max_use) = trip.class.consumption_per_100km();
            let consumption = rng.random_float(min_use, max_use, 1);
            let liters = round_to(trip.travelled_km() * consumption / 100.0, 2);
            let (min_price, max_price) = trip.class.fuel_price_per_liter();
            let cost_per_liter = rng.random_float(min_price, max_price, 2);
            let station = rng.pick(FUEL_STATIONS);

            logs.push(GeneratedFuelLog {
                vehicle: trip.vehicle,
                trip: Some(position),
                liters,
                cost_per_liter,
                total_cost: round2(liters * cost_per_liter),
                odometer_km: vehicle.odometer_on(completed_at.date(), today),
                station: station.to_string(),
                logged_at: completed_at,
            });

            if trip.route.is_long_haul() && rng.chance(TOP_UP_CHANCE) {
                let (min_top_up, max_top_up) = trip.class.top_up_liters();
                let liters = rng.random_float(min_top_up, max_top_up, 2);
                let cost_per_liter = rng.random_float(min_price, max_price, 2);
                let station = rng.pick(FUEL_STATIONS);
                let midway = trip.planned_departure + (completed_at - trip.planned_departure) / 2;

                logs.push(GeneratedFuelLog {
                    vehicle: trip.vehicle,
                    trip: Some(position),
                    liters,
                    cost_per_liter,
                    total_cost: round2(liters * cost_per_liter),
                    odometer_km: round_to(
                        vehicle.odometer_on(completed_at.date(), today) - trip.travelled_km() / 2.0,
                        1,
                    )
                    .max(0.0),
                    station: station.to_string(),
                    logged_at: midway,
                });
            }
        }

        logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthPlan;
    use crate::generators::{FleetGenerator, TripGenerator};
    use fleet::models::TripStatus;
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    fn setup() -> (BaseFleet, Vec<GeneratedTrip>, SeededRandom) {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let mut rng = SeededRandom::new(42);
        let trips = TripGenerator::new()
            .generate(
                &[MonthPlan::new(2025, 1, 30), MonthPlan::new(2025, 2, 30), MonthPlan::new(2025, 3, 12)],
                &fleet,
                ANCHOR,
                &mut rng,
            )
            .unwrap();
        (fleet, trips, rng)
    }

    #[test]
    fn test_total_cost_identity() {
        let (fleet, trips, mut rng) = setup();
        let logs = FuelGenerator::generate(&trips, &fleet, ANCHOR, &mut rng);

        assert!(!logs.is_empty());
        for log in &logs {
            assert_eq!(log.total_cost, round2(log.liters * log.cost_per_liter));
        }
    }

    #[test]
    fn test_only_completed_trips_are_fuelled() {
        let (fleet, trips, mut rng) = setup();
        let logs = FuelGenerator::generate(&trips, &fleet, ANCHOR, &mut rng);
        let completed = trips.iter().filter(|t| t.is_completed()).count();

        assert!(logs.len() >= completed);
        for log in &logs {
            let trip = &trips[log.trip.unwrap()];
            assert_eq!(trip.status, TripStatus::Completed);
            assert_eq!(log.vehicle, trip.vehicle);
        }
    }

    #[test]
    fn test_top_ups_only_on_long_hauls() {
        let (fleet, trips, mut rng) = setup();
        let logs = FuelGenerator::generate(&trips, &fleet, ANCHOR, &mut rng);

        let mut per_trip = std::collections::HashMap::new();
        for log in &logs {
            *per_trip.entry(log.trip.unwrap()).or_insert(0) += 1;
        }
        for (position, count) in per_trip {
            assert!(count == 1 || (count == 2 && trips[position].route.is_long_haul()));
        }
    }
}
