//! Latest GPS telemetry per vehicle.

use fleet::models::VehicleStatus;
use time::{Duration, OffsetDateTime};

use super::base::BaseFleet;
use crate::random::{SeededRandom, round_to};
use crate::reference::GeoPoint;
use crate::reference::catalog::HUBS;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLocation {
    pub vehicle: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_kmh: f64,
    pub heading: f64,
    pub accuracy_m: f64,
    pub recorded_at: OffsetDateTime,
}

/// Interval between pings of a moving vehicle.
const PING_INTERVAL_MINUTES: i64 = 5;

pub struct LocationGenerator;

impl LocationGenerator {
    /// Parked vehicles report once from a depot; vehicles on a trip report a
    /// short track leading away from one. Retired vehicles keep their last
    /// parked position.
    pub fn generate(
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Vec<GeneratedLocation> {
        let mut pings = Vec::new();

        for (position, vehicle) in fleet.vehicles.iter().enumerate() {
            match vehicle.status {
                VehicleStatus::Available | VehicleStatus::InShop | VehicleStatus::Retired => {
                    pings.push(Self::parked(position, anchor, rng));
                }
                VehicleStatus::OnTrip => pings.extend(Self::moving(position, anchor, rng)),
            }
        }

        pings
    }

    fn parked(vehicle: usize, anchor: OffsetDateTime, rng: &mut SeededRandom) -> GeneratedLocation {
        let (_, hub) = rng.pick(HUBS);
        let d_lat = rng.random_float(-0.02, 0.02, 6);
        let d_lon = rng.random_float(-0.02, 0.02, 6);
        let accuracy_m = rng.random_float(3.0, 8.0, 1);
        let minutes_ago = rng.random_int(1, 90);
        let at = hub.offset(d_lat, d_lon);

        GeneratedLocation {
            vehicle,
            latitude: round_to(at.lat, 6),
            longitude: round_to(at.lon, 6),
            speed_kmh: 0.0,
            heading: 0.0,
            accuracy_m,
            recorded_at: anchor - Duration::minutes(minutes_ago),
        }
    }

    fn moving(
        vehicle: usize,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Vec<GeneratedLocation> {
        let count = rng.random_int(5, 12);
        let (_, hub) = rng.pick(HUBS);
        let lat_sign = if rng.chance(0.5) { 1.0 } else { -1.0 };
        let lon_sign = if rng.chance(0.5) { 1.0 } else { -1.0 };

        // The newest ping is one minute old
        let last_at = anchor - Duration::minutes(1);
        let mut at: GeoPoint = *hub;
        let mut pings = Vec::with_capacity(count as usize);

        for i in 0..count {
            let step_lat = rng.random_float(0.004, 0.012, 6) * lat_sign;
            let step_lon = rng.random_float(0.004, 0.012, 6) * lon_sign;
            let speed_kmh = rng.random_float(35.0, 78.0, 1);
            let accuracy_m = rng.random_float(3.0, 12.0, 1);

            let next = at.offset(step_lat, step_lon);
            pings.push(GeneratedLocation {
                vehicle,
                latitude: round_to(next.lat, 6),
                longitude: round_to(next.lon, 6),
                speed_kmh,
                heading: round_to(at.heading_to(&next), 1).rem_euclid(360.0),
                accuracy_m,
                recorded_at: last_at - Duration::minutes((count - 1 - i) * PING_INTERVAL_MINUTES),
            });
            at = next;
        }

        pings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::FleetGenerator;
    use std::collections::HashMap;
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    fn generate() -> (BaseFleet, Vec<GeneratedLocation>) {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let mut rng = SeededRandom::new(42);
        let pings = LocationGenerator::generate(&fleet, ANCHOR, &mut rng);
        (fleet, pings)
    }

    #[test]
    fn test_ping_counts_follow_status() {
        let (fleet, pings) = generate();
        let mut per_vehicle: HashMap<usize, Vec<&GeneratedLocation>> = HashMap::new();
        for ping in &pings {
            per_vehicle.entry(ping.vehicle).or_default().push(ping);
        }

        // Retired vehicles report from where they were parked
        assert!(fleet.vehicles.iter().any(|v| v.status == VehicleStatus::Retired));
        for (position, vehicle) in fleet.vehicles.iter().enumerate() {
            let count = per_vehicle.get(&position).map_or(0, Vec::len);
            match vehicle.status {
                VehicleStatus::OnTrip => assert!((5..=12).contains(&count)),
                _ => {
                    assert_eq!(count, 1);
                    assert_eq!(per_vehicle[&position][0].speed_kmh, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_moving_track_is_spaced_and_in_the_past() {
        let (_, pings) = generate();
        let mut per_vehicle: HashMap<usize, Vec<&GeneratedLocation>> = HashMap::new();
        for ping in pings.iter().filter(|p| p.speed_kmh > 0.0) {
            per_vehicle.entry(ping.vehicle).or_default().push(ping);
        }

        assert!(!per_vehicle.is_empty());
        for track in per_vehicle.values() {
            for pair in track.windows(2) {
                assert_eq!(pair[1].recorded_at - pair[0].recorded_at, Duration::minutes(5));
            }
            assert!(track.last().unwrap().recorded_at < ANCHOR);
            for ping in track {
                assert!((0.0..360.0).contains(&ping.heading));
            }
        }
    }
}
