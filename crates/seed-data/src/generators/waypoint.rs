//! Planned stops of trips that are on the road.

use fleet::models::TripStatus;
use time::{Duration, OffsetDateTime};

use super::trip::GeneratedTrip;
use crate::random::{SeededRandom, round_to};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedWaypoint {
    pub trip: usize,
    pub sequence: i32,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scheduled_at: OffsetDateTime,
    pub arrived_at: Option<OffsetDateTime>,
    pub departed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Loading,
    Rest,
    Fuel,
    Unloading,
}

impl Stop {
    const ALL: [Stop; 4] = [Stop::Loading, Stop::Rest, Stop::Fuel, Stop::Unloading];

    /// Share of the journey completed at this stop.
    fn progress(&self) -> f64 {
        match self {
            Stop::Loading => 0.0,
            Stop::Rest => 0.40,
            Stop::Fuel => 0.65,
            Stop::Unloading => 1.0,
        }
    }

    fn dwell_minutes(&self) -> i64 {
        match self {
            Stop::Loading => 45,
            Stop::Rest => 30,
            Stop::Fuel => 15,
            Stop::Unloading => 40,
        }
    }

    fn label(&self, trip: &GeneratedTrip) -> String {
        let route = trip.route;
        match self {
            Stop::Loading => format!("Loading bay, {}", route.origin),
            Stop::Rest => format!("Rest stop en route to {}", route.destination),
            Stop::Fuel => format!("Fuel stop en route to {}", route.destination),
            Stop::Unloading => format!("Unloading bay, {}", route.destination),
        }
    }
}

pub struct WaypointGenerator;

impl WaypointGenerator {
    /// Four stops for every dispatched trip.
    ///
    /// Intermediate stops sit on the straight line between origin and
    /// destination with a small drawn offset. Arrival and departure are only
    /// recorded once they lie before `anchor`. The unloading stop is never
    /// reached while the trip is still dispatched.
    pub fn generate(
        trips: &[GeneratedTrip],
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Vec<GeneratedWaypoint> {
        let mut waypoints = Vec::new();

        for (position, trip) in trips.iter().enumerate() {
            if trip.status != TripStatus::Dispatched {
                continue;
            }
            let Some(dispatched_at) = trip.dispatched_at else {
                continue;
            };
            let journey = trip.eta - dispatched_at;
            let route = trip.route;

            for (i, stop) in Stop::ALL.iter().enumerate() {
                let point = match stop {
                    Stop::Loading => route.origin_at,
                    Stop::Unloading => route.destination_at,
                    Stop::Rest | Stop::Fuel => {
                        let d_lat = rng.random_float(-0.05, 0.05, 6);
                        let d_lon = rng.random_float(-0.05, 0.05, 6);
                        route
                            .origin_at
                            .lerp(&route.destination_at, stop.progress())
                            .offset(d_lat, d_lon)
                    }
                };
                let slack = Duration::minutes(rng.random_int(0, 25));

                let scheduled_at = match stop {
                    Stop::Unloading => trip.eta,
                    _ => dispatched_at + journey * stop.progress(),
                };
                let arrived = scheduled_at + slack;
                let departed = arrived + Duration::minutes(stop.dwell_minutes());
                let reached = *stop != Stop::Unloading && arrived <= anchor;

                waypoints.push(GeneratedWaypoint {
                    trip: position,
                    sequence: i as i32 + 1,
                    location: stop.label(trip),
                    latitude: round_to(point.lat, 6),
                    longitude: round_to(point.lon, 6),
                    scheduled_at,
                    arrived_at: reached.then_some(arrived),
                    departed_at: (reached && departed <= anchor).then_some(departed),
                });
            }
        }

        waypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthPlan;
    use crate::generators::{FleetGenerator, TripGenerator};
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    fn generate() -> (Vec<GeneratedTrip>, Vec<GeneratedWaypoint>) {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let mut rng = SeededRandom::new(42);
        let trips = TripGenerator::new()
            .generate(&[MonthPlan::new(2025, 3, 12)], &fleet, ANCHOR, &mut rng)
            .unwrap();
        let waypoints = WaypointGenerator::generate(&trips, ANCHOR, &mut rng);
        (trips, waypoints)
    }

    #[test]
    fn test_four_ordered_waypoints_per_dispatched_trip() {
        let (trips, waypoints) = generate();
        let dispatched: Vec<usize> = trips
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == TripStatus::Dispatched)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(dispatched.len(), 2);
        assert_eq!(waypoints.len(), 8);
        for trip in dispatched {
            let stops: Vec<_> = waypoints.iter().filter(|w| w.trip == trip).collect();
            let sequences: Vec<_> = stops.iter().map(|w| w.sequence).collect();
            assert_eq!(sequences, vec![1, 2, 3, 4]);
            for pair in stops.windows(2) {
                assert!(pair[0].scheduled_at <= pair[1].scheduled_at);
            }
        }
    }

    #[test]
    fn test_only_past_visits_are_recorded() {
        let (_, waypoints) = generate();
        for waypoint in &waypoints {
            if let Some(arrived) = waypoint.arrived_at {
                assert!(arrived <= ANCHOR);
                assert!(arrived >= waypoint.scheduled_at);
            }
            if let Some(departed) = waypoint.departed_at {
                assert!(departed <= ANCHOR);
                assert!(waypoint.arrived_at.is_some());
            }
        }
    }

    #[test]
    fn test_unloading_stays_pending_on_short_old_trips() {
        // Dispatched on the 1st on routes of a few hours, long before the anchor
        let anchor = datetime!(2025-03-28 18:00 UTC);
        let fleet = FleetGenerator::new().generate(anchor.date()).unwrap();
        let mut rng = SeededRandom::new(42);
        let mut trips = TripGenerator::new()
            .generate(&[MonthPlan::new(2025, 3, 12)], &fleet, anchor, &mut rng)
            .unwrap();
        for trip in &mut trips {
            trip.planned_departure = datetime!(2025-03-01 06:00 UTC);
            trip.eta = datetime!(2025-03-01 09:00 UTC);
            trip.dispatched_at = trip.dispatched_at.map(|_| trip.planned_departure);
        }
        let waypoints = WaypointGenerator::generate(&trips, anchor, &mut rng);

        assert_eq!(waypoints.len(), 8);
        for waypoint in &waypoints {
            if waypoint.sequence == 4 {
                assert_eq!(waypoint.arrived_at, None);
                assert_eq!(waypoint.departed_at, None);
            } else {
                assert!(waypoint.arrived_at.is_some());
                assert!(waypoint.departed_at.is_some());
            }
        }
    }

    #[test]
    fn test_endpoints_use_route_coordinates() {
        let (trips, waypoints) = generate();
        let first = &waypoints[0];
        let trip = &trips[first.trip];
        assert_eq!(first.latitude, round_to(trip.route.origin_at.lat, 6));
        assert!(first.location.starts_with("Loading bay"));
        assert_eq!(waypoints[3].scheduled_at, trip.eta);
    }
}
