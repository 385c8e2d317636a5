//! Trip generation across a month plan.

use fleet::models::TripStatus;
use time::{Duration, OffsetDateTime};

use super::base::BaseFleet;
use crate::config::MonthPlan;
use crate::db::SeedError;
use crate::random::{SeededRandom, round_to, round2};
use crate::reference::catalog::{CANCELLATION_REASONS, CARGO_DESCRIPTIONS, CLIENTS};
use crate::reference::fixtures::TODAY_TRIPS;
use crate::reference::{ROUTES, Route, TripClass, routes_of};

/// Average cruising speeds in km/h; air routes scale them.
const SPEEDS_KMH: [f64; 2] = [50.0, 65.0];

/// Generated trip ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTrip {
    /// Position in [`BaseFleet::vehicles`].
    pub vehicle: usize,
    /// Position in [`BaseFleet::drivers`].
    pub driver: usize,
    pub class: TripClass,
    pub route: &'static Route,
    pub cargo_weight_kg: f64,
    pub cargo_description: String,
    pub client_name: String,
    pub status: TripStatus,
    /// Planned departure. Recorded as the dispatch time unless the trip is a draft.
    pub planned_departure: OffsetDateTime,
    /// Planned arrival at the destination.
    pub eta: OffsetDateTime,
    pub dispatched_at: Option<OffsetDateTime>,
    pub completed_at: Option<OffsetDateTime>,
    pub distance_actual_km: Option<f64>,
    pub revenue: Option<f64>,
    pub invoice_reference: Option<String>,
    pub cancelled_reason: Option<String>,
    pub created_at: OffsetDateTime,
}

impl GeneratedTrip {
    pub fn is_completed(&self) -> bool {
        self.status == TripStatus::Completed
    }

    /// Distance actually driven, falling back to the estimate.
    pub fn travelled_km(&self) -> f64 {
        self.distance_actual_km.unwrap_or(self.route.distance_km)
    }
}

/// Status of the trip at `index` among `count` trips of a month.
///
/// Only the current month has open trips: its last five are, oldest first,
/// one cancelled, two dispatched and two drafts.
pub fn status_for(index: usize, count: usize, is_current: bool) -> TripStatus {
    if !is_current {
        return TripStatus::Completed;
    }
    match count - 1 - index {
        0 | 1 => TripStatus::Draft,
        2 | 3 => TripStatus::Dispatched,
        4 => TripStatus::Cancelled,
        _ => TripStatus::Completed,
    }
}

/// Generates trips and keeps the invoice sequence across calls.
pub struct TripGenerator {
    next_invoice: u32,
}

impl TripGenerator {
    pub fn new() -> Self {
        Self { next_invoice: 1 }
    }

    fn next_invoice(&mut self, year: i32) -> String {
        let reference = format!("INV-{year}-{:05}", self.next_invoice);
        self.next_invoice += 1;
        reference
    }

    /// Generates every month of the plan. The last month is the current one.
    pub fn generate(
        &mut self,
        months: &[MonthPlan],
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Result<Vec<GeneratedTrip>, SeedError> {
        let total = months.iter().map(|m| m.trips).sum();
        let mut trips = Vec::with_capacity(total);

        for (i, plan) in months.iter().enumerate() {
            let is_current = i + 1 == months.len();
            trips.extend(self.generate_month(plan, is_current, fleet, anchor, rng)?);
        }

        Ok(trips)
    }

    /// Generates the trips of one month.
    pub fn generate_month(
        &mut self,
        plan: &MonthPlan,
        is_current: bool,
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Result<Vec<GeneratedTrip>, SeedError> {
        // Current-month trips must have been dispatched before today. On the
        // 1st there is no earlier day, so departures fall early on the anchor day.
        let max_day = if is_current {
            if plan.contains(anchor.date()) {
                27.min((i64::from(anchor.day()) - 1).max(1))
            } else {
                27
            }
        } else {
            28
        };

        (0..plan.trips)
            .map(|index| {
                let status = status_for(index, plan.trips, is_current);
                self.generate_trip(plan, max_day, status, fleet, anchor, rng)
            })
            .collect()
    }

    fn generate_trip(
        &mut self,
        plan: &MonthPlan,
        max_day: i64,
        status: TripStatus,
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
        rng: &mut SeededRandom,
    ) -> Result<GeneratedTrip, SeedError> {
        let class = TripClass::from_draw(rng.next_draw());
        let pool = fleet.pools.for_class(class);
        // Open trips only go to drivers who may drive today
        let drivers = match status {
            TripStatus::Dispatched | TripStatus::Draft => &pool.dispatchable_drivers,
            TripStatus::Completed | TripStatus::Cancelled => &pool.drivers,
        };
        if pool.vehicles.is_empty() || drivers.is_empty() {
            return Err(SeedError::EmptyPool(class));
        }
        let vehicle = *rng.pick(&pool.vehicles);
        let driver = *rng.pick(drivers);
        let route = *rng.pick(&routes_of(class.route_kind()));

        let day = rng.random_int(1, max_day) as u8;
        let mut date = plan.day(day)?;
        let mut latest_hour: i64 = 17;
        // A departure on the anchor's own day must precede the anchor
        if date == anchor.date() {
            if anchor.hour() > 4 {
                latest_hour = latest_hour.min(i64::from(anchor.hour()) - 1);
            } else {
                date -= Duration::days(1);
            }
        }
        let hour = rng.random_int(4, latest_hour) as u8;
        let minute = rng.random_int(0, 59) as u8;
        let planned_departure = date.with_hms(hour, minute, 0)?.assume_utc();

        let speed = *rng.pick(&SPEEDS_KMH) * route.kind.speed_scale();
        let travel_minutes = (route.distance_km / speed * 60.0).round() as i64;
        let eta = planned_departure + Duration::minutes(travel_minutes);

        let (min_kg, max_kg) = class.cargo_range_kg();
        let cargo_weight_kg = rng.random_int(min_kg, max_kg) as f64;
        let cargo_description = rng.pick(CARGO_DESCRIPTIONS).to_string();
        let client_name = rng.pick(CLIENTS).to_string();

        let mut trip = GeneratedTrip {
            vehicle,
            driver,
            class,
            route,
            cargo_weight_kg,
            cargo_description,
            client_name,
            status,
            planned_departure,
            eta,
            dispatched_at: (status != TripStatus::Draft).then_some(planned_departure),
            completed_at: None,
            distance_actual_km: None,
            revenue: None,
            invoice_reference: None,
            cancelled_reason: None,
            created_at: planned_departure - Duration::hours(18),
        };

        match status {
            TripStatus::Completed => {
                let variance = rng.random_float(-0.02, 0.06, 3);
                let actual = round_to(route.distance_km * (1.0 + variance), 1);
                let (min_rate, max_rate) = class.rate_per_km(route.distance_km);
                let rate = rng.random_float(min_rate, max_rate, 2);
                let completed_at = eta.min(anchor).max(planned_departure);

                trip.distance_actual_km = Some(actual);
                trip.revenue = Some(round2(actual * rate));
                trip.invoice_reference = Some(self.next_invoice(completed_at.year()));
                trip.completed_at = Some(completed_at);
            }
            TripStatus::Cancelled => {
                trip.cancelled_reason = Some(rng.pick(CANCELLATION_REASONS).to_string());
            }
            TripStatus::Draft | TripStatus::Dispatched => {}
        }

        Ok(trip)
    }

    /// Trips completed within the last few hours of `anchor`. Consumes no draws.
    pub fn today_trips(
        &mut self,
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
    ) -> Result<Vec<GeneratedTrip>, SeedError> {
        TODAY_TRIPS
            .iter()
            .map(|fixture| {
                let vehicle = fleet.vehicle_position(fixture.vehicle_plate)?;
                let driver = fleet.driver_position(fixture.driver_license)?;
                let class = fleet.vehicles[vehicle].trip_class().ok_or_else(|| {
                    SeedError::UnknownFixture(format!("trip vehicle {}", fixture.vehicle_plate))
                })?;
                let route = ROUTES.get(fixture.route).ok_or_else(|| {
                    SeedError::UnknownFixture(format!("route #{}", fixture.route))
                })?;

                let dispatched_at = anchor - Duration::minutes(fixture.dispatched_minutes_ago);
                let completed_at = dispatched_at + Duration::minutes(fixture.duration_minutes);

                Ok(GeneratedTrip {
                    vehicle,
                    driver,
                    class,
                    route,
                    cargo_weight_kg: fixture.cargo_weight_kg,
                    cargo_description: fixture.cargo_description.to_string(),
                    client_name: fixture.client_name.to_string(),
                    status: TripStatus::Completed,
                    planned_departure: dispatched_at,
                    eta: completed_at,
                    dispatched_at: Some(dispatched_at),
                    completed_at: Some(completed_at),
                    distance_actual_km: Some(route.distance_km),
                    revenue: Some(fixture.revenue),
                    invoice_reference: Some(self.next_invoice(completed_at.year())),
                    cancelled_reason: None,
                    created_at: dispatched_at - Duration::hours(2),
                })
            })
            .collect()
    }
}

impl Default for TripGenerator {
    fn default() -> Self {
        Self::new()
    }
}
