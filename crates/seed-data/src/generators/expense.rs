//! Trip expenses: tolls, lodging, airport handling and roadside repairs.

use fleet::models::{ExpenseCategory, UserRole};
use time::OffsetDateTime;

use super::base::BaseFleet;
use super::trip::GeneratedTrip;
use crate::db::SeedError;
use crate::random::SeededRandom;
use crate::reference::RouteKind;
use crate::reference::catalog::EN_ROUTE_REPAIRS;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedExpense {
    pub vehicle: usize,
    pub trip: Option<usize>,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    /// Position in [`BaseFleet::users`].
    pub logged_by: usize,
    pub incurred_at: OffsetDateTime,
}

const LODGING_CHANCE: f64 = 0.5;
const REPAIR_CHANCE: f64 = 0.05;

pub struct ExpenseGenerator;

impl ExpenseGenerator {
    /// Expenses of every completed trip, logged by the first active dispatcher.
    pub fn generate(
        trips: &[GeneratedTrip],
        fleet: &BaseFleet,
        rng: &mut SeededRandom,
    ) -> Result<Vec<GeneratedExpense>, SeedError> {
        let logged_by = fleet.first_active(UserRole::Dispatcher)?;
        let mut expenses = Vec::new();

        for (position, trip) in trips.iter().enumerate() {
            let Some(completed_at) = trip.completed_at else {
                continue;
            };
            let route = trip.route;
            let mut push = |category, amount, description: String| {
                expenses.push(GeneratedExpense {
                    vehicle: trip.vehicle,
                    trip: Some(position),
                    amount,
                    category,
                    description,
                    logged_by,
                    incurred_at: completed_at,
                });
            };

            if route.toll_cost > 0.0 {
                push(
                    ExpenseCategory::Toll,
                    route.toll_cost,
                    format!("Toll charges, {} to {}", route.origin, route.destination),
                );
            }

            if route.is_long_haul() && rng.chance(LODGING_CHANCE) {
                let amount = rng.random_float(1_200.0, 3_500.0, 2);
                push(
                    ExpenseCategory::Lodging,
                    amount,
                    format!("Crew overnight stay near {}", route.destination),
                );
            }

            if route.kind == RouteKind::Air {
                let amount = rng.random_float(4_500.0, 12_000.0, 2);
                push(
                    ExpenseCategory::Misc,
                    amount,
                    format!("Airport handling charges at {}", route.destination),
                );
            }

            if rng.chance(REPAIR_CHANCE) {
                let description = rng.pick(EN_ROUTE_REPAIRS).to_string();
                let amount = rng.random_float(800.0, 6_500.0, 2);
                push(ExpenseCategory::MaintenanceEnRoute, amount, description);
            }
        }

        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthPlan;
    use crate::generators::{FleetGenerator, TripGenerator};
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    fn generate() -> (BaseFleet, Vec<GeneratedTrip>, Vec<GeneratedExpense>) {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let mut rng = SeededRandom::new(42);
        let trips = TripGenerator::new()
            .generate(&[MonthPlan::new(2025, 2, 60), MonthPlan::new(2025, 3, 20)], &fleet, ANCHOR, &mut rng)
            .unwrap();
        let expenses = ExpenseGenerator::generate(&trips, &fleet, &mut rng).unwrap();
        (fleet, trips, expenses)
    }

    #[test]
    fn test_tolled_completed_trips_have_a_toll() {
        let (_, trips, expenses) = generate();
        for (position, trip) in trips.iter().enumerate() {
            let tolls: Vec<_> = expenses
                .iter()
                .filter(|e| e.trip == Some(position) && e.category == ExpenseCategory::Toll)
                .collect();
            if trip.is_completed() && trip.route.toll_cost > 0.0 {
                assert_eq!(tolls.len(), 1);
                assert_eq!(tolls[0].amount, trip.route.toll_cost);
            } else {
                assert!(tolls.is_empty());
            }
        }
    }

    #[test]
    fn test_category_rules() {
        let (_, trips, expenses) = generate();
        for expense in &expenses {
            let trip = &trips[expense.trip.unwrap()];
            assert!(trip.is_completed());
            assert_eq!(expense.incurred_at, trip.completed_at.unwrap());
            match expense.category {
                ExpenseCategory::Lodging => assert!(trip.route.distance_km > 400.0),
                ExpenseCategory::Misc => assert_eq!(trip.route.kind, RouteKind::Air),
                ExpenseCategory::Toll | ExpenseCategory::MaintenanceEnRoute => {}
            }
        }
    }

    #[test]
    fn test_logged_by_active_dispatcher() {
        let (fleet, _, expenses) = generate();
        for expense in &expenses {
            let user = &fleet.users[expense.logged_by];
            assert_eq!(user.role, UserRole::Dispatcher);
            assert!(user.is_active);
        }
    }

    #[test]
    fn test_missing_dispatcher_is_an_error() {
        let (mut fleet, trips, _) = generate();
        fleet.users.retain(|u| u.role != UserRole::Dispatcher);
        let mut rng = SeededRandom::new(1);
        assert!(matches!(
            ExpenseGenerator::generate(&trips, &fleet, &mut rng),
            Err(SeedError::MissingRole(UserRole::Dispatcher))
        ));
    }
}
