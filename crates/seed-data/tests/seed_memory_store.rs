//! End-to-end seeding runs against the in-memory record store.
//!
//! The memory store enforces unique keys and foreign keys on insert, so a
//! successful run already proves every reference resolved. The tests below
//! check the data-level properties on the persisted rows.

use std::collections::{BTreeMap, HashMap, HashSet};

use fleet::models::{DriverStatus, MaintenanceServiceType, TripStatus, VehicleStatus};
use fleet::records::{NewDriver, NewMaintenanceLog, NewTrip, NewTripWaypoint, NewVehicle};
use seed_data::prelude::*;
use seed_data::{RecordId, StoreError};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

fn march_scenario() -> FleetScenario {
    FleetScenario::new()
        .with_seed(42)
        .with_anchor(ANCHOR)
        .with_months(vec![MonthPlan::new(2025, 3, 12)])
}

fn year_scenario() -> FleetScenario {
    FleetScenario::new().with_seed(42).with_anchor(ANCHOR)
}

async fn seeded(scenario: FleetScenario) -> MemoryStore {
    let store = MemoryStore::new();
    scenario.build(&store).await.unwrap();
    store
}

async fn vehicles(store: &MemoryStore) -> HashMap<RecordId, NewVehicle> {
    store
        .rows(EntityKind::Vehicle)
        .await
        .into_iter()
        .filter_map(|(id, row)| match row {
            fleet::NewRecord::Vehicle(v) => Some((id, v)),
            _ => None,
        })
        .collect()
}

async fn drivers(store: &MemoryStore) -> HashMap<RecordId, NewDriver> {
    store
        .rows(EntityKind::Driver)
        .await
        .into_iter()
        .filter_map(|(id, row)| match row {
            fleet::NewRecord::Driver(d) => Some((id, d)),
            _ => None,
        })
        .collect()
}

async fn trips(store: &MemoryStore) -> Vec<(RecordId, NewTrip)> {
    store
        .rows(EntityKind::Trip)
        .await
        .into_iter()
        .filter_map(|(id, row)| match row {
            fleet::NewRecord::Trip(t) => Some((id, t)),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_same_seed_produces_identical_store() {
    let first = seeded(year_scenario()).await;
    let second = seeded(year_scenario()).await;

    assert_eq!(first.snapshot().await, second.snapshot().await);
}

#[tokio::test]
async fn test_report_matches_store_contents() {
    let store = MemoryStore::new();
    let report = year_scenario().build(&store).await.unwrap();

    for (kind, rows) in store.snapshot().await {
        assert_eq!(report.summary.counts[kind.table_name()], rows.len(), "{kind}");
    }
    assert_eq!(report.ids.trips.len(), report.summary.counts["trips"]);
    assert!(report.metrics.draws > 0);
}

#[tokio::test]
async fn test_references_resolve_to_seeded_rows() {
    let store = seeded(year_scenario()).await;
    let vehicle_ids: HashSet<RecordId> = vehicles(&store).await.into_keys().collect();
    let driver_ids: HashSet<RecordId> = drivers(&store).await.into_keys().collect();
    let trips = trips(&store).await;
    let trip_ids: HashSet<RecordId> = trips.iter().map(|(id, _)| *id).collect();

    for (_, trip) in &trips {
        assert!(vehicle_ids.contains(&trip.vehicle_id));
        assert!(driver_ids.contains(&trip.driver_id));
    }
    for (_, row) in store.rows(EntityKind::FuelLog).await {
        if let fleet::NewRecord::FuelLog(fuel) = row {
            assert!(fuel.trip_id.is_some_and(|id| trip_ids.contains(&id)));
        }
    }
    for (_, row) in store.rows(EntityKind::IncidentReport).await {
        if let fleet::NewRecord::IncidentReport(incident) = row
            && let Some(trip_id) = incident.trip_id
        {
            assert!(trip_ids.contains(&trip_id));
        }
    }
}

#[tokio::test]
async fn test_trip_status_fields() {
    let store = seeded(year_scenario()).await;

    for (_, trip) in trips(&store).await {
        let completed = trip.status == TripStatus::Completed;
        assert_eq!(completed, trip.completed_at.is_some());
        assert_eq!(completed, trip.distance_actual_km.is_some());
        assert_eq!(completed, trip.invoice_reference.is_some());
        assert_eq!(completed, trip.revenue.is_some());
        assert_eq!(
            trip.status == TripStatus::Cancelled,
            trip.cancelled_reason.is_some()
        );
        assert_eq!(trip.status == TripStatus::Draft, trip.dispatched_at.is_none());
        if let (Some(dispatched), Some(done)) = (trip.dispatched_at, trip.completed_at) {
            assert!(dispatched <= done);
            assert!(done <= ANCHOR);
        }
    }
}

#[tokio::test]
async fn test_invoices_are_unique_and_sequential() {
    let store = seeded(year_scenario()).await;
    let invoices: Vec<String> = trips(&store)
        .await
        .into_iter()
        .filter_map(|(_, t)| t.invoice_reference)
        .collect();

    let unique: HashSet<&String> = invoices.iter().collect();
    assert_eq!(unique.len(), invoices.len());
    assert!(invoices[0].ends_with("-00001"));
}

#[tokio::test]
async fn test_fuel_cost_identity() {
    let store = seeded(year_scenario()).await;
    let fuel_logs = store.rows(EntityKind::FuelLog).await;
    assert!(!fuel_logs.is_empty());

    for (_, row) in fuel_logs {
        if let fleet::NewRecord::FuelLog(fuel) = row {
            let expected = (fuel.liters * fuel.cost_per_liter * 100.0).round() / 100.0;
            assert!((fuel.total_cost - expected).abs() < 0.005, "{fuel:?}");
        }
    }
}

#[tokio::test]
async fn test_dispatched_trips_have_four_ordered_waypoints() {
    let store = seeded(year_scenario()).await;
    let dispatched: HashSet<RecordId> = trips(&store)
        .await
        .into_iter()
        .filter(|(_, t)| t.status == TripStatus::Dispatched)
        .map(|(id, _)| id)
        .collect();

    let mut by_trip: BTreeMap<RecordId, Vec<NewTripWaypoint>> = BTreeMap::new();
    for (_, row) in store.rows(EntityKind::TripWaypoint).await {
        if let fleet::NewRecord::TripWaypoint(w) = row {
            by_trip.entry(w.trip_id).or_default().push(w);
        }
    }

    assert_eq!(by_trip.keys().copied().collect::<HashSet<_>>(), dispatched);
    for waypoints in by_trip.values() {
        let sequences: Vec<i32> = waypoints.iter().map(|w| w.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4]);
        for pair in waypoints.windows(2) {
            assert!(pair[0].scheduled_at <= pair[1].scheduled_at);
        }
    }
}

#[tokio::test]
async fn test_retired_vehicles_stay_parked() {
    let store = seeded(year_scenario()).await;
    let retired: HashSet<RecordId> = vehicles(&store)
        .await
        .into_iter()
        .filter(|(_, v)| v.status == VehicleStatus::Retired)
        .map(|(id, _)| id)
        .collect();
    assert!(!retired.is_empty());

    for (_, trip) in trips(&store).await {
        assert!(!retired.contains(&trip.vehicle_id));
    }
    let mut pings: HashMap<RecordId, Vec<f64>> = HashMap::new();
    for (_, row) in store.rows(EntityKind::VehicleLocation).await {
        if let fleet::NewRecord::VehicleLocation(ping) = row {
            pings.entry(ping.vehicle_id).or_default().push(ping.speed_kmh);
        }
    }
    for id in &retired {
        assert_eq!(pings.get(id), Some(&vec![0.0]), "vehicle {id}");
    }
}

#[tokio::test]
async fn test_open_trips_have_eligible_drivers_and_pending_unloading() {
    let store = seeded(year_scenario()).await;
    let drivers = drivers(&store).await;
    let open: HashMap<RecordId, NewTrip> = trips(&store)
        .await
        .into_iter()
        .filter(|(_, t)| matches!(t.status, TripStatus::Dispatched | TripStatus::Draft))
        .collect();
    assert_eq!(open.len(), 4);

    for trip in open.values() {
        let driver = &drivers[&trip.driver_id];
        assert_ne!(driver.status, DriverStatus::Suspended, "{}", driver.full_name);
        assert!(driver.license_expiry >= ANCHOR.date(), "{}", driver.full_name);
    }
    for (_, row) in store.rows(EntityKind::TripWaypoint).await {
        if let fleet::NewRecord::TripWaypoint(w) = row
            && w.sequence == 4
        {
            assert!(open.contains_key(&w.trip_id));
            assert_eq!(w.arrived_at, None);
            assert_eq!(w.departed_at, None);
        }
    }
}

#[tokio::test]
async fn test_anchor_on_first_of_month_keeps_trips_in_the_past() {
    for anchor in [
        datetime!(2025-04-01 06:00 UTC),
        datetime!(2025-04-01 02:30 UTC),
        datetime!(2025-04-02 06:00 UTC),
    ] {
        let store = seeded(
            FleetScenario::new()
                .with_seed(42)
                .with_anchor(anchor)
                .with_months(vec![MonthPlan::new(2025, 3, 20), MonthPlan::new(2025, 4, 20)]),
        )
        .await;

        for (_, trip) in trips(&store).await {
            assert!(trip.dispatched_at.is_none_or(|at| at < anchor), "{anchor}: {trip:?}");
            assert!(trip.completed_at.is_none_or(|at| at <= anchor), "{anchor}: {trip:?}");
        }
    }
}

#[tokio::test]
async fn test_incident_resolution_fields() {
    let store = seeded(year_scenario()).await;
    let incidents = store.rows(EntityKind::IncidentReport).await;
    assert_eq!(incidents.len(), 30);

    for (_, row) in incidents {
        if let fleet::NewRecord::IncidentReport(incident) = row {
            let settled = incident.status.is_settled();
            assert_eq!(settled, incident.resolution.is_some());
            assert_eq!(settled, incident.resolved_at.is_some());
            if let Some(resolved_at) = incident.resolved_at {
                assert!(incident.incident_date <= resolved_at);
                assert!(resolved_at <= ANCHOR);
            }
        }
    }
}

#[tokio::test]
async fn test_seed_42_march_first_trip() {
    let store = seeded(march_scenario()).await;
    let vehicles = vehicles(&store).await;
    let drivers = drivers(&store).await;
    let trips = trips(&store).await;

    // 12 planned trips plus today's three
    assert_eq!(trips.len(), 15);

    let (id, first) = &trips[0];
    assert_eq!(*id, 1);
    assert_eq!(vehicles[&first.vehicle_id].license_plate, "TN-09-LM-3344");
    assert_eq!(drivers[&first.driver_id].license_number, "UP3220150067890");
    assert_eq!(first.status, TripStatus::Completed);
    assert_eq!(first.invoice_reference.as_deref(), Some("INV-2025-00001"));

    let statuses: Vec<TripStatus> = trips[7..12].iter().map(|(_, t)| t.status).collect();
    assert_eq!(
        statuses,
        vec![
            TripStatus::Cancelled,
            TripStatus::Dispatched,
            TripStatus::Dispatched,
            TripStatus::Draft,
            TripStatus::Draft,
        ]
    );
}

#[tokio::test]
async fn test_in_shop_vehicles_get_brake_inspection_yesterday() {
    let store = seeded(march_scenario()).await;
    let today = ANCHOR.date();
    let in_shop: Vec<RecordId> = vehicles(&store)
        .await
        .into_iter()
        .filter(|(_, v)| v.status == VehicleStatus::InShop)
        .map(|(id, _)| id)
        .collect();
    assert_eq!(in_shop.len(), 2);

    let logs: Vec<NewMaintenanceLog> = store
        .rows(EntityKind::MaintenanceLog)
        .await
        .into_iter()
        .filter_map(|(_, row)| match row {
            fleet::NewRecord::MaintenanceLog(m) => Some(m),
            _ => None,
        })
        .collect();

    for vehicle_id in in_shop {
        let own: Vec<&NewMaintenanceLog> =
            logs.iter().filter(|m| m.vehicle_id == vehicle_id).collect();
        let forced: Vec<&&NewMaintenanceLog> = own
            .iter()
            .filter(|m| {
                m.service_type == MaintenanceServiceType::BrakeInspection
                    && m.service_date == today - Duration::days(1)
            })
            .collect();

        assert_eq!(forced.len(), 1);
        assert_eq!(forced[0].next_service_due, Some(today + Duration::days(180)));
        assert!((4..=9).contains(&own.len()));
    }
}

#[tokio::test]
async fn test_rerun_replaces_previous_run() {
    let store = MemoryStore::new();
    march_scenario().build(&store).await.unwrap();
    let first = store.snapshot().await;

    let report = march_scenario().build(&store).await.unwrap();
    let second = store.snapshot().await;

    assert_eq!(first, second);
    assert_eq!(report.ids.vehicles.first(), Some(&1));
    assert_eq!(report.ids.trips.first(), Some(&1));
}

#[tokio::test]
async fn test_rerun_with_other_seed_leaves_no_stale_rows() {
    let store = MemoryStore::new();
    year_scenario().build(&store).await.unwrap();
    let report = march_scenario().with_seed(7).build(&store).await.unwrap();

    assert_eq!(store.count(EntityKind::Trip).await, 15);
    assert_eq!(report.summary.counts["trips"], 15);
}

#[tokio::test]
async fn test_store_failure_aborts_run() {
    let store = MemoryStore::rejecting_writes_to(EntityKind::FuelLog);
    let err = march_scenario().build(&store).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Store(StoreError::Rejected(EntityKind::FuelLog))
    ));
    // Tiers before the failure stay until the next clear
    assert_eq!(store.count(EntityKind::Trip).await, 15);
    assert_eq!(store.count(EntityKind::FuelLog).await, 0);
    assert_eq!(store.count(EntityKind::MaintenanceLog).await, 0);
}

#[tokio::test]
async fn test_small_batches_do_not_change_ids() {
    let default = seeded(march_scenario()).await;
    let batched = seeded(march_scenario().with_batch_size(3)).await;

    assert_eq!(default.snapshot().await, batched.snapshot().await);
}
