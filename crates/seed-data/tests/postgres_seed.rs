//! Seeding round trip against PostgreSQL.
//!
//! To run these tests, you need:
//! 1. A PostgreSQL database the test may wipe
//! 2. DATABASE_URL environment variable set
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seed-data postgres`
//!
//! Note: a seeding run replaces every fleet table, so do not point this at a
//! database holding data you want to keep.

use std::env;

use seed_data::prelude::*;
use time::OffsetDateTime;
use time::macros::datetime;

const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

/// Get a migrated store, skipping tests if DATABASE_URL is not set.
async fn get_test_store() -> Option<PgStore> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let store = match PgStore::connect(&database_url, 1).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };
    if let Err(e) = store.migrate().await {
        eprintln!("Skipping test: Failed to apply migrations: {e}");
        return None;
    }
    Some(store)
}

async fn count(store: &PgStore, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(store.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_postgres_seed_round_trip() {
    let Some(store) = get_test_store().await else {
        return;
    };

    let scenario = FleetScenario::new()
        .with_anchor(ANCHOR)
        .with_months(vec![MonthPlan::new(2025, 3, 12)]);
    let report = scenario.build(&store).await.unwrap();

    for (table, expected) in &report.summary.counts {
        assert_eq!(count(&store, table).await, *expected as i64, "{table}");
    }

    // A second run starts the sequences over
    let rerun = scenario.build(&store).await.unwrap();
    assert_eq!(rerun.ids.trips.first(), Some(&1));
    assert_eq!(rerun.summary.counts, report.summary.counts);

    let first_plate: String = sqlx::query_scalar(
        "SELECT v.license_plate FROM trips t JOIN vehicles v ON v.id = t.vehicle_id WHERE t.id = 1",
    )
    .fetch_one(store.pool())
    .await
    .unwrap();
    assert_eq!(first_plate, "TN-09-LM-3344");
}
