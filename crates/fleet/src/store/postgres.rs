//! PostgreSQL record store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};
use tracing::{debug, info};

use super::{RecordStore, StoreError, batch_kind};
use crate::records::{EntityKind, NewRecord, RecordId};

/// Record store writing to the application's PostgreSQL schema.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Schema migrations applied");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn create_one(&self, record: &NewRecord) -> Result<RecordId, StoreError> {
        Ok(insert_record(&self.pool, record).await?)
    }

    async fn create_many(&self, records: &[NewRecord]) -> Result<Vec<RecordId>, StoreError> {
        let Some(kind) = batch_kind(records)? else {
            return Ok(Vec::new());
        };

        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            ids.push(insert_record(&mut *tx, record).await?);
        }
        tx.commit().await?;

        debug!("Inserted {} {} rows", ids.len(), kind);
        Ok(ids)
    }

    async fn clear_all(&self, kind: EntityKind) -> Result<u64, StoreError> {
        let table = kind.table_name();

        let deleted = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&self.pool)
            .await?
            .rows_affected();
        sqlx::query(&format!("ALTER SEQUENCE {table}_id_seq RESTART WITH 1"))
            .execute(&self.pool)
            .await?;

        Ok(deleted)
    }
}

/// Inserts a single row and returns the generated id.
async fn insert_record<'e, E>(executor: E, record: &NewRecord) -> Result<RecordId, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    match record {
        NewRecord::VehicleType(t) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO vehicle_types (name, description)
                VALUES ($1, $2)
                RETURNING id
                "#,
            )
            .bind(t.name)
            .bind(&t.description)
            .fetch_one(executor)
            .await
        }
        NewRecord::User(u) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO users (email, password_hash, full_name, role, is_active)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
                "#,
            )
            .bind(&u.email)
            .bind(&u.password_hash)
            .bind(&u.full_name)
            .bind(u.role)
            .bind(u.is_active)
            .fetch_one(executor)
            .await
        }
        NewRecord::Vehicle(v) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO vehicles (
                    license_plate, make, model, year, color, vin,
                    vehicle_type_id, status, odometer_km,
                    capacity_weight_kg, capacity_volume_m3, region, acquisition_cost
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING id
                "#,
            )
            .bind(&v.license_plate)
            .bind(&v.make)
            .bind(&v.model)
            .bind(v.year)
            .bind(&v.color)
            .bind(&v.vin)
            .bind(v.vehicle_type_id)
            .bind(v.status)
            .bind(v.odometer_km)
            .bind(v.capacity_weight_kg)
            .bind(v.capacity_volume_m3)
            .bind(&v.region)
            .bind(v.acquisition_cost)
            .fetch_one(executor)
            .await
        }
        NewRecord::Driver(d) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO drivers (
                    license_number, full_name, phone, email, date_of_birth,
                    license_expiry, license_class, status, safety_score
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING id
                "#,
            )
            .bind(&d.license_number)
            .bind(&d.full_name)
            .bind(&d.phone)
            .bind(&d.email)
            .bind(d.date_of_birth)
            .bind(d.license_expiry)
            .bind(&d.license_class)
            .bind(d.status)
            .bind(d.safety_score)
            .fetch_one(executor)
            .await
        }
        NewRecord::Trip(t) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO trips (
                    vehicle_id, driver_id, origin, destination,
                    distance_estimated_km, distance_actual_km,
                    cargo_weight_kg, cargo_description, revenue, client_name,
                    invoice_reference, status, dispatched_at, completed_at,
                    cancelled_reason, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                RETURNING id
                "#,
            )
            .bind(t.vehicle_id)
            .bind(t.driver_id)
            .bind(&t.origin)
            .bind(&t.destination)
            .bind(t.distance_estimated_km)
            .bind(t.distance_actual_km)
            .bind(t.cargo_weight_kg)
            .bind(&t.cargo_description)
            .bind(t.revenue)
            .bind(&t.client_name)
            .bind(&t.invoice_reference)
            .bind(t.status)
            .bind(t.dispatched_at)
            .bind(t.completed_at)
            .bind(&t.cancelled_reason)
            .bind(t.created_at)
            .fetch_one(executor)
            .await
        }
        NewRecord::FuelLog(f) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO fuel_logs (
                    vehicle_id, trip_id, liters, cost_per_liter, total_cost,
                    odometer_km, station, logged_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id
                "#,
            )
            .bind(f.vehicle_id)
            .bind(f.trip_id)
            .bind(f.liters)
            .bind(f.cost_per_liter)
            .bind(f.total_cost)
            .bind(f.odometer_km)
            .bind(&f.station)
            .bind(f.logged_at)
            .fetch_one(executor)
            .await
        }
        NewRecord::MaintenanceLog(m) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO maintenance_logs (
                    vehicle_id, service_type, description, cost, odometer_km,
                    technician, shop, service_date, next_service_due
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING id
                "#,
            )
            .bind(m.vehicle_id)
            .bind(m.service_type)
            .bind(&m.description)
            .bind(m.cost)
            .bind(m.odometer_km)
            .bind(&m.technician)
            .bind(&m.shop)
            .bind(m.service_date)
            .bind(m.next_service_due)
            .fetch_one(executor)
            .await
        }
        NewRecord::Expense(e) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO expenses (
                    vehicle_id, trip_id, amount, category, description,
                    logged_by, incurred_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
                "#,
            )
            .bind(e.vehicle_id)
            .bind(e.trip_id)
            .bind(e.amount)
            .bind(e.category)
            .bind(&e.description)
            .bind(e.logged_by)
            .bind(e.incurred_at)
            .fetch_one(executor)
            .await
        }
        NewRecord::IncidentReport(i) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO incident_reports (
                    vehicle_id, driver_id, trip_id, reported_by, incident_type,
                    title, description, incident_date, location, injuries,
                    damage_estimate, status, resolution, resolved_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                RETURNING id
                "#,
            )
            .bind(i.vehicle_id)
            .bind(i.driver_id)
            .bind(i.trip_id)
            .bind(i.reported_by)
            .bind(i.incident_type)
            .bind(&i.title)
            .bind(&i.description)
            .bind(i.incident_date)
            .bind(&i.location)
            .bind(i.injuries)
            .bind(i.damage_estimate)
            .bind(i.status)
            .bind(&i.resolution)
            .bind(i.resolved_at)
            .fetch_one(executor)
            .await
        }
        NewRecord::VehicleDocument(d) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO vehicle_documents (
                    vehicle_id, document_type, document_number, issuer,
                    issued_at, expires_at, is_active
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
                "#,
            )
            .bind(d.vehicle_id)
            .bind(d.document_type)
            .bind(&d.document_number)
            .bind(&d.issuer)
            .bind(d.issued_at)
            .bind(d.expires_at)
            .bind(d.is_active)
            .fetch_one(executor)
            .await
        }
        NewRecord::VehicleLocation(l) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO vehicle_locations (
                    vehicle_id, latitude, longitude, speed_kmh, heading,
                    accuracy_m, recorded_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
                "#,
            )
            .bind(l.vehicle_id)
            .bind(l.latitude)
            .bind(l.longitude)
            .bind(l.speed_kmh)
            .bind(l.heading)
            .bind(l.accuracy_m)
            .bind(l.recorded_at)
            .fetch_one(executor)
            .await
        }
        NewRecord::TripWaypoint(w) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO trip_waypoints (
                    trip_id, sequence, location, latitude, longitude,
                    scheduled_at, arrived_at, departed_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id
                "#,
            )
            .bind(w.trip_id)
            .bind(w.sequence)
            .bind(&w.location)
            .bind(w.latitude)
            .bind(w.longitude)
            .bind(w.scheduled_at)
            .bind(w.arrived_at)
            .bind(w.departed_at)
            .fetch_one(executor)
            .await
        }
        NewRecord::AuditLog(a) => {
            sqlx::query_scalar::<_, RecordId>(
                r#"
                INSERT INTO audit_logs (user_id, entity_name, entity_id, action, payload, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(a.user_id)
            .bind(&a.entity_name)
            .bind(a.entity_id)
            .bind(a.action)
            .bind(Json(&a.payload))
            .bind(a.created_at)
            .fetch_one(executor)
            .await
        }
    }
}
