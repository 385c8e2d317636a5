//! Maintenance history per vehicle.

use fleet::models::{MaintenanceServiceType, VehicleStatus};
use time::{Date, Duration};

use super::base::BaseFleet;
use crate::random::SeededRandom;
use crate::reference::catalog::{
    MAINTENANCE_SHOPS, SERVICE_SPECS, ServiceSpec, TECHNICIANS, service_spec,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMaintenanceLog {
    pub vehicle: usize,
    pub service_type: MaintenanceServiceType,
    pub description: String,
    pub cost: f64,
    pub odometer_km: f64,
    pub technician: String,
    pub shop: String,
    pub service_date: Date,
    pub next_service_due: Option<Date>,
}

/// Description of the inspection that put an in-shop vehicle off the road.
const HELD_FOR_INSPECTION: &str = "Brake pads worn beyond limit; vehicle held for inspection";
/// Days until a held vehicle's next brake inspection.
const HELD_NEXT_DUE_DAYS: i64 = 180;

pub struct MaintenanceGenerator;

impl MaintenanceGenerator {
    /// Generates 3 to 8 past services per active vehicle, then the open
    /// brake inspection of every vehicle currently in the shop.
    pub fn generate(
        fleet: &BaseFleet,
        today: Date,
        rng: &mut SeededRandom,
    ) -> Vec<GeneratedMaintenanceLog> {
        let mut logs = Vec::new();

        for (position, vehicle) in fleet.vehicles.iter().enumerate() {
            if vehicle.status == VehicleStatus::Retired {
                continue;
            }
            let count = rng.random_int(3, 8);
            for _ in 0..count {
                let spec = rng.pick(SERVICE_SPECS);
                let days_ago = rng.random_int(7, 360);
                let service_date = today - Duration::days(days_ago);
                logs.push(Self::service(position, fleet, spec, service_date, today, rng));
            }
        }

        for (position, vehicle) in fleet.vehicles.iter().enumerate() {
            if vehicle.status != VehicleStatus::InShop {
                continue;
            }
            let spec = service_spec(MaintenanceServiceType::BrakeInspection);
            let mut log = Self::service(position, fleet, spec, today - Duration::days(1), today, rng);
            log.description = HELD_FOR_INSPECTION.to_string();
            log.next_service_due = Some(today + Duration::days(HELD_NEXT_DUE_DAYS));
            logs.push(log);
        }

        logs
    }

    /// Draws cost, shop and technician for one service.
    fn service(
        vehicle: usize,
        fleet: &BaseFleet,
        spec: &ServiceSpec,
        service_date: Date,
        today: Date,
        rng: &mut SeededRandom,
    ) -> GeneratedMaintenanceLog {
        let (min_cost, max_cost) = spec.cost_range;
        let cost = rng.random_float(min_cost, max_cost, 2);
        let shop = rng.pick(MAINTENANCE_SHOPS);
        let technician = rng.pick(TECHNICIANS);

        GeneratedMaintenanceLog {
            vehicle,
            service_type: spec.service_type,
            description: spec.description.to_string(),
            cost,
            odometer_km: fleet.vehicles[vehicle].odometer_on(service_date, today),
            technician: technician.to_string(),
            shop: shop.to_string(),
            service_date,
            next_service_due: spec.interval_days.map(|days| service_date + Duration::days(days)),
        }
    }
}
