//! Base fleet: vehicle types, users, vehicles and drivers.
//!
//! Built from fixtures without touching the random generator.

use fleet::auth::hash_password;
use fleet::models::{DriverStatus, UserRole, VehicleStatus, VehicleTypeName};
use time::{Date, Duration};

use crate::db::SeedError;
use crate::random::round_to;
use crate::reference::fixtures::{DRIVERS, USERS, VEHICLE_TYPES, VEHICLES};
use crate::reference::{LicenseClass, TripClass};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVehicleType {
    pub name: VehicleTypeName,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVehicle {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub vin: Option<String>,
    /// Position in [`BaseFleet::vehicle_types`].
    pub vehicle_type: usize,
    pub type_name: VehicleTypeName,
    pub status: VehicleStatus,
    pub odometer_km: f64,
    pub capacity_weight_kg: f64,
    pub capacity_volume_m3: f64,
    pub region: String,
    pub acquisition_cost: f64,
}

impl GeneratedVehicle {
    pub fn trip_class(&self) -> Option<TripClass> {
        TripClass::from_vehicle_type(self.type_name)
    }

    /// Typical distance covered per calendar day.
    pub fn daily_km(&self) -> f64 {
        match self.type_name {
            VehicleTypeName::Truck => 260.0,
            VehicleTypeName::Van => 120.0,
            VehicleTypeName::Bike => 45.0,
            VehicleTypeName::Car => 60.0,
            VehicleTypeName::Plane => 1_800.0,
        }
    }

    /// Back-calculates the odometer reading on `date` from today's reading.
    pub fn odometer_on(&self, date: Date, today: Date) -> f64 {
        let days_ago = (today - date).whole_days().max(0) as f64;
        round_to((self.odometer_km - days_ago * self.daily_km()).max(0.0), 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDriver {
    pub license_number: String,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date_of_birth: Date,
    pub license_expiry: Date,
    pub license_class: LicenseClass,
    pub status: DriverStatus,
    pub safety_score: i32,
}

/// Vehicles and drivers that can run trips of one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPool {
    pub vehicles: Vec<usize>,
    pub drivers: Vec<usize>,
    /// Drivers who are not suspended and hold a license valid today.
    pub dispatchable_drivers: Vec<usize>,
}

/// Selection pools per trip class, in fixture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetPools {
    pub truck: ClassPool,
    pub van: ClassPool,
    pub bike: ClassPool,
    pub plane: ClassPool,
}

impl FleetPools {
    pub fn for_class(&self, class: TripClass) -> &ClassPool {
        match class {
            TripClass::Truck => &self.truck,
            TripClass::Van => &self.van,
            TripClass::Bike => &self.bike,
            TripClass::Plane => &self.plane,
        }
    }

    fn for_class_mut(&mut self, class: TripClass) -> &mut ClassPool {
        match class {
            TripClass::Truck => &mut self.truck,
            TripClass::Van => &mut self.van,
            TripClass::Bike => &mut self.bike,
            TripClass::Plane => &mut self.plane,
        }
    }

    /// Every non-retired vehicle that can run trips, class by class.
    pub fn trip_capable_vehicles(&self) -> Vec<usize> {
        TripClass::ALL
            .iter()
            .flat_map(|class| self.for_class(*class).vehicles.iter().copied())
            .collect()
    }
}

/// Fixture-derived base entities plus the pools the trip loop draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFleet {
    pub vehicle_types: Vec<GeneratedVehicleType>,
    pub users: Vec<GeneratedUser>,
    pub vehicles: Vec<GeneratedVehicle>,
    pub drivers: Vec<GeneratedDriver>,
    pub pools: FleetPools,
}

impl BaseFleet {
    pub fn vehicle_position(&self, plate: &str) -> Result<usize, SeedError> {
        self.vehicles
            .iter()
            .position(|v| v.license_plate == plate)
            .ok_or_else(|| SeedError::UnknownFixture(format!("vehicle {plate}")))
    }

    pub fn driver_position(&self, license: &str) -> Result<usize, SeedError> {
        self.drivers
            .iter()
            .position(|d| d.license_number == license)
            .ok_or_else(|| SeedError::UnknownFixture(format!("driver {license}")))
    }

    pub fn user_position(&self, email: &str) -> Result<usize, SeedError> {
        self.users
            .iter()
            .position(|u| u.email == email)
            .ok_or_else(|| SeedError::UnknownFixture(format!("user {email}")))
    }

    /// First active user holding `role`.
    pub fn first_active(&self, role: UserRole) -> Result<usize, SeedError> {
        self.users
            .iter()
            .position(|u| u.role == role && u.is_active)
            .ok_or(SeedError::MissingRole(role))
    }
}

/// Deterministic argon2 salt for a user, derived from the email.
fn user_salt(email: &str) -> [u8; 16] {
    let mut salt = [b'.'; 16];
    for (slot, byte) in salt.iter_mut().zip(email.bytes()) {
        *slot = byte;
    }
    salt
}

/// Builds the base fleet from fixtures.
pub struct FleetGenerator {
    password: String,
}

impl FleetGenerator {
    /// Creates a generator that gives every user the default password.
    pub fn new() -> Self {
        Self {
            password: "fleetops123".to_string(),
        }
    }

    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Generates the base fleet. `today` anchors license expiry dates.
    pub fn generate(&self, today: Date) -> Result<BaseFleet, SeedError> {
        let vehicle_types: Vec<GeneratedVehicleType> = VEHICLE_TYPES
            .iter()
            .map(|t| GeneratedVehicleType {
                name: t.name,
                description: t.description.to_string(),
            })
            .collect();

        let users = USERS
            .iter()
            .map(|u| {
                Ok(GeneratedUser {
                    email: u.email.to_string(),
                    password_hash: hash_password(&self.password, &user_salt(u.email))?,
                    full_name: u.full_name.to_string(),
                    role: u.role,
                    is_active: u.is_active,
                })
            })
            .collect::<Result<Vec<_>, SeedError>>()?;

        let vehicles = VEHICLES
            .iter()
            .map(|v| {
                let vehicle_type = vehicle_types
                    .iter()
                    .position(|t| t.name == v.vehicle_type)
                    .ok_or_else(|| {
                        SeedError::UnknownFixture(format!("vehicle type {}", v.vehicle_type.as_str()))
                    })?;
                Ok(GeneratedVehicle {
                    license_plate: v.license_plate.to_string(),
                    make: v.make.to_string(),
                    model: v.model.to_string(),
                    year: v.year,
                    color: v.color.to_string(),
                    vin: v.vin.map(str::to_string),
                    vehicle_type,
                    type_name: v.vehicle_type,
                    status: v.status,
                    odometer_km: v.odometer_km,
                    capacity_weight_kg: v.capacity_weight_kg,
                    capacity_volume_m3: v.capacity_volume_m3,
                    region: v.region.to_string(),
                    acquisition_cost: v.acquisition_cost,
                })
            })
            .collect::<Result<Vec<_>, SeedError>>()?;

        let drivers: Vec<GeneratedDriver> = DRIVERS
            .iter()
            .map(|d| GeneratedDriver {
                license_number: d.license_number.to_string(),
                full_name: d.full_name.to_string(),
                phone: d.phone.to_string(),
                email: d.email.map(str::to_string),
                date_of_birth: d.date_of_birth,
                license_expiry: today + Duration::days(d.license_expires_in_days),
                license_class: d.license_class,
                status: d.status,
                safety_score: d.safety_score,
            })
            .collect();

        let pools = build_pools(&vehicles, &drivers, today);

        Ok(BaseFleet {
            vehicle_types,
            users,
            vehicles,
            drivers,
            pools,
        })
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn build_pools(
    vehicles: &[GeneratedVehicle],
    drivers: &[GeneratedDriver],
    today: Date,
) -> FleetPools {
    let mut pools = FleetPools::default();

    for (position, vehicle) in vehicles.iter().enumerate() {
        if vehicle.status == VehicleStatus::Retired {
            continue;
        }
        if let Some(class) = vehicle.trip_class() {
            pools.for_class_mut(class).vehicles.push(position);
        }
    }

    for (position, driver) in drivers.iter().enumerate() {
        let dispatchable =
            driver.status != DriverStatus::Suspended && driver.license_expiry >= today;
        for class in TripClass::ALL {
            if driver.license_class.serves(class) {
                let pool = pools.for_class_mut(class);
                pool.drivers.push(position);
                if dispatchable {
                    pool.dispatchable_drivers.push(position);
                }
            }
        }
    }

    pools
}
