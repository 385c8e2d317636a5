//! Trip classes and their operating parameters.

use fleet::models::VehicleTypeName;

use super::routes::RouteKind;

/// Vehicle class that can run trips. Cars are pool vehicles and never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TripClass {
    Truck,
    Van,
    Bike,
    Plane,
}

impl TripClass {
    pub const ALL: [TripClass; 4] = [
        TripClass::Truck,
        TripClass::Van,
        TripClass::Bike,
        TripClass::Plane,
    ];

    /// Maps a draw in [0, 1) onto the class mix: 55% trucks, 25% vans,
    /// 12% bikes, 8% planes.
    pub fn from_draw(draw: f64) -> Self {
        if draw <= 0.55 {
            TripClass::Truck
        } else if draw <= 0.80 {
            TripClass::Van
        } else if draw <= 0.92 {
            TripClass::Bike
        } else {
            TripClass::Plane
        }
    }

    pub fn from_vehicle_type(name: VehicleTypeName) -> Option<Self> {
        match name {
            VehicleTypeName::Truck => Some(TripClass::Truck),
            VehicleTypeName::Van => Some(TripClass::Van),
            VehicleTypeName::Bike => Some(TripClass::Bike),
            VehicleTypeName::Plane => Some(TripClass::Plane),
            VehicleTypeName::Car => None,
        }
    }

    pub fn vehicle_type(&self) -> VehicleTypeName {
        match self {
            TripClass::Truck => VehicleTypeName::Truck,
            TripClass::Van => VehicleTypeName::Van,
            TripClass::Bike => VehicleTypeName::Bike,
            TripClass::Plane => VehicleTypeName::Plane,
        }
    }

    pub fn route_kind(&self) -> RouteKind {
        match self {
            TripClass::Truck | TripClass::Van => RouteKind::Road,
            TripClass::Bike => RouteKind::Urban,
            TripClass::Plane => RouteKind::Air,
        }
    }

    /// Cargo weight range in kg, inclusive.
    pub fn cargo_range_kg(&self) -> (i64, i64) {
        match self {
            TripClass::Truck => (2_000, 18_000),
            TripClass::Van => (300, 1_500),
            TripClass::Bike => (2, 25),
            TripClass::Plane => (800, 9_000),
        }
    }

    /// Billing rate band in INR per km. Long hauls bill at a higher band.
    pub fn rate_per_km(&self, distance_km: f64) -> (f64, f64) {
        let long_haul = distance_km > 500.0;
        match (self, long_haul) {
            (TripClass::Truck, false) => (38.0, 48.0),
            (TripClass::Truck, true) => (45.0, 58.0),
            (TripClass::Van, false) => (22.0, 30.0),
            (TripClass::Van, true) => (26.0, 34.0),
            (TripClass::Bike, _) => (12.0, 18.0),
            (TripClass::Plane, false) => (160.0, 210.0),
            (TripClass::Plane, true) => (190.0, 260.0),
        }
    }

    /// Fuel consumption band in liters per 100 km.
    pub fn consumption_per_100km(&self) -> (f64, f64) {
        match self {
            TripClass::Truck => (28.0, 36.0),
            TripClass::Van => (11.0, 15.0),
            TripClass::Bike => (2.2, 3.2),
            TripClass::Plane => (240.0, 420.0),
        }
    }

    /// Price band per liter: diesel, petrol or aviation turbine fuel.
    pub fn fuel_price_per_liter(&self) -> (f64, f64) {
        match self {
            TripClass::Truck | TripClass::Van => (87.5, 94.5),
            TripClass::Bike => (100.0, 106.5),
            TripClass::Plane => (92.0, 112.0),
        }
    }

    /// Volume of an en-route top-up in liters.
    pub fn top_up_liters(&self) -> (f64, f64) {
        match self {
            TripClass::Truck => (60.0, 180.0),
            TripClass::Van => (20.0, 45.0),
            TripClass::Bike => (3.0, 8.0),
            TripClass::Plane => (800.0, 2_500.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_bands() {
        assert_eq!(TripClass::from_draw(0.0), TripClass::Truck);
        assert_eq!(TripClass::from_draw(0.55), TripClass::Truck);
        assert_eq!(TripClass::from_draw(0.5500001), TripClass::Van);
        assert_eq!(TripClass::from_draw(0.80), TripClass::Van);
        assert_eq!(TripClass::from_draw(0.92), TripClass::Bike);
        assert_eq!(TripClass::from_draw(0.93), TripClass::Plane);
    }

    #[test]
    fn test_cars_take_no_trips() {
        assert_eq!(TripClass::from_vehicle_type(VehicleTypeName::Car), None);
        for class in TripClass::ALL {
            assert_eq!(TripClass::from_vehicle_type(class.vehicle_type()), Some(class));
        }
    }

    #[test]
    fn test_long_haul_rates_are_higher() {
        for class in [TripClass::Truck, TripClass::Van, TripClass::Plane] {
            let short = class.rate_per_km(300.0);
            let long = class.rate_per_km(800.0);
            assert!(long.0 > short.0);
        }
    }
}
