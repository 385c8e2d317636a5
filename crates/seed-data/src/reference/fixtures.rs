//! Hand-specified base records.
//!
//! These are inserted verbatim on every run and consume no random draws.
//! Dates that must stay meaningful whatever day the seeder runs are given
//! relative to the run's anchor.

use fleet::models::{AuditAction, DriverStatus, UserRole, VehicleStatus, VehicleTypeName};
use time::Date;
use time::macros::date;

use super::classes::TripClass;

/// Driving license category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseClass {
    /// Heavy motor vehicle.
    Hmv,
    /// Light motor vehicle.
    Lmv,
    /// Motorcycle with gear.
    Mcwg,
    /// Commercial pilot license.
    Cpl,
}

impl LicenseClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseClass::Hmv => "HMV",
            LicenseClass::Lmv => "LMV",
            LicenseClass::Mcwg => "MCWG",
            LicenseClass::Cpl => "CPL",
        }
    }

    /// Whether a holder may drive (or fly) vehicles of `class`.
    pub fn serves(&self, class: TripClass) -> bool {
        matches!(
            (self, class),
            (LicenseClass::Hmv, TripClass::Truck | TripClass::Van)
                | (LicenseClass::Lmv, TripClass::Van)
                | (LicenseClass::Mcwg, TripClass::Bike)
                | (LicenseClass::Cpl, TripClass::Plane)
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VehicleTypeFixture {
    pub name: VehicleTypeName,
    pub description: &'static str,
}

pub const VEHICLE_TYPES: &[VehicleTypeFixture] = &[
    VehicleTypeFixture {
        name: VehicleTypeName::Truck,
        description: "Heavy and medium goods vehicles for intercity freight",
    },
    VehicleTypeFixture {
        name: VehicleTypeName::Van,
        description: "Light commercial vehicles for regional distribution",
    },
    VehicleTypeFixture {
        name: VehicleTypeName::Bike,
        description: "Two-wheelers for last-mile urban delivery",
    },
    VehicleTypeFixture {
        name: VehicleTypeName::Car,
        description: "Pool cars for staff and site visits",
    },
    VehicleTypeFixture {
        name: VehicleTypeName::Plane,
        description: "Freighter aircraft for express air cargo",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct UserFixture {
    pub email: &'static str,
    pub full_name: &'static str,
    pub role: UserRole,
    pub is_active: bool,
}

pub const USERS: &[UserFixture] = &[
    UserFixture {
        email: "manager@fleetops.io",
        full_name: "Aarav Mehta",
        role: UserRole::Manager,
        is_active: true,
    },
    UserFixture {
        email: "dispatch@fleetops.io",
        full_name: "Priya Nair",
        role: UserRole::Dispatcher,
        is_active: true,
    },
    UserFixture {
        email: "safety@fleetops.io",
        full_name: "Rohan Desai",
        role: UserRole::SafetyOfficer,
        is_active: true,
    },
    UserFixture {
        email: "finance@fleetops.io",
        full_name: "Kavya Iyer",
        role: UserRole::FinanceAnalyst,
        is_active: true,
    },
    UserFixture {
        email: "vikram.singh@fleetops.io",
        full_name: "Vikram Singh",
        role: UserRole::Dispatcher,
        is_active: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct VehicleFixture {
    pub license_plate: &'static str,
    pub make: &'static str,
    pub model: &'static str,
    pub year: i32,
    pub color: &'static str,
    pub vin: Option<&'static str>,
    pub vehicle_type: VehicleTypeName,
    pub status: VehicleStatus,
    pub odometer_km: f64,
    pub capacity_weight_kg: f64,
    pub capacity_volume_m3: f64,
    pub region: &'static str,
    pub acquisition_cost: f64,
}

pub const VEHICLES: &[VehicleFixture] = &[
    // Trucks
    VehicleFixture {
        license_plate: "MH-04-AB-1234",
        make: "Tata",
        model: "Prima 5530.S",
        year: 2021,
        color: "White",
        vin: Some("MAT448102M3B12345"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::Available,
        odometer_km: 184_320.0,
        capacity_weight_kg: 40_000.0,
        capacity_volume_m3: 72.0,
        region: "West",
        acquisition_cost: 4_250_000.0,
    },
    VehicleFixture {
        license_plate: "MH-12-CD-5678",
        make: "Ashok Leyland",
        model: "4220",
        year: 2020,
        color: "Blue",
        vin: Some("MB1CAHCD0LPA56789"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::OnTrip,
        odometer_km: 226_540.0,
        capacity_weight_kg: 42_000.0,
        capacity_volume_m3: 75.0,
        region: "West",
        acquisition_cost: 4_600_000.0,
    },
    VehicleFixture {
        license_plate: "DL-01-GH-4521",
        make: "BharatBenz",
        model: "3523R",
        year: 2022,
        color: "Red",
        vin: Some("MEC0535RANP045211"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::Available,
        odometer_km: 118_760.0,
        capacity_weight_kg: 35_000.0,
        capacity_volume_m3: 65.0,
        region: "North",
        acquisition_cost: 4_950_000.0,
    },
    VehicleFixture {
        license_plate: "KA-01-JK-7788",
        make: "Eicher",
        model: "Pro 6037",
        year: 2019,
        color: "Silver",
        vin: Some("MC2PRO60KKA077880"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::InShop,
        odometer_km: 301_220.0,
        capacity_weight_kg: 37_000.0,
        capacity_volume_m3: 66.0,
        region: "South",
        acquisition_cost: 3_880_000.0,
    },
    VehicleFixture {
        license_plate: "TN-09-LM-3344",
        make: "Tata",
        model: "Signa 4825.TK",
        year: 2023,
        color: "Yellow",
        vin: Some("MAT482501P3L33441"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::Available,
        odometer_km: 64_210.0,
        capacity_weight_kg: 48_000.0,
        capacity_volume_m3: 28.0,
        region: "South",
        acquisition_cost: 5_200_000.0,
    },
    VehicleFixture {
        license_plate: "GJ-01-NP-9090",
        make: "Ashok Leyland",
        model: "Ecomet 1615",
        year: 2021,
        color: "White",
        vin: Some("MB1ECM16MNPA90901"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::Available,
        odometer_km: 142_800.0,
        capacity_weight_kg: 16_000.0,
        capacity_volume_m3: 42.0,
        region: "West",
        acquisition_cost: 2_450_000.0,
    },
    VehicleFixture {
        license_plate: "MH-04-QR-2211",
        make: "Tata",
        model: "LPT 1613",
        year: 2012,
        color: "Blue",
        vin: None,
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::Retired,
        odometer_km: 689_450.0,
        capacity_weight_kg: 16_000.0,
        capacity_volume_m3: 40.0,
        region: "West",
        acquisition_cost: 1_450_000.0,
    },
    VehicleFixture {
        license_plate: "MH-04-OP-1122",
        make: "Tata",
        model: "LPT 1918",
        year: 2022,
        color: "White",
        vin: Some("MAT191802N3P11221"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::Available,
        odometer_km: 98_650.0,
        capacity_weight_kg: 19_000.0,
        capacity_volume_m3: 45.0,
        region: "West",
        acquisition_cost: 2_850_000.0,
    },
    VehicleFixture {
        license_plate: "UP-32-ST-6655",
        make: "Mahindra",
        model: "Blazo X 35",
        year: 2023,
        color: "Orange",
        vin: Some("MA1BLZ35PST665501"),
        vehicle_type: VehicleTypeName::Truck,
        status: VehicleStatus::OnTrip,
        odometer_km: 55_430.0,
        capacity_weight_kg: 35_000.0,
        capacity_volume_m3: 68.0,
        region: "North",
        acquisition_cost: 4_400_000.0,
    },
    // Vans
    VehicleFixture {
        license_plate: "MH-12-ST-5566",
        make: "Tata",
        model: "Winger Cargo",
        year: 2022,
        color: "White",
        vin: Some("MAT626012N2S55661"),
        vehicle_type: VehicleTypeName::Van,
        status: VehicleStatus::Available,
        odometer_km: 48_760.0,
        capacity_weight_kg: 1_500.0,
        capacity_volume_m3: 12.0,
        region: "West",
        acquisition_cost: 1_650_000.0,
    },
    VehicleFixture {
        license_plate: "MH-02-UV-3412",
        make: "Mahindra",
        model: "Supro Maxitruck",
        year: 2021,
        color: "Silver",
        vin: Some("MA1SUP21MUV34121"),
        vehicle_type: VehicleTypeName::Van,
        status: VehicleStatus::OnTrip,
        odometer_km: 62_300.0,
        capacity_weight_kg: 1_000.0,
        capacity_volume_m3: 6.0,
        region: "West",
        acquisition_cost: 780_000.0,
    },
    VehicleFixture {
        license_plate: "KA-05-WX-8821",
        make: "Maruti Suzuki",
        model: "Eeco Cargo",
        year: 2020,
        color: "White",
        vin: None,
        vehicle_type: VehicleTypeName::Van,
        status: VehicleStatus::InShop,
        odometer_km: 88_240.0,
        capacity_weight_kg: 700.0,
        capacity_volume_m3: 3.5,
        region: "South",
        acquisition_cost: 520_000.0,
    },
    VehicleFixture {
        license_plate: "DL-03-YZ-1407",
        make: "Force",
        model: "Traveller Delivery Van",
        year: 2016,
        color: "White",
        vin: None,
        vehicle_type: VehicleTypeName::Van,
        status: VehicleStatus::Retired,
        odometer_km: 215_670.0,
        capacity_weight_kg: 1_800.0,
        capacity_volume_m3: 13.0,
        region: "North",
        acquisition_cost: 1_350_000.0,
    },
    VehicleFixture {
        license_plate: "TS-09-AB-5190",
        make: "Ashok Leyland",
        model: "Dost+",
        year: 2023,
        color: "Blue",
        vin: Some("MB1DST23PAB51901"),
        vehicle_type: VehicleTypeName::Van,
        status: VehicleStatus::Available,
        odometer_km: 21_890.0,
        capacity_weight_kg: 1_500.0,
        capacity_volume_m3: 8.0,
        region: "South",
        acquisition_cost: 850_000.0,
    },
    VehicleFixture {
        license_plate: "GJ-05-CD-7302",
        make: "Tata",
        model: "Ace Gold",
        year: 2022,
        color: "White",
        vin: Some("MAT445GLD2CD73021"),
        vehicle_type: VehicleTypeName::Van,
        status: VehicleStatus::Available,
        odometer_km: 37_420.0,
        capacity_weight_kg: 750.0,
        capacity_volume_m3: 4.0,
        region: "West",
        acquisition_cost: 590_000.0,
    },
    // Bikes
    VehicleFixture {
        license_plate: "MH-12-EF-7878",
        make: "Hero",
        model: "Splendor Plus",
        year: 2022,
        color: "Black",
        vin: None,
        vehicle_type: VehicleTypeName::Bike,
        status: VehicleStatus::Available,
        odometer_km: 24_560.0,
        capacity_weight_kg: 150.0,
        capacity_volume_m3: 0.12,
        region: "West",
        acquisition_cost: 78_000.0,
    },
    VehicleFixture {
        license_plate: "MH-01-GH-2345",
        make: "Bajaj",
        model: "Pulsar 150",
        year: 2021,
        color: "Red",
        vin: None,
        vehicle_type: VehicleTypeName::Bike,
        status: VehicleStatus::OnTrip,
        odometer_km: 38_210.0,
        capacity_weight_kg: 150.0,
        capacity_volume_m3: 0.12,
        region: "West",
        acquisition_cost: 115_000.0,
    },
    VehicleFixture {
        license_plate: "KA-03-IJ-6789",
        make: "TVS",
        model: "Apache RTR 160",
        year: 2023,
        color: "Blue",
        vin: None,
        vehicle_type: VehicleTypeName::Bike,
        status: VehicleStatus::Available,
        odometer_km: 12_480.0,
        capacity_weight_kg: 150.0,
        capacity_volume_m3: 0.1,
        region: "South",
        acquisition_cost: 125_000.0,
    },
    VehicleFixture {
        license_plate: "DL-08-KL-9012",
        make: "Honda",
        model: "Shine",
        year: 2020,
        color: "Grey",
        vin: None,
        vehicle_type: VehicleTypeName::Bike,
        status: VehicleStatus::Available,
        odometer_km: 45_390.0,
        capacity_weight_kg: 150.0,
        capacity_volume_m3: 0.1,
        region: "North",
        acquisition_cost: 82_000.0,
    },
    // Aircraft
    VehicleFixture {
        license_plate: "VT-FLX",
        make: "ATR",
        model: "72-600F",
        year: 2016,
        color: "White",
        vin: Some("MSN-1324"),
        vehicle_type: VehicleTypeName::Plane,
        status: VehicleStatus::Available,
        odometer_km: 1_854_200.0,
        capacity_weight_kg: 8_500.0,
        capacity_volume_m3: 75.0,
        region: "Air",
        acquisition_cost: 1_450_000_000.0,
    },
    VehicleFixture {
        license_plate: "VT-FLY",
        make: "Boeing",
        model: "737-800BCF",
        year: 2008,
        color: "White",
        vin: Some("MSN-30153"),
        vehicle_type: VehicleTypeName::Plane,
        status: VehicleStatus::Available,
        odometer_km: 9_642_700.0,
        capacity_weight_kg: 23_000.0,
        capacity_volume_m3: 141.0,
        region: "Air",
        acquisition_cost: 2_350_000_000.0,
    },
    // Pool cars
    VehicleFixture {
        license_plate: "MH-01-MN-4455",
        make: "Toyota",
        model: "Innova Crysta",
        year: 2021,
        color: "Silver",
        vin: Some("MBJ11JV4MMN445501"),
        vehicle_type: VehicleTypeName::Car,
        status: VehicleStatus::Available,
        odometer_km: 72_340.0,
        capacity_weight_kg: 500.0,
        capacity_volume_m3: 2.5,
        region: "West",
        acquisition_cost: 2_150_000.0,
    },
    VehicleFixture {
        license_plate: "KA-51-OP-6677",
        make: "Mahindra",
        model: "XUV700",
        year: 2022,
        color: "Black",
        vin: Some("MA1XUV70NOP667701"),
        vehicle_type: VehicleTypeName::Car,
        status: VehicleStatus::Available,
        odometer_km: 41_230.0,
        capacity_weight_kg: 500.0,
        capacity_volume_m3: 2.2,
        region: "South",
        acquisition_cost: 2_400_000.0,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct DriverFixture {
    pub license_number: &'static str,
    pub full_name: &'static str,
    pub phone: &'static str,
    pub email: Option<&'static str>,
    pub date_of_birth: Date,
    /// License expiry relative to the anchor date; negative means expired.
    pub license_expires_in_days: i64,
    pub license_class: LicenseClass,
    pub status: DriverStatus,
    pub safety_score: i32,
}

pub const DRIVERS: &[DriverFixture] = &[
    DriverFixture {
        license_number: "MH0420150012345",
        full_name: "Rajesh Kumar",
        phone: "+91 98200 11223",
        email: Some("rajesh.kumar@fleetops.io"),
        date_of_birth: date!(1982 - 04 - 14),
        license_expires_in_days: 1_460,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OnDuty,
        safety_score: 92,
    },
    DriverFixture {
        license_number: "MH1220160023456",
        full_name: "Suresh Patil",
        phone: "+91 98220 34567",
        email: None,
        date_of_birth: date!(1979 - 11 - 02),
        license_expires_in_days: 980,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OnTrip,
        safety_score: 88,
    },
    DriverFixture {
        license_number: "DL0120140034567",
        full_name: "Harpreet Singh",
        phone: "+91 98110 45678",
        email: Some("harpreet.singh@fleetops.io"),
        date_of_birth: date!(1985 - 07 - 21),
        license_expires_in_days: 720,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OnDuty,
        safety_score: 95,
    },
    DriverFixture {
        license_number: "KA0120170045678",
        full_name: "Manjunath Gowda",
        phone: "+91 98450 56789",
        email: None,
        date_of_birth: date!(1988 - 01 - 30),
        license_expires_in_days: 540,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OffDuty,
        safety_score: 81,
    },
    DriverFixture {
        license_number: "TN0920180056789",
        full_name: "Murugan Selvam",
        phone: "+91 98410 67890",
        email: None,
        date_of_birth: date!(1983 - 09 - 09),
        license_expires_in_days: 1_200,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OnDuty,
        safety_score: 86,
    },
    DriverFixture {
        license_number: "UP3220150067890",
        full_name: "Manoj Yadav",
        phone: "+91 94150 78901",
        email: None,
        date_of_birth: date!(1986 - 12 - 18),
        license_expires_in_days: 5,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OnTrip,
        safety_score: 79,
    },
    DriverFixture {
        license_number: "GJ0120130078901",
        full_name: "Anil Chauhan",
        phone: "+91 98250 89012",
        email: None,
        date_of_birth: date!(1977 - 03 - 05),
        license_expires_in_days: -12,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::Suspended,
        safety_score: 64,
    },
    DriverFixture {
        license_number: "MH0420190089012",
        full_name: "Deepak Jadhav",
        phone: "+91 99300 90123",
        email: Some("deepak.jadhav@fleetops.io"),
        date_of_birth: date!(1990 - 06 - 25),
        license_expires_in_days: 1_650,
        license_class: LicenseClass::Hmv,
        status: DriverStatus::OnDuty,
        safety_score: 90,
    },
    DriverFixture {
        license_number: "MH1220200090123",
        full_name: "Sneha Kulkarni",
        phone: "+91 99220 01234",
        email: Some("sneha.kulkarni@fleetops.io"),
        date_of_birth: date!(1994 - 02 - 11),
        license_expires_in_days: 2_100,
        license_class: LicenseClass::Lmv,
        status: DriverStatus::OnDuty,
        safety_score: 97,
    },
    DriverFixture {
        license_number: "KA0520190001234",
        full_name: "Imran Sheikh",
        phone: "+91 99860 12345",
        email: None,
        date_of_birth: date!(1991 - 08 - 17),
        license_expires_in_days: 1_320,
        license_class: LicenseClass::Lmv,
        status: DriverStatus::OnTrip,
        safety_score: 84,
    },
    DriverFixture {
        license_number: "TS0920210012345",
        full_name: "Lakshmi Reddy",
        phone: "+91 99490 23456",
        email: Some("lakshmi.reddy@fleetops.io"),
        date_of_birth: date!(1993 - 05 - 03),
        license_expires_in_days: 2_400,
        license_class: LicenseClass::Lmv,
        status: DriverStatus::Suspended,
        safety_score: 91,
    },
    DriverFixture {
        license_number: "MH1220210023456",
        full_name: "Ravi Teja",
        phone: "+91 97650 34567",
        email: None,
        date_of_birth: date!(1997 - 10 - 12),
        license_expires_in_days: 2_800,
        license_class: LicenseClass::Mcwg,
        status: DriverStatus::OnDuty,
        safety_score: 89,
    },
    DriverFixture {
        license_number: "MH0120200034567",
        full_name: "Farhan Qureshi",
        phone: "+91 97690 45678",
        email: None,
        date_of_birth: date!(1996 - 01 - 22),
        license_expires_in_days: 2_500,
        license_class: LicenseClass::Mcwg,
        status: DriverStatus::OnTrip,
        safety_score: 83,
    },
    DriverFixture {
        license_number: "DL0820220045678",
        full_name: "Pooja Sharma",
        phone: "+91 98710 56789",
        email: Some("pooja.sharma@fleetops.io"),
        date_of_birth: date!(1998 - 07 - 07),
        license_expires_in_days: 3_100,
        license_class: LicenseClass::Mcwg,
        status: DriverStatus::OnDuty,
        safety_score: 93,
    },
    DriverFixture {
        license_number: "CPL-IN-2011-0457",
        full_name: "Capt. Arjun Menon",
        phone: "+91 98470 67890",
        email: Some("arjun.menon@fleetops.io"),
        date_of_birth: date!(1980 - 02 - 28),
        license_expires_in_days: 640,
        license_class: LicenseClass::Cpl,
        status: DriverStatus::OnDuty,
        safety_score: 98,
    },
    DriverFixture {
        license_number: "CPL-IN-2014-0832",
        full_name: "Capt. Neha Kapoor",
        phone: "+91 98180 78901",
        email: Some("neha.kapoor@fleetops.io"),
        date_of_birth: date!(1984 - 12 - 01),
        license_expires_in_days: 410,
        license_class: LicenseClass::Cpl,
        status: DriverStatus::OffDuty,
        safety_score: 96,
    },
];

/// A trip completed a few hours before the anchor.
#[derive(Debug, Clone, Copy)]
pub struct TodayTripFixture {
    pub vehicle_plate: &'static str,
    pub driver_license: &'static str,
    /// Position in [`super::ROUTES`].
    pub route: usize,
    pub dispatched_minutes_ago: i64,
    pub duration_minutes: i64,
    pub cargo_weight_kg: f64,
    pub cargo_description: &'static str,
    pub client_name: &'static str,
    pub revenue: f64,
}

pub const TODAY_TRIPS: &[TodayTripFixture] = &[
    TodayTripFixture {
        vehicle_plate: "MH-12-EF-7878",
        driver_license: "MH1220210023456",
        route: 20,
        dispatched_minutes_ago: 180,
        duration_minutes: 50,
        cargo_weight_kg: 12.0,
        cargo_description: "Documents and courier packets",
        client_name: "Blue Dart Express",
        revenue: 240.0,
    },
    TodayTripFixture {
        vehicle_plate: "MH-12-ST-5566",
        driver_license: "MH1220200090123",
        route: 0,
        dispatched_minutes_ago: 300,
        duration_minutes: 170,
        cargo_weight_kg: 1_150.0,
        cargo_description: "Pharmaceutical supplies",
        client_name: "Apollo Pharmacy",
        revenue: 4_050.0,
    },
    TodayTripFixture {
        vehicle_plate: "MH-04-OP-1122",
        driver_license: "MH0420150012345",
        route: 16,
        dispatched_minutes_ago: 240,
        duration_minutes: 110,
        cargo_weight_kg: 9_800.0,
        cargo_description: "FMCG cartons",
        client_name: "Hindustan Unilever",
        revenue: 3_960.0,
    },
];

/// Record an audit entry points at.
#[derive(Debug, Clone, Copy)]
pub enum AuditTargetRef {
    Vehicle(&'static str),
    Driver(&'static str),
    User(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct AuditFixture {
    pub actor_email: &'static str,
    pub target: AuditTargetRef,
    pub action: AuditAction,
    pub hours_ago: i64,
    pub changes: &'static [(&'static str, &'static str)],
}

pub const AUDIT_ENTRIES: &[AuditFixture] = &[
    AuditFixture {
        actor_email: "manager@fleetops.io",
        target: AuditTargetRef::Vehicle("VT-FLY"),
        action: AuditAction::Create,
        hours_ago: 720,
        changes: &[("license_plate", "VT-FLY"), ("status", "AVAILABLE")],
    },
    AuditFixture {
        actor_email: "finance@fleetops.io",
        target: AuditTargetRef::Vehicle("DL-01-GH-4521"),
        action: AuditAction::Update,
        hours_ago: 500,
        changes: &[("acquisition_cost", "4950000")],
    },
    AuditFixture {
        actor_email: "safety@fleetops.io",
        target: AuditTargetRef::Driver("GJ0120130078901"),
        action: AuditAction::StatusChange,
        hours_ago: 280,
        changes: &[
            ("from", "ON_DUTY"),
            ("to", "SUSPENDED"),
            ("reason", "Driving license expired"),
        ],
    },
    AuditFixture {
        actor_email: "manager@fleetops.io",
        target: AuditTargetRef::User("vikram.singh@fleetops.io"),
        action: AuditAction::Update,
        hours_ago: 200,
        changes: &[("is_active", "false")],
    },
    AuditFixture {
        actor_email: "manager@fleetops.io",
        target: AuditTargetRef::Vehicle("KA-01-JK-7788"),
        action: AuditAction::StatusChange,
        hours_ago: 26,
        changes: &[
            ("from", "AVAILABLE"),
            ("to", "IN_SHOP"),
            ("reason", "Brake pads worn beyond limit"),
        ],
    },
    AuditFixture {
        actor_email: "dispatch@fleetops.io",
        target: AuditTargetRef::Vehicle("MH-12-CD-5678"),
        action: AuditAction::StatusChange,
        hours_ago: 6,
        changes: &[("from", "AVAILABLE"), ("to", "ON_TRIP")],
    },
];
