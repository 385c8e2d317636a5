//! Pick-lists and lookup tables.

use fleet::models::{MaintenanceServiceType, VehicleDocumentType, VehicleTypeName};

use super::routes::GeoPoint;

pub const CLIENTS: &[&str] = &[
    "Reliance Retail",
    "Tata Consumer Products",
    "Hindustan Unilever",
    "Asian Paints",
    "Flipkart Logistics",
    "Amazon Transportation Services",
    "Mahindra Logistics",
    "Dabur India",
    "Godrej Consumer Products",
    "UltraTech Cement",
    "Blue Dart Express",
    "Apollo Pharmacy",
];

pub const CARGO_DESCRIPTIONS: &[&str] = &[
    "FMCG cartons",
    "Packaged foodgrains",
    "Paint drums",
    "Electronics consignment",
    "Pharmaceutical supplies",
    "Cement bags",
    "Textile bales",
    "Auto spare parts",
    "E-commerce parcels",
    "Ceramic tiles",
    "Steel coils",
    "Documents and courier packets",
];

pub const FUEL_STATIONS: &[&str] = &[
    "Indian Oil, Khalapur",
    "Bharat Petroleum, Vashi",
    "HP Petrol Pump, Hosur Road",
    "Indian Oil, NH48 Manor",
    "Shell, Whitefield",
    "Nayara Energy, Kalol",
    "Bharat Petroleum, Murthal",
    "HP Petrol Pump, Sriperumbudur",
    "Indian Oil AFS, Mumbai Airport",
    "Bharat Petroleum AFS, Bengaluru Airport",
];

pub const MAINTENANCE_SHOPS: &[&str] = &[
    "Tata Motors Authorised Service, Turbhe",
    "Ashok Leyland Service Centre, Hosur",
    "BharatBenz Service Point, Chakan",
    "Sai Auto Works, Bhiwandi",
    "Highway Diesel Garage, Manesar",
    "Precision Fleet Care, Ambattur",
    "Air Works MRO, Hosur",
];

pub const TECHNICIANS: &[&str] = &[
    "Ganesh Pawar",
    "Mohammed Rafiq",
    "Sandeep Verma",
    "Karthik Subramanian",
    "Balwinder Gill",
    "Joseph Fernandes",
    "Naveen Reddy",
];

pub const CANCELLATION_REASONS: &[&str] = &[
    "Client postponed the shipment",
    "Vehicle failed pre-trip inspection",
    "Driver unavailable due to illness",
    "Consignment not ready at pickup",
    "Route closed due to heavy rain",
    "Duplicate booking",
];

pub const EN_ROUTE_REPAIRS: &[&str] = &[
    "Puncture repair at roadside",
    "Replaced blown headlight bulb",
    "Fan belt replacement",
    "Air brake hose leak fixed",
    "Battery terminal cleaning and jump-start",
    "Wiper motor replacement",
];

/// Depots used as anchors for live telemetry.
pub const HUBS: &[(&str, GeoPoint)] = &[
    ("Bhiwandi", GeoPoint::new(19.2813, 73.0483)),
    ("Chakan", GeoPoint::new(18.7606, 73.8636)),
    ("Okhla", GeoPoint::new(28.5355, 77.2910)),
    ("Peenya", GeoPoint::new(13.0329, 77.5273)),
    ("Ambattur", GeoPoint::new(13.1143, 80.1548)),
    ("Shamshabad", GeoPoint::new(17.2403, 78.4294)),
    ("Changodar", GeoPoint::new(22.9243, 72.4412)),
    ("Dankuni", GeoPoint::new(22.6790, 88.2900)),
];

const INSURERS: &[&str] = &[
    "ICICI Lombard General Insurance",
    "Bajaj Allianz General Insurance",
    "New India Assurance",
    "HDFC ERGO General Insurance",
];

const TRANSPORT_OFFICES: &[&str] = &[
    "RTO Mumbai Central",
    "RTO Pune",
    "RTO Delhi South",
    "RTO Bengaluru Central",
    "RTO Chennai North",
];

const FITNESS_CENTRES: &[&str] = &[
    "Maharashtra Vehicle Fitness Centre",
    "Authorised Testing Station, Delhi",
    "Karnataka Vehicle Fitness Centre",
];

const PERMIT_AUTHORITIES: &[&str] = &[
    "Ministry of Road Transport and Highways",
    "Maharashtra State Transport Authority",
    "Karnataka State Transport Authority",
];

const AVIATION_AUTHORITIES: &[&str] = &["Directorate General of Civil Aviation"];

/// Issuers of a document type. Aircraft papers other than insurance come from
/// the aviation regulator.
pub fn document_issuers(
    document_type: VehicleDocumentType,
    vehicle_type: VehicleTypeName,
) -> &'static [&'static str] {
    match (document_type, vehicle_type) {
        (VehicleDocumentType::Insurance, _) => INSURERS,
        (_, VehicleTypeName::Plane) => AVIATION_AUTHORITIES,
        (VehicleDocumentType::Registration, _) => TRANSPORT_OFFICES,
        (VehicleDocumentType::Inspection, _) => FITNESS_CENTRES,
        (VehicleDocumentType::Permit, _) => PERMIT_AUTHORITIES,
    }
}

/// Cost and recurrence of a maintenance service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceSpec {
    pub service_type: MaintenanceServiceType,
    pub description: &'static str,
    pub cost_range: (f64, f64),
    pub interval_days: Option<i64>,
}

pub const SERVICE_SPECS: &[ServiceSpec] = &[
    ServiceSpec {
        service_type: MaintenanceServiceType::OilChange,
        description: "Engine oil and filter replacement",
        cost_range: (2_500.0, 9_000.0),
        interval_days: Some(90),
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::TireRotation,
        description: "Tyre rotation and wheel balancing",
        cost_range: (1_200.0, 4_500.0),
        interval_days: Some(120),
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::BrakeInspection,
        description: "Brake pad, disc and hose inspection",
        cost_range: (1_800.0, 12_000.0),
        interval_days: Some(180),
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::EngineTuneUp,
        description: "Injector cleaning, filter change and engine tune-up",
        cost_range: (6_000.0, 28_000.0),
        interval_days: Some(365),
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::TransmissionService,
        description: "Gearbox oil change and clutch adjustment",
        cost_range: (9_000.0, 45_000.0),
        interval_days: Some(365),
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::BatteryReplacement,
        description: "Battery replaced",
        cost_range: (4_500.0, 18_000.0),
        interval_days: None,
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::AcService,
        description: "Cabin air-conditioning regas and filter clean",
        cost_range: (2_000.0, 8_500.0),
        interval_days: None,
    },
    ServiceSpec {
        service_type: MaintenanceServiceType::GeneralInspection,
        description: "General safety inspection",
        cost_range: (1_500.0, 5_000.0),
        interval_days: Some(180),
    },
];

/// Looks up the spec of a service type.
pub fn service_spec(service_type: MaintenanceServiceType) -> &'static ServiceSpec {
    SERVICE_SPECS
        .iter()
        .find(|spec| spec.service_type == service_type)
        .unwrap_or(&SERVICE_SPECS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_type_has_a_spec() {
        use MaintenanceServiceType::*;
        for service_type in [
            OilChange,
            TireRotation,
            BrakeInspection,
            EngineTuneUp,
            TransmissionService,
            BatteryReplacement,
            AcService,
            GeneralInspection,
        ] {
            assert_eq!(service_spec(service_type).service_type, service_type);
        }
    }

    #[test]
    fn test_issuers_never_empty() {
        for doc in VehicleDocumentType::ALL {
            for vehicle_type in VehicleTypeName::ALL {
                assert!(!document_issuers(doc, vehicle_type).is_empty());
            }
        }
    }

    #[test]
    fn test_aircraft_registration_is_aviation_authority() {
        let issuers = document_issuers(VehicleDocumentType::Registration, VehicleTypeName::Plane);
        assert_eq!(issuers, AVIATION_AUTHORITIES);
    }
}
