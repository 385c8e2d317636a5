//! Wire enumerations shared by the record store and its consumers.
//!
//! Every enum serializes (serde and Postgres) to the exact SCREAMING_SNAKE_CASE
//! strings the application expects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "vehicle_type_name", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleTypeName {
    Truck,
    Van,
    Bike,
    Car,
    Plane,
}

impl VehicleTypeName {
    pub const ALL: [VehicleTypeName; 5] = [
        VehicleTypeName::Truck,
        VehicleTypeName::Van,
        VehicleTypeName::Bike,
        VehicleTypeName::Car,
        VehicleTypeName::Plane,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleTypeName::Truck => "TRUCK",
            VehicleTypeName::Van => "VAN",
            VehicleTypeName::Bike => "BIKE",
            VehicleTypeName::Car => "CAR",
            VehicleTypeName::Plane => "PLANE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "vehicle_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InShop,
    Retired,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::OnTrip => "ON_TRIP",
            VehicleStatus::InShop => "IN_SHOP",
            VehicleStatus::Retired => "RETIRED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "driver_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    OnDuty,
    OnTrip,
    OffDuty,
    Suspended,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::OnDuty => "ON_DUTY",
            DriverStatus::OnTrip => "ON_TRIP",
            DriverStatus::OffDuty => "OFF_DUTY",
            DriverStatus::Suspended => "SUSPENDED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "trip_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Draft,
    Dispatched,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: [TripStatus; 4] = [
        TripStatus::Draft,
        TripStatus::Dispatched,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Draft => "DRAFT",
            TripStatus::Dispatched => "DISPATCHED",
            TripStatus::Completed => "COMPLETED",
            TripStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "expense_category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Toll,
    Lodging,
    Misc,
    MaintenanceEnRoute,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Toll => "TOLL",
            ExpenseCategory::Lodging => "LODGING",
            ExpenseCategory::Misc => "MISC",
            ExpenseCategory::MaintenanceEnRoute => "MAINTENANCE_EN_ROUTE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "incident_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
    Accident,
    Breakdown,
    TrafficViolation,
    Theft,
    CargoDamage,
    NearMiss,
    Other,
}

impl IncidentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Accident => "ACCIDENT",
            IncidentType::Breakdown => "BREAKDOWN",
            IncidentType::TrafficViolation => "TRAFFIC_VIOLATION",
            IncidentType::Theft => "THEFT",
            IncidentType::CargoDamage => "CARGO_DAMAGE",
            IncidentType::NearMiss => "NEAR_MISS",
            IncidentType::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "incident_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "OPEN",
            IncidentStatus::Investigating => "INVESTIGATING",
            IncidentStatus::Resolved => "RESOLVED",
            IncidentStatus::Closed => "CLOSED",
        }
    }

    /// Whether a report in this status carries a resolution.
    pub fn is_settled(&self) -> bool {
        matches!(self, IncidentStatus::Resolved | IncidentStatus::Closed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "vehicle_document_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleDocumentType {
    Insurance,
    Registration,
    Inspection,
    Permit,
}

impl VehicleDocumentType {
    pub const ALL: [VehicleDocumentType; 4] = [
        VehicleDocumentType::Insurance,
        VehicleDocumentType::Registration,
        VehicleDocumentType::Inspection,
        VehicleDocumentType::Permit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleDocumentType::Insurance => "INSURANCE",
            VehicleDocumentType::Registration => "REGISTRATION",
            VehicleDocumentType::Inspection => "INSPECTION",
            VehicleDocumentType::Permit => "PERMIT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Manager,
    Dispatcher,
    SafetyOfficer,
    FinanceAnalyst,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Manager => "MANAGER",
            UserRole::Dispatcher => "DISPATCHER",
            UserRole::SafetyOfficer => "SAFETY_OFFICER",
            UserRole::FinanceAnalyst => "FINANCE_ANALYST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "maintenance_service_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceServiceType {
    OilChange,
    TireRotation,
    BrakeInspection,
    EngineTuneUp,
    TransmissionService,
    BatteryReplacement,
    AcService,
    GeneralInspection,
}

impl MaintenanceServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceServiceType::OilChange => "OIL_CHANGE",
            MaintenanceServiceType::TireRotation => "TIRE_ROTATION",
            MaintenanceServiceType::BrakeInspection => "BRAKE_INSPECTION",
            MaintenanceServiceType::EngineTuneUp => "ENGINE_TUNE_UP",
            MaintenanceServiceType::TransmissionService => "TRANSMISSION_SERVICE",
            MaintenanceServiceType::BatteryReplacement => "BATTERY_REPLACEMENT",
            MaintenanceServiceType::AcService => "AC_SERVICE",
            MaintenanceServiceType::GeneralInspection => "GENERAL_INSPECTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "audit_action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    StatusChange,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::StatusChange => "STATUS_CHANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_database_strings() {
        let cases = [
            (
                serde_json::to_value(ExpenseCategory::MaintenanceEnRoute).unwrap(),
                ExpenseCategory::MaintenanceEnRoute.as_str(),
            ),
            (
                serde_json::to_value(IncidentType::TrafficViolation).unwrap(),
                IncidentType::TrafficViolation.as_str(),
            ),
            (
                serde_json::to_value(UserRole::SafetyOfficer).unwrap(),
                UserRole::SafetyOfficer.as_str(),
            ),
            (
                serde_json::to_value(MaintenanceServiceType::EngineTuneUp).unwrap(),
                MaintenanceServiceType::EngineTuneUp.as_str(),
            ),
            (
                serde_json::to_value(DriverStatus::OffDuty).unwrap(),
                DriverStatus::OffDuty.as_str(),
            ),
            (
                serde_json::to_value(VehicleStatus::InShop).unwrap(),
                VehicleStatus::InShop.as_str(),
            ),
        ];

        for (value, expected) in cases {
            assert_eq!(value, serde_json::Value::String(expected.to_string()));
        }
    }

    #[test]
    fn test_settled_statuses() {
        assert!(IncidentStatus::Resolved.is_settled());
        assert!(IncidentStatus::Closed.is_settled());
        assert!(!IncidentStatus::Open.is_settled());
        assert!(!IncidentStatus::Investigating.is_settled());
    }

    #[test]
    fn test_trip_status_round_trips_from_wire() {
        for status in TripStatus::ALL {
            let parsed: TripStatus =
                serde_json::from_value(serde_json::Value::String(status.as_str().into())).unwrap();
            assert_eq!(parsed, status);
        }
    }
}
