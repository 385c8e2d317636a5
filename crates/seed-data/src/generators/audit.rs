//! Illustrative audit trail. Consumes no random draws.

use fleet::models::AuditAction;
use serde_json::{Map, Value};
use time::{Duration, OffsetDateTime};

use super::base::BaseFleet;
use crate::db::SeedError;
use crate::reference::fixtures::{AUDIT_ENTRIES, AuditTargetRef};

/// Record an audit entry is about, by position in the base fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditTarget {
    Vehicle(usize),
    Driver(usize),
    User(usize),
}

impl AuditTarget {
    pub fn entity_name(&self) -> &'static str {
        match self {
            AuditTarget::Vehicle(_) => "Vehicle",
            AuditTarget::Driver(_) => "Driver",
            AuditTarget::User(_) => "User",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAuditLog {
    /// Acting user, by position in [`BaseFleet::users`].
    pub user: usize,
    pub target: AuditTarget,
    pub action: AuditAction,
    pub payload: Value,
    pub created_at: OffsetDateTime,
}

pub struct AuditGenerator;

impl AuditGenerator {
    pub fn generate(
        fleet: &BaseFleet,
        anchor: OffsetDateTime,
    ) -> Result<Vec<GeneratedAuditLog>, SeedError> {
        AUDIT_ENTRIES
            .iter()
            .map(|entry| {
                let target = match entry.target {
                    AuditTargetRef::Vehicle(plate) => {
                        AuditTarget::Vehicle(fleet.vehicle_position(plate)?)
                    }
                    AuditTargetRef::Driver(license) => {
                        AuditTarget::Driver(fleet.driver_position(license)?)
                    }
                    AuditTargetRef::User(email) => AuditTarget::User(fleet.user_position(email)?),
                };

                let payload: Map<String, Value> = entry
                    .changes
                    .iter()
                    .map(|(field, value)| (field.to_string(), Value::String(value.to_string())))
                    .collect();

                Ok(GeneratedAuditLog {
                    user: fleet.user_position(entry.actor_email)?,
                    target,
                    action: entry.action,
                    payload: Value::Object(payload),
                    created_at: anchor - Duration::hours(entry.hours_ago),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::FleetGenerator;
    use time::macros::datetime;

    const ANCHOR: OffsetDateTime = datetime!(2025-03-20 10:30 UTC);

    #[test]
    fn test_six_entries_resolve_to_fixtures() {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let logs = AuditGenerator::generate(&fleet, ANCHOR).unwrap();

        assert_eq!(logs.len(), 6);
        for log in &logs {
            assert!(log.created_at < ANCHOR);
            assert!(log.payload.is_object());
            assert!(log.user < fleet.users.len());
        }
    }

    #[test]
    fn test_status_change_payload() {
        let fleet = FleetGenerator::new().generate(ANCHOR.date()).unwrap();
        let logs = AuditGenerator::generate(&fleet, ANCHOR).unwrap();

        let last = logs.last().unwrap();
        assert_eq!(last.action, AuditAction::StatusChange);
        assert_eq!(last.payload["to"], "ON_TRIP");
        assert_eq!(last.target.entity_name(), "Vehicle");
    }
}
