//! Vehicle papers: insurance, registration, fitness inspection and permit.

use fleet::models::{VehicleDocumentType, VehicleStatus};
use time::{Date, Duration};

use super::base::BaseFleet;
use crate::random::SeededRandom;
use crate::reference::catalog::document_issuers;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub vehicle: usize,
    pub document_type: VehicleDocumentType,
    pub document_number: String,
    pub issuer: String,
    pub issued_at: Date,
    pub expires_at: Date,
    pub is_active: bool,
}

/// Validity period in days.
fn validity_days(document_type: VehicleDocumentType) -> i64 {
    match document_type {
        VehicleDocumentType::Insurance => 365,
        // 15 years
        VehicleDocumentType::Registration => 5_479,
        VehicleDocumentType::Inspection => 180,
        VehicleDocumentType::Permit => 365,
    }
}

/// How long ago the current document was issued, in days.
fn issued_days_ago(document_type: VehicleDocumentType) -> (i64, i64) {
    match document_type {
        VehicleDocumentType::Insurance => (20, 340),
        VehicleDocumentType::Registration => (200, 3_000),
        VehicleDocumentType::Inspection => (10, 240),
        VehicleDocumentType::Permit => (30, 400),
    }
}

fn number_prefix(document_type: VehicleDocumentType) -> &'static str {
    match document_type {
        VehicleDocumentType::Insurance => "INS",
        VehicleDocumentType::Registration => "REG",
        VehicleDocumentType::Inspection => "FIT",
        VehicleDocumentType::Permit => "PRM",
    }
}

pub struct DocumentGenerator;

impl DocumentGenerator {
    /// One document of every type for every vehicle.
    pub fn generate(
        fleet: &BaseFleet,
        today: Date,
        rng: &mut SeededRandom,
    ) -> Vec<GeneratedDocument> {
        let mut documents =
            Vec::with_capacity(fleet.vehicles.len() * VehicleDocumentType::ALL.len());

        for (position, vehicle) in fleet.vehicles.iter().enumerate() {
            let plate: String = vehicle
                .license_plate
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();

            for document_type in VehicleDocumentType::ALL {
                let (min_days, max_days) = issued_days_ago(document_type);
                let days_ago = rng.random_int(min_days, max_days);
                let issuer = rng.pick(document_issuers(document_type, vehicle.type_name));
                let serial = rng.random_int(100_000, 999_999);

                let issued_at = today - Duration::days(days_ago);
                let expires_at = issued_at + Duration::days(validity_days(document_type));

                documents.push(GeneratedDocument {
                    vehicle: position,
                    document_type,
                    document_number: format!("{}-{plate}-{serial}", number_prefix(document_type)),
                    issuer: issuer.to_string(),
                    issued_at,
                    expires_at,
                    is_active: expires_at > today && vehicle.status != VehicleStatus::Retired,
                });
            }
        }

        documents
    }
}
