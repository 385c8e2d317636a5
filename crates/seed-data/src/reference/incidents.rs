//! Curated incident narratives.

use fleet::models::{IncidentStatus, IncidentType};

#[derive(Debug, Clone, Copy)]
pub struct IncidentNarrative {
    pub incident_type: IncidentType,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub days_ago: i64,
    /// Hour of day the incident happened.
    pub hour: u8,
    pub injuries: bool,
    pub damage_estimate: f64,
    pub status: IncidentStatus,
    pub resolution: Option<&'static str>,
    /// Hours from the incident to its resolution.
    pub resolution_hours: Option<i64>,
}

pub const INCIDENTS: &[IncidentNarrative] = &[
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Rear-end collision at toll plaza",
        description: "Vehicle was struck from behind while queued at the toll plaza. Rear bumper and tail lamp damaged.",
        location: "Khalapur Toll Plaza, Mumbai-Pune Expressway",
        days_ago: 340,
        hour: 9,
        injuries: false,
        damage_estimate: 18_500.0,
        status: IncidentStatus::Closed,
        resolution: Some("Third-party insurer settled the claim and the bumper was replaced."),
        resolution_hours: Some(240),
    },
    IncidentNarrative {
        incident_type: IncidentType::Breakdown,
        title: "Coolant leak on highway",
        description: "Coolant warning came on and steam was seen from the engine bay. Vehicle stopped on the shoulder.",
        location: "NH48 near Vapi",
        days_ago: 322,
        hour: 14,
        injuries: false,
        damage_estimate: 6_200.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Radiator hose replaced at the roadside and the trip resumed."),
        resolution_hours: Some(5),
    },
    IncidentNarrative {
        incident_type: IncidentType::TrafficViolation,
        title: "Overspeeding challan",
        description: "Speed camera recorded 82 km/h in a 60 km/h zone.",
        location: "Western Express Highway, Mumbai",
        days_ago: 305,
        hour: 11,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Fine paid and driver counselled."),
        resolution_hours: Some(72),
    },
    IncidentNarrative {
        incident_type: IncidentType::CargoDamage,
        title: "Water ingress in cargo hold",
        description: "Monsoon rain seeped through a torn tarpaulin and wet 14 cartons.",
        location: "Bhiwandi warehouse",
        days_ago: 290,
        hour: 16,
        injuries: false,
        damage_estimate: 42_000.0,
        status: IncidentStatus::Closed,
        resolution: Some("Client compensated and tarpaulins replaced across the fleet."),
        resolution_hours: Some(168),
    },
    IncidentNarrative {
        incident_type: IncidentType::NearMiss,
        title: "Near miss with two-wheeler",
        description: "Motorcyclist cut across the lane. Hard braking avoided contact.",
        location: "Silk Board Junction, Bengaluru",
        days_ago: 276,
        hour: 8,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Dashcam footage reviewed, no further action."),
        resolution_hours: Some(24),
    },
    IncidentNarrative {
        incident_type: IncidentType::Theft,
        title: "Fuel siphoned overnight",
        description: "About 60 litres of diesel siphoned while parked at a roadside dhaba.",
        location: "NH44 near Nagpur",
        days_ago: 260,
        hour: 5,
        injuries: false,
        damage_estimate: 5_600.0,
        status: IncidentStatus::Closed,
        resolution: Some("Police complaint filed and lockable fuel caps installed."),
        resolution_hours: Some(96),
    },
    IncidentNarrative {
        incident_type: IncidentType::Breakdown,
        title: "Clutch failure",
        description: "Clutch plate worn out. Vehicle towed to the nearest workshop.",
        location: "Pune-Nashik Highway near Sinnar",
        days_ago: 244,
        hour: 13,
        injuries: false,
        damage_estimate: 14_500.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Clutch assembly replaced."),
        resolution_hours: Some(30),
    },
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Side-swipe in narrow lane",
        description: "Mirror and side panel scraped by a reversing bus.",
        location: "Crawford Market, Mumbai",
        days_ago: 231,
        hour: 10,
        injuries: false,
        damage_estimate: 9_800.0,
        status: IncidentStatus::Closed,
        resolution: Some("Repair cost recovered from the bus operator."),
        resolution_hours: Some(120),
    },
    IncidentNarrative {
        incident_type: IncidentType::Other,
        title: "Held at state border",
        description: "Vehicle held at the state border for four hours for permit verification.",
        location: "Achhad check post, Gujarat border",
        days_ago: 215,
        hour: 7,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Permit copy shared digitally; border checklist issued to drivers."),
        resolution_hours: Some(6),
    },
    IncidentNarrative {
        incident_type: IncidentType::CargoDamage,
        title: "Pallets shifted under braking",
        description: "Load lashings loosened and two pallets of tiles cracked.",
        location: "Delhi-Jaipur Expressway near Behror",
        days_ago: 201,
        hour: 15,
        injuries: false,
        damage_estimate: 23_500.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Lashing check added to the loading procedure."),
        resolution_hours: Some(48),
    },
    IncidentNarrative {
        incident_type: IncidentType::NearMiss,
        title: "Wrong-way car on expressway",
        description: "A car travelling against traffic forced an emergency lane change.",
        location: "Yamuna Expressway near Mathura",
        days_ago: 188,
        hour: 6,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Reported to highway patrol."),
        resolution_hours: Some(12),
    },
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Reversed into dock pillar",
        description: "Vehicle reversed into a loading dock pillar. Tail gate bent.",
        location: "Chakan MIDC, Pune",
        days_ago: 172,
        hour: 17,
        injuries: false,
        damage_estimate: 7_200.0,
        status: IncidentStatus::Closed,
        resolution: Some("Reversing camera fitted."),
        resolution_hours: Some(200),
    },
    IncidentNarrative {
        incident_type: IncidentType::Breakdown,
        title: "Flat tyre",
        description: "Front-left tyre punctured by debris on the carriageway.",
        location: "Outer Ring Road, Hyderabad",
        days_ago: 160,
        hour: 12,
        injuries: false,
        damage_estimate: 2_800.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Tyre replaced at the roadside."),
        resolution_hours: Some(3),
    },
    IncidentNarrative {
        incident_type: IncidentType::TrafficViolation,
        title: "Red light violation",
        description: "Signal jump recorded by a traffic camera.",
        location: "MG Road, Bengaluru",
        days_ago: 147,
        hour: 18,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Fine paid and driver retrained."),
        resolution_hours: Some(96),
    },
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Collision with stray cattle",
        description: "Cattle strayed onto the highway at night. Front grille damaged and driver bruised.",
        location: "NH52 near Jaipur",
        days_ago: 133,
        hour: 4,
        injuries: true,
        damage_estimate: 26_500.0,
        status: IncidentStatus::Closed,
        resolution: Some("Driver treated and discharged; grille replaced."),
        resolution_hours: Some(336),
    },
    IncidentNarrative {
        incident_type: IncidentType::Other,
        title: "Consignee refused delivery",
        description: "Consignee refused delivery citing late arrival. Cargo returned to hub.",
        location: "Whitefield, Bengaluru",
        days_ago: 120,
        hour: 16,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Redelivered the next day at the client's cost."),
        resolution_hours: Some(30),
    },
    IncidentNarrative {
        incident_type: IncidentType::Breakdown,
        title: "Battery failure at pickup",
        description: "Vehicle would not start at the pickup point and a jump-start failed.",
        location: "Okhla Industrial Area, Delhi",
        days_ago: 108,
        hour: 6,
        injuries: false,
        damage_estimate: 4_500.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Battery replaced."),
        resolution_hours: Some(4),
    },
    IncidentNarrative {
        incident_type: IncidentType::CargoDamage,
        title: "Temperature excursion",
        description: "Refrigeration unit tripped; pharma cargo logged above 8 C for 40 minutes.",
        location: "Ahmedabad-Vadodara Expressway",
        days_ago: 96,
        hour: 13,
        injuries: false,
        damage_estimate: 65_000.0,
        status: IncidentStatus::Closed,
        resolution: Some("Cargo quarantined and tested; reefer unit serviced."),
        resolution_hours: Some(120),
    },
    IncidentNarrative {
        incident_type: IncidentType::NearMiss,
        title: "Pedestrian near miss",
        description: "Pedestrian stepped out from behind a parked bus.",
        location: "Koramangala, Bengaluru",
        days_ago: 84,
        hour: 9,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Route changed to avoid the school zone at peak hours."),
        resolution_hours: Some(20),
    },
    IncidentNarrative {
        incident_type: IncidentType::Theft,
        title: "Phone stolen from cab",
        description: "Driver's phone taken from the cabin during unloading.",
        location: "Vashi APMC market, Navi Mumbai",
        days_ago: 71,
        hour: 11,
        injuries: false,
        damage_estimate: 14_000.0,
        status: IncidentStatus::Closed,
        resolution: Some("Police report filed; cab locking reminder issued."),
        resolution_hours: Some(72),
    },
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Windscreen cracked by stone",
        description: "A stone thrown up by a tipper cracked the windscreen.",
        location: "Mumbai-Ahmedabad Highway near Surat",
        days_ago: 63,
        hour: 10,
        injuries: false,
        damage_estimate: 8_900.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Windscreen replaced under insurance."),
        resolution_hours: Some(50),
    },
    IncidentNarrative {
        incident_type: IncidentType::TrafficViolation,
        title: "Overloading fine",
        description: "Weighbridge reported the axle load 6% over the permitted limit.",
        location: "Dahisar check naka, Mumbai",
        days_ago: 55,
        hour: 8,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Fine paid and load planning recalibrated."),
        resolution_hours: Some(48),
    },
    IncidentNarrative {
        incident_type: IncidentType::Breakdown,
        title: "Alternator failure",
        description: "Warning lights came on and the battery stopped charging. Vehicle stopped safely.",
        location: "Chennai-Bengaluru Highway near Krishnagiri",
        days_ago: 44,
        hour: 15,
        injuries: false,
        damage_estimate: 11_200.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Alternator replaced."),
        resolution_hours: Some(26),
    },
    IncidentNarrative {
        incident_type: IncidentType::CargoDamage,
        title: "Crushed cartons on delivery",
        description: "Top layer of cartons crushed by improper stacking.",
        location: "Andheri East, Mumbai",
        days_ago: 36,
        hour: 12,
        injuries: false,
        damage_estimate: 6_800.0,
        status: IncidentStatus::Investigating,
        resolution: None,
        resolution_hours: None,
    },
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Low-speed scrape in parking yard",
        description: "Vehicle touched a parked trailer while manoeuvring.",
        location: "Kalamboli truck terminal",
        days_ago: 28,
        hour: 19,
        injuries: false,
        damage_estimate: 15_500.0,
        status: IncidentStatus::Investigating,
        resolution: None,
        resolution_hours: None,
    },
    IncidentNarrative {
        incident_type: IncidentType::NearMiss,
        title: "Harsh braking alerts",
        description: "Telematics flagged three harsh braking events within ten minutes.",
        location: "Pune-Bengaluru Highway near Satara",
        days_ago: 19,
        hour: 14,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Resolved,
        resolution: Some("Driver coached on following distance."),
        resolution_hours: Some(36),
    },
    IncidentNarrative {
        incident_type: IncidentType::Other,
        title: "Route blocked by protest",
        description: "Highway blocked for six hours; consignment delayed.",
        location: "NH48 near Hosur",
        days_ago: 12,
        hour: 10,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Closed,
        resolution: Some("Client informed and the delay penalty waived."),
        resolution_hours: Some(10),
    },
    IncidentNarrative {
        incident_type: IncidentType::Breakdown,
        title: "Engine overheating",
        description: "Temperature gauge in the red zone. Vehicle pulled over.",
        location: "Nashik Phata, Pune",
        days_ago: 7,
        hour: 13,
        injuries: false,
        damage_estimate: 9_600.0,
        status: IncidentStatus::Open,
        resolution: None,
        resolution_hours: None,
    },
    IncidentNarrative {
        incident_type: IncidentType::Accident,
        title: "Scraped by overtaking truck",
        description: "An overtaking truck scraped the left side. Driver shaken but unhurt.",
        location: "Eastern Freeway, Mumbai",
        days_ago: 3,
        hour: 17,
        injuries: true,
        damage_estimate: 21_000.0,
        status: IncidentStatus::Open,
        resolution: None,
        resolution_hours: None,
    },
    IncidentNarrative {
        incident_type: IncidentType::TrafficViolation,
        title: "Towed from no-parking zone",
        description: "Vehicle towed from a no-parking zone during a delivery.",
        location: "Linking Road, Bandra",
        days_ago: 1,
        hour: 11,
        injuries: false,
        damage_estimate: 0.0,
        status: IncidentStatus::Investigating,
        resolution: None,
        resolution_hours: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_narratives() {
        assert_eq!(INCIDENTS.len(), 30);
    }

    #[test]
    fn test_resolution_present_iff_settled() {
        for incident in INCIDENTS {
            let settled = incident.status.is_settled();
            assert_eq!(incident.resolution.is_some(), settled, "{}", incident.title);
            assert_eq!(incident.resolution_hours.is_some(), settled, "{}", incident.title);
        }
    }

    #[test]
    fn test_incidents_are_in_the_past() {
        assert!(INCIDENTS.iter().all(|i| i.days_ago >= 1 && i.hour < 24));
    }
}
