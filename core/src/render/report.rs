use crate::roster::IncidentRecord;

/// Fixed narrative stages every dispatch traverses in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelinePhase {
    Dispatched,
    OnScene,
    Resolved,
}

impl TimelinePhase {
    pub const SEQUENCE: [TimelinePhase; 3] = [
        TimelinePhase::Dispatched,
        TimelinePhase::OnScene,
        TimelinePhase::Resolved,
    ];

    /// Canned narrative line; static text, not real elapsed time.
    pub fn narrative(&self) -> &'static str {
        match self {
            TimelinePhase::Dispatched => "🚨 Dispatched: Vehicle is on the way...",
            TimelinePhase::OnScene => "🟡 On Scene: Firefighters reached incident site...",
            TimelinePhase::Resolved => "🟢 Resolved: Incident cleared successfully!",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimelinePhase::Dispatched => "Dispatched",
            TimelinePhase::OnScene => "On Scene",
            TimelinePhase::Resolved => "Resolved",
        }
    }
}

fn timeline_block() -> String {
    TimelinePhase::SEQUENCE
        .iter()
        .map(|phase| phase.narrative())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the fixed-template incident response report.
///
/// Pure string substitution over the record; no validation.
pub fn format_report(record: &IncidentRecord) -> String {
    format!(
        "\
━━━━━━━━ 🚨 INCIDENT RESPONSE REPORT ━━━━━━━━

🔥 Incident Type : {incident}
📍 Location      : {location}
⚠ Severity      : {severity}

🚒 Vehicle       : {vehicle}
👨‍🚒 Officers    : {officers}

🛣 Route         : {route}
⏱ ETA           : {eta} minutes

🧰 Equipment Used:
{equipment}
💧 Water Used: {water} Liters

🕒 Timeline:
{timeline}

✅ Status: INCIDENT SUCCESSFULLY RESOLVED
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
",
        incident = record.incident_type,
        location = record.location,
        severity = record.severity,
        vehicle = record.vehicle,
        officers = record.officers.join(", "),
        route = record.route,
        eta = record.eta_minutes,
        equipment = record.equipment.join(", "),
        water = record.water_liters,
        timeline = timeline_block(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Location, Severity};

    fn sample_record() -> IncidentRecord {
        IncidentRecord {
            incident_type: "Building Fire".to_string(),
            location: Location {
                latitude: 12.9756,
                longitude: 77.595,
            },
            severity: Severity::High,
            vehicle: "🚒 Fire Engine 2".to_string(),
            officers: vec!["Officer D".to_string(), "Officer E".to_string()],
            route: "Emergency Green Corridor".to_string(),
            eta_minutes: 12,
            equipment: vec!["🧯 Fire Extinguisher".to_string()],
            water_liters: 500.0,
        }
    }

    #[test]
    fn report_carries_every_section() {
        let report = format_report(&sample_record());
        assert!(report.contains("INCIDENT RESPONSE REPORT"));
        assert!(report.contains("Building Fire"));
        assert!(report.contains("12.9756, 77.595"));
        assert!(report.contains("Emergency Green Corridor"));
        assert!(report.contains("12 minutes"));
        assert!(report.contains("Officer D, Officer E"));
        assert!(report.contains("500 Liters"));
        assert!(report.contains("INCIDENT SUCCESSFULLY RESOLVED"));
    }

    #[test]
    fn report_timeline_lists_all_phases_in_order() {
        let report = format_report(&sample_record());
        let dispatched = report.find(TimelinePhase::Dispatched.narrative()).unwrap();
        let on_scene = report.find(TimelinePhase::OnScene.narrative()).unwrap();
        let resolved = report.find(TimelinePhase::Resolved.narrative()).unwrap();
        assert!(dispatched < on_scene && on_scene < resolved);
    }

    #[test]
    fn phase_labels_match_sequence() {
        let labels: Vec<&str> = TimelinePhase::SEQUENCE.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Dispatched", "On Scene", "Resolved"]);
    }
}
