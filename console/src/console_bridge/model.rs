use crate::dispatch::runner::DispatchOutcome;
use serde::{Deserialize, Serialize};
use stationcore::roster::IncidentRecord;
use stationcore::telemetry::MetricsSnapshot;

/// Snapshot of the latest dispatch shown by the HTTP console.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleModel {
    pub report: String,
    pub history: Vec<IncidentRecord>,
    pub timeline: Vec<String>,
    pub equipment_chart: String,
    pub water_chart: String,
    pub map_document: String,
    pub metrics: MetricsSnapshot,
}

impl ConsoleModel {
    pub fn from_outcome(outcome: &DispatchOutcome, metrics: MetricsSnapshot) -> Self {
        Self {
            report: outcome.report.clone(),
            history: outcome.history.clone(),
            timeline: outcome.timeline.clone(),
            equipment_chart: "/artifacts/equipment.svg".to_string(),
            water_chart: "/artifacts/water.svg".to_string(),
            map_document: "/artifacts/map.html".to_string(),
            metrics,
        }
    }
}
