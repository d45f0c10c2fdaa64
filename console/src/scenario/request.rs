use anyhow::Context;
use serde::{Deserialize, Serialize};
use stationcore::roster::incident::DEFAULT_WATER_LITERS;
use stationcore::roster::{DispatchRequest, Severity};
use std::fs;
use std::path::Path;

/// Configuration for one scripted incident scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub incident_type: String,
    pub severity: Severity,
    pub latitude: String,
    pub longitude: String,
    pub water_liters: f64,
    pub equipment: Vec<String>,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            incident_type: "Building Fire".to_string(),
            severity: Severity::Medium,
            latitude: "12.9756".to_string(),
            longitude: "77.5950".to_string(),
            water_liters: DEFAULT_WATER_LITERS,
            equipment: vec![
                "🧯 Fire Extinguisher".to_string(),
                "💧 Water Hose".to_string(),
            ],
            description: None,
            scenario: None,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_request(&self) -> DispatchRequest {
        DispatchRequest {
            incident_type: self.incident_type.clone(),
            severity: self.severity,
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            water_liters: self.water_liters,
            equipment: self.equipment.clone(),
        }
    }
}

/// Demo request mirroring the dashboard form defaults.
pub fn build_demo_request() -> DispatchRequest {
    ScenarioConfig::default().to_request()
}
