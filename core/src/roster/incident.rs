use crate::prelude::{DispatchError, DispatchResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Water volume assumed when the form leaves the field untouched.
pub const DEFAULT_WATER_LITERS: f64 = 500.0;

/// Incident urgency tier; drives the route policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Lenient parsing for CLI and scenario text; anything unrecognized
    /// falls back to the form default.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            _ => Severity::Medium,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(label)
    }
}

/// Incident coordinate parsed from the form's free-text fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn parse(lat_raw: &str, lon_raw: &str) -> DispatchResult<Self> {
        Ok(Self {
            latitude: parse_coordinate(lat_raw)?,
            longitude: parse_coordinate(lon_raw)?,
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

fn parse_coordinate(raw: &str) -> DispatchResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DispatchError::CoordinateParse(raw.to_string()))
}

/// Incident description arriving from the dashboard form or a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub incident_type: String,
    #[serde(default)]
    pub severity: Severity,
    pub latitude: String,
    pub longitude: String,
    #[serde(default = "default_water_liters")]
    pub water_liters: f64,
    #[serde(default)]
    pub equipment: Vec<String>,
}

fn default_water_liters() -> f64 {
    DEFAULT_WATER_LITERS
}

/// One fabricated dispatch outcome; immutable once appended to history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub incident_type: String,
    pub location: Location,
    pub severity: Severity,
    pub vehicle: String,
    pub officers: Vec<String>,
    pub route: String,
    pub eta_minutes: u32,
    pub equipment: Vec<String>,
    pub water_liters: f64,
}
