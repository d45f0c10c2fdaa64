use anyhow::Context;
use serde::{Deserialize, Serialize};
use stationcore::roster::{Location, STATION_LOCATION};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Station-level settings for the dispatch console.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub station_latitude: f64,
    pub station_longitude: f64,
    /// Delay between dispatch timeline phases; zero disables pacing.
    pub pacing_ms: u64,
    /// Directory the chart and map artifacts are overwritten into.
    pub output_dir: PathBuf,
    /// Seed for the vehicle/equipment picker; None draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            station_latitude: STATION_LOCATION.latitude,
            station_longitude: STATION_LOCATION.longitude,
            pacing_ms: 1000,
            output_dir: env::temp_dir().join("station-console"),
            seed: None,
        }
    }
}

impl StationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading station config {}", path_ref.display()))?;
        let config: StationConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing station config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(pacing_ms: u64, seed: Option<u64>, output_dir: Option<PathBuf>) -> Self {
        let mut config = Self {
            pacing_ms,
            seed,
            ..Self::default()
        };
        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }
        config
    }

    pub fn station(&self) -> Location {
        Location {
            latitude: self.station_latitude,
            longitude: self.station_longitude,
        }
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_overrides_defaults() {
        let cfg = StationConfig::from_args(0, Some(7), None);
        assert_eq!(cfg.pacing(), Duration::ZERO);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.station(), STATION_LOCATION);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"pacing_ms: 0\nseed: 42\nstation_latitude: 13.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = StationConfig::load(&path).unwrap();
        assert_eq!(cfg.pacing_ms, 0);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.station_latitude, 13.0);
        assert_eq!(cfg.station_longitude, STATION_LOCATION.longitude);
    }
}
