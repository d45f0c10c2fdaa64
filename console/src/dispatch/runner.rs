use crate::dispatch::config::StationConfig;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stationcore::history::HistoryStore;
use stationcore::policy::{allocate_equipment, pick_vehicle, route_for};
use stationcore::render::charts::{equipment_chart, water_chart};
use stationcore::render::map::render_map;
use stationcore::render::report::{format_report, TimelinePhase};
use stationcore::roster::{
    DispatchRequest, EquipmentCatalog, IncidentRecord, Location, VehicleRoster,
};
use stationcore::telemetry::{EventLog, MetricsRecorder, MetricsSnapshot};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::thread;

/// Everything one dispatch hands back to the console.
pub struct DispatchOutcome {
    pub record: IncidentRecord,
    pub report: String,
    pub timeline: Vec<String>,
    pub equipment_counts: BTreeMap<String, u32>,
    pub equipment_chart: String,
    pub water_chart: String,
    pub map_document: String,
    pub history: Vec<IncidentRecord>,
}

struct DispatchState {
    rng: StdRng,
    history: HistoryStore,
}

/// Orchestrates one synchronous dispatch from form input to rendered
/// outputs. Owns the history store and the seedable picker RNG behind a
/// single state mutex.
pub struct Dispatcher {
    config: StationConfig,
    roster: VehicleRoster,
    catalog: EquipmentCatalog,
    logger: EventLog,
    metrics: MetricsRecorder,
    state: Mutex<DispatchState>,
}

impl Dispatcher {
    pub fn new(config: StationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            roster: VehicleRoster::standard(),
            catalog: EquipmentCatalog::standard(),
            logger: EventLog::new(),
            metrics: MetricsRecorder::new(),
            state: Mutex::new(DispatchState {
                rng,
                history: HistoryStore::new(),
            }),
        }
    }

    pub fn execute(&self, request: &DispatchRequest) -> anyhow::Result<DispatchOutcome> {
        match self.run_stages(request) {
            Ok(outcome) => {
                self.metrics.record_completed(request.severity);
                Ok(outcome)
            }
            Err(err) => {
                self.metrics.record_failed();
                Err(err)
            }
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    #[cfg(test)]
    pub fn roster(&self) -> &VehicleRoster {
        &self.roster
    }

    #[cfg(test)]
    pub fn history(&self) -> Vec<IncidentRecord> {
        self.state.lock().unwrap().history.all().to_vec()
    }

    fn run_stages(&self, request: &DispatchRequest) -> anyhow::Result<DispatchOutcome> {
        // Coordinates are validated before any state mutation.
        let location = Location::parse(&request.latitude, &request.longitude)
            .context("parsing incident coordinates")?;
        let selection = self.catalog.retain_known(&request.equipment);

        let mut timeline = Vec::new();
        self.advance(TimelinePhase::Dispatched, &mut timeline);

        let (vehicle, officers, equipment_counts) = {
            let mut state = self.state.lock().unwrap();
            let unit = pick_vehicle(&mut state.rng, &self.roster);
            let vehicle = unit.name.clone();
            let officers = unit.officers.clone();
            let counts = allocate_equipment(&mut state.rng, &selection);
            (vehicle, officers, counts)
        };
        let (route, eta_minutes) = route_for(request.severity);

        self.advance(TimelinePhase::OnScene, &mut timeline);

        let record = IncidentRecord {
            incident_type: request.incident_type.clone(),
            location,
            severity: request.severity,
            vehicle,
            officers,
            route: route.to_string(),
            eta_minutes,
            equipment: selection,
            water_liters: request.water_liters,
        };
        let history = {
            let mut state = self.state.lock().unwrap();
            state.history.append(record.clone());
            state.history.all().to_vec()
        };

        self.advance(TimelinePhase::Resolved, &mut timeline);

        let equipment_document =
            equipment_chart(&equipment_counts).context("rendering equipment chart")?;
        let water_document = water_chart(&history).context("rendering water chart")?;
        let map_document = render_map(self.config.station(), &request.latitude, &request.longitude)
            .context("rendering movement map")?;
        let report = format_report(&record);

        self.write_artifacts(&equipment_document, &water_document, &map_document)
            .context("writing dispatch artifacts")?;

        Ok(DispatchOutcome {
            record,
            report,
            timeline,
            equipment_counts,
            equipment_chart: equipment_document,
            water_chart: water_document,
            map_document,
            history,
        })
    }

    fn advance(&self, phase: TimelinePhase, timeline: &mut Vec<String>) {
        timeline.push(phase.narrative().to_string());
        self.logger.record_phase(phase);
        let pacing = self.config.pacing();
        if !pacing.is_zero() {
            thread::sleep(pacing);
        }
    }

    /// Overwrites the previous dispatch's artifacts in place.
    fn write_artifacts(&self, equipment: &str, water: &str, map_document: &str) -> anyhow::Result<()> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifact dir {}", dir.display()))?;
        fs::write(dir.join("equipment.svg"), equipment)?;
        fs::write(dir.join("water.svg"), water)?;
        fs::write(dir.join("map.html"), map_document)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_dispatcher(dir: &TempDir) -> Dispatcher {
        let config = StationConfig {
            pacing_ms: 0,
            seed: Some(7),
            output_dir: dir.path().to_path_buf(),
            ..StationConfig::default()
        };
        Dispatcher::new(config)
    }

    fn building_fire() -> DispatchRequest {
        DispatchRequest {
            incident_type: "Building Fire".to_string(),
            severity: stationcore::roster::Severity::High,
            latitude: "12.9756".to_string(),
            longitude: "77.5950".to_string(),
            water_liters: 500.0,
            equipment: vec!["🧯 Fire Extinguisher".to_string()],
        }
    }

    #[test]
    fn dispatch_produces_all_five_outputs() {
        let dir = TempDir::new().unwrap();
        let dispatcher = test_dispatcher(&dir);
        let outcome = dispatcher.execute(&building_fire()).unwrap();

        assert!(outcome.report.contains("Emergency Green Corridor"));
        assert!(outcome.report.contains("12 minutes"));
        assert!(dispatcher.roster().contains(&outcome.record.vehicle));
        assert_eq!(outcome.record.water_liters, 500.0);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.timeline.len(), 3);
        assert_eq!(outcome.equipment_counts.len(), 1);
        assert!(outcome.map_document.contains("12.9756"));

        assert!(dir.path().join("equipment.svg").exists());
        assert!(dir.path().join("water.svg").exists());
        assert!(dir.path().join("map.html").exists());
    }

    #[test]
    fn history_grows_by_one_per_dispatch() {
        let dir = TempDir::new().unwrap();
        let dispatcher = test_dispatcher(&dir);

        let mut second = building_fire();
        second.incident_type = "Road Accident".to_string();

        dispatcher.execute(&building_fire()).unwrap();
        dispatcher.execute(&second).unwrap();

        let history = dispatcher.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].incident_type, "Building Fire");
        assert_eq!(history[1].incident_type, "Road Accident");
        assert_eq!(dispatcher.metrics_snapshot().completed, 2);
    }

    #[test]
    fn bad_coordinates_are_terminal_and_leave_history_untouched() {
        let dir = TempDir::new().unwrap();
        let dispatcher = test_dispatcher(&dir);

        let mut request = building_fire();
        request.latitude = "abc".to_string();

        assert!(dispatcher.execute(&request).is_err());
        assert!(dispatcher.history().is_empty());
        assert_eq!(dispatcher.metrics_snapshot().failed, 1);
        assert!(!dir.path().join("map.html").exists());
    }

    #[test]
    fn unknown_equipment_is_dropped_at_the_boundary() {
        let dir = TempDir::new().unwrap();
        let dispatcher = test_dispatcher(&dir);

        let mut request = building_fire();
        request
            .equipment
            .push("🪓 Fire Axe".to_string());

        let outcome = dispatcher.execute(&request).unwrap();
        assert_eq!(outcome.record.equipment, vec!["🧯 Fire Extinguisher"]);
        assert_eq!(outcome.equipment_counts.len(), 1);
    }
}
