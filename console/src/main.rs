use anyhow::Context;
use clap::Parser;
use console_bridge::bridge::ConsoleBridge;
use console_bridge::model::ConsoleModel;
use dispatch::config::StationConfig;
use dispatch::runner::Dispatcher;
use scenario::request::{build_demo_request, ScenarioConfig};
use stationcore::roster::Severity;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod console_bridge;
mod dispatch;
mod scenario;

#[derive(Parser)]
#[command(author, version, about = "Fire-station dispatch console driver")]
struct Args {
    /// Run a single scripted dispatch and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load station settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Load the offline incident scenario from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Override the scenario severity (Low/Medium/High)
    #[arg(long)]
    severity: Option<String>,
    /// Delay between dispatch timeline phases, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pacing_ms: u64,
    /// Seed for the vehicle/equipment picker (omit for OS entropy)
    #[arg(long)]
    seed: Option<u64>,
    /// Directory for the chart and map artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Keep the HTTP console alive for incoming dispatch requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let station_config = if let Some(path) = args.config {
        StationConfig::load(path)?
    } else {
        StationConfig::from_args(args.pacing_ms, args.seed, args.output_dir)
    };

    log::info!(
        "station console starting, pacing {} ms, artifacts in {}",
        station_config.pacing_ms,
        station_config.output_dir.display()
    );

    let dispatcher = Arc::new(Dispatcher::new(station_config.clone()));
    let bridge = ConsoleBridge::new(dispatcher.clone());

    let mut request = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?.to_request()
    } else {
        build_demo_request()
    };
    if let Some(severity) = args.severity.as_deref() {
        request.severity = Severity::parse_lenient(severity);
    }

    if args.offline {
        let outcome = dispatcher.execute(&request)?;

        println!(
            "Offline dispatch -> vehicle {}, route {}, eta {} min, history {}",
            outcome.record.vehicle,
            outcome.record.route,
            outcome.record.eta_minutes,
            outcome.history.len()
        );

        let model = ConsoleModel::from_outcome(&outcome, dispatcher.metrics_snapshot());
        bridge.publish(&model)?;
        bridge.publish_status("Offline dispatch results ready.");

        let summary = format!(
            "incident={} vehicle={} route={} eta_min={} water_l={} history={}\n",
            outcome.record.incident_type,
            outcome.record.vehicle,
            outcome.record.route,
            outcome.record.eta_minutes,
            outcome.record.water_liters,
            outcome.history.len()
        );
        let log_path = station_config.output_dir.join("dispatch.log");
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        file.write_all(summary.as_bytes())?;

        println!("{}", outcome.report);
    }
    if args.serve {
        bridge.publish_status("HTTP console running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
