use crate::console_bridge::model::ConsoleModel;
use crate::console_bridge::page::CONSOLE_PAGE_HTML;
use crate::dispatch::runner::Dispatcher;
use anyhow::Result;
use serde_json::json;
use stationcore::roster::DispatchRequest;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn console_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge that hosts the dispatch HTTP console and processes incoming
/// form submissions.
pub struct ConsoleBridge {
    state: Arc<RwLock<ConsoleModel>>,
}

impl ConsoleBridge {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        let state = Arc::new(RwLock::new(ConsoleModel::default()));
        let artifacts_dir = dispatcher.output_dir().to_path_buf();
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let dispatcher_filter = warp::any().map(move || dispatcher.clone());

        let page_route = warp::path::end()
            .and(warp::get())
            .map(|| warp::reply::html(CONSOLE_PAGE_HTML));

        let payload_route = warp::path("payload")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<ConsoleModel>>| warp::reply::json(&*state.read().unwrap()));

        let dispatch_route = warp::path("dispatch")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(dispatcher_filter)
            .and_then(
                |request: DispatchRequest,
                 state: Arc<RwLock<ConsoleModel>>,
                 dispatcher: Arc<Dispatcher>| async move {
                    match dispatcher.execute(&request) {
                        Ok(outcome) => {
                            let model =
                                ConsoleModel::from_outcome(&outcome, dispatcher.metrics_snapshot());
                            let mut guard = state.write().unwrap();
                            *guard = model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "vehicle": outcome.record.vehicle,
                                    "route": outcome.record.route,
                                    "eta_minutes": outcome.record.eta_minutes,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("dispatch error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let artifacts_route = warp::path("artifacts").and(warp::fs::dir(artifacts_dir));

        thread::spawn(move || {
            let routes = page_route
                .or(payload_route)
                .or(dispatch_route)
                .or(artifacts_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(console_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &ConsoleModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[console] history rows: {}, dispatches completed: {}",
            guard.history.len(),
            guard.metrics.completed
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[console] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ConsoleModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::config::StationConfig;
    use crate::scenario::request::build_demo_request;
    use tempfile::TempDir;

    #[test]
    fn bridge_publishes_dispatch_results() {
        let dir = TempDir::new().unwrap();
        let config = StationConfig {
            pacing_ms: 0,
            seed: Some(1),
            output_dir: dir.path().to_path_buf(),
            ..StationConfig::default()
        };
        let dispatcher = Arc::new(Dispatcher::new(config));
        let bridge = ConsoleBridge::new(dispatcher.clone());

        let outcome = dispatcher.execute(&build_demo_request()).unwrap();
        let model = ConsoleModel::from_outcome(&outcome, dispatcher.metrics_snapshot());
        bridge.publish(&model).unwrap();

        let snapshot = bridge.snapshot();
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(snapshot.metrics.completed, 1);
        assert_eq!(snapshot.map_document, "/artifacts/map.html");
    }
}
