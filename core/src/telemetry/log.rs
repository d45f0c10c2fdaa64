use crate::render::report::TimelinePhase;
use log::info;

/// Thin facade over the process logger for dispatch lifecycle events.
pub struct EventLog;

impl EventLog {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_phase(&self, phase: TimelinePhase) {
        info!("[{}] {}", phase.label(), phase.narrative());
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
