use crate::roster::Severity;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Point-in-time view of the dispatch counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub completed: usize,
    pub failed: usize,
    pub high_severity: usize,
}

/// Mutex-guarded dispatch counters surfaced on the console payload.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_completed(&self, severity: Severity) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.completed += 1;
            if severity == Severity::High {
                metrics.high_severity += 1;
            }
        }
    }

    pub fn record_failed(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failed += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|metrics| *metrics).unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_completed_and_failed() {
        let recorder = MetricsRecorder::new();
        recorder.record_completed(Severity::High);
        recorder.record_completed(Severity::Low);
        recorder.record_failed();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.completed, 2);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.high_severity, 1);
    }
}
