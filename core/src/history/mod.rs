use crate::roster::IncidentRecord;

/// Append-only, process-lifetime sequence of completed dispatches.
///
/// Insertion order is dispatch order; records are never removed. The store
/// is owned by its dispatcher and resets with the process.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<IncidentRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: IncidentRecord) {
        self.records.push(record);
    }

    /// Read view in insertion order.
    pub fn all(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Location, Severity};

    fn record(incident_type: &str) -> IncidentRecord {
        IncidentRecord {
            incident_type: incident_type.to_string(),
            location: Location {
                latitude: 12.97,
                longitude: 77.59,
            },
            severity: Severity::Medium,
            vehicle: "🚒 Fire Engine 1".to_string(),
            officers: vec!["Officer A".to_string()],
            route: "Traffic-Aware City Route".to_string(),
            eta_minutes: 18,
            equipment: Vec::new(),
            water_liters: 500.0,
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut history = HistoryStore::new();
        assert!(history.is_empty());

        history.append(record("Building Fire"));
        history.append(record("Road Accident"));
        history.append(record("Gas Leak"));

        assert_eq!(history.len(), 3);
        let kinds: Vec<&str> = history
            .all()
            .iter()
            .map(|r| r.incident_type.as_str())
            .collect();
        assert_eq!(kinds, vec!["Building Fire", "Road Accident", "Gas Leak"]);
    }
}
