use crate::roster::incident::Location;
use serde::{Deserialize, Serialize};

/// Fixed coordinate every response departs from.
pub const STATION_LOCATION: Location = Location {
    latitude: 12.9716,
    longitude: 77.5946,
};

/// A response vehicle and its fixed officer roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireUnit {
    pub name: String,
    pub officers: Vec<String>,
}

fn unit(name: &str, officers: &[&str]) -> FireUnit {
    FireUnit {
        name: name.to_string(),
        officers: officers.iter().map(|o| o.to_string()).collect(),
    }
}

/// Read-only roster of configured response vehicles.
#[derive(Debug, Clone)]
pub struct VehicleRoster {
    units: Vec<FireUnit>,
}

impl VehicleRoster {
    /// The station's standing fleet. Never empty.
    pub fn standard() -> Self {
        Self {
            units: vec![
                unit("🚒 Fire Engine 1", &["Officer A", "Officer B", "Officer C"]),
                unit("🚒 Fire Engine 2", &["Officer D", "Officer E"]),
                unit("🚑 Rescue Van 1", &["Officer F", "Officer G"]),
            ],
        }
    }

    pub fn units(&self) -> &[FireUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.iter().any(|u| u.name == name)
    }
}

/// Read-only set of equipment labels the station stocks.
#[derive(Debug, Clone)]
pub struct EquipmentCatalog {
    items: Vec<String>,
}

impl EquipmentCatalog {
    pub fn standard() -> Self {
        Self {
            items: [
                "🧯 Fire Extinguisher",
                "💧 Water Hose",
                "🫁 Oxygen Cylinder",
                "✂ Hydraulic Cutter",
                "🧤 Protective Gear",
            ]
            .iter()
            .map(|i| i.to_string())
            .collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|i| i == label)
    }

    /// Drops selection entries the station does not stock, preserving order.
    pub fn retain_known(&self, selection: &[String]) -> Vec<String> {
        selection
            .iter()
            .filter(|label| self.contains(label))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_roster_lists_three_units() {
        let roster = VehicleRoster::standard();
        assert_eq!(roster.len(), 3);
        assert!(roster.contains("🚑 Rescue Van 1"));
        assert!(!roster.contains("🚁 Air Support"));
    }

    #[test]
    fn every_unit_carries_officers() {
        let roster = VehicleRoster::standard();
        assert!(roster.units().iter().all(|u| !u.officers.is_empty()));
    }

    #[test]
    fn catalog_filters_unknown_labels_in_order() {
        let catalog = EquipmentCatalog::standard();
        let selection = vec![
            "💧 Water Hose".to_string(),
            "🪓 Fire Axe".to_string(),
            "🧯 Fire Extinguisher".to_string(),
        ];
        let kept = catalog.retain_known(&selection);
        assert_eq!(kept, vec!["💧 Water Hose", "🧯 Fire Extinguisher"]);
    }

    #[test]
    fn catalog_retains_nothing_from_empty_selection() {
        let catalog = EquipmentCatalog::standard();
        assert!(catalog.retain_known(&[]).is_empty());
    }
}
