use crate::prelude::{DispatchError, DispatchResult};
use crate::roster::IncidentRecord;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Display;

const CHART_SIZE: (u32, u32) = (500, 300);
const TOMATO: RGBColor = RGBColor(255, 99, 71);

fn render_error(err: impl Display) -> DispatchError {
    DispatchError::Render(err.to_string())
}

/// Bar chart of fabricated per-label usage counts, one bar per label.
///
/// Empty input renders empty axes; there is no special-case message.
pub fn equipment_chart(counts: &BTreeMap<String, u32>) -> DispatchResult<String> {
    let labels: Vec<String> = counts.keys().cloned().collect();
    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let slots = labels.len().max(1);
        let max_count = counts.values().copied().max().unwrap_or(0).max(1);
        let mut chart = ChartBuilder::on(&root)
            .caption("Equipment Usage", ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(36)
            .y_label_area_size(40)
            .build_cartesian_2d(0usize..slots, 0u32..max_count + 1)
            .map_err(render_error)?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Units Used")
            .x_labels(slots)
            .x_label_formatter(&|slot| labels.get(*slot).cloned().unwrap_or_default())
            .draw()
            .map_err(render_error)?;
        chart
            .draw_series(counts.values().enumerate().map(|(slot, &count)| {
                Rectangle::new([(slot, 0), (slot + 1, count)], TOMATO.filled())
            }))
            .map_err(render_error)?;
        root.present().map_err(render_error)?;
    }
    Ok(document)
}

/// Bar chart of water consumption across the whole history, one bar per
/// incident. An empty history renders a standalone placeholder instead.
pub fn water_chart(history: &[IncidentRecord]) -> DispatchResult<String> {
    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        if history.is_empty() {
            root.draw(&Text::new(
                "No Incidents Yet",
                (190, 140),
                ("sans-serif", 20).into_font(),
            ))
            .map_err(render_error)?;
            root.present().map_err(render_error)?;
        } else {
            let max_water = history
                .iter()
                .map(|record| record.water_liters)
                .fold(0.0f64, f64::max)
                .max(1.0);
            let mut chart = ChartBuilder::on(&root)
                .caption("Water Usage per Incident", ("sans-serif", 18))
                .margin(10)
                .x_label_area_size(36)
                .y_label_area_size(48)
                .build_cartesian_2d(0usize..history.len(), 0f64..max_water * 1.1)
                .map_err(render_error)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc("Incident #")
                .y_desc("Liters")
                .draw()
                .map_err(render_error)?;
            chart
                .draw_series(history.iter().enumerate().map(|(index, record)| {
                    Rectangle::new(
                        [(index, 0.0), (index + 1, record.water_liters)],
                        BLUE.filled(),
                    )
                }))
                .map_err(render_error)?;
            root.present().map_err(render_error)?;
        }
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Location, Severity};

    fn record(water_liters: f64) -> IncidentRecord {
        IncidentRecord {
            incident_type: "Building Fire".to_string(),
            location: Location {
                latitude: 12.97,
                longitude: 77.59,
            },
            severity: Severity::High,
            vehicle: "🚒 Fire Engine 1".to_string(),
            officers: vec!["Officer A".to_string()],
            route: "Emergency Green Corridor".to_string(),
            eta_minutes: 12,
            equipment: Vec::new(),
            water_liters,
        }
    }

    #[test]
    fn equipment_chart_renders_selected_counts() {
        let mut counts = BTreeMap::new();
        counts.insert("🧯 Fire Extinguisher".to_string(), 2);
        counts.insert("💧 Water Hose".to_string(), 3);
        let document = equipment_chart(&counts).unwrap();
        assert!(document.contains("<svg"));
        assert!(document.contains("Equipment Usage"));
    }

    #[test]
    fn equipment_chart_accepts_empty_input() {
        let document = equipment_chart(&BTreeMap::new()).unwrap();
        assert!(document.contains("<svg"));
    }

    #[test]
    fn empty_history_renders_placeholder() {
        let document = water_chart(&[]).unwrap();
        assert!(document.contains("No Incidents Yet"));
    }

    #[test]
    fn placeholder_differs_from_populated_chart() {
        let empty = water_chart(&[]).unwrap();
        let populated = water_chart(&[record(500.0), record(750.0)]).unwrap();
        assert_ne!(empty, populated);
        assert!(!populated.contains("No Incidents Yet"));
        assert!(populated.contains("Water Usage per Incident"));
    }
}
