pub mod charts;
pub mod map;
pub mod report;

pub use charts::{equipment_chart, water_chart};
pub use map::render_map;
pub use report::{format_report, TimelinePhase};
