pub mod fleet;
pub mod incident;

pub use fleet::{EquipmentCatalog, FireUnit, VehicleRoster, STATION_LOCATION};
pub use incident::{DispatchRequest, IncidentRecord, Location, Severity};
