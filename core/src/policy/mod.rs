pub mod resources;
pub mod route;

pub use resources::{allocate_equipment, pick_vehicle};
pub use route::route_for;
