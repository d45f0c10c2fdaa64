//! Dispatch-domain core for the fire-station console.
//!
//! The modules cover the fabricated dispatch pipeline end to end: static
//! fleet reference data, the canned route policy, random resource picking,
//! the in-memory incident history, and the report/chart/map renderers.

pub mod history;
pub mod policy;
pub mod prelude;
pub mod render;
pub mod roster;
pub mod telemetry;

pub use prelude::{DispatchError, DispatchResult};
