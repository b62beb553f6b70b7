//! Domain types for the railway operations API.
//!
//! Records are plain data: they are loaded once at startup and never
//! mutated, so no invariants beyond field types are enforced here.

mod metrics;
mod station;
mod train;

pub use metrics::{DashboardStats, progress_percentage, round_to_tenth};
pub use station::Station;
pub use train::{Coordinates, ON_TIME, Signal, Train};
