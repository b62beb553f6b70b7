//! Station records.

use serde::{Deserialize, Serialize};

/// A station and its current occupancy.
///
/// `trains_present` and `passenger_count` are stored values; they are not
/// derived from the train collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Lookup key, e.g. "NDLS"
    pub id: String,

    pub name: String,

    /// Station code (same value as `id` in the built-in data)
    pub code: String,

    pub platforms: u32,

    pub tracks: u32,

    pub status: String,

    pub trains_present: u32,

    pub passenger_count: u32,
}
