//! Train records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status label counted as on time by the dashboard.
pub const ON_TIME: &str = "On Time";

/// A signal aspect shown to a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Signal::Green => "Green",
            Signal::Yellow => "Yellow",
            Signal::Red => "Red",
        })
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A train and everything known about its current run.
///
/// Field order matches the JSON document served by the detail endpoint.
/// Nothing here is cross-checked: `passengers` may exceed `capacity`,
/// `distance_covered` may exceed `total_distance`, and `current_station`
/// need not name a known [`Station`](super::Station).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Train number, e.g. "12345"
    pub id: String,

    pub name: String,

    /// "Origin - Destination"
    pub route: String,

    pub current_station: String,

    pub next_station: String,

    /// Free-form status label ("On Time", "Delayed", "Running Late", ...)
    pub status: String,

    /// Delay in minutes
    pub delay: u32,

    pub speed: u32,

    pub departure_time: String,

    /// Scheduled arrival, possibly with a "+N" day offset (e.g. "12:30+1")
    pub arrival_time: String,

    pub coaches: u32,

    pub passengers: u32,

    pub capacity: u32,

    pub engine_type: String,

    pub driver: String,

    pub guard: String,

    pub distance_covered: u32,

    pub total_distance: u32,

    pub coordinates: Coordinates,

    pub signal: Signal,

    pub track_condition: String,

    pub weather: String,
}

impl Train {
    /// Whether the status is exactly [`ON_TIME`].
    pub fn is_on_time(&self) -> bool {
        self.status == ON_TIME
    }

    /// Whether the status mentions a delay.
    ///
    /// This is a case-sensitive substring test, so "Severely Late Arrival"
    /// counts while "late" does not.
    pub fn is_delayed(&self) -> bool {
        self.status.contains("Delayed") || self.status.contains("Late")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn with_status(status: &str) -> Train {
        let mut train = Dataset::seed().trains[0].clone();
        train.status = status.to_string();
        train
    }

    #[test]
    fn on_time_is_exact_match() {
        assert!(with_status("On Time").is_on_time());
        assert!(!with_status("on time").is_on_time());
        assert!(!with_status("On Time ").is_on_time());
    }

    #[test]
    fn delayed_is_substring_match() {
        assert!(with_status("Delayed").is_delayed());
        assert!(with_status("Running Late").is_delayed());
        assert!(with_status("Severely Late Arrival").is_delayed());
        assert!(with_status("Delayed Late").is_delayed());
        assert!(!with_status("running late").is_delayed());
        assert!(!with_status("On Time").is_delayed());
        assert!(!with_status("Cancelled").is_delayed());
    }

    #[test]
    fn signal_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Signal::Yellow).unwrap(), "\"Yellow\"");
        assert_eq!(Signal::Red.to_string(), "Red");
        let parsed: Signal = serde_json::from_str("\"Green\"").unwrap();
        assert_eq!(parsed, Signal::Green);
    }

    #[test]
    fn unknown_signal_rejected() {
        assert!(serde_json::from_str::<Signal>("\"Blue\"").is_err());
    }

    #[test]
    fn serialized_field_order() {
        let json = serde_json::to_string(&Dataset::seed().trains[0]).unwrap();
        let id = json.find("\"id\"").unwrap();
        let route = json.find("\"route\"").unwrap();
        let coordinates = json.find("\"coordinates\"").unwrap();
        let weather = json.find("\"weather\"").unwrap();
        assert!(id < route && route < coordinates && coordinates < weather);
        assert!(json.contains("\"coordinates\":{\"lat\":26.2183,\"lng\":78.1828}"));
    }
}
