//! Response bodies for the JSON endpoints.

use serde::Serialize;

use crate::domain::{Coordinates, DashboardStats, Signal, Train, progress_percentage};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy"
    pub status: &'static str,

    /// Server time when the response was built (RFC 3339)
    pub timestamp: String,
}

/// A train in the list endpoint: the reduced seven-field view.
#[derive(Debug, Serialize)]
pub struct TrainSummary {
    pub id: String,
    pub name: String,
    pub route: String,
    pub current_station: String,
    pub status: String,
    pub delay: u32,
    pub speed: u32,
}

/// Location and progress of a single train, grouped for map views.
#[derive(Debug, Serialize)]
pub struct TrackInfo {
    pub id: String,
    pub name: String,
    pub current_location: CurrentLocation,
    pub route_info: RouteInfo,
    pub operational_status: OperationalStatus,
    pub next_station: String,

    /// The train's scheduled arrival time at its terminus
    pub estimated_arrival: String,
}

/// Where a train is right now.
#[derive(Debug, Serialize)]
pub struct CurrentLocation {
    pub station: String,
    pub coordinates: Coordinates,
    pub signal: Signal,
    pub track_condition: String,
}

/// How far along its route a train is.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub route: String,
    pub distance_covered: u32,
    pub total_distance: u32,

    /// Covered share of the route, one decimal place
    pub progress_percentage: f64,
}

/// Running state of a train.
#[derive(Debug, Serialize)]
pub struct OperationalStatus {
    pub speed: u32,
    pub status: String,
    pub delay: u32,
    pub weather: String,
}

/// Fleet-wide dashboard figures.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_trains: usize,
    pub on_time: usize,
    pub delayed: usize,
    pub operational_efficiency: f64,
    pub average_speed: f64,
    pub total_passengers: u64,

    /// Server time when the figures were computed (RFC 3339)
    pub last_updated: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl TrainSummary {
    /// Create from a full train record.
    pub fn from_train(train: &Train) -> Self {
        Self {
            id: train.id.clone(),
            name: train.name.clone(),
            route: train.route.clone(),
            current_station: train.current_station.clone(),
            status: train.status.clone(),
            delay: train.delay,
            speed: train.speed,
        }
    }
}

impl TrackInfo {
    /// Regroup a full train record into location, route and status blocks.
    pub fn from_train(train: &Train) -> Self {
        Self {
            id: train.id.clone(),
            name: train.name.clone(),
            current_location: CurrentLocation {
                station: train.current_station.clone(),
                coordinates: train.coordinates,
                signal: train.signal,
                track_condition: train.track_condition.clone(),
            },
            route_info: RouteInfo {
                route: train.route.clone(),
                distance_covered: train.distance_covered,
                total_distance: train.total_distance,
                progress_percentage: progress_percentage(
                    train.distance_covered,
                    train.total_distance,
                ),
            },
            operational_status: OperationalStatus {
                speed: train.speed,
                status: train.status.clone(),
                delay: train.delay,
                weather: train.weather.clone(),
            },
            next_station: train.next_station.clone(),
            estimated_arrival: train.arrival_time.clone(),
        }
    }
}

impl DashboardSummary {
    /// Attach a timestamp to computed figures.
    pub fn new(stats: DashboardStats, last_updated: String) -> Self {
        Self {
            total_trains: stats.total_trains,
            on_time: stats.on_time,
            delayed: stats.delayed,
            operational_efficiency: stats.operational_efficiency,
            average_speed: stats.average_speed,
            total_passengers: stats.total_passengers,
            last_updated,
        }
    }
}
