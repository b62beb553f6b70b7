//! Built-in operational snapshot.

use crate::domain::{Coordinates, Signal, Station, Train};

/// Per-train values in the order they appear in the table below.
struct TrainRow {
    id: &'static str,
    name: &'static str,
    route: &'static str,
    current_station: &'static str,
    next_station: &'static str,
    status: &'static str,
    delay: u32,
    speed: u32,
    departure_time: &'static str,
    arrival_time: &'static str,
    coaches: u32,
    passengers: u32,
    capacity: u32,
    driver: &'static str,
    guard: &'static str,
    distance_covered: u32,
    total_distance: u32,
    coordinates: (f64, f64),
    signal: Signal,
    track_condition: &'static str,
    weather: &'static str,
}

const TRAINS: [TrainRow; 4] = [
    TrainRow {
        id: "12345",
        name: "Rajdhani Express",
        route: "New Delhi - Mumbai Central",
        current_station: "Gwalior Junction",
        next_station: "Jhansi Junction",
        status: "On Time",
        delay: 0,
        speed: 85,
        departure_time: "14:30",
        arrival_time: "20:45",
        coaches: 18,
        passengers: 1250,
        capacity: 1400,
        driver: "Rajesh Kumar",
        guard: "Amit Sharma",
        distance_covered: 345,
        total_distance: 1384,
        coordinates: (26.2183, 78.1828),
        signal: Signal::Green,
        track_condition: "Good",
        weather: "Clear",
    },
    TrainRow {
        id: "12904",
        name: "Golden Temple Mail",
        route: "Mumbai Central - Amritsar",
        current_station: "Vadodara Junction",
        next_station: "Anand Junction",
        status: "Delayed",
        delay: 15,
        speed: 0,
        departure_time: "21:40",
        arrival_time: "12:30+1",
        coaches: 20,
        passengers: 1680,
        capacity: 1800,
        driver: "Suresh Patel",
        guard: "Mohan Singh",
        distance_covered: 98,
        total_distance: 1928,
        coordinates: (22.3072, 73.1812),
        signal: Signal::Red,
        track_condition: "Under Maintenance",
        weather: "Light Rain",
    },
    TrainRow {
        id: "12002",
        name: "Shatabdi Express",
        route: "New Delhi - Bhopal",
        current_station: "Agra Cantt",
        next_station: "Gwalior Junction",
        status: "On Time",
        delay: 0,
        speed: 110,
        departure_time: "06:00",
        arrival_time: "14:15",
        coaches: 12,
        passengers: 850,
        capacity: 1000,
        driver: "Pradeep Joshi",
        guard: "Ramesh Verma",
        distance_covered: 232,
        total_distance: 707,
        coordinates: (27.1767, 78.0081),
        signal: Signal::Green,
        track_condition: "Excellent",
        weather: "Clear",
    },
    TrainRow {
        id: "12626",
        name: "Kerala Express",
        route: "New Delhi - Trivandrum",
        current_station: "Nagpur Junction",
        next_station: "Ballarshah Junction",
        status: "Running Late",
        delay: 45,
        speed: 95,
        departure_time: "11:55",
        arrival_time: "11:40+2",
        coaches: 22,
        passengers: 1950,
        capacity: 2200,
        driver: "Anand Kumar",
        guard: "Vijay Nair",
        distance_covered: 1056,
        total_distance: 2647,
        coordinates: (21.1458, 79.0882),
        signal: Signal::Yellow,
        track_condition: "Good",
        weather: "Cloudy",
    },
];

/// (code, name, platforms, tracks, trains present, passenger count)
const STATIONS: [(&str, &str, u32, u32, u32, u32); 2] = [
    ("NDLS", "New Delhi", 16, 8, 12, 25000),
    ("CSTM", "Mumbai Central", 18, 10, 15, 32000),
];

impl From<&TrainRow> for Train {
    fn from(row: &TrainRow) -> Self {
        Train {
            id: row.id.to_string(),
            name: row.name.to_string(),
            route: row.route.to_string(),
            current_station: row.current_station.to_string(),
            next_station: row.next_station.to_string(),
            status: row.status.to_string(),
            delay: row.delay,
            speed: row.speed,
            departure_time: row.departure_time.to_string(),
            arrival_time: row.arrival_time.to_string(),
            coaches: row.coaches,
            passengers: row.passengers,
            capacity: row.capacity,
            engine_type: "Electric".to_string(),
            driver: row.driver.to_string(),
            guard: row.guard.to_string(),
            distance_covered: row.distance_covered,
            total_distance: row.total_distance,
            coordinates: Coordinates::new(row.coordinates.0, row.coordinates.1),
            signal: row.signal,
            track_condition: row.track_condition.to_string(),
            weather: row.weather.to_string(),
        }
    }
}

pub(super) fn trains() -> Vec<Train> {
    TRAINS.iter().map(Train::from).collect()
}

pub(super) fn stations() -> Vec<Station> {
    STATIONS
        .iter()
        .map(
            |&(code, name, platforms, tracks, trains_present, passenger_count)| Station {
                id: code.to_string(),
                name: name.to_string(),
                code: code.to_string(),
                platforms,
                tracks,
                status: "Operational".to_string(),
                trains_present,
                passenger_count,
            },
        )
        .collect()
}
