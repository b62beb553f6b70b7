//! Derived figures: route progress and the fleet-wide dashboard numbers.

use super::Train;

/// Round to one decimal place, ties to even.
///
/// Rounding works on the exact binary value with no intermediate scaling,
/// so only true ties go to even: `0.25` becomes `0.2`, while `0.35` (stored
/// just below) becomes `0.3` and `0.8500000000000001` becomes `0.9`.
pub fn round_to_tenth(value: f64) -> f64 {
    // Float formatting is correctly rounded, ties to even.
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Percentage of the route already covered, to one decimal place.
///
/// A zero-length route reports `0.0`.
pub fn progress_percentage(distance_covered: u32, total_distance: u32) -> f64 {
    if total_distance == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(distance_covered) / f64::from(total_distance) * 100.0)
}

/// Aggregate figures across a set of trains.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_trains: usize,
    pub on_time: usize,
    pub delayed: usize,
    /// Share of on-time trains as a percentage
    pub operational_efficiency: f64,
    pub average_speed: f64,
    pub total_passengers: u64,
}

impl DashboardStats {
    /// Compute the figures in a single pass.
    ///
    /// An empty slice yields all zeros rather than dividing by zero.
    pub fn compute(trains: &[Train]) -> Self {
        let total_trains = trains.len();
        let mut on_time = 0;
        let mut delayed = 0;
        let mut speed_sum: u64 = 0;
        let mut total_passengers: u64 = 0;

        for train in trains {
            if train.is_on_time() {
                on_time += 1;
            }
            if train.is_delayed() {
                delayed += 1;
            }
            speed_sum += u64::from(train.speed);
            total_passengers += u64::from(train.passengers);
        }

        let (operational_efficiency, average_speed) = if total_trains == 0 {
            (0.0, 0.0)
        } else {
            let total = total_trains as f64;
            (
                round_to_tenth(on_time as f64 / total * 100.0),
                round_to_tenth(speed_sum as f64 / total),
            )
        };

        Self {
            total_trains,
            on_time,
            delayed,
            operational_efficiency,
            average_speed,
            total_passengers,
        }
    }
}
