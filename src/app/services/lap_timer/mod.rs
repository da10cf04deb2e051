//! Lap timing for replayed GPS samples
//!
//! The timing service is consumed through the [`LapTimer`] trait so the replay
//! driver does not depend on how predictions are made. Lap boundaries are
//! decided separately by [`LapStateMachine`] from the logged lap number.
//!
//! - [`state`] - Lap transition state machine
//! - [`predictive`] - Reference-lap predictive timer

pub mod predictive;
pub mod state;

pub use predictive::PredictiveTimer;
pub use state::{LapState, LapStateMachine, LapTransition};

use crate::app::models::{GeoPoint, GpsSnapshot};
use crate::constants::MILLIS_PER_MINUTE;

/// Stateful lap timing service driven by GPS samples
pub trait LapTimer {
    /// Discard all lap history
    fn reset(&mut self);

    /// Begin a lap at `point`, `time` milliseconds after the first fix
    fn start_lap(&mut self, point: GeoPoint, time: i64);

    /// Feed a sample of the lap in progress
    fn add_gps_sample(&mut self, snapshot: &GpsSnapshot);

    /// Close the lap in progress at this sample
    fn finish_lap(&mut self, snapshot: &GpsSnapshot);

    /// Predicted lap time in milliseconds at this sample, 0 if unknown
    fn predicted_time(&self, snapshot: &GpsSnapshot) -> u32;
}

/// Convert a millisecond duration to minutes
pub fn tiny_millis_to_minutes(millis: u32) -> f64 {
    f64::from(millis) / MILLIS_PER_MINUTE
}
