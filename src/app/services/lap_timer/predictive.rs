//! Reference-lap predictive timer
//!
//! The fastest completed lap is kept as a reference trace of positions and
//! elapsed times. During a lap the prediction is the reference lap time
//! adjusted by how far ahead or behind the current lap is at the nearest
//! reference position.

use tracing::debug;

use super::LapTimer;
use crate::app::models::{GeoPoint, GpsSnapshot};

#[derive(Debug, Clone, Copy)]
struct TracePoint {
    point: GeoPoint,
    /// Milliseconds since the lap started
    elapsed: i64,
}

#[derive(Debug, Clone)]
struct ReferenceLap {
    trace: Vec<TracePoint>,
    lap_time: i64,
}

/// Predictive lap timer comparing the current lap against the best lap
#[derive(Debug, Clone, Default)]
pub struct PredictiveTimer {
    lap_start: Option<i64>,
    current: Vec<TracePoint>,
    reference: Option<ReferenceLap>,
    laps_completed: usize,
}

impl PredictiveTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lap time of the reference lap in milliseconds
    pub fn reference_lap_time(&self) -> Option<i64> {
        self.reference.as_ref().map(|r| r.lap_time)
    }

    pub fn laps_completed(&self) -> usize {
        self.laps_completed
    }

    pub fn is_lap_in_progress(&self) -> bool {
        self.lap_start.is_some()
    }
}

impl LapTimer for PredictiveTimer {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn start_lap(&mut self, point: GeoPoint, time: i64) {
        self.lap_start = Some(time);
        self.current.clear();
        self.current.push(TracePoint { point, elapsed: 0 });
    }

    fn add_gps_sample(&mut self, snapshot: &GpsSnapshot) {
        if let Some(start) = self.lap_start {
            self.current.push(TracePoint {
                point: snapshot.sample.point,
                elapsed: snapshot.delta_first_fix - start,
            });
        }
    }

    fn finish_lap(&mut self, snapshot: &GpsSnapshot) {
        let Some(start) = self.lap_start.take() else {
            return;
        };

        let lap_time = snapshot.delta_first_fix - start;
        self.current.push(TracePoint {
            point: snapshot.sample.point,
            elapsed: lap_time,
        });
        self.laps_completed += 1;

        let is_best = lap_time > 0
            && self
                .reference
                .as_ref()
                .is_none_or(|reference| lap_time < reference.lap_time);

        if is_best {
            debug!("New reference lap: {} ms", lap_time);
            self.reference = Some(ReferenceLap {
                trace: std::mem::take(&mut self.current),
                lap_time,
            });
        } else {
            self.current.clear();
        }
    }

    fn predicted_time(&self, snapshot: &GpsSnapshot) -> u32 {
        let (Some(start), Some(reference)) = (self.lap_start, self.reference.as_ref()) else {
            return 0;
        };

        let position = snapshot.sample.point;
        let Some(nearest) = reference.trace.iter().min_by(|a, b| {
            a.point
                .distance_to(&position)
                .total_cmp(&b.point.distance_to(&position))
        }) else {
            return 0;
        };

        let elapsed = snapshot.delta_first_fix - start;
        let predicted = reference.lap_time + (elapsed - nearest.elapsed);

        predicted.clamp(0, i64::from(u32::MAX)) as u32
    }
}
