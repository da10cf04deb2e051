//! Core data models for telemetry log processing
//!
//! This module contains the row type produced by the CSV reader and the GPS
//! types exchanged with the lap-timing service.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// One data row projected onto the logical columns of a schema
///
/// `values` always holds exactly one slot per schema column, in schema order.
/// Slots whose physical column was absent from a short line are left empty,
/// so `filled == values.len()` is the only signal of a usable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRow {
    /// Trimmed raw values in schema order
    pub values: Vec<Vec<u8>>,

    /// Number of slots holding a non-empty value
    pub filled: usize,

    /// 1-based physical line number in the source file
    pub line_number: usize,
}

impl LogicalRow {
    /// Whether every logical column received a non-empty value
    pub fn is_complete(&self) -> bool {
        self.filled == self.values.len()
    }

    /// Value of the logical column at `position`
    pub fn get(&self, position: usize) -> Option<&[u8]> {
        self.values.get(position).map(Vec::as_slice)
    }

    /// Values comma-joined in schema order, bytes unchanged
    pub fn to_csv_line(&self) -> Vec<u8> {
        self.values.join(&b',')
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters (haversine)
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
    }
}

/// A single GPS fix as logged
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GpsSample {
    pub point: GeoPoint,

    /// Logger interval timestamp in milliseconds
    pub time: i64,

    /// Fix quality indicator
    pub quality: i32,

    /// Dilution of precision
    pub dop: f64,
}

/// A GPS sample together with its offset from the first fix of the log
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GpsSnapshot {
    /// Milliseconds since the first complete sample of the log
    pub delta_first_fix: i64,

    pub sample: GpsSample,
}

/// The typed fields of a replay row the timing service consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaySample {
    pub interval: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub gps_quality: i32,
    pub gps_dop: f64,
    pub elapsed_time: f64,
    pub lap: i64,
}

impl ReplaySample {
    /// Build the snapshot handed to the timing service
    pub fn snapshot(&self, first_interval: i64) -> GpsSnapshot {
        GpsSnapshot {
            delta_first_fix: self.interval - first_interval,
            sample: GpsSample {
                point: GeoPoint::new(self.latitude, self.longitude),
                time: self.interval,
                quality: self.gps_quality,
                dop: self.gps_dop,
            },
        }
    }
}
