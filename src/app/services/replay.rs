//! Replay of a telemetry log through a lap timer
//!
//! Every fully populated row is converted to a GPS snapshot and fed to the
//! timing service. Lap transitions come from [`LapStateMachine`]; on a
//! transition the previous lap is finished with the new sample before the new
//! lap is started at it. Each row is echoed byte for byte with the predicted
//! lap time in minutes appended. Numeric fields are read leniently, so a
//! value such as `n/a` counts as zero rather than dropping the row.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::app::models::{GpsSnapshot, LogicalRow, ReplaySample};
use crate::app::services::csv_reader::field_parsers::{field_f64, field_i32, field_i64};
use crate::app::services::csv_reader::{ColumnSchema, CsvReader, ReadStats};
use crate::app::services::lap_timer::{
    LapStateMachine, LapTimer, LapTransition, tiny_millis_to_minutes,
};
use crate::config::{LapField, RcpLogConfig};
use crate::constants::{PRED_TIME_FIXED_HEADER, REPLAY_COLUMNS, replay_fields};
use crate::{Error, Result};

/// Outcome of a replay run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub read: ReadStats,
    pub laps_started: usize,
    pub laps_finished: usize,
}

/// Unresolved schema of the replay columns
pub fn replay_schema() -> ColumnSchema {
    ColumnSchema::new(REPLAY_COLUMNS.iter().copied())
}

/// Typed replay fields of a complete row
pub fn parse_replay_sample(row: &LogicalRow, lap_field: LapField) -> ReplaySample {
    ReplaySample {
        interval: field_i64(row, replay_fields::INTERVAL),
        latitude: field_f64(row, replay_fields::LATITUDE),
        longitude: field_f64(row, replay_fields::LONGITUDE),
        gps_quality: field_i32(row, replay_fields::GPS_QUAL),
        gps_dop: field_f64(row, replay_fields::GPS_DOP),
        elapsed_time: field_f64(row, replay_fields::ELAPSED_TIME),
        lap: field_i64(row, lap_field.column_position()),
    }
}

/// Drives a [`LapTimer`] from the rows of a replay log
#[derive(Debug)]
pub struct ReplayDriver<T> {
    timer: T,
    laps: LapStateMachine,
    lap_field: LapField,
    precision: usize,
    first_interval: Option<i64>,
    laps_started: usize,
    laps_finished: usize,
}

impl<T: LapTimer> ReplayDriver<T> {
    pub fn new(timer: T, config: &RcpLogConfig) -> Self {
        Self {
            timer,
            laps: LapStateMachine::new(),
            lap_field: config.lap_field,
            precision: config.predicted_time_precision,
            first_interval: None,
            laps_started: 0,
            laps_finished: 0,
        }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Replay every complete row of `reader`, writing CSV to `out`
    ///
    /// Lap transitions are reported on `diagnostics` as `Starting lap N` and
    /// `Finishing lap N`. Every complete row reaches the timer.
    pub fn run<R, W, D>(
        &mut self,
        reader: &mut CsvReader<R>,
        out: &mut W,
        diagnostics: &mut D,
    ) -> Result<ReplayStats>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        self.timer.reset();
        self.laps.reset();
        self.first_interval = None;
        self.laps_started = 0;
        self.laps_finished = 0;

        out.write_all(&reader.schema().header_line())
            .and_then(|()| writeln!(out, ",{}", PRED_TIME_FIXED_HEADER))
            .map_err(write_error)?;

        while let Some(row) = reader.next_complete_row()? {
            let sample = parse_replay_sample(&row, self.lap_field);
            let predicted = self.process_sample(&sample, diagnostics)?;

            out.write_all(&row.to_csv_line())
                .and_then(|()| {
                    writeln!(
                        out,
                        ",{:.*}",
                        self.precision,
                        tiny_millis_to_minutes(predicted)
                    )
                })
                .map_err(write_error)?;
        }

        out.flush().map_err(write_error)?;

        let stats = ReplayStats {
            read: reader.stats().clone(),
            laps_started: self.laps_started,
            laps_finished: self.laps_finished,
        };

        info!(
            "Replayed {} rows ({} skipped), {} laps started, {} finished",
            stats.read.rows_emitted,
            stats.read.rows_skipped,
            stats.laps_started,
            stats.laps_finished
        );

        Ok(stats)
    }

    /// Feed one sample to the timer and return its predicted lap time in ms
    pub fn process_sample<D: Write>(
        &mut self,
        sample: &ReplaySample,
        diagnostics: &mut D,
    ) -> Result<u32> {
        let first_interval = *self.first_interval.get_or_insert(sample.interval);
        let snapshot = sample.snapshot(first_interval);

        match self.laps.observe(sample.lap) {
            LapTransition::Sample => self.timer.add_gps_sample(&snapshot),
            LapTransition::Start { lap } => {
                self.start_lap(lap, &snapshot, diagnostics)?;
            }
            LapTransition::FinishAndStart { finished, started } => {
                self.timer.finish_lap(&snapshot);
                self.laps_finished += 1;
                writeln!(diagnostics, "Finishing lap {}", finished).map_err(write_error)?;
                debug!("Finished lap {} at {} ms", finished, snapshot.delta_first_fix);

                self.start_lap(started, &snapshot, diagnostics)?;
            }
        }

        Ok(self.timer.predicted_time(&snapshot))
    }

    fn start_lap<D: Write>(
        &mut self,
        lap: i64,
        snapshot: &GpsSnapshot,
        diagnostics: &mut D,
    ) -> Result<()> {
        self.timer
            .start_lap(snapshot.sample.point, snapshot.delta_first_fix);
        self.laps_started += 1;
        writeln!(diagnostics, "Starting lap {}", lap).map_err(write_error)?;
        debug!("Started lap {} at {} ms", lap, snapshot.delta_first_fix);
        Ok(())
    }
}

fn write_error(e: std::io::Error) -> Error {
    Error::io("Failed to write output", e)
}
