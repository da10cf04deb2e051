//! Replay command: feed a log through the predictive lap timer

use super::shared::{CommandSummary, load_configuration};
use crate::Result;
use crate::app::services::csv_reader::CsvReader;
use crate::app::services::lap_timer::PredictiveTimer;
use crate::app::services::replay::{ReplayDriver, ReplayStats, replay_schema};
use crate::cli::args::CommonArgs;
use crate::config::RcpLogConfig;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Replay command runner
///
/// CSV goes to stdout, lap diagnostics to stderr.
pub fn run_replay(args: &CommonArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();
    let config = load_configuration(args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();

    let stats = replay_file(&args.input, &config, &mut out, &mut diagnostics)?;

    info!("Replay finished in {:.2?}", start_time.elapsed());
    Ok(CommandSummary::Replayed(stats))
}

/// Replay `path` through a fresh [`PredictiveTimer`]
pub fn replay_file<W: Write, D: Write>(
    path: &Path,
    config: &RcpLogConfig,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<ReplayStats> {
    let mut reader = CsvReader::open(path, replay_schema(), config.max_line_len)?;
    let mut driver = ReplayDriver::new(PredictiveTimer::new(), config);

    driver.run(&mut reader, out, diagnostics)
}
