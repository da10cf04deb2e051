//! Extract command: pure column extraction to stdout

use super::shared::{CommandSummary, load_configuration};
use crate::Result;
use crate::app::services::csv_reader::{CsvReader, ReadStats};
use crate::app::services::extract::{extract_rows, extract_schema};
use crate::cli::args::CommonArgs;
use crate::config::RcpLogConfig;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Extract command runner
pub fn run_extract(args: &CommonArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();
    let config = load_configuration(args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = extract_file(&args.input, &config, &mut out)?;

    info!("Extract finished in {:.2?}", start_time.elapsed());
    Ok(CommandSummary::Extracted(stats))
}

/// Extract the configured columns of `path` into `out`
pub fn extract_file<W: Write>(path: &Path, config: &RcpLogConfig, out: &mut W) -> Result<ReadStats> {
    let mut reader = CsvReader::open(path, extract_schema(config), config.max_line_len)?;
    extract_rows(&mut reader, out)
}
