//! Validate command: column-count consistency check

use super::shared::{CommandSummary, load_configuration};
use crate::Result;
use crate::app::services::column_validator::{ColumnReport, validate_file};
use crate::cli::args::CommonArgs;
use colored::*;

/// Validate command runner
///
/// Prints the summary line on success; an inconsistent row is returned as an
/// error for `main` to report.
pub fn run_validate(args: &CommonArgs) -> Result<CommandSummary> {
    let config = load_configuration(args)?;
    let report = validate_file(&args.input, config.max_line_len)?;

    println!("{}", summary_line(&report).green().bold());
    Ok(CommandSummary::Validated(report))
}

fn summary_line(report: &ColumnReport) -> String {
    format!(
        "All consistent! Cols: {}, Rows: {}",
        report.columns, report.rows
    )
}
