//! Shared utilities for the CLI commands
//!
//! Logging setup, configuration loading and the summary each command returns.

use crate::{Error, Result};
use crate::app::services::column_validator::ColumnReport;
use crate::app::services::csv_reader::ReadStats;
use crate::app::services::replay::ReplayStats;
use crate::cli::args::CommonArgs;
use crate::config::RcpLogConfig;
use crate::constants::LOG_TARGET;
use tracing::{debug, info};

/// What a finished command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSummary {
    Extracted(ReadStats),
    Replayed(ReplayStats),
    Validated(ColumnReport),
}

impl CommandSummary {
    /// Rows written to stdout, or lines checked for `validate`
    pub fn rows(&self) -> usize {
        match self {
            Self::Extracted(stats) => stats.rows_emitted,
            Self::Replayed(stats) => stats.read.rows_emitted,
            Self::Validated(report) => report.rows,
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset
pub fn log_directive(level: &str) -> String {
    format!("{}={}", LOG_TARGET, level)
}

/// Install the stderr subscriber for this process
///
/// `RUST_LOG` overrides the level chosen by `-v`/`-q`. Quiet runs get the
/// compact format, others an uptime column. Stdout is left to the CSV output.
/// Fails if a global subscriber is already installed.
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(log_level)));

    let compact = args.quiet.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
    });
    let timed = (!args.quiet).then(|| {
        fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(timed)
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from the `--config` file, the default location or defaults
pub fn load_configuration(args: &CommonArgs) -> Result<RcpLogConfig> {
    args.validate()?;

    let config = RcpLogConfig::load(args.config_path())?;
    debug!("Configuration: {:?}", config);
    info!(
        "Line capacity {} bytes, lap field {:?}",
        config.max_line_len, config.lap_field
    );

    Ok(config)
}
