//! Command-line argument definitions for the log processor
//!
//! Every subcommand takes exactly one positional input file; a missing or
//! extra positional argument is a usage error reported by clap.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// CLI arguments for the RaceCapture log processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rcp-log",
    version,
    about = "Extract, replay and validate RaceCapture CSV telemetry logs",
    long_about = "Reads comma-separated telemetry logs written by a RaceCapture logger. \
                  Required columns are located by header-name prefix wherever they sit in \
                  the file. Rows are written to stdout as CSV; diagnostics go to stderr."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Copy the configured extract columns of every complete row to stdout
    Extract(CommonArgs),
    /// Replay the log through the predictive lap timer
    Replay(CommonArgs),
    /// Check that every line has the same number of columns as the first
    Validate(CommonArgs),
}

/// Arguments shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Input CSV log
    #[arg(value_name = "FILE", help = "Input CSV log file")]
    pub input: PathBuf,

    /// Path to configuration file
    ///
    /// YAML configuration file. If not specified, looks for
    /// <config dir>/rcp-log/config.yaml and falls back to built-in defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (YAML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Lap diagnostics of `replay` are still written.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Arguments of whichever subcommand was chosen
    pub fn common(&self) -> &CommonArgs {
        match &self.command {
            Commands::Extract(args) | Commands::Replay(args) | Commands::Validate(args) => args,
        }
    }
}

impl CommonArgs {
    /// Check the arguments before any work starts
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
