//! Command implementations for the log processor CLI
//!
//! Each subcommand lives in its own module. Commands write CSV to stdout and
//! everything else to stderr.

pub mod extract;
pub mod replay;
pub mod shared;
pub mod validate;

pub use shared::{CommandSummary, setup_logging};

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the chosen subcommand
pub fn run(args: &Args) -> Result<CommandSummary> {
    match &args.command {
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
        Commands::Replay(replay_args) => replay::run_replay(replay_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}
