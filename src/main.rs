use clap::Parser;
use rcp_log_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();
    let result = commands::setup_logging(args.common()).and_then(|()| commands::run(&args));

    match result {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(error.exit_code());
        }
    }
}
