//! `sevlog` binary.
//!
//! Usage:
//!   sevlog [OPTIONS] [LEVEL] <MESSAGE>...   Log one line
//!   sevlog [OPTIONS]                        Log each stdin line
//!
//! Options: `--file PATH`, `--level LEVEL`, `--no-header`, `--json`, `--verbose`.
//! `SEVLOG_LEVEL`, `SEVLOG_HEADERLESS` and `SEVLOG_FILE` supply defaults.

use clap::Parser;
use sevlog::cli::{Cli, run};
use sevlog::{Level, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics must be live before the logger opens its file
    if cli.verbose {
        internal::init(Level::Debug);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sevlog: {e}");
            ExitCode::FAILURE
        }
    }
}
