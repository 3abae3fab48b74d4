//! Command-line front end: one log call from the arguments, or one per stdin line.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::part::Part;
use clap::Parser;
use std::borrow::Cow;
use std::io::{self, BufRead};

/// sevlog - write leveled log lines to stdout or an append-only file.
#[derive(Debug, Parser)]
#[command(
    name = "sevlog",
    version,
    about = "Write leveled log lines to stdout or an append-only file",
    after_help = "Levels: fatal, error, warn, info, debug\n\n\
                  Examples:\n  \
                  sevlog info \"service started\"\n  \
                  sevlog --file ~/app.log --level warn error \"disk full\"\n  \
                  sevlog --json debug request '{\"id\":7}'\n  \
                  tail -f events | sevlog --no-header"
)]
pub struct Cli {
    /// Append to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,
    /// Threshold; less severe calls are dropped
    #[arg(short, long, value_name = "LEVEL")]
    pub level: Option<String>,
    /// Print only the message, without level and timestamp
    #[arg(long)]
    pub no_header: bool,
    /// Dump JSON object and array arguments structurally
    #[arg(long)]
    pub json: bool,
    /// Print sevlog's own diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Optional level name followed by the message; read from stdin when empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Environment config with command-line flags on top.
    ///
    /// # Errors
    /// `Error::InvalidLevel` when `--level` is not one of the five names.
    pub fn config(&self) -> Result<Config, crate::Error> {
        let mut config = Config::from_env();
        if let Some(level) = &self.level {
            let level: Level = level.parse()?;
            config.level = level.as_str().to_string();
        }
        if self.no_header {
            config.headerless = true;
        }
        if let Some(path) = &self.file {
            config.path = Some(path.clone());
        }
        Ok(config)
    }
}

/// Turns raw arguments into log parts. With `json`, arguments that parse as a
/// JSON object or array become structured values.
#[must_use]
pub fn to_parts<S: AsRef<str>>(args: &[S], json: bool) -> Vec<Part> {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            if json && arg.trim_start().starts_with(['{', '[']) {
                if let Ok(value) = serde_json::from_str::<serde_json::Value>(arg) {
                    return Part::from(value);
                }
                internal::debug(&format!("not valid JSON, logging as text: {arg}"));
            }
            Part::from(arg)
        })
        .collect()
}

/// Builds the logger and logs the arguments, or each stdin line when there are none.
///
/// # Errors
/// Invalid `--level`, a file that cannot be opened, or a failed write.
pub fn run(cli: &Cli) -> Result<(), crate::Error> {
    let config = cli.config()?;
    let logger = Logger::from_config(&config)?;

    if cli.args.is_empty() {
        internal::info("no arguments, reading messages from stdin");
        run_lines(&logger, io::stdin().lock(), cli.json)?;
    } else if logger.log(&to_parts(cli.args.as_slice(), cli.json))?.is_none() {
        internal::debug("message below threshold, dropped");
    }

    logger.flush()
}

/// Logs every non-blank line of `input` as one call, splitting on whitespace.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD and the line is
/// still logged.
///
/// # Errors
/// Read errors from `input` or write errors from the sink.
pub fn run_lines(
    logger: &Logger,
    mut input: impl BufRead,
    json: bool,
) -> Result<usize, crate::Error> {
    let mut written = 0;
    let mut buf = Vec::new();
    for number in 1_u64.. {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            internal::warn(&format!("stdin line {number} is not valid UTF-8, bytes replaced"));
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        if logger.log(&to_parts(words.as_slice(), json))?.is_some() {
            written += 1;
        }
    }
    Ok(written)
}
