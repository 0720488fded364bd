//! `lytht` - the interactive shell for the lyth compiler front-end.
//!
//! Parses CLI flags, loads configuration, initializes logging, then hands
//! off to the REPL loop.

mod config;
mod error;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{LythtError, Result};
use repl::Repl;

/// Lyth: a (monolithic) compiled language.
#[derive(ClapParser, Debug)]
#[command(name = "lytht")]
#[command(author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lyth: a (monolithic) compiled language", long_about = None)]
struct Cli {
    /// Run for exactly N+1 cycles then terminate, e.g. `-c cycle=5`.
    /// Omit for an unbounded session.
    #[arg(short = 'c', value_name = "cycle=N", value_parser = parse_cycle_arg)]
    cycle: Option<u32>,

    /// Path to a `lytht.toml` configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored prompt/error output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Parses the original driver's `cycle=N` argument form.
fn parse_cycle_arg(raw: &str) -> std::result::Result<u32, String> {
    let count = raw
        .strip_prefix("cycle=")
        .ok_or_else(|| format!("expected 'cycle=N', got '{raw}'"))?;
    count.parse::<u32>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if cli.no_color {
        config.color = false;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), config);

    match repl.run(cli.cycle) {
        Ok(internal_failure) => {
            if internal_failure {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LythtError::Config(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_cycle_argument() {
        let cli = Cli::parse_from(["lytht", "-c", "cycle=5"]);
        assert_eq!(cli.cycle, Some(5));
    }

    #[test]
    fn cli_cycle_defaults_to_unbounded() {
        let cli = Cli::parse_from(["lytht"]);
        assert_eq!(cli.cycle, None);
    }

    #[test]
    fn cli_parses_no_color_and_verbose() {
        let cli = Cli::parse_from(["lytht", "--no-color", "--verbose"]);
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn cli_rejects_malformed_cycle_argument() {
        let result = Cli::try_parse_from(["lytht", "-c", "5"]);
        assert!(result.is_err());
    }
}
