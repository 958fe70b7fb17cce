#![forbid(unsafe_code)]
//! Magphi Command Line Interface

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use magphi::commands::{execute_check, execute_pair, CheckOptions, PairOptions};
use magphi::config::DEFAULT_CONFIG_FILE;
use magphi::error::EXIT_FAILURE;
use magphi::{Config, MagphiError, EXIT_COMMAND_LINE_ERROR};

#[derive(Parser)]
#[command(name = "magphi")]
#[command(about = "Pair seed sequences (primers) by shared name prefix")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Record program progress in LOG_FILE
    #[arg(short, long, global = true, value_name = "LOG_FILE", env = "MAGPHI_LOG")]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and pair the seed sequences of a multi-FASTA file
    Pair {
        /// Multi-FASTA file containing the seed sequences
        primers: PathBuf,

        /// Output as JSON (default: human-readable)
        #[arg(long)]
        json: bool,

        /// Maximum number of pairing rounds before giving up
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_rounds: Option<u64>,

        /// Fail when two pairs derive the same pair name
        #[arg(long)]
        strict_keys: bool,

        /// Show each seed sequence under its pair
        #[arg(long)]
        sequences: bool,
    },

    /// Validate a seed sequence file without pairing
    Check {
        /// Multi-FASTA file containing the seed sequences
        primers: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(EXIT_COMMAND_LINE_ERROR);
            }
        },
    };

    if let Err(e) = setup_tracing(cli.verbose, cli.log.as_deref()) {
        eprintln!("{} Could not open log file: {}", style("✗").red(), e);
        std::process::exit(EXIT_COMMAND_LINE_ERROR);
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), err);
        let code = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<MagphiError>())
            .map_or(EXIT_FAILURE, MagphiError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Pair { primers, json, max_rounds, strict_keys, sequences } => {
            let options = PairOptions {
                primers,
                json,
                max_rounds: max_rounds.map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
                strict_keys,
                sequences,
            };
            execute_pair(options, config)?;
        }

        Commands::Check { primers } => {
            execute_check(CheckOptions { primers }, &config)?;
        }
    }

    Ok(())
}

fn setup_tracing(verbose: bool, log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("magphi=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .init();
            tracing::debug!(path = ?path, "logging to file");
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_rounds_is_usage_error() {
        let err = Cli::try_parse_from(["magphi", "pair", "primers.fa", "--max-rounds", "0"])
            .err()
            .expect("zero rounds must be rejected");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_max_rounds_parsed() {
        let cli = Cli::try_parse_from(["magphi", "pair", "primers.fa", "--max-rounds", "25"]).unwrap();
        match cli.command {
            Commands::Pair { max_rounds, .. } => assert_eq!(max_rounds, Some(25)),
            Commands::Check { .. } => panic!("expected pair command"),
        }
    }
}
