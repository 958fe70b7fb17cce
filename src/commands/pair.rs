//! @acp:module "Pair Command"
//! @acp:summary "Pair the seed sequences of a multi-FASTA file and print the pairs"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::{Config, KeyCollisionPolicy};
use crate::primer::{handle_primers, PairSet, RecordIndex};

/// Options for the pair command
#[derive(Debug, Clone, Default)]
pub struct PairOptions {
    /// Multi-FASTA file of seed sequences
    pub primers: PathBuf,
    /// Print JSON instead of text
    pub json: bool,
    /// Override the configured pairing round limit
    pub max_rounds: Option<usize>,
    /// Treat pair name collisions as errors
    pub strict_keys: bool,
    /// Show the sequence of each seed in text output
    pub sequences: bool,
}

/// JSON shape printed by `magphi pair --json`
#[derive(Debug, Serialize)]
pub struct PairReport<'a> {
    pub pairs: &'a PairSet,
    pub records: &'a RecordIndex,
}

/// Execute the pair command
pub fn execute_pair(options: PairOptions, mut config: Config) -> Result<()> {
    if let Some(max_rounds) = options.max_rounds {
        config.max_pairing_rounds = max_rounds;
    }
    if options.strict_keys {
        config.key_collision = KeyCollisionPolicy::Error;
    }
    config.validate()?;

    let (pairs, records) = handle_primers(&options.primers, &config)?;

    if options.json {
        let report = PairReport {
            pairs: &pairs,
            records: &records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} seed sequences paired into {} pairs",
        style("✓").green(),
        records.len(),
        pairs.len()
    );
    for (key, pair) in pairs.iter() {
        let label = if key.is_empty() { "(no common prefix)" } else { key };
        println!(
            "  {}: {} + {}",
            style(label).bold(),
            style(&pair.first).cyan(),
            style(&pair.second).cyan()
        );
        if options.sequences {
            for name in pair.members() {
                let sequence = records.sequence(name).unwrap_or_default();
                println!("    {} {}", style(name).dim(), sequence);
            }
        }
    }

    Ok(())
}
