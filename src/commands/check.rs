//! @acp:module "Check Command"
//! @acp:summary "Validate a seed sequence file without pairing it"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::primer::check_primers;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Multi-FASTA file of seed sequences
    pub primers: PathBuf,
}

/// Execute the check command
pub fn execute_check(options: CheckOptions, config: &Config) -> Result<()> {
    let records = check_primers(&options.primers, config)?;

    println!("{} Seed sequence file is valid", style("✓").green());
    println!("  Path: {}", options.primers.display());
    println!("  Seed sequences: {}", records.len());
    println!("  Expected pairs: {}", records.len() / 2);

    let empty: Vec<&str> = records
        .iter()
        .filter(|(_, lines)| lines.iter().all(|l| l.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();
    if !empty.is_empty() {
        println!(
            "  {} Seed sequences without sequence: {}",
            style("⚠").yellow(),
            empty.join(", ")
        );
    }

    Ok(())
}
