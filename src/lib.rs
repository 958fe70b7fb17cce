#![forbid(unsafe_code)]

//! @acp:module "Magphi Library"
//! @acp:summary "Seed sequence validation and prefix pairing"
//! @acp:domain bio
//! @acp:layer api
//! @acp:stability stable
//!
//! # Magphi
//!
//! Validates a multi-FASTA file of seed sequences (primers) and pairs them
//! by the longest prefix their names share.
//!
//! ## Features
//!
//! - **Validation**: even number of seed sequences, unique names
//! - **Ordered Index**: name to content lines, in file order
//! - **Prefix Pairing**: greedy best-match pairing with a bounded round limit
//!
//! ## Example
//!
//! ```rust,no_run
//! use magphi::{handle_primers, Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let (pairs, records) = handle_primers("primers.fa", &config)?;
//!
//!     for (name, pair) in pairs.iter() {
//!         println!("{name}: {} + {}", pair.first, pair.second);
//!     }
//!     println!("{} seed sequences", records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod primer;

// Re-exports
pub use config::{Config, KeyCollisionPolicy};
pub use error::{MagphiError, Result, EXIT_COMMAND_LINE_ERROR, EXIT_INPUT_FILE_ERROR};
pub use primer::{
    check_primers, count_records, handle_primers, index_records, pair_names, Pairer, PairSet,
    PrimerPair, RecordIndex,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
