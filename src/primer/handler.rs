//! @acp:module "Primer Handler"
//! @acp:summary "Validate, index and pair the seed sequences of one input file"
//! @acp:domain bio
//! @acp:layer service

use std::path::Path;

use super::counter::{count_records, ensure_even};
use super::indexer::index_records;
use super::pairing::Pairer;
use super::types::{PairSet, RecordIndex};
use crate::config::Config;
use crate::error::Result;

/// Run the full seed sequence pipeline on `path`.
///
/// Counts headers (must be even), indexes records (names must be unique),
/// then pairs the names in file order. Any failure is returned unchanged.
/// Both returned values are plain owned data and can be shared read-only
/// across workers once built.
pub fn handle_primers<P: AsRef<Path>>(path: P, config: &Config) -> Result<(PairSet, RecordIndex)> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("handle_primers", path = ?path).entered();

    let count = ensure_even(count_records(path, config.header_marker)?, path)?;
    let records = index_records(path, config.header_marker)?;
    let names: Vec<String> = records.names().map(str::to_string).collect();
    let pairs = Pairer::from_config(config).pair(names)?;

    tracing::info!(
        seed_sequences = count,
        pairs = pairs.len(),
        "{} seed sequences found, forming {} pairs",
        count,
        pairs.len()
    );

    Ok((pairs, records))
}

/// Count and index without pairing
pub fn check_primers<P: AsRef<Path>>(path: P, config: &Config) -> Result<RecordIndex> {
    let path = path.as_ref();
    ensure_even(count_records(path, config.header_marker)?, path)?;
    index_records(path, config.header_marker)
}
