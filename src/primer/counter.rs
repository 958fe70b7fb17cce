//! @acp:module "Seed Sequence Counter"
//! @acp:summary "Count header markers and require an even number of seed sequences"
//! @acp:domain bio
//! @acp:layer io

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{MagphiError, Result};

/// Count the header lines in a seed sequence file.
///
/// A line counts when it contains `marker` anywhere, not only at column 0.
pub fn count_records<P: AsRef<Path>>(path: P, marker: char) -> Result<usize> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "counting seed sequences");

    let file = File::open(path).map_err(|source| MagphiError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    count_in_reader(BufReader::new(file), marker).map_err(|source| MagphiError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Count header lines from any buffered reader
pub fn count_in_reader<R: BufRead>(reader: R, marker: char) -> std::io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        if line?.contains(marker) {
            count += 1;
        }
    }
    Ok(count)
}

/// Fail with [`MagphiError::OddRecordCount`] unless `count` is even
pub fn ensure_even(count: usize, path: &Path) -> Result<usize> {
    if count % 2 != 0 {
        tracing::error!(path = ?path, count, "odd number of seed sequences");
        return Err(MagphiError::OddRecordCount {
            path: path.to_path_buf(),
            count,
        });
    }
    tracing::debug!(count, "number of seed sequences is even");
    Ok(count)
}
