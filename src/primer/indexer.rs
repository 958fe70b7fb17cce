//! @acp:module "Seed Sequence Indexer"
//! @acp:summary "Parse a multi-record seed file into an ordered name -> lines index"
//! @acp:domain bio
//! @acp:layer io

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::types::RecordIndex;
use crate::error::{MagphiError, Result};

/// Index every record of a seed sequence file by name.
///
/// Fails on the first repeated name. The file handle is dropped on every
/// return path.
pub fn index_records<P: AsRef<Path>>(path: P, marker: char) -> Result<RecordIndex> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "indexing seed sequence names");

    let file = File::open(path).map_err(|source| MagphiError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    index_reader(BufReader::new(file), marker, path)
}

/// Index records from any buffered reader; `path` is only used in errors
pub fn index_reader<R: BufRead>(reader: R, marker: char, path: &Path) -> Result<RecordIndex> {
    let mut index = RecordIndex::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MagphiError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if let Some((_, name)) = line.split_once(marker) {
            if !index.insert(name) {
                tracing::error!(name, "duplicate seed sequence name");
                return Err(MagphiError::DuplicateRecordName {
                    path: path.to_path_buf(),
                    name: name.to_string(),
                });
            }
        } else if !index.push_line(line) && !line.trim().is_empty() {
            return Err(MagphiError::ContentBeforeHeader {
                path: path.to_path_buf(),
                line: line_no + 1,
            });
        }
    }

    tracing::debug!(records = index.len(), "indexed seed sequences");
    Ok(index)
}
