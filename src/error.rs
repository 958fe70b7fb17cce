//! @acp:module "Errors"
//! @acp:summary "Error types and exit status mapping for seed-sequence handling"
//! @acp:domain cli
//! @acp:layer core
//!
//! Every failure in the primer pipeline is fatal. There is no partial
//! result: callers either get a complete pair set or one of these errors.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for problems with the seed-sequence input file
pub const EXIT_INPUT_FILE_ERROR: i32 = 3;

/// Exit status for command-line usage errors
pub const EXIT_COMMAND_LINE_ERROR: i32 = 2;

/// Exit status for everything else
pub const EXIT_FAILURE: i32 = 1;

/// @acp:summary "Errors raised while validating, indexing and pairing seed sequences"
#[derive(Debug, Error)]
pub enum MagphiError {
    #[error(
        "the number of seed sequences in {path:?} is not even ({count}); not all seed sequences can be given a mate. \
         If a seed sequence should be used twice it must appear in the file twice"
    )]
    OddRecordCount { path: PathBuf, count: usize },

    #[error("duplicate seed sequence name '{name}' in {path:?}; seed sequence names must be unique")]
    DuplicateRecordName { path: PathBuf, name: String },

    #[error(
        "seed sequence pairing failed after {rounds} rounds; seed sequences remaining to be paired: {remaining:?}"
    )]
    PairingExhausted { rounds: usize, remaining: Vec<String> },

    #[error("pair name '{key}' is shared by {kept:?} and {dropped:?}")]
    DuplicatePairKey {
        key: String,
        kept: [String; 2],
        dropped: [String; 2],
    },

    #[error("line {line} of {path:?} holds sequence content before any seed sequence header")]
    ContentBeforeHeader { path: PathBuf, line: usize },

    #[error("failed to read seed sequence file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MagphiError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_input_file_error() {
            EXIT_INPUT_FILE_ERROR
        } else {
            EXIT_FAILURE
        }
    }

    /// Whether the error is caused by the contents (or absence) of the input file
    pub fn is_input_file_error(&self) -> bool {
        matches!(
            self,
            Self::OddRecordCount { .. }
                | Self::DuplicateRecordName { .. }
                | Self::PairingExhausted { .. }
                | Self::DuplicatePairKey { .. }
                | Self::ContentBeforeHeader { .. }
                | Self::Read { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MagphiError>;
