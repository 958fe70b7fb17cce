//! @acp:module "Primer"
//! @acp:summary "Seed sequence (primer) validation, indexing and prefix pairing"
//! @acp:domain bio
//! @acp:layer feature

pub mod counter;
pub mod handler;
pub mod indexer;
pub mod pairing;
pub mod types;

pub use counter::{count_records, ensure_even};
pub use handler::{check_primers, handle_primers};
pub use indexer::index_records;
pub use pairing::{common_prefix, group_key, pair_names, Pairer};
pub use types::*;
