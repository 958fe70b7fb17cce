//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod check;
pub mod pair;

pub use check::{execute_check, CheckOptions};
pub use pair::{execute_pair, PairOptions, PairReport};
