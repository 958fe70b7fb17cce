//! @acp:module "Seed Sequence Pairing"
//! @acp:summary "Greedy longest-common-prefix pairing of seed sequence names"
//! @acp:domain bio
//! @acp:layer analysis
//!
//! # Pairing Algorithm
//!
//! Sibling seed sequences share a name prefix (`locusA_fwd`, `locusA_rev`).
//! Names are paired purely on that prefix, never on sequence content:
//!
//! 1. **Pop** the first name from the pool
//! 2. **Measure** its common prefix length against every other pooled name
//! 3. **Pair** it with the single name reaching the longest prefix
//! 4. **Requeue** it at the back of the pool when the best length is shared
//!    by several names (or no other name is left)
//! 5. **Give up** after a bounded number of rounds
//!
//! The pair name is the shared prefix with one trailing `_` removed.
//! Ambiguous names are deferred in the hope that pairing others first
//! settles them. Nothing guarantees that, hence the round limit.

use std::collections::VecDeque;

use super::types::{PairSet, PrimerPair};
use crate::config::{Config, KeyCollisionPolicy};
use crate::error::{MagphiError, Result};

/// Longest common prefix of two names, compared `char` by `char`
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end: usize = a
        .chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(ca, _)| ca.len_utf8())
        .sum();
    &a[..end]
}

/// Length in `char`s of the common prefix
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(ca, cb)| ca == cb).count()
}

/// Pair name for two seed sequences
pub fn group_key(a: &str, b: &str) -> String {
    let prefix = common_prefix(a, b);
    prefix.strip_suffix('_').unwrap_or(prefix).to_string()
}

/// @acp:summary "Partitions seed sequence names into prefix-sharing pairs"
#[derive(Debug, Clone)]
pub struct Pairer {
    max_rounds: usize,
    key_collision: KeyCollisionPolicy,
}

impl Default for Pairer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Pairer {
    pub fn new(max_rounds: usize, key_collision: KeyCollisionPolicy) -> Self {
        Self {
            max_rounds,
            key_collision,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_pairing_rounds, config.key_collision)
    }

    /// Pair every name, consuming the list.
    ///
    /// Deterministic for a given input order.
    pub fn pair(&self, names: Vec<String>) -> Result<PairSet> {
        tracing::debug!(names = names.len(), "pairing seed sequence names");

        let mut remaining: VecDeque<String> = names.into();
        let mut pairs = PairSet::new();
        let mut rounds = 0;

        while rounds < self.max_rounds {
            let Some(chosen) = remaining.pop_front() else {
                break;
            };
            match take_unique_mate(&chosen, &mut remaining) {
                Some(mate) => {
                    let key = group_key(&chosen, &mate);
                    self.record(&mut pairs, key, PrimerPair::new(chosen, mate))?;
                }
                None => {
                    tracing::trace!(name = %chosen, "no unique best match, requeueing");
                    remaining.push_back(chosen);
                }
            }
            rounds += 1;
        }

        if !remaining.is_empty() {
            let remaining: Vec<String> = remaining.into();
            tracing::error!(rounds, ?remaining, "seed sequence pairing exhausted");
            return Err(MagphiError::PairingExhausted { rounds, remaining });
        }

        tracing::debug!(pairs = pairs.len(), rounds, "pairing complete");
        Ok(pairs)
    }

    fn record(&self, pairs: &mut PairSet, key: String, pair: PrimerPair) -> Result<()> {
        if let Some(existing) = pairs.get(&key) {
            let kept = [existing.first.clone(), existing.second.clone()];
            let dropped = [pair.first.clone(), pair.second.clone()];
            match self.key_collision {
                KeyCollisionPolicy::Error => {
                    tracing::error!(key = %key, "pair name collision");
                    return Err(MagphiError::DuplicatePairKey { key, kept, dropped });
                }
                KeyCollisionPolicy::Warn => {
                    tracing::warn!(
                        key = %key,
                        replaced = ?kept,
                        by = ?dropped,
                        "pair name collision, earlier pair is dropped"
                    );
                }
            }
        }

        tracing::debug!(key = %key, first = %pair.first, second = %pair.second, "paired");
        pairs.insert(key, pair);
        Ok(())
    }
}

/// Remove and return the one pooled name sharing the longest prefix with `chosen`.
///
/// Returns `None` when the pool is empty or several names tie for the
/// longest prefix. Removal keeps the order of the remaining names.
fn take_unique_mate(chosen: &str, remaining: &mut VecDeque<String>) -> Option<String> {
    let lengths: Vec<usize> = remaining
        .iter()
        .map(|name| common_prefix_len(chosen, name))
        .collect();
    let best = *lengths.iter().max()?;

    let mut candidates = lengths
        .iter()
        .enumerate()
        .filter(|&(_, &len)| len == best)
        .map(|(idx, _)| idx);

    match (candidates.next(), candidates.next()) {
        (Some(idx), None) => remaining.remove(idx),
        _ => None,
    }
}

/// Pair names with the default round limit and collision policy
pub fn pair_names(names: Vec<String>) -> Result<PairSet> {
    Pairer::default().pair(names)
}
