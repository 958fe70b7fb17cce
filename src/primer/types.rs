//! @acp:module "Primer Types"
//! @acp:summary "Seed sequence records, the record index and pair sets"
//! @acp:domain bio
//! @acp:layer model

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Seed sequence name to its content lines, in file order.
///
/// Names are unique; [`RecordIndex::insert`] refuses a name that is
/// already present so callers can report the duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordIndex {
    records: IndexMap<String, Vec<String>>,
}

impl RecordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty record.
    /// Returns `false` and leaves the index untouched when `name` already exists.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        match self.records.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                true
            }
        }
    }

    /// Append a content line to the most recently registered record
    pub fn push_line(&mut self, line: impl Into<String>) -> bool {
        match self.records.last_mut() {
            Some((_, lines)) => {
                lines.push(line.into());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.records.get(name).map(Vec::as_slice)
    }

    /// Content lines of a record joined into one sequence string
    pub fn sequence(&self, name: &str) -> Option<String> {
        self.records.get(name).map(|lines| lines.concat())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.records
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }
}

/// Two seed sequences that belong together.
/// `first` is the name that was picked, `second` its best-matching mate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerPair {
    pub first: String,
    pub second: String,
}

impl PrimerPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn members(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }

    /// Order-insensitive comparison
    pub fn same_members(&self, other: &PrimerPair) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

/// Pair name to pair, in the order pairs were formed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairSet {
    pairs: IndexMap<String, PrimerPair>,
}

impl PairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pair under `key`, returning the pair it replaced, if any
    pub fn insert(&mut self, key: impl Into<String>, pair: PrimerPair) -> Option<PrimerPair> {
        self.pairs.insert(key.into(), pair)
    }

    pub fn get(&self, key: &str) -> Option<&PrimerPair> {
        self.pairs.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrimerPair)> {
        self.pairs.iter().map(|(key, pair)| (key.as_str(), pair))
    }

    /// Every seed sequence name held by the set
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.pairs.values().flat_map(|pair| pair.members())
    }
}
