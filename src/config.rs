use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Knobs for ranking and for the analysis session.
///
/// Every field is optional in the JSON form; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned per query.
    pub limit: usize,
    /// Score dictionary entries on the rayon pool instead of inline.
    pub parallel: bool,
    pub history_capacity: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            limit: DEFAULT_LIMIT,
            parallel: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SuggestConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
