use crate::alignment::{alignment_penalty, char_len, confidence};
use crate::config::SuggestConfig;
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// One ranked candidate, in the shape handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub penalty: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub query: String,
}

/// Splits a newline-delimited word list into lowercase entries.
///
/// Surrounding whitespace is trimmed from every line (this also strips the
/// `\r` of CRLF files) and blank lines are dropped. Order and duplicates
/// are kept as they appear in the file.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn score_candidate(query: &str, query_len: usize, candidate: &str) -> Suggestion {
    let penalty = alignment_penalty(query, candidate);
    let max_len = query_len.max(char_len(candidate));
    Suggestion {
        word: candidate.to_string(),
        penalty,
        confidence: confidence(penalty, max_len),
    }
}

/// Ranks an ordered word list against queries by alignment penalty.
///
/// The dictionary is fixed once built. Every query scores every entry.
#[derive(Debug, Clone, Default)]
pub struct SpellCorrector {
    dictionary: Vec<String>,
}

impl SpellCorrector {
    pub fn new(dictionary: Vec<String>) -> Self {
        SpellCorrector { dictionary }
    }

    pub fn from_word_list_str(content: &str) -> Self {
        Self::new(parse_word_list(content))
    }

    pub fn from_word_list_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = fs::read_to_string(file_path)?;
        let corrector = Self::from_word_list_str(&content);
        info!(
            path = %file_path.display(),
            words = corrector.len(),
            "loaded dictionary"
        );
        Ok(corrector)
    }

    pub fn words(&self) -> &[String] {
        &self.dictionary
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = normalize_query(word);
        self.dictionary.iter().any(|w| *w == word)
    }

    /// Best `limit` matches for `query`, lowest penalty first.
    ///
    /// Entries with equal penalty keep their dictionary order. A blank query
    /// or an empty dictionary yields no suggestions.
    pub fn rank(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        self.rank_inner(query, limit, false)
    }

    pub fn rank_with(&self, query: &str, config: &SuggestConfig) -> Vec<Suggestion> {
        self.rank_inner(query, config.limit, config.parallel)
    }

    fn rank_inner(&self, query: &str, limit: usize, parallel: bool) -> Vec<Suggestion> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }
        if self.dictionary.is_empty() {
            warn!(%query, "ranking against an empty dictionary");
            return Vec::new();
        }
        debug!(%query, candidates = self.dictionary.len(), limit, parallel, "ranking");

        let query_len = char_len(&query);
        // indexed collect keeps dictionary order, so the stable sort below
        // gives the same result either way
        let mut suggestions: Vec<Suggestion> = if parallel {
            self.dictionary
                .par_iter()
                .map(|candidate| score_candidate(&query, query_len, candidate))
                .collect()
        } else {
            self.dictionary
                .iter()
                .map(|candidate| score_candidate(&query, query_len, candidate))
                .collect()
        };

        suggestions.sort_by_key(|s| s.penalty);
        suggestions.truncate(limit);
        suggestions
    }

    pub fn suggest_word_corrections(
        &self,
        words: &[String],
        n_suggestions: usize,
    ) -> Vec<Vec<Suggestion>> {
        words
            .par_iter()
            .map(|word| self.rank(word, n_suggestions))
            .collect()
    }
}
