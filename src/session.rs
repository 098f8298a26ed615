use crate::config::SuggestConfig;
use crate::history::SearchHistory;
use crate::spellcheck::{SpellCorrector, Suggestion, SuggestionRequest};

/// A word-analysis session: one fixed dictionary, the queries made against
/// it so far, and the ranking settings.
#[derive(Debug, Clone)]
pub struct WordAnalyzer {
    corrector: SpellCorrector,
    history: SearchHistory,
    config: SuggestConfig,
}

impl WordAnalyzer {
    pub fn new(corrector: SpellCorrector, config: SuggestConfig) -> Self {
        let history = SearchHistory::with_capacity(config.history_capacity);
        WordAnalyzer {
            corrector,
            history,
            config,
        }
    }

    /// Ranks suggestions for `input` and records it in the history.
    ///
    /// Blank input, or a session whose dictionary never loaded any words,
    /// yields nothing and leaves the history untouched.
    pub fn analyze(&mut self, input: &str) -> Vec<Suggestion> {
        let input = input.trim();
        if input.is_empty() || self.corrector.is_empty() {
            return Vec::new();
        }
        // stored trimmed so " cat" and "cat" count as one entry
        self.history.record(input);
        self.corrector.rank_with(input, &self.config)
    }

    pub fn analyze_request(&mut self, request: &SuggestionRequest) -> Vec<Suggestion> {
        self.analyze(&request.query)
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn corrector(&self) -> &SpellCorrector {
        &self.corrector
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(words: &str, config: SuggestConfig) -> WordAnalyzer {
        WordAnalyzer::new(SpellCorrector::from_word_list_str(words), config)
    }

    #[test]
    fn test_analyze_ranks_and_records() {
        let mut a = analyzer("word\nwood\ncat\n", SuggestConfig::default().with_limit(2));
        let list = a.analyze("Wrod");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].word, "wood");
        assert_eq!(a.history().latest(), Some("Wrod"));
    }

    #[test]
    fn test_analyze_blank_input() {
        let mut a = analyzer("cat\n", SuggestConfig::default());
        assert!(a.analyze("   ").is_empty());
        assert!(a.history().is_empty());
    }

    #[test]
    fn test_analyze_empty_dictionary() {
        let mut a = analyzer("\n\n", SuggestConfig::default());
        assert!(a.analyze("cat").is_empty());
        assert!(a.history().is_empty());
    }

    #[test]
    fn test_analyze_request_from_json() {
        let mut a = analyzer("word\nwood\ncat\n", SuggestConfig::default().with_limit(1));
        let request: SuggestionRequest = serde_json::from_str(r#"{ "query": " Wrod " }"#).unwrap();
        let list = a.analyze_request(&request);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].word, "wood");
        assert_eq!(list[0].penalty, 3);
        assert_eq!(a.history().latest(), Some("Wrod"));
    }

    #[test]
    fn test_huge_history_capacity_from_json() {
        let config =
            SuggestConfig::from_json_str(r#"{ "history_capacity": 18446744073709551615 }"#)
                .unwrap();
        let mut a = analyzer("cat\n", config);
        assert_eq!(a.analyze("cot")[0].word, "cat");
        assert_eq!(a.history().len(), 1);
    }

    #[test]
    fn test_history_capacity_from_config() {
        let mut a = analyzer("cat\n", SuggestConfig::default().with_history_capacity(2));
        for q in ["cot", "cut", "bat"] {
            a.analyze(q);
        }
        assert_eq!(a.history().iter().collect::<Vec<_>>(), vec!["bat", "cut"]);
    }
}
