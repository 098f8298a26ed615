pub mod alignment;
pub mod config;
pub mod cost;
pub mod error;
pub mod history;
pub mod session;
pub mod spellcheck;

pub use alignment::{alignment_penalty, confidence};
pub use config::SuggestConfig;
pub use error::{Result, SpellError};
pub use history::SearchHistory;
pub use session::WordAnalyzer;
pub use spellcheck::{
    SpellCorrector, Suggestion, SuggestionRequest, normalize_query, parse_word_list,
};
