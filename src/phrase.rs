// File: src/phrase.rs
use crate::core::types::ClassificationResult;
use serde::{Deserialize, Serialize};

/// A recorded phrase: what the learner said and its target-language text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRecord {
    pub id: u64,
    pub source_text: String,
    pub target_text: String,
    pub unknown_words_count: usize,
    /// Comma-joined unknown words, see [`join_word_list`].
    pub unknown_words: String,
    pub created_at: i64,
    pub times_reviewed: u32,
    pub last_reviewed: Option<i64>,
}

impl PhraseRecord {
    pub fn new(id: u64, source_text: &str, target_text: &str, created_at: i64) -> Self {
        Self {
            id,
            source_text: source_text.to_string(),
            target_text: target_text.to_string(),
            unknown_words_count: 0,
            unknown_words: String::new(),
            created_at,
            times_reviewed: 0,
            last_reviewed: None,
        }
    }

    /// Stores the unknown-word metadata of an analysis of `target_text`.
    pub fn apply_analysis(&mut self, result: &ClassificationResult) {
        let unknown = result.unknown_words();
        self.unknown_words_count = unknown.len();
        self.unknown_words = join_word_list(unknown);
    }

    pub fn clear_analysis(&mut self) {
        self.unknown_words_count = 0;
        self.unknown_words.clear();
    }

    pub fn unknown_word_list(&self) -> Vec<String> {
        split_word_list(&self.unknown_words)
    }

    pub fn mark_reviewed(&mut self, now: i64) {
        self.times_reviewed = self.times_reviewed.saturating_add(1);
        self.last_reviewed = Some(now);
    }
}

/// Joins words with commas. Commas inside a word are not escaped, so such a
/// word splits apart on the way back. Tokens never contain commas.
pub fn join_word_list<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(|w| w.as_ref()).collect::<Vec<_>>().join(",")
}

/// Inverse of [`join_word_list`]; blank entries are dropped.
pub fn split_word_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Hardest phrases first (most unknown words), newest first among equals.
pub fn sort_by_ranking(phrases: &mut [&PhraseRecord]) {
    phrases.sort_by(|a, b| {
        b.unknown_words_count
            .cmp(&a.unknown_words_count)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
