// File: src/vocabulary.rs
use crate::core::types::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A word the learner is tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub added_at: i64,
    /// How often the word turned up in recorded phrases or was re-added.
    pub times_seen: u32,
    /// Learned words stay in the store but drop out of the membership set.
    pub learned: bool,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    /// The word was already tracked; its counter went up.
    Seen,
}

/// Lowercase, trimmed form used as the store key.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyStore {
    entries: BTreeMap<String, WordEntry>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks `word`, or bumps its counter if it is already tracked.
    /// Returns None for words shorter than two characters.
    pub fn add_word(&mut self, word: &str) -> Option<AddOutcome> {
        let normalized = normalize_word(word);
        if normalized.chars().count() < 2 {
            return None;
        }
        if self.add_seen(&normalized, 1) {
            return Some(AddOutcome::Seen);
        }
        let entry = WordEntry {
            difficulty: Difficulty::from_word_length(&normalized),
            word: normalized.clone(),
            added_at: now_millis(),
            times_seen: 1,
            learned: false,
        };
        self.entries.insert(normalized, entry);
        Some(AddOutcome::Inserted)
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(&normalize_word(word))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize_word(word))
    }

    /// Returns false if the word is not tracked.
    pub fn increment_seen(&mut self, word: &str) -> bool {
        self.add_seen(word, 1)
    }

    pub fn add_seen(&mut self, word: &str, count: u32) -> bool {
        match self.entries.get_mut(&normalize_word(word)) {
            Some(entry) => {
                entry.times_seen = entry.times_seen.saturating_add(count);
                true
            }
            None => false,
        }
    }

    pub fn mark_learned(&mut self, word: &str) -> bool {
        self.set_learned(word, true)
    }

    pub fn mark_unknown(&mut self, word: &str) -> bool {
        self.set_learned(word, false)
    }

    fn set_learned(&mut self, word: &str, learned: bool) -> bool {
        match self.entries.get_mut(&normalize_word(word)) {
            Some(entry) => {
                entry.learned = learned;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, word: &str) -> Option<WordEntry> {
        self.entries.remove(&normalize_word(word))
    }

    /// Drops every learned word, returning how many were removed.
    pub fn remove_learned(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.learned);
        before - self.entries.len()
    }

    /// Words that still count for classification: everything not learned.
    pub fn membership(&self) -> HashSet<String> {
        self.entries
            .values()
            .filter(|e| !e.learned)
            .map(|e| e.word.clone())
            .collect()
    }

    /// Every tracked word, learned or not.
    pub fn all_words(&self) -> HashSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Unlearned words, most frequently seen first, then alphabetically.
    pub fn unknown_entries(&self) -> Vec<&WordEntry> {
        let mut entries: Vec<&WordEntry> = self.entries.values().filter(|e| !e.learned).collect();
        entries.sort_by(|a, b| b.times_seen.cmp(&a.times_seen).then_with(|| a.word.cmp(&b.word)));
        entries
    }

    /// Learned words in alphabetical order.
    pub fn learned_entries(&self) -> Vec<&WordEntry> {
        self.entries.values().filter(|e| e.learned).collect()
    }

    pub fn unknown_count(&self) -> usize {
        self.entries.values().filter(|e| !e.learned).count()
    }

    pub fn learned_count(&self) -> usize {
        self.entries.values().filter(|e| e.learned).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
