// File: src/learning.rs
use crate::core::types::ClassificationResult;
use crate::vocabulary::VocabularyStore;
use tracing::debug;

/// Feeds classification results back into the tracked vocabulary.
pub struct LearningEngine {
    seen_increment: u32,
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LearningEngine {
    pub fn new() -> Self {
        Self::with_seen_increment(1)
    }

    pub fn with_seen_increment(seen_increment: u32) -> Self {
        Self { seen_increment }
    }

    /// Bumps the seen counter of every unknown word of `result` that the
    /// store tracks and has not learned. A token matched through a suffix
    /// rule bumps its stem.
    /// Untracked words are left alone; adding them is the learner's
    /// decision. Returns the number of entries updated.
    pub fn apply(&self, store: &mut VocabularyStore, result: &ClassificationResult) -> usize {
        let mut updated = 0;
        for word in result.unknown_words() {
            let tracked = if store.get(word).is_some_and(|e| !e.learned) {
                Some(word.as_str())
            } else {
                result
                    .inferred
                    .iter()
                    .find(|v| &v.token == word)
                    .map(|v| v.base.as_str())
            };
            if let Some(key) = tracked {
                if store.add_seen(key, self.seen_increment) {
                    updated += 1;
                }
            }
        }
        debug!(updated, "applied analysis to vocabulary");
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use crate::core::types::MatchMode;

    #[test]
    fn bumps_only_tracked_unknown_words() {
        let mut store = VocabularyStore::new();
        store.add_word("hond");
        store.add_word("fiets");

        let tokens: Vec<String> = ["honden", "kat", "fiets"].iter().map(|s| s.to_string()).collect();
        let result = classify(&tokens, &store.membership(), MatchMode::MatchMeansUnknown);

        let updated = LearningEngine::new().apply(&mut store, &result);
        assert_eq!(updated, 2);
        assert_eq!(store.get("hond").unwrap().times_seen, 2);
        assert_eq!(store.get("fiets").unwrap().times_seen, 2);
        assert!(store.get("kat").is_none());
    }

    #[test]
    fn learned_words_are_not_bumped() {
        let mut store = VocabularyStore::new();
        store.add_word("fiets");
        store.add_word("boek");
        store.mark_learned("fiets");

        let tokens: Vec<String> = ["fiets", "boek", "rood"].iter().map(|s| s.to_string()).collect();
        let result = classify(&tokens, &store.membership(), MatchMode::MatchMeansKnown);
        assert!(result.unknown_words().contains(&"fiets".to_string()));

        let updated = LearningEngine::new().apply(&mut store, &result);
        assert_eq!(updated, 0);
        assert_eq!(store.get("fiets").unwrap().times_seen, 1);
    }

    #[test]
    fn configured_increment() {
        let mut store = VocabularyStore::new();
        store.add_word("hond");
        let tokens = vec!["hond".to_string()];
        let result = classify(&tokens, &store.membership(), MatchMode::MatchMeansUnknown);

        assert_eq!(LearningEngine::with_seen_increment(3).apply(&mut store, &result), 1);
        assert_eq!(store.get("hond").unwrap().times_seen, 4);
    }
}
