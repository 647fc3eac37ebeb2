use crate::config::EngineConfig;
use crate::core::types::{ClassificationResult, Difficulty, TextStats, Token, WordSuggestion};
use crate::core::{classifier, ranker, tokenizer::Tokenizer};
use std::collections::HashSet;
use tracing::debug;

// The engine is a configured facade over tokenizer, classifier and ranker.
// It holds no per-call state, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct WordEngine {
    config: EngineConfig,
    tokenizer: Tokenizer,
}

impl Default for WordEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl WordEngine {
    pub fn new(config: EngineConfig) -> Self {
        let tokenizer = Tokenizer::with_min_chars(config.min_token_chars);
        Self { config, tokenizer }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    pub fn classify(&self, tokens: &[Token], membership: &HashSet<String>) -> ClassificationResult {
        classifier::classify(tokens, membership, self.config.mode)
    }

    /// Tokenizes `text` and classifies it in one step.
    pub fn analyze(&self, text: &str, membership: &HashSet<String>) -> ClassificationResult {
        let tokens = self.tokenize(text);
        let result = self.classify(&tokens, membership);
        debug!(
            total = result.total_tokens,
            matched = result.matched.len(),
            inferred = result.inferred.len(),
            "analyzed text"
        );
        result
    }

    pub fn difficulty(&self, result: &ClassificationResult) -> Difficulty {
        result.difficulty_with(&self.config.difficulty)
    }

    pub fn effort_difficulty(&self, result: &ClassificationResult) -> Difficulty {
        result.effort_difficulty_with(&self.config.difficulty)
    }

    pub fn suggest(&self, texts: &[&str], exclude: &HashSet<String>) -> Vec<WordSuggestion> {
        ranker::rank_words(&self.tokenizer, texts, exclude, self.config.suggestion_min_frequency)
    }

    pub fn text_stats(&self, text: &str) -> TextStats {
        self.tokenizer.text_stats(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DifficultyThresholds, MatchMode};

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn analyze_combines_tokenizer_and_classifier() {
        let engine = WordEngine::new(EngineConfig {
            mode: MatchMode::MatchMeansKnown,
            ..EngineConfig::default()
        });
        let r = engine.analyze("De honden blaffen, de kat slaapt.", &set(&["de", "hond", "kat"]));
        assert_eq!(r.total_tokens, 5);
        assert_eq!(r.matched, vec!["de", "honden", "kat"]);
        assert_eq!(r.unknown_words(), ["blaffen".to_string(), "slaapt".to_string()]);
    }

    #[test]
    fn configured_thresholds_drive_difficulty() {
        let engine = WordEngine::new(EngineConfig {
            mode: MatchMode::MatchMeansKnown,
            difficulty: DifficultyThresholds { easy: 50.0, medium: 25.0 },
            ..EngineConfig::default()
        });
        let r = engine.analyze("ik zie een boot", &set(&["ik", "zie"]));
        assert_eq!(engine.difficulty(&r), Difficulty::Easy);
        assert_eq!(r.difficulty(), Difficulty::Hard);
        assert_eq!(engine.effort_difficulty(&r), Difficulty::Easy);
    }

    #[test]
    fn min_token_chars_below_two_is_raised() {
        let engine = WordEngine::new(EngineConfig {
            min_token_chars: 1,
            ..EngineConfig::default()
        });
        let tokens = engine.tokenize("a b ok -c-");
        assert_eq!(tokens, vec!["ok"]);
        assert!(tokens.iter().all(|t| t.chars().count() >= 2));
    }

    #[test]
    fn configured_suggestion_threshold() {
        let engine = WordEngine::new(EngineConfig {
            suggestion_min_frequency: 3,
            ..EngineConfig::default()
        });
        let out = engine.suggest(&["de kat", "de kat", "de hond"], &HashSet::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "de");
    }
}
