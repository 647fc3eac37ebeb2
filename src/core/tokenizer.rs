// File: src/core/tokenizer.rs
use crate::core::types::{TextStats, Token};
use std::collections::HashSet;

pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;

/// Splits target-language text into normalized, deduplicated word tokens.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    min_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { min_chars: DEFAULT_MIN_TOKEN_CHARS }
    }

    /// Values below the two-character floor are raised to it.
    pub fn with_min_chars(min_chars: usize) -> Self {
        Self { min_chars: min_chars.max(DEFAULT_MIN_TOKEN_CHARS) }
    }

    /// Lowercases, blanks out punctuation, splits on whitespace, drops short
    /// pieces, trims edge hyphens/apostrophes and removes repeats.
    /// Tokens keep the order of their first occurrence.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_token_char(c) { c } else { ' ' })
            .collect();

        let mut seen = HashSet::new();
        let mut tokens = Vec::new();
        for piece in cleaned.split_whitespace() {
            if piece.chars().count() < self.min_chars {
                continue;
            }
            let trimmed = piece.trim_matches(|c| c == '-' || c == '\'');
            // "-a" survives the first length check but not this one
            if trimmed.chars().count() < self.min_chars {
                continue;
            }
            if seen.insert(trimmed) {
                tokens.push(trimmed.to_string());
            }
        }
        tokens
    }

    pub fn text_stats(&self, text: &str) -> TextStats {
        let tokens = self.tokenize(text);
        let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let average_word_length = if tokens.is_empty() {
            0.0
        } else {
            total_chars as f64 / tokens.len() as f64
        };
        TextStats {
            total_words: tokens.len(),
            unique_words: tokens.len(),
            average_word_length,
        }
    }
}

/// Tokenizes with the default two-character minimum.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(text)
}

/// Characters that survive punctuation stripping. Input is already lowercase.
fn is_token_char(c: char) -> bool {
    is_word_letter(c) || c.is_ascii_digit() || c.is_whitespace() || c == '-' || c == '\''
}

fn is_word_letter(c: char) -> bool {
    matches!(c,
        'a'..='z'
        | 'ß'..='ö'
        | 'ø'..='ÿ'
        | '\u{0100}'..='\u{017F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_keeps_order() {
        assert_eq!(tokenize("Hallo, hoe gaat het?!"), vec!["hallo", "hoe", "gaat", "het"]);
    }

    #[test]
    fn only_edge_hyphens_and_apostrophes_are_trimmed() {
        assert_eq!(tokenize("een goed-e dag's"), vec!["een", "goed-e", "dag's"]);
        assert_eq!(tokenize("'t -zo- ''ja''"), vec!["zo", "ja"]);
    }

    #[test]
    fn empty_and_punctuation_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?! ... , ;  ").is_empty());
    }

    #[test]
    fn single_letters_dropped_numbers_kept() {
        assert_eq!(tokenize("a 42 b 7"), vec!["42"]);
    }

    #[test]
    fn deduplicates_case_insensitively() {
        assert_eq!(tokenize("De kat, de KAT en de kat."), vec!["de", "kat", "en"]);
    }

    #[test]
    fn accented_letters_fold_and_survive() {
        assert_eq!(tokenize("CAFÉ Één Ölie"), vec!["café", "één", "ölie"]);
        assert_eq!(tokenize("naïef coördinatie"), vec!["naïef", "coördinatie"]);
    }

    #[test]
    fn punctuation_does_not_glue_words() {
        assert_eq!(tokenize("ja/nee;misschien"), vec!["ja", "nee", "misschien"]);
    }

    #[test]
    fn every_token_is_at_least_two_chars() {
        for token in tokenize("x -y- z' ok é ab-") {
            assert!(token.chars().count() >= 2, "{token}");
        }
    }

    #[test]
    fn retokenizing_is_idempotent() {
        let first = tokenize("Goedemorgen! Hoe gaat het met je, Jan-Willem?");
        let second = tokenize(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn custom_minimum_length() {
        let t = Tokenizer::with_min_chars(4);
        assert_eq!(t.tokenize("de kat slaapt"), vec!["slaapt"]);
    }

    #[test]
    fn minimum_never_drops_below_two() {
        for min in [0, 1] {
            let tokens = Tokenizer::with_min_chars(min).tokenize("a b ok 'c");
            assert_eq!(tokens, vec!["ok"]);
        }
    }

    #[test]
    fn stats_over_tokens() {
        let stats = Tokenizer::new().text_stats("de kat de hond");
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.unique_words, 3);
        assert!((stats.average_word_length - 3.0).abs() < f64::EPSILON);
        assert_eq!(Tokenizer::new().text_stats("").average_word_length, 0.0);
    }
}
