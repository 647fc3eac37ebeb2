// File: src/core/ranker.rs
use crate::core::tokenizer::Tokenizer;
use crate::core::types::WordSuggestion;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MIN_FREQUENCY: u64 = 2;

/// Counts recurring words across `texts` that are not in `exclude`.
/// Words seen fewer than `min_frequency` times are dropped. Output is sorted
/// by descending count; ties keep first-occurrence order.
pub fn rank_words(
    tokenizer: &Tokenizer,
    texts: &[&str],
    exclude: &HashSet<String>,
    min_frequency: u64,
) -> Vec<WordSuggestion> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordSuggestion> = Vec::new();

    for text in texts {
        for token in tokenizer.tokenize(text) {
            if exclude.contains(&token) {
                continue;
            }
            match index.get(&token) {
                Some(&slot) => counts[slot].frequency += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push(WordSuggestion { word: token, frequency: 1 });
                }
            }
        }
    }

    counts.retain(|s| s.frequency >= min_frequency);
    // stable sort keeps first-occurrence order among equal counts
    counts.sort_by_key(|s| std::cmp::Reverse(s.frequency));
    counts
}

/// Frequency-ranked suggestions with the default minimum of two occurrences.
pub fn suggest(texts: &[&str], exclude: &HashSet<String>) -> Vec<WordSuggestion> {
    rank_words(&Tokenizer::new(), texts, exclude, DEFAULT_MIN_FREQUENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn recurring_words_only() {
        let out = suggest(&["de kat eet", "de kat slaapt"], &set(&["de"]));
        assert_eq!(out, vec![WordSuggestion { word: "kat".into(), frequency: 2 }]);
    }

    #[test]
    fn repeats_within_one_text_count_once() {
        // tokenize deduplicates per text
        let out = suggest(&["kat kat kat"], &HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let texts = ["zon maan ster", "ster maan zon", "water ster"];
        let out = suggest(&texts, &HashSet::new());
        let words: Vec<&str> = out.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["ster", "zon", "maan"]);
        assert_eq!(out[0].frequency, 3);
        assert_eq!(out[1].frequency, 2);
    }

    #[test]
    fn custom_threshold() {
        let out = rank_words(&Tokenizer::new(), &["een boek", "een pen"], &HashSet::new(), 1);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].word, "een");
    }

    #[test]
    fn empty_input() {
        assert!(suggest(&[], &HashSet::new()).is_empty());
    }
}
