// File: src/core/classifier.rs
use crate::core::types::{ClassificationResult, InferredVariant, MatchMode, Token};
use crate::core::variants::find_variant_base;
use std::collections::HashSet;

/// Splits `tokens` into matched and unmatched against `membership`.
///
/// `membership` must already be lowercase and must not contain words the
/// caller considers mastered. A literal hit always matches; otherwise one
/// suffix rule may map the token onto a stem in the set.
pub fn classify(tokens: &[Token], membership: &HashSet<String>, mode: MatchMode) -> ClassificationResult {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    let mut inferred = Vec::new();

    for token in tokens {
        if membership.contains(token.as_str()) {
            matched.push(token.clone());
        } else if let Some((base, rule)) = find_variant_base(token, membership) {
            inferred.push(InferredVariant {
                token: token.clone(),
                base: base.to_string(),
                rule,
            });
            matched.push(token.clone());
        } else {
            unmatched.push(token.clone());
        }
    }

    let novel = unmatched
        .iter()
        .filter(|t| !membership.contains(t.as_str()))
        .cloned()
        .collect();

    ClassificationResult {
        mode,
        matched,
        unmatched,
        total_tokens: tokens.len(),
        novel,
        inferred,
    }
}
