// File: src/core/variants.rs
use crate::core::types::VariantRule;
use std::collections::HashSet;

/// One suffix-stripping rule. A token qualifies when it ends with one of
/// `suffixes` and is longer than `suffix length + min_stem_chars - 1`, i.e.
/// stripping leaves at least `min_stem_chars` characters.
struct SuffixRule {
    rule: VariantRule,
    /// Tried in order; longer diminutive endings come first.
    suffixes: &'static [&'static str],
    min_stem_chars: usize,
}

/// Fixed evaluation order. The first rule whose stripped stem is in the set wins.
const RULES: &[SuffixRule] = &[
    SuffixRule { rule: VariantRule::PluralEn, suffixes: &["en"], min_stem_chars: 2 },
    SuffixRule { rule: VariantRule::PluralS, suffixes: &["s"], min_stem_chars: 2 },
    SuffixRule { rule: VariantRule::AdjectiveE, suffixes: &["e"], min_stem_chars: 2 },
    SuffixRule {
        rule: VariantRule::Diminutive,
        suffixes: &["etje", "tje", "pje", "je"],
        min_stem_chars: 2,
    },
    SuffixRule { rule: VariantRule::VerbTD, suffixes: &["t", "d"], min_stem_chars: 2 },
];

/// Looks for a stem of `word` in `membership` by stripping one inflectional
/// suffix. Rules never stack: "huisjes" is not reduced to "huis".
pub fn find_variant_base<'a>(
    word: &'a str,
    membership: &HashSet<String>,
) -> Option<(&'a str, VariantRule)> {
    let word_chars = word.chars().count();
    for rule in RULES {
        for suffix in rule.suffixes {
            // suffixes are ASCII, so char and byte lengths agree
            if !word.ends_with(suffix) || word_chars < suffix.len() + rule.min_stem_chars {
                continue;
            }
            let base = &word[..word.len() - suffix.len()];
            if membership.contains(base) {
                return Some((base, rule.rule));
            }
        }
    }
    None
}
