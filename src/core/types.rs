// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A normalized, lowercase word extracted from text.
pub type Token = String;

/// How a hit in the membership set should be read.
///
/// The same classifier serves both vocabulary models: a set of words the
/// learner knows, or a set of words the learner still has to study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The membership set holds known words. Matched tokens are known.
    MatchMeansKnown,
    /// The membership set holds words still being learned. Matched tokens are unknown.
    #[default]
    MatchMeansUnknown,
}

impl MatchMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "known" | "match_means_known" => Some(Self::MatchMeansKnown),
            "unknown" | "match_means_unknown" => Some(Self::MatchMeansUnknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MatchMeansKnown => "match_means_known",
            Self::MatchMeansUnknown => "match_means_unknown",
        }
    }

    /// Numeric form used across the C ABI.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::MatchMeansKnown),
            1 => Some(Self::MatchMeansUnknown),
            _ => None,
        }
    }
}

/// Three-level effort rating, used for whole texts and for single words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Rating of a text by the share of its tokens that matched.
    pub fn from_match_percentage(percentage: f32, thresholds: &DifficultyThresholds) -> Self {
        if percentage >= thresholds.easy {
            Difficulty::Easy
        } else if percentage >= thresholds.medium {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Rating of a newly tracked word by its length in characters.
    pub fn from_word_length(word: &str) -> Self {
        match word.chars().count() {
            0..=4 => Difficulty::Easy,
            5..=8 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Lower bounds (inclusive, in percent) for the easy and medium ratings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyThresholds {
    #[serde(default = "default_easy_threshold")]
    pub easy: f32,
    #[serde(default = "default_medium_threshold")]
    pub medium: f32,
}

fn default_easy_threshold() -> f32 {
    95.0
}

fn default_medium_threshold() -> f32 {
    80.0
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            easy: default_easy_threshold(),
            medium: default_medium_threshold(),
        }
    }
}

/// The suffix rule that let an inflected token match its stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantRule {
    /// Plural in -en: "honden" -> "hond".
    PluralEn,
    /// Plural in -s: "tafels" -> "tafel".
    PluralS,
    /// Inflected adjective in -e: "goede" -> "goed".
    AdjectiveE,
    /// Diminutive in -etje, -tje, -pje or -je: "huisje" -> "huis".
    Diminutive,
    /// Verb ending -t or -d: "werkt" -> "werk".
    VerbTD,
}

/// A token that matched through a suffix rule rather than literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferredVariant {
    pub token: Token,
    pub base: String,
    pub rule: VariantRule,
}

/// Outcome of classifying one text against a membership set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub mode: MatchMode,
    pub matched: Vec<Token>,
    pub unmatched: Vec<Token>,
    pub total_tokens: usize,
    /// Unmatched tokens with no literal entry in the membership set.
    pub novel: Vec<Token>,
    /// Matched tokens that were found only through a suffix rule.
    pub inferred: Vec<InferredVariant>,
}

impl ClassificationResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Share of tokens that matched, in percent. An empty text counts as 100.
    pub fn match_percentage(&self) -> f32 {
        if self.total_tokens == 0 {
            return 100.0;
        }
        (self.matched.len() as f32 / self.total_tokens as f32) * 100.0
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty_with(&DifficultyThresholds::default())
    }

    pub fn difficulty_with(&self, thresholds: &DifficultyThresholds) -> Difficulty {
        Difficulty::from_match_percentage(self.match_percentage(), thresholds)
    }

    /// Effort for the learner, rated on the known share instead of the
    /// match share. Both agree when matches mean known words.
    pub fn effort_difficulty(&self) -> Difficulty {
        self.effort_difficulty_with(&DifficultyThresholds::default())
    }

    pub fn effort_difficulty_with(&self, thresholds: &DifficultyThresholds) -> Difficulty {
        Difficulty::from_match_percentage(self.known_percentage(), thresholds)
    }

    /// Tokens the learner knows, resolved through the mode.
    pub fn known_words(&self) -> &[Token] {
        match self.mode {
            MatchMode::MatchMeansKnown => &self.matched,
            MatchMode::MatchMeansUnknown => &self.unmatched,
        }
    }

    /// Tokens the learner still has to study, resolved through the mode.
    pub fn unknown_words(&self) -> &[Token] {
        match self.mode {
            MatchMode::MatchMeansKnown => &self.unmatched,
            MatchMode::MatchMeansUnknown => &self.matched,
        }
    }

    pub fn known_percentage(&self) -> f32 {
        if self.total_tokens == 0 {
            return 100.0;
        }
        (self.known_words().len() as f32 / self.total_tokens as f32) * 100.0
    }
}

/// A recurring word proposed for tracking, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSuggestion {
    pub word: String,
    pub frequency: u64,
}

/// Simple statistics over the tokens of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub average_word_length: f64,
}
