// File: src/workbook.rs
use crate::core::engine::WordEngine;
use crate::core::types::{ClassificationResult, WordSuggestion};
use crate::error::{Error, Result};
use crate::learning::LearningEngine;
use crate::persistence::{load_from_disk, save_to_disk};
use crate::phrase::{sort_by_ranking, PhraseRecord};
use crate::vocabulary::{now_millis, AddOutcome, VocabularyStore};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Turns source-language text into target-language text.
///
/// Implemented by the translation backend; the workbook only sees this seam.
pub trait Translator {
    fn translate(&self, source: &str) -> std::result::Result<String, String>;
}

/// The learner's phrases and tracked words, analyzed through one engine.
pub struct Workbook {
    pub engine: WordEngine,
    pub vocabulary: VocabularyStore,
    pub(crate) phrases: Vec<PhraseRecord>,
    pub(crate) next_phrase_id: u64,
    learning_engine: LearningEngine,
    path: Option<PathBuf>,
}

impl Workbook {
    pub fn new(engine: WordEngine) -> Self {
        Self {
            engine,
            vocabulary: VocabularyStore::new(),
            phrases: Vec::new(),
            next_phrase_id: 1,
            learning_engine: LearningEngine::new(),
            path: None,
        }
    }

    pub(crate) fn from_parts(
        engine: WordEngine,
        vocabulary: VocabularyStore,
        phrases: Vec<PhraseRecord>,
        next_phrase_id: u64,
    ) -> Self {
        Self {
            vocabulary,
            phrases,
            next_phrase_id,
            ..Self::new(engine)
        }
    }

    /// Loads the workbook at `path`, or starts an empty one bound to `path`.
    pub fn from_file_or_new(path: &Path, engine: WordEngine) -> Self {
        let mut workbook = if path.exists() {
            match load_from_disk(path, engine.clone()) {
                Ok(workbook) => workbook,
                Err(e) => {
                    warn!(?path, error = %e, "could not load workbook, starting empty");
                    Self::new(engine)
                }
            }
        } else {
            Self::new(engine)
        };
        workbook.path = Some(path.to_path_buf());
        workbook
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the workbook to its bound path. Unbound workbooks are not saved.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => save_to_disk(self, path),
            None => Ok(()),
        }
    }

    /// Analyzes `text` against the current membership set without side effects.
    pub fn analyze(&self, text: &str) -> ClassificationResult {
        self.engine.analyze(text, &self.vocabulary.membership())
    }

    /// Stores a phrase, records its unknown words and bumps their counters.
    pub fn record_phrase(&mut self, source: &str, target: &str) -> (&PhraseRecord, ClassificationResult) {
        let result = self.analyze(target);
        self.learning_engine.apply(&mut self.vocabulary, &result);

        let mut phrase = PhraseRecord::new(self.next_phrase_id, source, target, now_millis());
        self.next_phrase_id += 1;
        phrase.apply_analysis(&result);
        info!(
            id = phrase.id,
            unknown = phrase.unknown_words_count,
            known = result.known_words().len(),
            "phrase saved"
        );
        self.phrases.push(phrase);
        let stored = &self.phrases[self.phrases.len() - 1];
        (stored, result)
    }

    /// Translates `source` through `translator` and records the pair.
    pub fn record_with_translator(
        &mut self,
        translator: &dyn Translator,
        source: &str,
    ) -> Result<(&PhraseRecord, ClassificationResult)> {
        let target = translator.translate(source).map_err(Error::Translation)?;
        Ok(self.record_phrase(source, &target))
    }

    /// Re-translates a stored phrase and re-analyzes the new target text.
    pub fn retry_translation(&mut self, id: u64, translator: &dyn Translator) -> Result<&PhraseRecord> {
        let index = self.phrase_index(id)?;
        let target = translator
            .translate(&self.phrases[index].source_text)
            .map_err(Error::Translation)?;
        let result = self.analyze(&target);
        let phrase = &mut self.phrases[index];
        phrase.target_text = target;
        phrase.apply_analysis(&result);
        Ok(&self.phrases[index])
    }

    /// Tracks a word the learner tapped, then refreshes every phrase.
    pub fn add_word(&mut self, word: &str) -> Result<AddOutcome> {
        let outcome = self
            .vocabulary
            .add_word(word)
            .ok_or_else(|| Error::InvalidWord(word.to_string()))?;
        info!(word, ?outcome, "word added");
        self.refresh_phrase_counts();
        Ok(outcome)
    }

    pub fn mark_learned(&mut self, word: &str) -> bool {
        let changed = self.vocabulary.mark_learned(word);
        if changed {
            self.refresh_phrase_counts();
        }
        changed
    }

    pub fn mark_unknown(&mut self, word: &str) -> bool {
        let changed = self.vocabulary.mark_unknown(word);
        if changed {
            self.refresh_phrase_counts();
        }
        changed
    }

    /// Re-analyzes every stored phrase against the current membership set.
    pub fn refresh_phrase_counts(&mut self) {
        let membership = self.vocabulary.membership();
        for phrase in &mut self.phrases {
            let result = self.engine.analyze(&phrase.target_text, &membership);
            phrase.apply_analysis(&result);
        }
    }

    /// Recurring words across all phrases that are not tracked yet.
    pub fn suggest_words(&self) -> Vec<WordSuggestion> {
        let texts: Vec<&str> = self.phrases.iter().map(|p| p.target_text.as_str()).collect();
        self.engine.suggest(&texts, &self.vocabulary.all_words())
    }

    pub fn phrases(&self) -> &[PhraseRecord] {
        &self.phrases
    }

    pub fn phrase(&self, id: u64) -> Option<&PhraseRecord> {
        self.phrases.iter().find(|p| p.id == id)
    }

    pub fn phrases_by_ranking(&self) -> Vec<&PhraseRecord> {
        let mut phrases: Vec<&PhraseRecord> = self.phrases.iter().collect();
        sort_by_ranking(&mut phrases);
        phrases
    }

    pub fn mark_reviewed(&mut self, id: u64) -> Result<()> {
        let index = self.phrase_index(id)?;
        self.phrases[index].mark_reviewed(now_millis());
        Ok(())
    }

    pub fn remove_phrase(&mut self, id: u64) -> Result<PhraseRecord> {
        let index = self.phrase_index(id)?;
        Ok(self.phrases.remove(index))
    }

    fn phrase_index(&self, id: u64) -> Result<usize> {
        self.phrases
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::PhraseNotFound(id))
    }
}
