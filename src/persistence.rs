// File: src/persistence.rs
use crate::core::engine::WordEngine;
use crate::error::Result;
use crate::phrase::PhraseRecord;
use crate::vocabulary::VocabularyStore;
use crate::workbook::Workbook;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// The serializable state of a workbook. Engine settings come from config
/// and are not part of the snapshot.
#[derive(Clone, Serialize, Deserialize)]
struct SerializableState {
    vocabulary: VocabularyStore,
    phrases: Vec<PhraseRecord>,
    next_phrase_id: u64,
}

/// Writes the workbook to a temporary file next to `path`, then renames it
/// into place so a crash never leaves a half-written snapshot.
pub fn save_to_disk(workbook: &Workbook, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        vocabulary: workbook.vocabulary.clone(),
        phrases: workbook.phrases.clone(),
        next_phrase_id: workbook.next_phrase_id,
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!(
        ?path,
        words = workbook.vocabulary.len(),
        phrases = workbook.phrases.len(),
        "workbook saved"
    );
    Ok(())
}

pub fn load_from_disk(path: &Path, engine: WordEngine) -> Result<Workbook> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;
    info!(?path, words = state.vocabulary.len(), phrases = state.phrases.len(), "workbook loaded");

    Ok(Workbook::from_parts(
        engine,
        state.vocabulary,
        state.phrases,
        state.next_phrase_id,
    ))
}
