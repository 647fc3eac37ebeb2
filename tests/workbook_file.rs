use word_core::config::EngineConfig;
use word_core::core::types::MatchMode;
use word_core::{Workbook, WordEngine};

fn engine() -> WordEngine {
    WordEngine::new(EngineConfig { mode: MatchMode::MatchMeansUnknown, ..EngineConfig::default() })
}

#[test]
fn workbook_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("workbook.bin");

    {
        let mut workbook = Workbook::from_file_or_new(&path, engine());
        assert!(workbook.phrases().is_empty());
        workbook.add_word("fiets").unwrap();
        workbook.add_word("sleutel").unwrap();
        workbook.record_phrase("mi bicicleta", "Mijn fiets is weg");
        workbook.mark_learned("sleutel");
        workbook.save().unwrap();
    }

    let mut workbook = Workbook::from_file_or_new(&path, engine());
    assert_eq!(workbook.phrases().len(), 1);
    assert_eq!(workbook.phrases()[0].unknown_words, "fiets");
    assert_eq!(workbook.vocabulary.get("fiets").unwrap().times_seen, 2);
    assert!(workbook.vocabulary.get("sleutel").unwrap().learned);

    let (phrase, _) = workbook.record_phrase("", "de fietsen staan buiten");
    assert_eq!(phrase.id, 2);
    assert_eq!(phrase.unknown_word_list(), vec!["fietsen"]);
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workbook.bin");
    std::fs::write(&path, b"not a workbook").unwrap();

    let workbook = Workbook::from_file_or_new(&path, engine());
    assert!(workbook.vocabulary.is_empty());
    assert_eq!(workbook.path(), Some(path.as_path()));
}

#[test]
fn unbound_workbook_save_is_a_no_op() {
    let workbook = Workbook::new(engine());
    assert!(workbook.save().is_ok());
}
