//! Persistence guard tests: round-trips, missing records, tampered records.

use std::fs;
use std::path::PathBuf;

use tui_flappy::highscore::{HighscoreStore, LoadOutcome};

/// Unique scratch file per test so they can run in parallel.
fn scratch(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tui-flappy-test-{}-{}.txt",
        std::process::id(),
        name
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_save_then_load_round_trips() {
    let path = scratch("round-trip");
    let store = HighscoreStore::with_path(&path);

    for score in [0u32, 1, 42, 9999, u32::MAX] {
        store.save(score).unwrap();
        assert_eq!(store.load(), LoadOutcome::Loaded(score));
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_record_is_not_an_error() {
    let store = HighscoreStore::with_path(scratch("missing"));
    let outcome = store.load();
    assert_eq!(outcome, LoadOutcome::Missing);
    assert_eq!(outcome.best(), 0);
}

#[test]
fn test_tampered_checksum_is_rejected() {
    let path = scratch("tampered");
    let store = HighscoreStore::with_path(&path);

    fs::write(&path, "42 999999").unwrap();
    let outcome = store.load();
    assert_eq!(outcome, LoadOutcome::Tampered);
    assert_eq!(outcome.best(), 0);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_edited_score_is_rejected() {
    let path = scratch("edited-score");
    let store = HighscoreStore::with_path(&path);

    // Save honestly, then bump the score token without fixing the checksum.
    store.save(7).unwrap();
    let record = fs::read_to_string(&path).unwrap();
    let checksum = record.split_whitespace().nth(1).unwrap().to_string();
    fs::write(&path, format!("9999 {}", checksum)).unwrap();

    assert_eq!(store.load(), LoadOutcome::Tampered);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_garbage_record_is_rejected() {
    let path = scratch("garbage");
    let store = HighscoreStore::with_path(&path);

    for contents in ["", "not numbers", "12", "12 x", "-5 123"] {
        fs::write(&path, contents).unwrap();
        assert_eq!(store.load(), LoadOutcome::Tampered, "contents: {contents:?}");
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_never_rewrites_a_bad_record() {
    let path = scratch("no-rewrite");
    let store = HighscoreStore::with_path(&path);

    fs::write(&path, "42 999999").unwrap();
    store.load();
    assert_eq!(fs::read_to_string(&path).unwrap(), "42 999999");

    // Only a fresh save replaces it.
    store.save(50).unwrap();
    assert_eq!(store.load(), LoadOutcome::Loaded(50));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_record_layout_is_two_decimal_tokens() {
    let path = scratch("layout");
    let store = HighscoreStore::with_path(&path);

    store.save(123).unwrap();
    let record = fs::read_to_string(&path).unwrap();
    let tokens: Vec<&str> = record.split_whitespace().collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0], "123");
    assert!(tokens[1].parse::<u64>().is_ok());

    fs::remove_file(&path).unwrap();
}
