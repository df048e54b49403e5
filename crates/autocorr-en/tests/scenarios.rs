//! Scenario tests: load small corpora and check lookups and corrections
//! against the expectations in `tests/fixtures/scenarios.json`.
//!
//! Run: cargo test -p autocorr-en --test scenarios

use std::io::{Cursor, Write};
use std::path::PathBuf;

use autocorr_en::corpus::CorpusFormat;
use autocorr_en::{AutocorrHandle, HandleOptions};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    format: String,
    corpus: String,
    size: usize,
    lookups: Vec<(String, Option<u32>)>,
    corrections: Vec<(String, Option<String>)>,
}

fn load_scenarios() -> Vec<Scenario> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scenarios.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

fn format_of(scenario: &Scenario) -> CorpusFormat {
    scenario
        .format
        .parse()
        .unwrap_or_else(|e| panic!("[{}] {e}", scenario.name))
}

fn handle_for(scenario: &Scenario) -> AutocorrHandle {
    let mut handle = AutocorrHandle::default();
    handle
        .load(Cursor::new(scenario.corpus.as_bytes()), format_of(scenario))
        .unwrap_or_else(|e| panic!("[{}] load failed: {e}", scenario.name));
    handle
}

#[test]
fn fixture_is_not_empty() {
    assert!(load_scenarios().len() >= 5);
}

#[test]
fn sizes_match() {
    for scenario in load_scenarios() {
        let handle = handle_for(&scenario);
        assert_eq!(handle.size(), scenario.size, "[{}] size", scenario.name);
    }
}

#[test]
fn lookups_match() {
    let mut mismatches = Vec::new();
    for scenario in load_scenarios() {
        let handle = handle_for(&scenario);
        for (word, expected) in &scenario.lookups {
            let actual = handle.lookup(word);
            if actual != *expected {
                mismatches.push(format!(
                    "[{}] lookup({word:?}): expected {expected:?}, got {actual:?}",
                    scenario.name
                ));
            }
        }
    }
    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}

#[test]
fn corrections_match() {
    let mut mismatches = Vec::new();
    for scenario in load_scenarios() {
        let handle = handle_for(&scenario);
        for (word, expected) in &scenario.corrections {
            let actual = handle
                .correct(word)
                .unwrap_or_else(|e| panic!("[{}] correct({word:?}): {e}", scenario.name))
                .map(|c| c.word);
            if actual != *expected {
                mismatches.push(format!(
                    "[{}] correct({word:?}): expected {expected:?}, got {actual:?}",
                    scenario.name
                ));
            }
        }
    }
    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}

#[test]
fn corrections_are_known_words() {
    for scenario in load_scenarios() {
        let handle = handle_for(&scenario);
        for (word, _) in &scenario.corrections {
            if let Some(found) = handle.correct(word).unwrap() {
                assert_eq!(
                    handle.lookup(&found.word),
                    Some(found.frequency),
                    "[{}] suggestion {:?} for {word:?}",
                    scenario.name,
                    found.word
                );
            }
        }
    }
}

#[test]
fn teardown_empties_every_scenario() {
    for scenario in load_scenarios() {
        let mut handle = handle_for(&scenario);
        handle.teardown();
        assert_eq!(handle.size(), 0, "[{}]", scenario.name);
        for (word, _) in &scenario.lookups {
            assert_eq!(handle.lookup(word), None, "[{}] {word:?}", scenario.name);
        }
        handle.teardown();
    }
}

#[test]
fn load_from_file_matches_in_memory_load() {
    for scenario in load_scenarios() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(scenario.corpus.as_bytes()).unwrap();
        file.flush().unwrap();

        let mut from_file = AutocorrHandle::new(HandleOptions {
            format: format_of(&scenario),
            ..HandleOptions::default()
        });
        from_file.load_file(file.path()).unwrap();
        let in_memory = handle_for(&scenario);

        let a: Vec<(String, u32)> = from_file.trie().iter().collect();
        let b: Vec<(String, u32)> = in_memory.trie().iter().collect();
        assert_eq!(a, b, "[{}]", scenario.name);
    }
}
