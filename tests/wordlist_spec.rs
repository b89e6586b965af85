use passdict::{DictionaryError, FileDictionary, RecordLayout, ScanOptions, WidthPolicy};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `lines` padded to a common record width, the way the external
/// normalizer lays out a production `.words` file.
fn write_padded(dir: &TempDir, file_name: &str, lines: &[&str]) -> PathBuf {
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) + 1;
    let mut data = Vec::new();
    for line in lines {
        data.extend_from_slice(line.as_bytes());
        data.resize(data.len() + (width - line.len() - 1), b' ');
        data.push(b'\n');
    }
    let path = dir.path().join(file_name);
    fs::write(&path, data).expect("write word list");
    path
}

fn write_raw(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, contents).expect("write word list");
    path
}

fn open_padded(dir: &TempDir, lines: &[&str]) -> FileDictionary {
    let path = write_padded(dir, "list.words", lines);
    FileDictionary::open(&path, "test-list").expect("open verified")
}

#[test]
fn concrete_scenario_apple_banana_cherry() {
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &["apple", "banana", "cherry"]);
    let full = dict.initial_window(0);

    assert!(dict.is_match(full, "APPLE"));
    assert!(!dict.is_match(full, "apply"));
    assert!(dict.narrow(full, "ban").is_some());
    assert!(dict.narrow(full, "bar").is_none());
    assert!(dict.narrow(full, "").is_some());
}

#[test]
fn every_word_matches_in_any_casing() {
    let words = [
        "ant", "bat", "cat", "dog", "eel", "fox", "gnu", "hen", "ibex", "jay",
    ];
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &words);

    for word in words {
        assert!(dict.contains(word), "{word}");
        assert!(dict.contains(&word.to_uppercase()), "{word} uppercased");
    }
    for absent in ["aardvark", "cow", "zebra", "catx", "do"] {
        assert!(!dict.contains(absent), "{absent} should be absent");
    }
}

#[test]
fn every_prefix_of_every_word_narrows() {
    let words = ["apple", "banana", "bandit", "cherry"];
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &words);

    for word in words {
        for len in 0..=word.len() {
            assert!(
                dict.narrow(dict.initial_window(0), &word[..len]).is_some(),
                "prefix '{}' of '{word}'",
                &word[..len]
            );
        }
    }
    for non_prefix in ["bx", "applf", "cherrz", "q", "bananaa"] {
        assert!(
            dict.narrow(dict.initial_window(0), non_prefix).is_none(),
            "'{non_prefix}' is not a prefix of any word"
        );
    }
}

#[test]
fn incremental_narrowing_agrees_with_fresh_searches() {
    let words = [
        "almond", "apple", "apricot", "banana", "bandana", "bandit", "banjo", "basil", "cherry",
        "cocoa",
    ];
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &words);

    let text = "bandit";
    let mut window = dict.initial_window(0);
    for end in 1..=text.len() {
        let prefix = &text[..end];
        let threaded = dict.narrow(window, prefix);
        let fresh = dict.narrow(dict.initial_window(0), prefix);
        assert_eq!(threaded.is_some(), fresh.is_some(), "prefix '{prefix}'");

        let narrowed = threaded.expect("every prefix of a stored word narrows");
        assert!(narrowed.start() >= window.start());
        assert!(narrowed.end() <= window.end());
        window = narrowed;
    }
    assert!(dict.is_match(window, text));
}

#[test]
fn pruning_stops_a_dead_branch() {
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &["apple", "banana", "cherry"]);

    let window = dict.initial_window(0);
    let window = dict.narrow(window, "b").expect("'b' is viable");
    let window = dict.narrow(window, "ba").expect("'ba' is viable");
    assert!(dict.narrow(window, "bar").is_none());
}

#[test]
fn single_entry_dictionary() {
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &["banana"]);

    assert_eq!(dict.word_count(), 1);
    assert!(dict.contains("banana"));
    assert!(dict.contains("BaNaNa"));
    assert!(!dict.contains("apple"));
    assert!(dict.narrow(dict.initial_window(0), "ban").is_some());
    assert!(dict.narrow(dict.initial_window(0), "bananas").is_none());
}

#[test]
fn adjacent_duplicate_entries() {
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &["apple", "banana", "banana", "cherry"]);

    assert_eq!(dict.word_count(), 4);
    assert!(dict.contains("banana"));
    assert!(dict.narrow(dict.initial_window(0), "ban").is_some());
}

#[test]
fn query_longer_than_the_longest_word() {
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &["apple", "banana"]);

    assert!(!dict.contains("bananabread"));
    assert!(dict.narrow(dict.initial_window(0), "bananabread").is_none());
}

#[test]
fn empty_dictionary_file() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "empty.words", "");
    let dict = FileDictionary::open(&path, "empty").expect("open empty");

    assert!(dict.is_empty());
    assert_eq!(dict.word_count(), 0);
    assert!(!dict.contains("anything"));
    assert!(dict.narrow(dict.initial_window(0), "a").is_none());
}

#[test]
fn missing_final_newline_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "ragged.words", "apple \nbanana\ncherry");
    let dict = FileDictionary::open(&path, "ragged").expect("ragged tail is fine");

    assert_eq!(dict.word_count(), 3);
    assert!(dict.contains("cherry"));
    assert!(dict.contains("apple"));
}

#[test]
fn verifier_rejects_unsorted_lists() {
    let dir = TempDir::new().unwrap();
    let path = write_padded(&dir, "unsorted.words", &["banana", "apple", "cherry"]);

    match FileDictionary::open(&path, "unsorted") {
        Err(DictionaryError::Invalid { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("apple"), "{reason}");
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn verifier_rejects_ragged_widths() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "ragged.words", "apple \nbanana\nfig\ngrape \n");

    match FileDictionary::open(&path, "ragged") {
        Err(DictionaryError::Invalid { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn verifier_rejects_overpadded_lists() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(&dir, "padded.words", "apple   \nbanana  \n");

    match FileDictionary::open(&path, "padded") {
        Err(DictionaryError::Invalid { reason, .. }) => {
            assert!(reason.contains("stride"), "{reason}")
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn build_error_for_a_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.words");

    match FileDictionary::open(&path, "missing") {
        Err(DictionaryError::Build { name, .. }) => assert_eq!(name, "missing"),
        other => panic!("expected Build, got {other:?}"),
    }
    match FileDictionary::open_trusted(&path, "missing") {
        Err(DictionaryError::Build { .. }) => {}
        other => panic!("expected Build, got {other:?}"),
    }
}

#[test]
fn trusted_scan_measures_a_raw_list() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(
        &dir,
        "raw.words",
        "# common english words\napple\nbanana\ncherry\n",
    );
    let dict = FileDictionary::open_trusted(&path, "raw").expect("trusted open");

    assert_eq!(dict.word_count(), 3);
    // The comment is the longest line, and the default policy measures it.
    assert_eq!(dict.record_width(), 23);
}

#[test]
fn width_policy_controls_comment_influence() {
    let dir = TempDir::new().unwrap();
    let path = write_raw(
        &dir,
        "raw.words",
        "# common english words\napple\nbanana\ncherry\n",
    );
    let options = ScanOptions {
        width_policy: WidthPolicy::WordsOnly,
        ..ScanOptions::default()
    };
    let dict = FileDictionary::open_trusted_with(&path, "raw", options).expect("trusted open");

    assert_eq!(dict.word_count(), 3);
    assert_eq!(dict.record_width(), 7);
}

#[test]
fn layout_can_be_persisted_and_reused() {
    let dir = TempDir::new().unwrap();
    let path = write_padded(&dir, "list.words", &["apple", "banana", "cherry"]);
    let first = FileDictionary::open(&path, "first").expect("verified open");
    let layout = first.layout();
    drop(first);

    let reopened =
        FileDictionary::with_layout(&path, "reopened", layout).expect("reopen from layout");
    assert_eq!(reopened.layout(), layout);
    assert!(reopened.contains("banana"));
}

#[test]
fn zero_width_layout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_padded(&dir, "list.words", &["apple"]);
    let layout = RecordLayout {
        record_width: 0,
        word_count: 1,
    };

    match FileDictionary::with_layout(&path, "zero", layout) {
        Err(DictionaryError::Layout { name, .. }) => assert_eq!(name, "zero"),
        other => panic!("expected Layout, got {other:?}"),
    }
}

#[test]
fn word_count_can_be_overridden() {
    let dir = TempDir::new().unwrap();
    let path = write_padded(&dir, "list.words", &["apple", "banana"]);
    let mut dict = FileDictionary::open(&path, "recalibrated").expect("open");

    assert_eq!(dict.word_count(), 2);
    dict.set_word_count(250_000);
    assert_eq!(dict.word_count(), 250_000);
    // Searches still reflect the actual contents.
    assert!(dict.contains("banana"));
}

#[test]
fn searches_run_concurrently_on_one_instance() {
    let words = [
        "almond", "apple", "apricot", "banana", "cherry", "date", "elder", "fig", "grape",
        "quince",
    ];
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &words);

    let dict = &dict;
    std::thread::scope(|scope| {
        for chunk in words.chunks(5) {
            scope.spawn(move || {
                for word in chunk {
                    assert!(dict.contains(word));
                    assert!(dict.narrow(dict.initial_window(0), &word[..2]).is_some());
                    assert!(!dict.contains("notaword"));
                }
            });
        }
    });
}

/// The driving engine's pattern: enumerate substrings of a password,
/// extending each starting offset until the dictionary prunes the branch,
/// and confirm completed words with an exact match.
#[test]
fn substring_enumeration_finds_an_embedded_word() {
    let words = ["apple", "banana", "bandit", "cherry"];
    let dir = TempDir::new().unwrap();
    let dict = open_padded(&dir, &words);

    let password = "xQbananA7";
    let mut found = Vec::new();
    for start in 0..password.len() {
        let mut window = dict.initial_window(start);
        for end in start + 1..=password.len() {
            let text = &password[start..end];
            match dict.narrow(window, text) {
                Some(narrowed) => {
                    window = narrowed;
                    if dict.is_match(window, text) {
                        found.push((start, text.to_string()));
                    }
                }
                None => break,
            }
        }
    }

    assert_eq!(found, vec![(2, "bananA".to_string())]);
}
