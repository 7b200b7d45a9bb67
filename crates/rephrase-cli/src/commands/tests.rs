use std::fs;

use rephrase_core::{Engine, StyleProfile};

use super::correct_ops::correct;
use super::paraphrase_ops::{batch, explain, paraphrase, BatchOptions, BatchSummary};
use super::settings_ops::{settings_export, settings_load, settings_validate};
use crate::CliError;

fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_paraphrase_prints_one_per_line() {
    let engine = Engine::new();
    let out = run(|o| paraphrase(&engine, "I like coffee and I drink it daily.", "casual", 2, o));
    assert_eq!(out.lines().count(), 2, "{out}");
}

#[test]
fn test_paraphrase_usage_error() {
    let engine = Engine::new();
    let mut out = Vec::new();
    let err = paraphrase(&engine, "  ", "formal", 2, &mut out).unwrap_err();
    assert!(matches!(err, CliError::Engine(_)));
    assert!(out.is_empty());
}

#[test]
fn test_correct_json_shape() {
    let engine = Engine::new();
    let out = run(|o| correct(&engine, "teh cat is happy", true, o));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(v["correctedText"].as_str().unwrap().contains("cat"));
    assert!(v["corrections"][0]["type"].is_string());
    assert!(v["confidence"].is_number());
}

#[test]
fn test_correct_plain_text() {
    let engine = Engine::new();
    let out = run(|o| correct(&engine, "we was late", false, o));
    assert_eq!(out.lines().next(), Some("We were late."));
    assert!(out.contains("Subject-Verb Agreement"));
}

#[test]
fn test_explain_text_and_json() {
    let engine = Engine::new();
    let text = run(|o| explain(&engine, "Go.", "formal", 2, false, o));
    assert!(text.contains("[fallback]"), "{text}");
    let json = run(|o| explain(&engine, "Go.", "formal", 2, true, o));
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["style"], "formal");
    assert!(v["stages"].as_array().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_batch_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("out.jsonl");
    fs::write(&input, "# header\nI like coffee.\n\nThe dog runs quickly.\n").unwrap();

    let opts = BatchOptions {
        style: StyleProfile::Default,
        n: 2,
        correct: false,
    };
    let summary = batch(&Engine::new(), &input, &output, &opts).unwrap();
    assert_eq!(summary, BatchSummary { lines: 4, records: 2 });

    let written = fs::read_to_string(&output).unwrap();
    let rows: Vec<serde_json::Value> = written
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["text"], "I like coffee.");
    assert_eq!(rows[1]["style"], "default");
    assert!(rows[1]["alternatives"][0]["origin"].is_string());
}

#[test]
fn test_batch_correction_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("out.jsonl");
    fs::write(&input, "teh cat is happy\n").unwrap();

    let opts = BatchOptions {
        style: StyleProfile::Default,
        n: 1,
        correct: true,
    };
    batch(&Engine::new(), &input, &output, &opts).unwrap();
    let row: serde_json::Value =
        serde_json::from_str(fs::read_to_string(&output).unwrap().trim()).unwrap();
    assert_eq!(row["correction"]["correctedText"], "The cat is happy.");
}

#[test]
fn test_batch_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let opts = BatchOptions {
        style: StyleProfile::Default,
        n: 1,
        correct: false,
    };
    let err = batch(
        &Engine::new(),
        &dir.path().join("nope.txt"),
        &dir.path().join("out.jsonl"),
        &opts,
    )
    .unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_settings_export_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let exported = run(|o| settings_export(o));
    fs::write(&path, &exported).unwrap();
    let s = settings_validate(&path).unwrap();
    assert_eq!(s.engine.default_alternatives, 2);
}

#[test]
fn test_settings_validate_rejects_bad_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let exported = run(|o| settings_export(o));
    fs::write(&path, exported.replace("min_viable = 0.4", "min_viable = 1.5")).unwrap();
    assert!(matches!(
        settings_validate(&path),
        Err(CliError::Settings(_))
    ));
}

#[test]
fn test_settings_load_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[engine\n").unwrap();
    assert!(matches!(settings_load(&path), Err(CliError::Settings(_))));
}
