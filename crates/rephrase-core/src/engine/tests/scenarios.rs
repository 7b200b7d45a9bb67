use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::candidates::Origin;
use crate::engine::{Engine, EngineError};
use crate::external::ExternalSource;
use crate::style::StyleProfile;
use crate::text::normalize_key;

use super::{canned, Broken, Slow};

fn distinct(out: &[String]) -> bool {
    let keys: HashSet<String> = out.iter().map(|s| normalize_key(s)).collect();
    keys.len() == out.len()
}

#[test]
fn test_casual_coffee() {
    let input = "I like coffee and I drink it daily.";
    let out = Engine::new().transform(input, "casual", 2).unwrap();
    assert_eq!(out.len(), 2, "{out:?}");
    assert!(distinct(&out));
    assert!(out.iter().all(|o| normalize_key(o) != normalize_key(input)));
    assert!(
        out.iter().any(|o| !o.contains("coffee")
            || !o.contains("daily")
            || o.contains("coffee. ")),
        "expected a substitution or split: {out:?}"
    );
}

#[test]
fn test_formal_conditional() {
    let input = "If it rains tomorrow, we will cancel the picnic.";
    let out = Engine::new().transform(input, "formal", 1).unwrap();
    assert_eq!(out.len(), 1);
    let o = &out[0];
    assert_ne!(o, input);
    assert!(o.ends_with('.'), "{o}");
    assert!(o.chars().next().is_some_and(char::is_uppercase), "{o}");
    assert!(!o.trim_end_matches('.').contains(". "), "split into sentences: {o}");
}

#[test]
fn test_fallback_single_token() {
    let out = Engine::new()
        .transform_candidates("Go.", StyleProfile::Formal, 2)
        .unwrap();
    assert!(!out.is_empty());
    assert!(out.iter().all(|c| c.origin == Origin::Fallback));
    assert_eq!(out[0].text, "Perhaps go.");
    assert!(out.iter().all(|c| normalize_key(&c.text) != "go."));
}

#[test]
fn test_external_failure_is_absorbed() {
    let engine = Engine::new().with_external(ExternalSource::new(Broken));
    let out = engine
        .transform_candidates("Hello there.", StyleProfile::Default, 2)
        .unwrap();
    assert!((1..=2).contains(&out.len()));
    assert!(out.iter().all(|c| c.origin != Origin::External));
}

#[test]
fn test_external_timeout_is_absorbed() {
    let engine = Engine::new()
        .with_external(ExternalSource::new(Slow))
        .with_timeout(Duration::from_millis(50));
    let start = Instant::now();
    let out = engine.transform("Hello there.", "default", 2).unwrap();
    assert!(start.elapsed() < Duration::from_secs(2));
    assert!((1..=2).contains(&out.len()));
    assert!(out.iter().all(|o| !o.starts_with("Late:")));
}

#[test]
fn test_external_candidates_come_first() {
    let engine = Engine::new().with_external(canned(vec![
        "Paraphrase: Greetings to you.",
        "Hello there.",
        "",
    ]));
    let out = engine
        .transform_candidates("Hello there.", StyleProfile::Default, 3)
        .unwrap();
    assert_eq!(out[0].text, "Greetings to you.");
    assert_eq!(out[0].origin, Origin::External);
    assert!(out[1..].iter().all(|c| c.origin != Origin::External));
}

#[test]
fn test_external_candidates_follow_style_grammar() {
    let engine = Engine::new().with_external(canned(vec!["I can't attend."]));
    let out = engine.transform("I cannot come.", "formal", 1).unwrap();
    assert_eq!(out, vec!["I cannot attend.".to_string()]);
}

#[test]
fn test_unknown_style_is_default() {
    let engine = Engine::new();
    let a = engine.transform("The quick dog runs.", "pirate", 3).unwrap();
    let b = engine.transform("The quick dog runs.", "default", 3).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_usage_errors() {
    let engine = Engine::new();
    assert_eq!(engine.transform("   ", "formal", 2), Err(EngineError::EmptyInput));
    assert_eq!(engine.transform("Hi.", "formal", 0), Err(EngineError::InvalidCount));
    assert_eq!(engine.correct("").unwrap_err(), EngineError::EmptyInput);
}

#[test]
fn test_count_is_clamped() {
    let engine = Engine::new();
    let max = engine.settings().engine.max_alternatives;
    let out = engine
        .transform("The quick brown dog jumps and the lazy cat sleeps.", "default", 1000)
        .unwrap();
    assert!(out.len() <= max);
}

#[test]
fn test_explain_matches_transform() {
    let engine = Engine::new();
    let input = "I like coffee and I drink it daily.";
    let explanation = engine.explain(input, "casual", 2).unwrap();
    let stages: Vec<&str> = explanation.stages.iter().map(|s| s.stage).collect();
    assert_eq!(
        &stages[..5],
        &["external", "style_grammar", "lexical", "syntactic", "discourse"]
    );
    let texts: Vec<String> = explanation.output.iter().map(|c| c.text.clone()).collect();
    assert_eq!(texts, engine.transform(input, "casual", 2).unwrap());
    let rendered = crate::engine::explain::format_text(&explanation);
    assert!(rendered.contains("[lexical]"));
    assert!(rendered.contains("accepted"));
}
