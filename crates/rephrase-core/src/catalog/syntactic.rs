use regex::Captures;

use crate::rule::{RuleContext, RuleFamily, RuleSet, TransformationRule};
use crate::style::{StyleGate, StyleProfile};
use crate::text::{capitalize_first, decapitalize_leading, split_sentences, word_count};

use super::phrases::{for_style, CONNECTIVES};

const SUBORDINATORS: &str = "because|when|if|although|while|since|unless|after|before";

/// Words that can open an independent clause.
static SUBJECT_STARTERS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "this", "that", "these", "those", "the", "a",
    "an", "my", "your", "his", "her", "our", "their", "its", "there", "someone", "everyone",
    "nobody", "people", "one",
];

/// Verbs after which "used to" means "accustomed to", not the habitual past.
static ACCUSTOMED_MARKERS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "get", "got", "gets", "getting",
];

pub(super) fn build() -> RuleSet {
    RuleSet::new(vec![
        TransformationRule::template(
            "coordinator_split",
            RuleFamily::Syntactic,
            r"(?i)^(?P<left>.+?),?\s+(?P<conj>and|but|or)\s+(?P<right>.+?)(?P<term>[.!?]*)$",
            split_on_coordinator,
        ),
        TransformationRule::template(
            "clause_fronting",
            RuleFamily::Syntactic,
            &format!(
                r"(?i)^(?P<main>.+?),?\s+(?P<sub>(?:{SUBORDINATORS})\s.+?)(?P<term>[.!?]*)$"
            ),
            front_clause,
        ),
        TransformationRule::template(
            "clause_trailing",
            RuleFamily::Syntactic,
            &format!(
                r"(?i)^(?P<sub>(?:{SUBORDINATORS})\s[^,]+),\s*(?P<main>.+?)(?P<term>[.!?]*)$"
            ),
            trail_clause,
        ),
        TransformationRule::custom("recombination", RuleFamily::Syntactic, recombine),
        TransformationRule::custom("temporal", RuleFamily::Temporal, rewrite_temporal),
        TransformationRule::template(
            "habitual_past",
            RuleFamily::Syntactic,
            r"(?i)(?:\b(?P<pre>\w+)\s+)?\bused to (?P<verb>[a-z]+)\b",
            habitual_past,
        ),
        TransformationRule::pattern(
            "habitual_would",
            RuleFamily::Syntactic,
            r"(?i)\bwould often ([a-z]+)\b",
            "used to $1",
        )
        .first_only(),
        TransformationRule::pattern(
            "necessity",
            RuleFamily::Syntactic,
            r"(?i)\bwe need to\b",
            "it is necessary to",
        )
        .first_only()
        .gated(StyleGate::FormalRegister),
        TransformationRule::template(
            "appears_today",
            RuleFamily::Syntactic,
            r"(?i)^(?P<subj>.+?) is (?P<pred>[a-z]+) today(?P<term>[.!?]*)$",
            appears_today,
        ),
        TransformationRule::pattern(
            "happened_to_be",
            RuleFamily::Syntactic,
            r"(?i)\b([a-z]+) was ([a-z]+)\b",
            "$1 happened to be $2",
        )
        .first_only()
        .gated(StyleGate::Only(StyleProfile::Creative)),
    ])
}

fn terminal_or_period<'a>(caps: &'a Captures<'_>) -> &'a str {
    match caps.name("term").map(|m| m.as_str()) {
        Some(t) if !t.is_empty() => t,
        _ => ".",
    }
}

fn starts_clause(s: &str) -> bool {
    let Some(first) = s.split_whitespace().next() else {
        return false;
    };
    let lower = first.to_lowercase();
    SUBJECT_STARTERS.contains(&lower.as_str())
        || first.chars().next().is_some_and(|c| c.is_uppercase())
}

fn starts_with_word(s: &str, words: &[&str]) -> bool {
    s.split_whitespace()
        .next()
        .map(|w| {
            let w = w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            words.contains(&w.as_str())
        })
        .unwrap_or(false)
}

fn is_subordinator(word: &str) -> bool {
    SUBORDINATORS.split('|').any(|s| s.eq_ignore_ascii_case(word))
}

/// "A and B." → "A. B."; "but"/"or" get the style's contrast/alternative
/// connector in front of the second sentence.
fn split_on_coordinator(_text: &str, caps: &Captures<'_>, ctx: &RuleContext) -> Option<String> {
    let left = caps["left"].trim().trim_end_matches(',');
    let right = caps["right"].trim();
    if word_count(left) < 2 || word_count(right) < 2 || !starts_clause(right) {
        return None;
    }
    let phrases = for_style(ctx.style);
    let second = match caps["conj"].to_lowercase().as_str() {
        "but" => format!("{} {}", phrases.contrast, decapitalize_leading(right)),
        "or" => format!("{} {}", phrases.alternative, decapitalize_leading(right)),
        _ => capitalize_first(right),
    };
    Some(format!(
        "{}. {}{}",
        capitalize_first(left),
        second,
        terminal_or_period(caps)
    ))
}

/// "We stayed in because it rained." → "Because it rained, we stayed in."
fn front_clause(_text: &str, caps: &Captures<'_>, _ctx: &RuleContext) -> Option<String> {
    let main = caps["main"].trim().trim_end_matches(',');
    let sub = caps["sub"].trim();
    let main_first = main.split_whitespace().next().unwrap_or("");
    if word_count(main) < 2 || is_subordinator(main_first) {
        return None;
    }
    Some(format!(
        "{}, {}{}",
        capitalize_first(sub),
        decapitalize_leading(main),
        terminal_or_period(caps)
    ))
}

/// "If it rains, we will stay in." → "We will stay in if it rains."
fn trail_clause(_text: &str, caps: &Captures<'_>, _ctx: &RuleContext) -> Option<String> {
    let sub = caps["sub"].trim();
    let main = caps["main"].trim();
    if word_count(main) < 2 {
        return None;
    }
    Some(format!(
        "{} {}{}",
        capitalize_first(main),
        decapitalize_leading(sub),
        terminal_or_period(caps)
    ))
}

/// Join the first two sentences with the style's transition connector.
fn recombine(text: &str, ctx: &RuleContext) -> Option<String> {
    let sentences = split_sentences(text);
    if sentences.len() < 2 || !sentences[0].ends_with('.') {
        return None;
    }
    if starts_with_word(sentences[1], CONNECTIVES) {
        return None;
    }
    let transition = for_style(ctx.style).transition;
    let mut out = format!(
        "{} {} {}",
        sentences[0],
        transition,
        decapitalize_leading(sentences[1])
    );
    for rest in &sentences[2..] {
        out.push(' ');
        out.push_str(rest);
    }
    Some(out)
}

/// Rewrite the first temporal/frequency expression found.
fn rewrite_temporal(text: &str, ctx: &RuleContext) -> Option<String> {
    super::catalog()
        .temporal_rules
        .each_match(text, ctx)
        .into_iter()
        .next()
        .map(|hit| hit.text)
}

/// "I used to swim." → "I would often swim."
fn habitual_past(text: &str, caps: &Captures<'_>, _ctx: &RuleContext) -> Option<String> {
    if let Some(pre) = caps.name("pre") {
        if ACCUSTOMED_MARKERS.contains(&pre.as_str().to_lowercase().as_str()) {
            return None;
        }
    }
    let whole = caps.get(0)?;
    let verb = &caps["verb"];
    if SUBJECT_STARTERS.contains(&verb.to_lowercase().as_str()) {
        return None;
    }
    let prefix = caps
        .name("pre")
        .map(|m| format!("{} ", m.as_str()))
        .unwrap_or_default();
    Some(format!(
        "{}{}would often {}{}",
        &text[..whole.start()],
        prefix,
        verb,
        &text[whole.end()..]
    ))
}

/// "The weather is nice today." → "Today, the weather appears to be nice."
fn appears_today(_text: &str, caps: &Captures<'_>, _ctx: &RuleContext) -> Option<String> {
    let subj = caps["subj"].trim();
    if subj.contains(',') || word_count(subj) > 4 {
        return None;
    }
    Some(format!(
        "Today, {} appears to be {}{}",
        decapitalize_leading(subj),
        &caps["pred"],
        terminal_or_period(caps)
    ))
}
