use crate::rule::{RuleContext, RuleFamily, RuleSet, TransformationRule};
use crate::style::{StyleGate, StyleProfile};
use crate::text::{capitalize_sentences, decapitalize_leading, match_case, split_sentences, split_token};

use super::lexical::ADJECTIVES;
use super::phrases::{for_style, CONNECTIVES};

static MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

/// Adverbs that may sit between a subject and its verb.
static SPLIT_ADVERBS: &[&str] = &[
    "also", "never", "always", "often", "just", "still", "really", "usually", "sometimes",
    "rarely", "even", "only", "already", "seldom", "truly",
];

/// Degree words that already modulate the following adjective.
static DEGREE_WORDS: &[&str] = &[
    "very", "rather", "quite", "somewhat", "so", "too", "extremely", "really", "truly",
    "fairly", "pretty", "remarkably", "wonderfully", "incredibly", "most", "more", "less",
];

pub(super) fn build() -> RuleSet {
    RuleSet::new(vec![
        TransformationRule::custom("perspective_shift", RuleFamily::Discourse, shift_perspective)
            .gated(StyleGate::Except(StyleProfile::Casual)),
        TransformationRule::custom("hedging_qualifier", RuleFamily::Discourse, insert_qualifier)
            .gated(StyleGate::Only(StyleProfile::Formal)),
        TransformationRule::custom("embellishment", RuleFamily::Discourse, insert_qualifier)
            .gated(StyleGate::Only(StyleProfile::Creative)),
        TransformationRule::custom("connector_injection", RuleFamily::Discourse, inject_connector),
    ])
}

/// Third-person singular present of `verb`.
fn third_person(verb: &str) -> String {
    let lower = verb.to_lowercase();
    let inflected = match lower.as_str() {
        "am" => "is".to_string(),
        "have" => "has".to_string(),
        "do" => "does".to_string(),
        "go" => "goes".to_string(),
        v if MODALS.contains(&v) || v == "was" || v.ends_with("ed") || v.contains('\'') => {
            return verb.to_string();
        }
        v if v.ends_with('s')
            || v.ends_with("sh")
            || v.ends_with("ch")
            || v.ends_with('x')
            || v.ends_with('z')
            || v.ends_with('o') =>
        {
            format!("{v}es")
        }
        v if v.ends_with('y')
            && !v.ends_with("ay")
            && !v.ends_with("ey")
            && !v.ends_with("oy")
            && !v.ends_with("uy") =>
        {
            format!("{}ies", &v[..v.len() - 1])
        }
        v => format!("{v}s"),
    };
    match_case(verb, &inflected)
}

/// First person → generic "one": "I like tea." → "One likes tea."
fn shift_perspective(text: &str, _ctx: &RuleContext) -> Option<String> {
    let mut tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let mut changed = false;
    let mut i = 0;
    while i < tokens.len() {
        let (lead, core, trail) = split_token(&tokens[i]);
        let (lead, core, trail) = (lead.to_string(), core.to_string(), trail.to_string());
        let replacement = match core.as_str() {
            "I" => {
                tokens[i] = format!("{lead}one{trail}");
                changed = true;
                // Inflect the verb, skipping adverbs in between.
                let mut j = i + 1;
                while j < tokens.len() {
                    let (_, next_core, _) = split_token(&tokens[j]);
                    let lower = next_core.to_lowercase();
                    if SPLIT_ADVERBS.contains(&lower.as_str()) || lower.ends_with("ly") {
                        j += 1;
                        continue;
                    }
                    break;
                }
                if j < tokens.len() {
                    let (vl, verb, vt) = split_token(&tokens[j]);
                    tokens[j] = format!("{vl}{}{vt}", third_person(verb));
                }
                i = j.max(i + 1);
                continue;
            }
            "I'm" => Some("one is"),
            "I'll" => Some("one will"),
            _ => match core.to_lowercase().as_str() {
                "me" => Some("one"),
                "my" => Some("one's"),
                "myself" => Some("oneself"),
                "mine" => Some("one's own"),
                _ => None,
            },
        };
        if let Some(rep) = replacement {
            tokens[i] = format!("{lead}{}{trail}", match_case(&core, rep));
            changed = true;
        }
        i += 1;
    }
    changed.then(|| capitalize_sentences(&tokens.join(" ")))
}

/// Insert the style's qualifier before the first recognized adjective.
fn insert_qualifier(text: &str, ctx: &RuleContext) -> Option<String> {
    let qualifiers = for_style(ctx.style).qualifiers;
    if qualifiers.is_empty() {
        return None;
    }
    let qualifier = qualifiers[ctx.pick(qualifiers.len())];
    let tokens: Vec<&str> = text.split_whitespace().collect();
    // The sentence-initial word is skipped so capitalization stays put.
    let pos = tokens.iter().enumerate().skip(1).find_map(|(i, tok)| {
        let (_, core, _) = split_token(tok);
        ADJECTIVES
            .contains(&core.to_lowercase().as_str())
            .then_some(i)
    })?;
    let (_, prev, _) = split_token(tokens[pos - 1]);
    if DEGREE_WORDS.contains(&prev.to_lowercase().as_str()) {
        return None;
    }
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len() + 1);
    out.extend_from_slice(&tokens[..pos]);
    out.push(qualifier);
    out.extend_from_slice(&tokens[pos..]);
    Some(out.join(" "))
}

/// "A. B." → "A. Consequently, b."
fn inject_connector(text: &str, ctx: &RuleContext) -> Option<String> {
    let sentences = split_sentences(text);
    if sentences.len() < 2 {
        return None;
    }
    let (_, first_word, _) = split_token(sentences[1].split_whitespace().next().unwrap_or(""));
    if CONNECTIVES.contains(&first_word.to_lowercase().as_str()) {
        return None;
    }
    let connector = for_style(ctx.style).connector;
    let mut out = sentences[0].to_string();
    out.push(' ');
    out.push_str(connector);
    out.push(' ');
    out.push_str(&decapitalize_leading(sentences[1]));
    for rest in &sentences[2..] {
        out.push(' ');
        out.push_str(rest);
    }
    Some(out)
}
