//! Grammar-correction mode.
//!
//! Rule families compound in a fixed order. Each family that changes the
//! text contributes one audit entry.

pub mod scorer;


use serde::Serialize;

use crate::catalog::{catalog, CorrectionFamily};
use crate::rule::RuleContext;
use crate::style::StyleProfile;

pub use scorer::{rank, ScoredCandidate, Scorer};

/// One audit entry. Serialized with the field name `type` for the family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub corrections: Vec<Correction>,
    pub confidence: f64,
}

/// Label of the audit entry for an accepted external correction.
pub const EXTERNAL_KIND: &str = "Model Correction";

/// Run every correction family over `text` in order.
pub fn correct_with_rules(text: &str) -> (String, Vec<Correction>) {
    let ctx = RuleContext::new(StyleProfile::Default);
    let mut current = text.to_string();
    let mut corrections = Vec::new();
    for (family, rules) in catalog().correction() {
        let (next, fired) = rules.apply_all(&current, &ctx);
        if fired.is_empty() || next == current {
            continue;
        }
        tracing::debug!(family = family.label(), rules = ?fired, "correction family fired");
        corrections.push(audit(*family, &current, &next));
        current = next;
    }
    (current, corrections)
}

fn audit(family: CorrectionFamily, before: &str, after: &str) -> Correction {
    let (original, corrected) = changed_words(before, after).unwrap_or_else(|| {
        let (o, c) = family.summary();
        (o.to_string(), c.to_string())
    });
    Correction {
        original,
        corrected,
        kind: family.label().to_string(),
        confidence: family.confidence(),
    }
}

/// Words that differ between `before` and `after`, joined by spaces, when
/// the edit kept the word count. `None` otherwise.
fn changed_words(before: &str, after: &str) -> Option<(String, String)> {
    let old: Vec<&str> = before.split_whitespace().collect();
    let new: Vec<&str> = after.split_whitespace().collect();
    if old.len() != new.len() {
        return None;
    }
    let (from, to): (Vec<&str>, Vec<&str>) = old
        .iter()
        .zip(&new)
        .filter(|(a, b)| a != b)
        .map(|(a, b)| (*a, *b))
        .unzip();
    if from.is_empty() {
        return None;
    }
    Some((from.join(" "), to.join(" ")))
}
