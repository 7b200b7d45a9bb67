use serde::Serialize;

use crate::candidates::Candidate;
use crate::catalog::catalog;
use crate::settings::ScorerSettings;
use crate::text::{is_terminal, word_count};

/// A correction candidate with its heuristic quality score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f64,
}

/// Heuristic quality score of a correction candidate against its source.
///
/// Every signal depends only on the candidate and the source, never on other
/// candidates.
pub struct Scorer<'a> {
    weights: &'a ScorerSettings,
}

impl<'a> Scorer<'a> {
    pub fn new(weights: &'a ScorerSettings) -> Self {
        Self { weights }
    }

    pub fn score(&self, source: &str, candidate: &str) -> f64 {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return 0.0;
        }
        let w = self.weights;
        // Out-of-range length is a rejection: no other signal can lift it.
        let ratio = word_count(candidate) as f64 / word_count(source).max(1) as f64;
        if ratio < w.length_ratio_min || ratio > w.length_ratio_max {
            return (w.baseline - w.length_penalty).clamp(0.0, 1.0);
        }
        let catalog = catalog();
        let source_lower = source.to_lowercase();
        let candidate_lower = candidate.to_lowercase();
        let mut score = w.baseline;

        if candidate.chars().next().is_some_and(char::is_uppercase) {
            score += w.capitalized_bonus;
        }
        if candidate.chars().last().is_some_and(is_terminal) {
            score += w.terminal_punctuation_bonus;
        }
        if candidate_lower != source_lower.trim() {
            score += w.changed_bonus;
        }

        // A fix counts only when the wrong form is gone from the candidate.
        for (wrong, right) in catalog.known_fixes() {
            let wrong = wrong.to_lowercase();
            let right = right.to_lowercase();
            if source_lower.contains(&wrong)
                && candidate_lower.contains(&right)
                && !candidate_lower.contains(&wrong)
            {
                score += w.fix_bonus;
            }
        }

        for pattern in catalog.anti_patterns() {
            if pattern.is_match(candidate) {
                score -= w.anti_pattern_penalty;
            }
        }
        if catalog.good_usage().iter().any(|p| p.is_match(candidate)) {
            score += w.usage_bonus;
        }

        score.clamp(0.0, 1.0)
    }
}

/// Order by origin priority (external before rule-based before the others),
/// then by descending score. Candidates under `min_viable` are dropped only
/// when at least one candidate reaches it.
pub fn rank(mut scored: Vec<ScoredCandidate>, min_viable: f64) -> Vec<ScoredCandidate> {
    if scored.iter().any(|s| s.score >= min_viable) {
        scored.retain(|s| s.score >= min_viable);
    }
    scored.sort_by(|a, b| {
        a.candidate
            .origin
            .priority()
            .cmp(&b.candidate.origin.priority())
            .then(b.score.total_cmp(&a.score))
    });
    scored
}
