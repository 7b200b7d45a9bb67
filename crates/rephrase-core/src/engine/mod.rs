//! Transformation engine: one synchronous pass per request.
//!
//! `ExternalAttempt → RuleGeneration → Dedup → FallbackIfShort →
//! (ScoreAndFilter) → Assemble`. Only usage errors escape; every other
//! failure is absorbed and the caller always gets a best-effort result.

mod assemble;
pub mod explain;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, debug_span};

use crate::candidates::{Candidate, CandidatePool, CandidateStrategy, Origin};
use crate::correction::{self, rank, CorrectionResult, ScoredCandidate, Scorer};
use crate::external::{clean_candidate, ExternalSource};
use crate::settings::{settings, Settings};
use crate::style::StyleProfile;
use crate::text::normalize_key;

use explain::{Explanation, Proposal, StageTrace};

/// Caller mistakes. The only errors the engine returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("number of alternatives must be at least 1")]
    InvalidCount,
}

/// Stateless across requests; cheap to share between threads.
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    external: ExternalSource,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with the global settings and no external generator.
    pub fn new() -> Self {
        Self {
            settings: settings().clone(),
            external: ExternalSource::Disabled,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_external(mut self, external: ExternalSource) -> Self {
        self.external = external;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.settings.external.timeout_ms = timeout.as_millis().max(1) as u64;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Paraphrase `text`. `style` is free text; unknown names mean default.
    ///
    /// Returns between 1 and `k` (capped at `engine.max_alternatives`)
    /// distinct rewrites, or the source alone when nothing could be produced.
    pub fn transform(&self, text: &str, style: &str, k: usize) -> Result<Vec<String>, EngineError> {
        let style = StyleProfile::parse_lenient(style);
        Ok(self
            .transform_candidates(text, style, k)?
            .into_iter()
            .map(|c| c.text)
            .collect())
    }

    /// Like [`Engine::transform`], keeping each candidate's origin.
    pub fn transform_candidates(
        &self,
        text: &str,
        style: StyleProfile,
        k: usize,
    ) -> Result<Vec<Candidate>, EngineError> {
        let k = self.check(text, k)?;
        Ok(self.run(text, style, k, None))
    }

    /// Paraphrase with a per-stage trace of every proposal.
    pub fn explain(&self, text: &str, style: &str, k: usize) -> Result<Explanation, EngineError> {
        let style = StyleProfile::parse_lenient(style);
        let k = self.check(text, k)?;
        let mut stages = Vec::new();
        let output = self.run(text, style, k, Some(&mut stages));
        Ok(Explanation {
            text: text.to_string(),
            style,
            requested: k,
            stages,
            output,
        })
    }

    /// Grammar-correct `text`.
    ///
    /// External candidates (if any) and the rule-based correction are
    /// scored; the best by origin priority then score wins. When no
    /// candidate differs from the source, the source is returned unchanged.
    pub fn correct(&self, text: &str) -> Result<CorrectionResult, EngineError> {
        self.check(text, 1)?;
        let span = debug_span!("correct", len = text.len());
        let _enter = span.enter();

        let mut pool = CandidatePool::new(text, StyleProfile::Default);
        let raw = self.external.call_or_empty(
            text,
            StyleProfile::Default,
            self.settings.external.correction_candidates,
            self.settings.external.timeout(),
        );
        // External answers get the same rule pass as the source, so an
        // echo with leftover typos is polished before scoring.
        let mut polish: HashMap<String, Vec<correction::Correction>> = HashMap::new();
        for candidate in raw.iter().filter_map(|r| clean_candidate(r)) {
            let (polished, fixes) = correction::correct_with_rules(&candidate);
            polish.entry(normalize_key(&polished)).or_insert(fixes);
            pool.offer(&polished, Origin::External);
        }
        let (rule_text, rule_corrections) = correction::correct_with_rules(text);
        pool.offer(&rule_text, Origin::Rule);

        let scorer = Scorer::new(&self.settings.scorer);
        let scored: Vec<ScoredCandidate> = pool
            .into_candidates()
            .into_iter()
            .map(|candidate| ScoredCandidate {
                score: scorer.score(text, &candidate.text),
                candidate,
            })
            .collect();
        let ranked = rank(scored, self.settings.scorer.min_viable);
        debug!(candidates = ranked.len(), "correction candidates ranked");

        let Some(best) = ranked.into_iter().next() else {
            return Ok(CorrectionResult {
                corrected_text: text.to_string(),
                corrections: Vec::new(),
                confidence: cap_confidence(scorer.score(text, text)),
            });
        };
        let confidence = cap_confidence(best.score);
        let corrections = match best.candidate.origin {
            Origin::External => {
                let mut entries = vec![correction::Correction {
                    original: text.to_string(),
                    corrected: best.candidate.text.clone(),
                    kind: correction::EXTERNAL_KIND.to_string(),
                    confidence,
                }];
                entries.extend(
                    polish
                        .remove(&normalize_key(&best.candidate.text))
                        .unwrap_or_default(),
                );
                entries
            }
            _ => rule_corrections,
        };
        Ok(CorrectionResult {
            corrected_text: best.candidate.text,
            corrections,
            confidence,
        })
    }

    /// Validate the request and clamp `k`.
    fn check(&self, text: &str, k: usize) -> Result<usize, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }
        if k == 0 {
            return Err(EngineError::InvalidCount);
        }
        Ok(k.min(self.settings.engine.max_alternatives))
    }

    fn run(
        &self,
        text: &str,
        style: StyleProfile,
        k: usize,
        mut trace: Option<&mut Vec<StageTrace>>,
    ) -> Vec<Candidate> {
        let span = debug_span!("transform", style = %style, k);
        let _enter = span.enter();
        let mut pool = CandidatePool::new(text, style);

        let raw = self
            .external
            .call_or_empty(text, style, k, self.settings.external.timeout());
        let mut external = StageTrace::new("external");
        for r in &raw {
            match clean_candidate(r) {
                Some(cleaned) => {
                    let verdict = pool.offer(&cleaned, Origin::External);
                    external.push(Proposal::new("external", cleaned, verdict));
                }
                None => external.push(Proposal::dropped("external", r)),
            }
        }
        record(&mut trace, external);

        for strategy in CandidateStrategy::PRIMARY {
            let _s = debug_span!("strategy", name = strategy.name()).entered();
            let hits = strategy.generate(text, style, k);
            debug!(proposals = hits.len(), "generated");
            let mut stage = StageTrace::new(strategy.name());
            for hit in hits {
                let verdict = pool.offer(&hit.text, strategy.origin());
                stage.push(Proposal::new(hit.rule, hit.text, verdict));
            }
            record(&mut trace, stage);
        }

        if pool.len() < k {
            let deficit = k - pool.len();
            debug!(deficit, "pool short, running fallback");
            let mut stage = StageTrace::new(CandidateStrategy::Fallback.name());
            for hit in CandidateStrategy::Fallback.generate(text, style, k) {
                if pool.len() >= k {
                    break;
                }
                let verdict = pool.offer(&hit.text, Origin::Fallback);
                stage.push(Proposal::new(hit.rule, hit.text, verdict));
            }
            record(&mut trace, stage);
        }

        let out = assemble::assemble(text, pool.into_candidates(), k);
        debug!(returned = out.len(), "request assembled");
        out
    }
}

fn record(trace: &mut Option<&mut Vec<StageTrace>>, stage: StageTrace) {
    if let Some(stages) = trace.as_deref_mut() {
        stages.push(stage);
    }
}

/// Reported confidence never claims certainty for a heuristic.
fn cap_confidence(score: f64) -> f64 {
    score.min(0.95)
}
