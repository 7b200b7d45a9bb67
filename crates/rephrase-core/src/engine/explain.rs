use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::candidates::{Candidate, Verdict};
use crate::style::StyleProfile;

/// Full diagnostic result for a single paraphrase request.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub text: String,
    pub style: StyleProfile,
    /// Requested count after clamping.
    pub requested: usize,
    pub stages: Vec<StageTrace>,
    pub output: Vec<Candidate>,
}

/// Everything one stage proposed, in proposal order.
#[derive(Debug, Serialize)]
pub struct StageTrace {
    pub stage: &'static str,
    pub proposals: Vec<Proposal>,
}

impl StageTrace {
    pub(super) fn new(stage: &'static str) -> Self {
        Self {
            stage,
            proposals: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, proposal: Proposal) {
        self.proposals.push(proposal);
    }
}

#[derive(Debug, Serialize)]
pub struct Proposal {
    pub rule: &'static str,
    pub text: String,
    /// `None` when the raw text was discarded before reaching the pool.
    pub verdict: Option<Verdict>,
}

impl Proposal {
    pub(super) fn new(rule: &'static str, text: String, verdict: Verdict) -> Self {
        Self {
            rule,
            text,
            verdict: Some(verdict),
        }
    }

    pub(super) fn dropped(rule: &'static str, raw: &str) -> Self {
        Self {
            rule,
            text: raw.to_string(),
            verdict: None,
        }
    }
}

fn verdict_label(verdict: Option<Verdict>) -> &'static str {
    match verdict {
        Some(Verdict::Accepted) => "accepted",
        Some(Verdict::Empty) => "rejected: empty",
        Some(Verdict::SameAsSource) => "rejected: same as source",
        Some(Verdict::Duplicate) => "rejected: duplicate",
        None => "dropped: nothing left after cleanup",
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{s}{}", " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

/// Format an Explanation as human-readable text.
pub fn format_text(result: &Explanation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== \"{}\" (style={}, k={}) ===\n",
        result.text, result.style, result.requested,
    ));

    let width = result
        .stages
        .iter()
        .flat_map(|s| &s.proposals)
        .map(|p| UnicodeWidthStr::width(p.text.as_str()))
        .max()
        .unwrap_or(0)
        .min(72);

    for stage in &result.stages {
        if stage.proposals.is_empty() {
            out.push_str(&format!("  [{}] (none)\n", stage.stage));
            continue;
        }
        out.push_str(&format!("  [{}]\n", stage.stage));
        for p in &stage.proposals {
            out.push_str(&format!(
                "    {}  {:<20} {}\n",
                pad(&p.text, width),
                p.rule,
                verdict_label(p.verdict),
            ));
        }
    }

    out.push_str(&format!("\n=== Output ({}) ===\n", result.output.len()));
    for (i, c) in result.output.iter().enumerate() {
        out.push_str(&format!("  #{:<2} {}  ({:?})\n", i + 1, c.text, c.origin));
    }
    out
}
