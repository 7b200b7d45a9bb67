//! Candidate generation for paraphrase requests.
//!
//! Strategies are independent: each reads the source text and proposes
//! rewrites. The `CandidatePool` owns deduplication and style normalization,
//! so strategies never have to know what the others produced.

use std::collections::HashSet;

use serde::Serialize;

use crate::style::StyleProfile;
use crate::text::{collapse_whitespace, normalize_key};

pub mod discourse;
pub mod fallback;
pub mod lexical;
pub mod strategy;
pub mod style_grammar;
pub mod syntactic;


pub use strategy::CandidateStrategy;

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    External,
    Rule,
    Fallback,
    Original,
}

impl Origin {
    /// Output order: external, then rule-based, then fallback.
    pub fn priority(self) -> u8 {
        match self {
            Self::External => 0,
            Self::Rule => 1,
            Self::Fallback => 2,
            Self::Original => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub text: String,
    pub origin: Origin,
}

/// Outcome of offering a text to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Empty,
    SameAsSource,
    Duplicate,
}

/// Deduplicated, style-normalized candidates for one request.
///
/// Two texts are the same candidate when their lowercased,
/// whitespace-collapsed forms are equal. The source text is never admitted.
pub struct CandidatePool {
    style: StyleProfile,
    source_key: String,
    seen: HashSet<String>,
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(source: &str, style: StyleProfile) -> Self {
        Self {
            style,
            source_key: normalize_key(source),
            seen: HashSet::new(),
            candidates: Vec::new(),
        }
    }

    /// Normalize `text` for the pool's style and admit it if it is new.
    pub fn offer(&mut self, text: &str, origin: Origin) -> Verdict {
        let text = style_grammar::normalize(&collapse_whitespace(text), self.style);
        if text.is_empty() {
            return Verdict::Empty;
        }
        let key = normalize_key(&text);
        if key == self.source_key {
            return Verdict::SameAsSource;
        }
        if !self.seen.insert(key) {
            return Verdict::Duplicate;
        }
        self.candidates.push(Candidate { text, origin });
        Verdict::Accepted
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
