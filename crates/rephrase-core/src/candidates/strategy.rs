use crate::rule::RuleHit;
use crate::style::StyleProfile;

use super::Origin;

/// Strategy for candidate generation.
///
/// All strategies are stateless and read only the source text, so they can
/// run in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStrategy {
    /// The source itself, normalized to the style's contraction policy.
    StyleGrammar,
    Lexical,
    Syntactic,
    Discourse,
    /// Backstop used only when the others leave the pool short.
    Fallback,
}

impl CandidateStrategy {
    /// Strategies run on every request, in pool order.
    pub const PRIMARY: [CandidateStrategy; 4] = [
        Self::StyleGrammar,
        Self::Lexical,
        Self::Syntactic,
        Self::Discourse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::StyleGrammar => "style_grammar",
            Self::Lexical => "lexical",
            Self::Syntactic => "syntactic",
            Self::Discourse => "discourse",
            Self::Fallback => "fallback",
        }
    }

    pub fn origin(self) -> Origin {
        match self {
            Self::Fallback => Origin::Fallback,
            _ => Origin::Rule,
        }
    }

    /// Generate proposals using the selected strategy. `k` bounds how many
    /// variations a strategy explores; it does not cap the result.
    pub fn generate(self, text: &str, style: StyleProfile, k: usize) -> Vec<RuleHit> {
        match self {
            Self::StyleGrammar => super::style_grammar::generate(text, style),
            Self::Lexical => super::lexical::generate(text, style, k),
            Self::Syntactic => super::syntactic::generate(text, style, k),
            Self::Discourse => super::discourse::generate(text, style, k),
            Self::Fallback => super::fallback::generate(text, style),
        }
    }
}
