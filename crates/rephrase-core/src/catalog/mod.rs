//! Pattern catalog: read-only rule tables shared by every request.
//!
//! Built once on first use and never mutated afterwards, so it can be read
//! from any number of threads without locking.

mod contractions;
pub mod correction;
mod discourse;
mod lexical;
mod phrases;
mod syntactic;
mod temporal;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::rule::{whole_word, RuleFamily, RuleSet, TransformationRule};
use crate::style::StyleProfile;

pub use correction::CorrectionFamily;
pub use phrases::StylePhrases;

pub struct Catalog {
    lexical: HashMap<&'static str, &'static [&'static str]>,
    temporal: HashMap<&'static str, &'static [&'static str]>,
    temporal_rules: RuleSet,
    syntactic: RuleSet,
    discourse: RuleSet,
    expansions: RuleSet,
    contractions: RuleSet,
    correction: Vec<(CorrectionFamily, RuleSet)>,
    negation: Regex,
    double_negatives: RuleSet,
    known_fixes: Vec<(&'static str, &'static str)>,
    anti_patterns: Vec<Regex>,
    good_usage: Vec<Regex>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide catalog.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::build)
}

impl Catalog {
    fn build() -> Self {
        let formal = RuleSet::new(
            contractions::CONTRACTIONS
                .iter()
                .map(|&(short, long)| {
                    TransformationRule::pattern(short, RuleFamily::StyleGrammar, &whole_word(short), long)
                })
                .collect(),
        );
        let casual = RuleSet::new(
            contractions::CONTRACTIONS
                .iter()
                .map(|&(short, long)| {
                    TransformationRule::pattern(long, RuleFamily::StyleGrammar, &whole_word(long), short)
                })
                .collect(),
        );
        let known_fixes = correction::MISSPELLINGS
            .iter()
            .chain(correction::CONTRACTION_FIXES)
            .chain(correction::AGREEMENT_FIXES)
            .copied()
            .collect();
        let catalog = Self {
            lexical: lexical::SYNONYMS.iter().copied().collect(),
            temporal: temporal::TEMPORAL.iter().copied().collect(),
            temporal_rules: temporal::build(),
            syntactic: syntactic::build(),
            discourse: discourse::build(),
            expansions: formal,
            contractions: casual,
            correction: correction::build(),
            negation: correction::negation(),
            double_negatives: correction::double_negatives(),
            known_fixes,
            anti_patterns: correction::anti_patterns(),
            good_usage: correction::good_usage(),
        };
        tracing::debug!(
            lexical = catalog.lexical.len(),
            syntactic = catalog.syntactic.len(),
            discourse = catalog.discourse.len(),
            "pattern catalog built"
        );
        catalog
    }

    /// Ranked alternatives for `key` in `family`, case-insensitive.
    ///
    /// Pattern families (syntactic, discourse) have no word keys and always
    /// return `None`; their rules are reached through [`Catalog::syntactic`]
    /// and [`Catalog::discourse`].
    pub fn lookup(&self, key: &str, family: RuleFamily) -> Option<&'static [&'static str]> {
        let key = key.to_lowercase();
        match family {
            RuleFamily::Lexical => self.lexical.get(key.as_str()).copied(),
            RuleFamily::Temporal => self.temporal.get(key.as_str()).copied(),
            RuleFamily::Contraction | RuleFamily::StyleGrammar => {
                contractions::CONTRACTIONS.iter().find_map(|pair| {
                    if pair.0.eq_ignore_ascii_case(&key) {
                        Some(std::slice::from_ref(&pair.1))
                    } else if pair.1.eq_ignore_ascii_case(&key) {
                        Some(std::slice::from_ref(&pair.0))
                    } else {
                        None
                    }
                })
            }
            RuleFamily::Correction => correction::MISSPELLINGS
                .iter()
                .chain(correction::CONTRACTION_FIXES)
                .find(|pair| pair.0 == key)
                .map(|pair| std::slice::from_ref(&pair.1)),
            RuleFamily::Syntactic | RuleFamily::Discourse => None,
        }
    }

    pub fn syntactic(&self) -> &RuleSet {
        &self.syntactic
    }

    pub fn discourse(&self) -> &RuleSet {
        &self.discourse
    }

    /// Normalization rules for `style`: expansions for formal register,
    /// contractions for casual, nothing otherwise.
    pub fn style_grammar(&self, style: StyleProfile) -> Option<&RuleSet> {
        if style.is_formal_register() {
            Some(&self.expansions)
        } else if style == StyleProfile::Casual {
            Some(&self.contractions)
        } else {
            None
        }
    }

    pub fn correction(&self) -> &[(CorrectionFamily, RuleSet)] {
        &self.correction
    }

    /// `(wrong, right)` pairs the scorer rewards when fixed.
    pub fn known_fixes(&self) -> &[(&'static str, &'static str)] {
        &self.known_fixes
    }

    pub fn anti_patterns(&self) -> &[Regex] {
        &self.anti_patterns
    }

    pub fn good_usage(&self) -> &[Regex] {
        &self.good_usage
    }

    pub fn phrases(&self, style: StyleProfile) -> &'static StylePhrases {
        phrases::for_style(style)
    }

    /// Whether any word of `text` already anchors it in time.
    pub fn has_temporal_marker(&self, text: &str) -> bool {
        text.split_whitespace().any(|token| {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            temporal::TEMPORAL_MARKERS.contains(&word.as_str())
        })
    }

    /// Every contraction the style grammar covers, with its expansion.
    pub fn contraction_pairs(&self) -> &'static [(&'static str, &'static str)] {
        contractions::CONTRACTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds() {
        let c = catalog();
        assert!(!c.syntactic().is_empty());
        assert!(!c.discourse().is_empty());
        assert_eq!(c.correction().len(), CorrectionFamily::ALL.len());
    }

    #[test]
    fn lookup_by_family() {
        let c = catalog();
        let alts = c.lookup("Quick", RuleFamily::Lexical).unwrap();
        assert!((2..=4).contains(&alts.len()));
        assert_eq!(c.lookup("every day", RuleFamily::Temporal).unwrap()[0], "daily");
        assert_eq!(c.lookup("can't", RuleFamily::Contraction), Some(&["cannot"][..]));
        assert_eq!(c.lookup("cannot", RuleFamily::Contraction), Some(&["can't"][..]));
        assert_eq!(c.lookup("teh", RuleFamily::Correction), Some(&["the"][..]));
        assert!(c.lookup("because", RuleFamily::Syntactic).is_none());
        assert!(c.lookup("zyzzyva", RuleFamily::Lexical).is_none());
    }

    #[test]
    fn every_synonym_has_ranked_alternatives() {
        for (key, alts) in lexical::SYNONYMS {
            assert!((2..=4).contains(&alts.len()), "{key} has {} alternatives", alts.len());
        }
    }

    #[test]
    fn style_grammar_selection() {
        let c = catalog();
        assert!(c.style_grammar(StyleProfile::Academic).is_some());
        assert!(c.style_grammar(StyleProfile::Casual).is_some());
        assert!(c.style_grammar(StyleProfile::Creative).is_none());
    }

    #[test]
    fn temporal_and_negative_rules_are_prebuilt() {
        let c = catalog();
        assert_eq!(c.temporal_rules.len(), temporal::TEMPORAL.len());
        assert!(c.negation.is_match("I don't know"));
        assert!(!c.negation.is_match("I know nothing"));
        let ctx = crate::rule::RuleContext::new(StyleProfile::Default);
        let (out, fired) = c.double_negatives.apply_all("nobody saw nothing", &ctx);
        assert_eq!(out, "anybody saw anything");
        assert_eq!(fired, vec!["nothing", "nobody"]);
    }

    #[test]
    fn temporal_markers() {
        let c = catalog();
        assert!(c.has_temporal_marker("I run every morning."));
        assert!(!c.has_temporal_marker("Go."));
    }
}
