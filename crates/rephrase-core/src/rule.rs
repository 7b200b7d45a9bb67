//! Transformation rules and the generic driver that evaluates them.
//!
//! Every rule carries its own matcher and rewrite. Families are stored as
//! ordered `RuleSet`s and evaluated either independently against the same
//! input (`each_match`) or sequentially with compounding edits
//! (`apply_all`).

use regex::{Captures, Regex};

use crate::style::{StyleGate, StyleProfile};
use crate::text::match_case;

/// Rule family, used for catalog lookups and correction audit entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFamily {
    Lexical,
    Syntactic,
    Discourse,
    StyleGrammar,
    Temporal,
    Contraction,
    Correction,
}

/// Per-invocation context handed to every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub style: StyleProfile,
    /// Selects among ranked alternatives.
    pub variation: usize,
}

impl RuleContext {
    pub fn new(style: StyleProfile) -> Self {
        Self {
            style,
            variation: 0,
        }
    }

    pub fn with_variation(self, variation: usize) -> Self {
        Self { variation, ..self }
    }

    /// Index into a ranked alternative list of length `len`.
    ///
    /// Formal register walks the list from the most conservative entry and
    /// stays on the last one. Creative starts one past the top entry and
    /// cycles. Other styles cycle from the top.
    pub fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self.style {
            StyleProfile::Formal | StyleProfile::Academic => self.variation.min(len - 1),
            StyleProfile::Creative => (self.variation + 1) % len,
            StyleProfile::Default | StyleProfile::Casual => self.variation % len,
        }
    }
}

/// Template builder: receives the full text and the captures of the
/// matcher, returns the rewritten text or `None` when the template declines.
pub type TemplateFn = fn(&str, &Captures<'_>, &RuleContext) -> Option<String>;

/// The rewrite half of a rule.
pub enum Rewrite {
    /// Whole-word substitution with ranked alternatives.
    Lexical {
        key: &'static str,
        alternatives: &'static [&'static str],
        matcher: Regex,
    },
    /// Regex match with a `$name` replacement template. `all` replaces every
    /// occurrence instead of only the first.
    Pattern {
        matcher: Regex,
        replacement: &'static str,
        all: bool,
    },
    /// Regex match reassembled by a function over the captured sub-spans.
    Template { matcher: Regex, build: TemplateFn },
    /// Free-form function over the whole text.
    Custom(fn(&str, &RuleContext) -> Option<String>),
}

pub struct TransformationRule {
    pub name: &'static str,
    pub family: RuleFamily,
    pub gate: StyleGate,
    pub rewrite: Rewrite,
}

impl TransformationRule {
    pub fn lexical(key: &'static str, alternatives: &'static [&'static str]) -> Self {
        Self {
            name: key,
            family: RuleFamily::Lexical,
            gate: StyleGate::Any,
            rewrite: Rewrite::Lexical {
                key,
                alternatives,
                matcher: compile(&whole_word(key)),
            },
        }
    }

    pub fn pattern(
        name: &'static str,
        family: RuleFamily,
        matcher: &str,
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            family,
            gate: StyleGate::Any,
            rewrite: Rewrite::Pattern {
                matcher: compile(matcher),
                replacement,
                all: true,
            },
        }
    }

    pub fn template(
        name: &'static str,
        family: RuleFamily,
        matcher: &str,
        build: TemplateFn,
    ) -> Self {
        Self {
            name,
            family,
            gate: StyleGate::Any,
            rewrite: Rewrite::Template {
                matcher: compile(matcher),
                build,
            },
        }
    }

    pub fn custom(
        name: &'static str,
        family: RuleFamily,
        f: fn(&str, &RuleContext) -> Option<String>,
    ) -> Self {
        Self {
            name,
            family,
            gate: StyleGate::Any,
            rewrite: Rewrite::Custom(f),
        }
    }

    pub fn gated(mut self, gate: StyleGate) -> Self {
        self.gate = gate;
        self
    }

    /// Replace only the first occurrence (pattern rules only).
    pub fn first_only(mut self) -> Self {
        if let Rewrite::Pattern { all, .. } = &mut self.rewrite {
            *all = false;
        }
        self
    }

    /// Apply the rule to `text`. Returns `None` when the rule is gated out,
    /// does not match, or would leave the text unchanged.
    pub fn apply(&self, text: &str, ctx: &RuleContext) -> Option<String> {
        if !self.gate.admits(ctx.style) {
            return None;
        }
        let out = match &self.rewrite {
            Rewrite::Lexical {
                alternatives,
                matcher,
                ..
            } => {
                if alternatives.is_empty() || !matcher.is_match(text) {
                    return None;
                }
                let pick = alternatives[ctx.pick(alternatives.len())];
                matcher
                    .replace_all(text, |caps: &Captures<'_>| match_case(&caps[0], pick))
                    .into_owned()
            }
            Rewrite::Pattern {
                matcher,
                replacement,
                all,
            } => {
                if !matcher.is_match(text) {
                    return None;
                }
                let limit = if *all { 0 } else { 1 };
                matcher
                    .replacen(text, limit, |caps: &Captures<'_>| {
                        let mut expanded = String::new();
                        caps.expand(replacement, &mut expanded);
                        match_case(&caps[0], &expanded)
                    })
                    .into_owned()
            }
            Rewrite::Template { matcher, build } => {
                let caps = matcher.captures(text)?;
                build(text, &caps, ctx)?
            }
            Rewrite::Custom(f) => f(text, ctx)?,
        };
        (out != text).then_some(out)
    }
}

/// Case-insensitive whole-word pattern for a literal phrase.
pub(crate) fn whole_word(s: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(s))
}

/// Compile a catalog pattern. Catalog patterns are static and covered by
/// tests, so a failure here is a programming error.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid catalog pattern {pattern:?}: {e}"))
}

/// An ordered list of rules from one family.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<TransformationRule>,
}

/// One rule firing: the rule name and the rewritten text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: &'static str,
    pub text: String,
}

impl RuleSet {
    pub fn new(rules: Vec<TransformationRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule applied independently to the same input; one hit per rule.
    pub fn each_match(&self, text: &str, ctx: &RuleContext) -> Vec<RuleHit> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.apply(text, ctx).map(|out| RuleHit {
                    rule: rule.name,
                    text: out,
                })
            })
            .collect()
    }

    /// Apply every rule in order, each on the output of the previous one.
    /// Returns the final text and the names of the rules that fired.
    pub fn apply_all(&self, text: &str, ctx: &RuleContext) -> (String, Vec<&'static str>) {
        let mut current = text.to_string();
        let mut fired = Vec::new();
        for rule in &self.rules {
            if let Some(out) = rule.apply(&current, ctx) {
                fired.push(rule.name);
                current = out;
            }
        }
        (current, fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(style: StyleProfile) -> RuleContext {
        RuleContext::new(style)
    }

    #[test]
    fn pick_by_style() {
        let formal = ctx(StyleProfile::Formal);
        assert_eq!(formal.pick(4), 0);
        assert_eq!(formal.with_variation(9).pick(4), 3);
        let casual = ctx(StyleProfile::Casual);
        assert_eq!(casual.with_variation(5).pick(4), 1);
        let creative = ctx(StyleProfile::Creative);
        assert_eq!(creative.pick(4), 1);
        assert_eq!(creative.with_variation(1).pick(4), 2);
        assert_eq!(creative.with_variation(3).pick(4), 0);
    }

    #[test]
    fn creative_pick_reaches_every_alternative() {
        for len in 1..=6 {
            let mut seen: Vec<usize> = (0..len)
                .map(|v| ctx(StyleProfile::Creative).with_variation(v).pick(len))
                .collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..len).collect::<Vec<_>>(), "len {len}");
        }
    }

    #[test]
    fn lexical_rule_keeps_case() {
        let rule = TransformationRule::lexical("quick", &["fast", "rapid"]);
        let out = rule
            .apply("Quick thinking, quick action.", &ctx(StyleProfile::Default))
            .unwrap();
        assert_eq!(out, "Fast thinking, fast action.");
        assert!(rule.apply("quickly", &ctx(StyleProfile::Default)).is_none());
    }

    #[test]
    fn lexical_rule_matches_literal_phrase() {
        let rule = TransformationRule::lexical("e.g", &["for example"]);
        let Rewrite::Lexical { matcher, .. } = &rule.rewrite else {
            panic!("lexical constructor built another rewrite");
        };
        assert!(matcher.is_match("fruit, E.g. apples"));
        assert!(!matcher.is_match("fruit, exg apples"));
    }

    #[test]
    fn pattern_rule_first_only() {
        let rule = TransformationRule::pattern("a", RuleFamily::Syntactic, r"(?i)\bcat\b", "dog")
            .first_only();
        let out = rule.apply("Cat and cat.", &ctx(StyleProfile::Default)).unwrap();
        assert_eq!(out, "Dog and cat.");
    }

    #[test]
    fn unchanged_output_is_no_match() {
        let rule = TransformationRule::pattern("same", RuleFamily::Syntactic, r"cat", "cat");
        assert!(rule.apply("cat", &ctx(StyleProfile::Default)).is_none());
    }

    #[test]
    fn gate_blocks_rule() {
        let rule = TransformationRule::pattern("f", RuleFamily::Discourse, r"x", "y")
            .gated(StyleGate::FormalRegister);
        assert!(rule.apply("x", &ctx(StyleProfile::Casual)).is_none());
        assert_eq!(rule.apply("x", &ctx(StyleProfile::Formal)).as_deref(), Some("y"));
    }

    #[test]
    fn drivers() {
        let set = RuleSet::new(vec![
            TransformationRule::pattern("ab", RuleFamily::Correction, r"a", "b"),
            TransformationRule::pattern("bc", RuleFamily::Correction, r"b", "c"),
        ]);
        let c = ctx(StyleProfile::Default);
        let each = set.each_match("ab", &c);
        assert_eq!(each.len(), 2);
        assert_eq!(each[0].text, "bb");
        assert_eq!(each[1].text, "ac");
        let (out, fired) = set.apply_all("a", &c);
        assert_eq!(out, "c");
        assert_eq!(fired, vec!["ab", "bc"]);
    }
}
