use crate::catalog::catalog;
use crate::rule::{RuleContext, RuleHit};
use crate::style::StyleProfile;

/// Contracting one form can expose another ("it is not" → "it isn't"), so
/// casual normalization repeats until nothing changes.
const MAX_PASSES: usize = 4;

/// Apply the style's contraction policy: formal register expands every
/// mapped contraction, casual contracts every mapped expansion, other styles
/// leave the text alone.
pub fn normalize(text: &str, style: StyleProfile) -> String {
    let Some(rules) = catalog().style_grammar(style) else {
        return text.to_string();
    };
    let ctx = RuleContext::new(style);
    let mut current = text.to_string();
    for _ in 0..MAX_PASSES {
        let (next, fired) = rules.apply_all(&current, &ctx);
        current = next;
        if fired.is_empty() {
            break;
        }
    }
    current
}

/// The normalized source, when normalization changed it.
pub(super) fn generate(text: &str, style: StyleProfile) -> Vec<RuleHit> {
    let normalized = normalize(text, style);
    if normalized == text {
        return Vec::new();
    }
    vec![RuleHit {
        rule: "style_grammar",
        text: normalized,
    }]
}
