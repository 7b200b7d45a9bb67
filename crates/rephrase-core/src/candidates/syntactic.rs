use crate::catalog::catalog;
use crate::rule::{RuleContext, RuleHit, RuleSet};
use crate::style::StyleProfile;

/// Every rule of `rules` applied to the unmodified source, once per
/// variation index. Rules never compound within one proposal.
pub(super) fn each_rule(rules: &RuleSet, text: &str, style: StyleProfile, k: usize) -> Vec<RuleHit> {
    let mut out: Vec<RuleHit> = Vec::new();
    for variation in 0..k.max(1) {
        let ctx = RuleContext::new(style).with_variation(variation);
        for hit in rules.each_match(text, &ctx) {
            if out.iter().all(|h| h.text != hit.text) {
                out.push(hit);
            }
        }
    }
    out
}

pub(super) fn generate(text: &str, style: StyleProfile, k: usize) -> Vec<RuleHit> {
    each_rule(catalog().syntactic(), text, style, k)
}
