use crate::catalog::catalog;
use crate::rule::RuleHit;
use crate::style::StyleProfile;

use super::syntactic::each_rule;

pub(super) fn generate(text: &str, style: StyleProfile, k: usize) -> Vec<RuleHit> {
    each_rule(catalog().discourse(), text, style, k)
}
