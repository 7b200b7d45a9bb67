use crate::catalog::catalog;
use crate::rule::{RuleContext, RuleFamily, RuleHit};
use crate::style::StyleProfile;
use crate::text::{capitalize_first, match_case, split_token};

/// Substitute every catalog word in `text` with its ranked alternative for
/// `ctx`. Returns `None` when no token has an entry.
fn substitute(text: &str, ctx: &RuleContext) -> Option<String> {
    let catalog = catalog();
    let mut hit = false;
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            let (lead, core, trail) = split_token(token);
            match catalog.lookup(core, RuleFamily::Lexical) {
                Some(alternatives) if !alternatives.is_empty() => {
                    hit = true;
                    let pick = alternatives[ctx.pick(alternatives.len())];
                    format!("{lead}{}{trail}", match_case(core, pick))
                }
                _ => token.to_string(),
            }
        })
        .collect();
    hit.then(|| capitalize_first(&tokens.join(" ")))
}

/// One variant per variation index `0..k`, skipping repeats and variants
/// identical to the source.
pub(super) fn generate(text: &str, style: StyleProfile, k: usize) -> Vec<RuleHit> {
    let mut out: Vec<RuleHit> = Vec::new();
    for variation in 0..k {
        let ctx = RuleContext::new(style).with_variation(variation);
        let Some(variant) = substitute(text, &ctx) else {
            break;
        };
        if variant != text && out.iter().all(|h| h.text != variant) {
            out.push(RuleHit {
                rule: "lexical",
                text: variant,
            });
        }
    }
    out
}
