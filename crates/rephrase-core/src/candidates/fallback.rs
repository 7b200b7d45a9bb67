use crate::catalog::catalog;
use crate::rule::RuleHit;
use crate::style::StyleProfile;
use crate::text::decapitalize_leading;

/// Backstop proposals in priority order. The engine offers them one by one
/// until the pool is full, so later entries are only used when earlier ones
/// were rejected or the deficit is larger than one.
///
/// The first entry always prefixes a hedge, which makes it distinct from any
/// non-empty source that does not already open with that hedge.
pub(super) fn generate(text: &str, style: StyleProfile) -> Vec<RuleHit> {
    let catalog = catalog();
    let phrases = catalog.phrases(style);
    let body = decapitalize_leading(text.trim());
    let mut out = Vec::new();

    let mut hedges = phrases.hedges.iter();
    if let Some(hedge) = hedges.next() {
        out.push(hit("hedge", format!("{hedge}{body}")));
    }
    if let Some(frame) = phrases.frame {
        out.push(hit("frame", format!("{frame}{body}")));
    }
    if let Some(perturbed) = perturb_aspect(text, catalog.has_temporal_marker(text)) {
        out.push(hit("aspect", perturbed));
    }
    for hedge in hedges {
        out.push(hit("hedge", format!("{hedge}{body}")));
    }
    out
}

fn hit(rule: &'static str, text: String) -> RuleHit {
    RuleHit { rule, text }
}

/// " is " → " is currently ", else prepend "Currently, " when the sentence is
/// not already anchored in time.
fn perturb_aspect(text: &str, has_marker: bool) -> Option<String> {
    if has_marker {
        return None;
    }
    if text.contains(" is ") {
        return Some(text.replacen(" is ", " is currently ", 1));
    }
    Some(format!("Currently, {}", decapitalize_leading(text.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formal_priority_order() {
        let hits = generate("Go.", StyleProfile::Formal);
        let texts: Vec<&str> = hits.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts[0], "Perhaps go.");
        assert_eq!(texts[1], "It is important to note that go.");
        assert_eq!(texts[2], "Currently, go.");
    }

    #[test]
    fn casual_has_no_frame() {
        let hits = generate("The sky is blue.", StyleProfile::Casual);
        assert_eq!(hits[0].text, "Actually, the sky is blue.");
        assert_eq!(hits[1].text, "The sky is currently blue.");
        assert!(hits.iter().all(|h| h.rule != "frame"));
    }

    #[test]
    fn temporal_marker_suppresses_aspect() {
        let hits = generate("We meet today.", StyleProfile::Default);
        assert!(hits.iter().all(|h| h.rule != "aspect"));
        assert!(!hits.is_empty());
    }
}
