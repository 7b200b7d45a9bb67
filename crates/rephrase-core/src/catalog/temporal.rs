use crate::rule::{RuleFamily, RuleSet, TransformationRule};

/// Temporal and frequency expressions with ranked rewrites.
pub(super) static TEMPORAL: &[(&str, &[&str])] = &[
    ("every day", &["daily", "on a daily basis"]),
    ("daily", &["every day", "on a daily basis"]),
    ("every week", &["weekly", "on a weekly basis"]),
    ("weekly", &["every week", "once a week"]),
    ("every month", &["monthly", "on a monthly basis"]),
    ("monthly", &["every month", "once a month"]),
    ("every year", &["annually", "yearly"]),
    ("annually", &["every year", "once a year"]),
    ("all the time", &["constantly", "continually"]),
    ("now and then", &["occasionally", "from time to time"]),
    ("from time to time", &["occasionally", "now and then"]),
    ("these days", &["nowadays", "at present"]),
    ("right now", &["at the moment", "immediately"]),
    ("sometimes", &["at times", "on occasion"]),
    ("usually", &["typically", "as a rule"]),
];

/// Words that already anchor a sentence in time; the fallback strategy
/// does not prepend another marker when one is present.
pub(super) static TEMPORAL_MARKERS: &[&str] = &[
    "now", "today", "tonight", "currently", "presently", "tomorrow", "yesterday", "daily",
    "weekly", "monthly", "annually", "always", "never", "often", "sometimes", "usually", "soon",
    "later", "recently", "already", "still", "then", "when", "while", "ago", "every",
];

pub(super) fn build() -> RuleSet {
    RuleSet::new(
        TEMPORAL
            .iter()
            .map(|&(phrase, alternatives)| TransformationRule {
                family: RuleFamily::Temporal,
                ..TransformationRule::lexical(phrase, alternatives)
            })
            .collect(),
    )
}
