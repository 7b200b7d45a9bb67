/// Contraction ↔ expansion pairs. Formal register expands every left-hand
/// form; casual style contracts every right-hand form. Longer expansions
/// come first so `will not` contracts before `I will`.
pub(super) static CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("hadn't", "had not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("I'm", "I am"),
    ("I'll", "I will"),
    ("you're", "you are"),
    ("you'll", "you will"),
    ("we're", "we are"),
    ("we'll", "we will"),
    ("they're", "they are"),
    ("they'll", "they will"),
    ("it's", "it is"),
    ("that's", "that is"),
];
