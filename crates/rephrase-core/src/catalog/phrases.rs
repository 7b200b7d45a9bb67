use crate::style::StyleProfile;

/// Style-specific connector and qualifier phrases.
#[derive(Debug)]
pub struct StylePhrases {
    /// Joins two input sentences ("A. Furthermore, b.").
    pub transition: &'static str,
    /// Causal/temporal connector injected before a second sentence.
    pub connector: &'static str,
    /// Replaces a split-off "but" clause.
    pub contrast: &'static str,
    /// Replaces a split-off "or" clause.
    pub alternative: &'static str,
    /// Fallback prefixes, in priority order.
    pub hedges: &'static [&'static str],
    /// Inserted before the first recognized adjective.
    pub qualifiers: &'static [&'static str],
    /// Fallback meta-frame; formal register only.
    pub frame: Option<&'static str>,
}

static DEFAULT: StylePhrases = StylePhrases {
    transition: "Additionally,",
    connector: "Then,",
    contrast: "However,",
    alternative: "Alternatively,",
    hedges: &["In fact, ", "Indeed, ", "Notably, "],
    qualifiers: &[],
    frame: None,
};

static FORMAL: StylePhrases = StylePhrases {
    transition: "Furthermore,",
    connector: "Consequently,",
    contrast: "However,",
    alternative: "Alternatively,",
    hedges: &["Perhaps ", "Arguably, ", "Evidently, "],
    qualifiers: &["rather", "quite", "somewhat"],
    frame: Some("It is important to note that "),
};

static CASUAL: StylePhrases = StylePhrases {
    transition: "Also,",
    connector: "So",
    contrast: "But",
    alternative: "Or else,",
    hedges: &["Actually, ", "Honestly, ", "Well, "],
    qualifiers: &[],
    frame: None,
};

static CREATIVE: StylePhrases = StylePhrases {
    transition: "Beyond that,",
    connector: "And then,",
    contrast: "Yet",
    alternative: "Or perhaps",
    hedges: &["Interestingly, ", "Curiously, ", "Remarkably, "],
    qualifiers: &["truly", "wonderfully", "remarkably"],
    frame: None,
};

static ACADEMIC: StylePhrases = StylePhrases {
    transition: "Moreover,",
    connector: "Accordingly,",
    contrast: "Nevertheless,",
    alternative: "Conversely,",
    hedges: &["Arguably, ", "Presumably, ", "Perhaps "],
    qualifiers: &[],
    frame: Some("It should be noted that "),
};

pub(super) fn for_style(style: StyleProfile) -> &'static StylePhrases {
    match style {
        StyleProfile::Default => &DEFAULT,
        StyleProfile::Formal => &FORMAL,
        StyleProfile::Casual => &CASUAL,
        StyleProfile::Creative => &CREATIVE,
        StyleProfile::Academic => &ACADEMIC,
    }
}

/// Leading words that already mark a sentence as a continuation.
pub(super) static CONNECTIVES: &[&str] = &[
    "furthermore", "additionally", "moreover", "however", "also", "then", "so", "consequently",
    "accordingly", "therefore", "thus", "but", "yet", "and", "nevertheless", "alternatively",
    "besides", "still", "meanwhile", "finally",
];
