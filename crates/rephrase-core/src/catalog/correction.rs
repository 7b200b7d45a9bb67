//! Rule-based grammar correction families.
//!
//! Families run in `CorrectionFamily::ALL` order and compound: each one sees
//! the output of the previous one.

use regex::Regex;

use crate::rule::{compile, RuleContext, RuleFamily, RuleSet, TransformationRule};
use crate::text::{capitalize_sentences, ensure_terminal, split_token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionFamily {
    Capitalization,
    SentenceCapitalization,
    Spelling,
    WordChoice,
    Contraction,
    Agreement,
    Tense,
    DoubleNegative,
    Punctuation,
    SentenceEnding,
}

impl CorrectionFamily {
    pub const ALL: [CorrectionFamily; 10] = [
        Self::Capitalization,
        Self::SentenceCapitalization,
        Self::Spelling,
        Self::WordChoice,
        Self::Contraction,
        Self::Agreement,
        Self::Tense,
        Self::DoubleNegative,
        Self::Punctuation,
        Self::SentenceEnding,
    ];

    /// Value of the `type` field of a correction entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Capitalization => "Capitalization",
            Self::SentenceCapitalization => "Sentence Capitalization",
            Self::Spelling => "Spelling",
            Self::WordChoice => "Word Choice",
            Self::Contraction => "Contraction",
            Self::Agreement => "Subject-Verb Agreement",
            Self::Tense => "Verb Tense",
            Self::DoubleNegative => "Double Negative",
            Self::Punctuation => "Punctuation",
            Self::SentenceEnding => "Sentence Ending",
        }
    }

    pub fn confidence(self) -> f64 {
        match self {
            Self::Capitalization | Self::SentenceCapitalization | Self::Agreement => 0.95,
            Self::Spelling | Self::WordChoice | Self::Contraction => 0.9,
            Self::DoubleNegative | Self::SentenceEnding => 0.9,
            Self::Tense => 0.85,
            Self::Punctuation => 0.8,
        }
    }

    /// `(original, corrected)` audit labels used when the edit changed the
    /// word count and no word-level pairing is possible.
    pub fn summary(self) -> (&'static str, &'static str) {
        match self {
            Self::Capitalization => ("mixed case", "fixed case"),
            Self::SentenceCapitalization => ("lowercase start", "capitalized start"),
            Self::Spelling => ("misspelling", "fixed spelling"),
            Self::WordChoice => ("word confusion", "fixed word choice"),
            Self::Contraction => ("missing apostrophe", "fixed contraction"),
            Self::Agreement => ("subject-verb disagreement", "fixed agreement"),
            Self::Tense => ("tense inconsistency", "fixed tense"),
            Self::DoubleNegative => ("double negative", "single negative"),
            Self::Punctuation => ("spacing issues", "fixed spacing"),
            Self::SentenceEnding => ("missing punctuation", "added period"),
        }
    }
}

pub(super) static MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("hte", "the"),
    ("adn", "and"),
    ("yuo", "you"),
    ("taht", "that"),
    ("wich", "which"),
    ("showe", "show"),
    ("recieve", "receive"),
    ("beleive", "believe"),
    ("definately", "definitely"),
    ("seperate", "separate"),
    ("wierd", "weird"),
    ("occured", "occurred"),
    ("untill", "until"),
    ("alot", "a lot"),
    ("becuase", "because"),
    ("freind", "friend"),
    ("goverment", "government"),
    ("tommorow", "tomorrow"),
    ("truely", "truly"),
];

pub(super) static CONTRACTION_FIXES: &[(&str, &str)] = &[
    ("dont", "don't"),
    ("doesnt", "doesn't"),
    ("didnt", "didn't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("couldnt", "couldn't"),
    ("shouldnt", "shouldn't"),
    ("wouldnt", "wouldn't"),
    ("isnt", "isn't"),
    ("arent", "aren't"),
    ("wasnt", "wasn't"),
    ("werent", "weren't"),
    ("hasnt", "hasn't"),
    ("havent", "haven't"),
    ("hadnt", "hadn't"),
    ("youre", "you're"),
    ("theyre", "they're"),
    ("im", "I'm"),
    ("ive", "I've"),
    ("thats", "that's"),
];

/// Agreement fixes that can be checked by substring containment.
pub(super) static AGREEMENT_FIXES: &[(&str, &str)] = &[
    ("people is", "people are"),
    ("we was", "we were"),
    ("they was", "they were"),
    ("you was", "you were"),
    ("i are", "i am"),
    ("he are", "he is"),
    ("she are", "she is"),
    ("it are", "it is"),
    ("he don't", "he doesn't"),
    ("she don't", "she doesn't"),
    ("it don't", "it doesn't"),
];

/// Nouns that almost always follow a possessive.
const POSSESSED: &str = "face|name|car|house|book|phone|problem|fault|turn|money|bag|clothes|hair|eyes|hands|feet|dog|cat|family|friend|job|work|idea|opinion|choice";

/// Constructions that are wrong wherever they appear in a candidate.
pub(super) fn anti_patterns() -> Vec<Regex> {
    [
        format!(r"(?i)\byou're\s+(?:{POSSESSED})\b"),
        r"(?i)\bthere\s+(?:car|house|book|problem|family|dog|cat)\b".to_string(),
        r"(?i)\bit's\s+(?:color|size|name|place|smell|taste|texture)\b".to_string(),
        r"(?i)\b(?:we|they|you)\s+was\b".to_string(),
        r"(?i)\bI\s+are\b".to_string(),
        r"(?i)\b(?:he|she|it)\s+don't\b".to_string(),
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
}

/// Constructions that indicate a correct possessive.
pub(super) fn good_usage() -> Vec<Regex> {
    [
        format!(r"(?i)\byour\s+(?:{POSSESSED})\b"),
        r"(?i)\btheir\s+(?:car|house|book|problem|family|dog|cat)\b".to_string(),
        r"(?i)\bits\s+(?:color|size|name|place|smell|taste|texture)\b".to_string(),
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
}

/// Whole-word replacements with a single alternative each.
fn word_table(table: &'static [(&'static str, &'static str)]) -> Vec<TransformationRule> {
    table
        .iter()
        .map(|(wrong, right)| TransformationRule {
            family: RuleFamily::Correction,
            ..TransformationRule::lexical(*wrong, std::slice::from_ref(right))
        })
        .collect()
}

fn fix(name: &'static str, matcher: &str, replacement: &'static str) -> TransformationRule {
    TransformationRule::pattern(name, RuleFamily::Correction, matcher, replacement)
}

pub(super) fn build() -> Vec<(CorrectionFamily, RuleSet)> {
    CorrectionFamily::ALL
        .iter()
        .map(|&family| (family, build_family(family)))
        .collect()
}

fn build_family(family: CorrectionFamily) -> RuleSet {
    let rules = match family {
        CorrectionFamily::Capitalization => vec![TransformationRule::custom(
            "mixed_case",
            RuleFamily::Correction,
            fix_mixed_case,
        )],
        CorrectionFamily::SentenceCapitalization => vec![TransformationRule::custom(
            "sentence_start",
            RuleFamily::Correction,
            |text, _| Some(capitalize_sentences(text)),
        )],
        CorrectionFamily::Spelling => word_table(MISSPELLINGS),
        CorrectionFamily::WordChoice => vec![
            fix("youre_possessive", &format!(r"(?i)\byoure\s+({POSSESSED})\b"), "your $1"),
            fix("youre_apostrophe_possessive", &format!(r"(?i)\byou're\s+({POSSESSED})\b"), "your $1"),
            fix("there_possessive", r"(?i)\bthere\s+(car|house|book|problem|family|dog|cat)\b", "their $1"),
            fix("their_progressive", r"(?i)\btheir\s+(going|coming|here)\b", "they're $1"),
            fix("its_progressive", r"(?i)\bits\s+(going|coming|time)\b", "it's $1"),
            fix("its_possessive", r"(?i)\bit's\s+(color|size|name|place|smell|taste|texture)\b", "its $1"),
            fix("too_degree", r"(?i)\bto\s+(much|late|early|big|small)\b", "too $1"),
            fix("to_infinitive", r"(?i)\btoo\s+(go|come|see|the\s+store)\b", "to $1"),
            fix("than_comparative", r"(?i)\b(better|worse|bigger|smaller|more|less|rather)\s+then\b", "$1 than"),
            fix("except_for", r"(?i)\baccept\s+(for)\b", "except $1"),
            fix("accept_offer", r"(?i)\bexcept\s+(the\s+offer|this\s+gift)\b", "accept $1"),
            fix("affect_object", r"(?i)\beffect\s+(me|you|him|her|them|us)\b", "affect $1"),
            fix("an_effect", r"(?i)\ban\s+affect\b", "an effect"),
            fix("lose_object", r"(?i)\bloose\s+(the\s+game|weight|money)\b", "lose $1"),
            fix("loose_fitting", r"(?i)\blose\s+(fitting|clothing)\b", "loose $1"),
        ],
        CorrectionFamily::Contraction => word_table(CONTRACTION_FIXES),
        CorrectionFamily::Agreement => vec![
            fix("me_and_my_x_was", r"(?i)\bme and my (\w+) was\b", "my $1 and I were"),
            fix("me_and_x_was", r"(?i)\bme and (\w+) was\b", "$1 and I were"),
            fix("people_is", r"(?i)\bpeople\s+is\b", "people are"),
            fix("plural_was", r"(?i)\b(we|they|you)\s+was\b", "$1 were"),
            fix("i_are", r"\bI\s+are\b", "I am"),
            fix("singular_are", r"(?i)\b(he|she|it)\s+are\b", "$1 is"),
            fix("singular_dont", r"(?i)\b(he|she|it)\s+don't\b", "$1 doesn't"),
            fix("quantified_is", r"(?i)\b(many|few|several)\s+(\w+(?:\s+\w+)?)\s+is\b", "$1 $2 are"),
        ],
        CorrectionFamily::Tense => vec![
            fix("have_ed_yesterday", r"(?i)\bhave\s+(\w+ed)\s+yesterday\b", "$1 yesterday"),
            fix("yesterday_will_be", r"(?i)\b(yesterday,?)\s+I\s+will\s+be\b", "$1 I was"),
            fix("tomorrow_was", r"(?i)\b(tomorrow,?)\s+I\s+was\b", "$1 I will be"),
        ],
        CorrectionFamily::DoubleNegative => vec![TransformationRule::custom(
            "negated_negative",
            RuleFamily::Correction,
            fix_double_negative,
        )],
        CorrectionFamily::Punctuation => vec![
            fix("space_before_mark", r"\s+([,.!?;:])", "$1"),
            fix("repeated_space", r"[ \t]{2,}", " "),
        ],
        CorrectionFamily::SentenceEnding => vec![TransformationRule::custom(
            "terminal_period",
            RuleFamily::Correction,
            |text, _| Some(ensure_terminal(text)),
        )],
    };
    RuleSet::new(rules)
}

/// "SHow" → "Show". All-caps words (acronyms) are left alone.
fn fix_mixed_case(text: &str, _ctx: &RuleContext) -> Option<String> {
    let mut changed = false;
    let words: Vec<String> = text
        .split(' ')
        .map(|token| {
            let (lead, core, trail) = split_token(token);
            let mut chars = core.chars();
            let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
                return token.to_string();
            };
            let all_upper = core
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase);
            if first.is_uppercase() && second.is_uppercase() && !all_upper {
                changed = true;
                let rest: String = core[first.len_utf8()..].to_lowercase();
                format!("{lead}{first}{rest}{trail}")
            } else {
                token.to_string()
            }
        })
        .collect();
    changed.then(|| words.join(" "))
}

static DOUBLE_NEGATIVES: &[(&str, &str)] = &[
    ("nowhere", "anywhere"),
    ("nothing", "anything"),
    ("nobody", "anybody"),
    ("no one", "anyone"),
    ("never no", "never any"),
];

/// Negated verbs that make a following negative word a double negative.
pub(super) fn negation() -> Regex {
    compile(
        r"(?i)\b(?:don't|doesn't|didn't|can't|cannot|won't|couldn't|wouldn't|shouldn't|isn't|aren't|wasn't|weren't|ain't|not)\b",
    )
}

pub(super) fn double_negatives() -> RuleSet {
    RuleSet::new(word_table(DOUBLE_NEGATIVES))
}

/// "I can't find it nowhere." → "I can't find it anywhere."
fn fix_double_negative(text: &str, ctx: &RuleContext) -> Option<String> {
    let catalog = super::catalog();
    let at = catalog.negation.find(text)?.end();
    let (head, tail) = text.split_at(at);
    let (fixed, fired) = catalog.double_negatives.apply_all(tail, ctx);
    (!fired.is_empty()).then(|| format!("{head}{fixed}"))
}
