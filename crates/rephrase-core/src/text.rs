//! Word- and sentence-level helpers for English text.

/// Sentence-final punctuation.
pub fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Dedup key: lowercase with whitespace runs collapsed to a single space.
pub fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse whitespace runs and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Uppercase the first alphabetic character if it is lowercase.
/// Idempotent: a second call is a no-op.
pub fn capitalize_first(s: &str) -> String {
    let Some((idx, c)) = s.char_indices().find(|(_, c)| c.is_alphabetic()) else {
        return s.to_string();
    };
    if !c.is_lowercase() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..idx]);
    out.extend(c.to_uppercase());
    out.push_str(&s[idx + c.len_utf8()..]);
    out
}

/// Capitalize the start of the text and every word that follows a
/// sentence-final punctuation mark and a space.
pub fn capitalize_sentences(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_start = true;
    let mut prev_terminal = false;
    for c in s.chars() {
        if at_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            at_start = false;
            prev_terminal = false;
            continue;
        }
        if c.is_whitespace() {
            if prev_terminal {
                at_start = true;
            }
        } else if c.is_alphanumeric() {
            at_start = false;
        }
        prev_terminal = is_terminal(c) || (prev_terminal && c.is_whitespace());
        out.push(c);
    }
    out
}

/// Lowercase the leading word so the text can follow a prefix phrase.
/// `I`, its contractions, and all-caps acronyms are left untouched.
pub fn decapitalize_leading(s: &str) -> String {
    let trimmed = s.trim_start();
    let first_word: &str = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or("");
    let letters: Vec<char> = first_word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return trimmed.to_string();
    }
    let is_pronoun_i = first_word == "I" || first_word.starts_with("I'");
    let is_acronym = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    let has_inner_caps = letters.iter().skip(1).any(|c| c.is_uppercase());
    if is_pronoun_i || is_acronym || has_inner_caps {
        return trimmed.to_string();
    }
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a token into leading punctuation, the word core, and trailing
/// punctuation. Apostrophes and hyphens inside the word are kept.
pub fn split_token(token: &str) -> (&str, &str, &str) {
    let start = token
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(start);
    (&token[..start], &token[start..end], &token[end..])
}

/// Match the case shape of `model` onto `replacement`: a capitalized model
/// capitalizes the replacement, an all-caps model uppercases it.
pub fn match_case(model: &str, replacement: &str) -> String {
    let letters: Vec<char> = model.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }
    if letters.first().is_some_and(|c| c.is_uppercase()) {
        return capitalize_first(replacement);
    }
    replacement.to_string()
}

/// Split text into sentences at `. `, `! `, `? ` boundaries, keeping the
/// terminal punctuation with each sentence.
pub fn split_sentences(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    for (pos, &(i, c)) in chars.iter().enumerate() {
        if is_terminal(c) {
            if let Some(&(_, next)) = chars.get(pos + 1) {
                if next.is_whitespace() {
                    let sentence = s[start..i + c.len_utf8()].trim();
                    if !sentence.is_empty() {
                        out.push(sentence);
                    }
                    start = i + c.len_utf8();
                }
            }
        }
    }
    let tail = s[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}

/// Ensure the text ends with sentence-final punctuation.
pub fn ensure_terminal(s: &str) -> String {
    let trimmed = s.trim_end();
    match trimmed.chars().last() {
        Some(c) if is_terminal(c) => trimmed.to_string(),
        Some(_) => format!("{trimmed}."),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_ignores_case_and_spacing() {
        assert_eq!(normalize_key("  Hello   There. "), "hello there.");
        assert_eq!(normalize_key("HELLO there."), normalize_key("hello  there."));
    }

    #[test]
    fn capitalize_first_is_idempotent() {
        let once = capitalize_first("\"go home.\"");
        assert_eq!(once, "\"Go home.\"");
        assert_eq!(capitalize_first(&once), once);
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("123"), "123");
    }

    #[test]
    fn capitalize_sentences_after_terminal() {
        assert_eq!(
            capitalize_sentences("i like tea. it is warm! really? yes"),
            "I like tea. It is warm! Really? Yes"
        );
        assert_eq!(capitalize_sentences("version 2.5 works"), "Version 2.5 works");
    }

    #[test]
    fn decapitalize_leading_word() {
        assert_eq!(decapitalize_leading("Go."), "go.");
        assert_eq!(decapitalize_leading("The cat sat."), "the cat sat.");
        assert_eq!(decapitalize_leading("I think so."), "I think so.");
        assert_eq!(decapitalize_leading("I'm here."), "I'm here.");
        assert_eq!(decapitalize_leading("NASA launched."), "NASA launched.");
        assert_eq!(decapitalize_leading("iPhone sales."), "iPhone sales.");
    }

    #[test]
    fn split_token_parts() {
        assert_eq!(split_token("daily."), ("", "daily", "."));
        assert_eq!(split_token("\"Hello,"), ("\"", "Hello", ","));
        assert_eq!(split_token("don't"), ("", "don't", ""));
        assert_eq!(split_token("..."), ("...", "", ""));
    }

    #[test]
    fn match_case_shapes() {
        assert_eq!(match_case("Quick", "fast"), "Fast");
        assert_eq!(match_case("QUICK", "fast"), "FAST");
        assert_eq!(match_case("quick", "fast"), "fast");
    }

    #[test]
    fn sentences_and_terminals() {
        assert_eq!(
            split_sentences("It rained. We stayed in! Fine"),
            vec!["It rained.", "We stayed in!", "Fine"]
        );
        assert_eq!(split_sentences("Version 2.5 shipped."), vec!["Version 2.5 shipped."]);
        assert_eq!(ensure_terminal("go"), "go.");
        assert_eq!(ensure_terminal("go?"), "go?");
    }
}
