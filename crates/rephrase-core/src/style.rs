use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Requested tone of the rewrite.
///
/// Parsing never fails: unknown names fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProfile {
    #[default]
    Default,
    Formal,
    Casual,
    Creative,
    Academic,
}

impl StyleProfile {
    pub const ALL: [StyleProfile; 5] = [
        Self::Default,
        Self::Formal,
        Self::Casual,
        Self::Creative,
        Self::Academic,
    ];

    /// Lenient parse used for free-text style arguments.
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "formal" => Self::Formal,
            "casual" => Self::Casual,
            "creative" => Self::Creative,
            "academic" => Self::Academic,
            _ => Self::Default,
        }
    }

    /// Formal register: contractions are expanded and conservative
    /// alternatives are preferred.
    pub fn is_formal_register(self) -> bool {
        matches!(self, Self::Formal | Self::Academic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Creative => "creative",
            Self::Academic => "academic",
        }
    }
}

impl FromStr for StyleProfile {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for StyleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which styles a rule fires for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleGate {
    Any,
    FormalRegister,
    Only(StyleProfile),
    Except(StyleProfile),
}

impl StyleGate {
    pub fn admits(self, style: StyleProfile) -> bool {
        match self {
            Self::Any => true,
            Self::FormalRegister => style.is_formal_register(),
            Self::Only(s) => s == style,
            Self::Except(s) => s != style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_falls_back_to_default() {
        assert_eq!(StyleProfile::parse_lenient("simple"), StyleProfile::Default);
        assert_eq!(StyleProfile::parse_lenient(""), StyleProfile::Default);
        assert_eq!("pirate".parse::<StyleProfile>(), Ok(StyleProfile::Default));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(StyleProfile::parse_lenient(" Formal "), StyleProfile::Formal);
        assert_eq!(StyleProfile::parse_lenient("CASUAL"), StyleProfile::Casual);
        for style in StyleProfile::ALL {
            assert_eq!(StyleProfile::parse_lenient(style.as_str()), style);
        }
    }

    #[test]
    fn gates() {
        assert!(StyleGate::FormalRegister.admits(StyleProfile::Academic));
        assert!(!StyleGate::FormalRegister.admits(StyleProfile::Casual));
        assert!(StyleGate::Except(StyleProfile::Casual).admits(StyleProfile::Default));
        assert!(!StyleGate::Only(StyleProfile::Creative).admits(StyleProfile::Formal));
    }
}
