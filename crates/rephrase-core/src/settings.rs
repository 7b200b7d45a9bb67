//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub external: ExternalSettings,
    pub scorer: ScorerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub default_alternatives: usize,
    pub max_alternatives: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalSettings {
    pub timeout_ms: u64,
    pub correction_candidates: usize,
}

impl ExternalSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Weight table for the correction scorer. All adjustments are additive and
/// the final score is clamped to `[0, 1]`. A candidate whose word-count ratio
/// falls outside `[length_ratio_min, length_ratio_max]` scores
/// `baseline - length_penalty` flat.
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerSettings {
    pub baseline: f64,
    pub capitalized_bonus: f64,
    pub terminal_punctuation_bonus: f64,
    pub changed_bonus: f64,
    pub fix_bonus: f64,
    pub usage_bonus: f64,
    pub length_ratio_min: f64,
    pub length_ratio_max: f64,
    pub length_penalty: f64,
    pub anti_pattern_penalty: f64,
    pub min_viable: f64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0.0 || !s.$section.$field.is_finite() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(engine.default_alternatives);
    check_positive!(engine.max_alternatives);
    if s.engine.default_alternatives > s.engine.max_alternatives {
        return Err(SettingsError::InvalidValue {
            field: "engine.default_alternatives".to_string(),
            reason: "must not exceed engine.max_alternatives".to_string(),
        });
    }

    check_positive!(external.timeout_ms);
    check_positive!(external.correction_candidates);

    check_non_negative!(scorer.baseline);
    check_non_negative!(scorer.capitalized_bonus);
    check_non_negative!(scorer.terminal_punctuation_bonus);
    check_non_negative!(scorer.changed_bonus);
    check_non_negative!(scorer.fix_bonus);
    check_non_negative!(scorer.usage_bonus);
    check_non_negative!(scorer.length_ratio_min);
    check_non_negative!(scorer.length_ratio_max);
    check_non_negative!(scorer.length_penalty);
    check_non_negative!(scorer.anti_pattern_penalty);
    check_non_negative!(scorer.min_viable);

    if s.scorer.length_ratio_min >= s.scorer.length_ratio_max {
        return Err(SettingsError::InvalidValue {
            field: "scorer.length_ratio_min".to_string(),
            reason: "must be below scorer.length_ratio_max".to_string(),
        });
    }
    if s.scorer.min_viable > 1.0 {
        return Err(SettingsError::InvalidValue {
            field: "scorer.min_viable".to_string(),
            reason: "must be within [0, 1]".to_string(),
        });
    }

    Ok(())
}
