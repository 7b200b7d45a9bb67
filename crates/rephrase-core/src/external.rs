//! External generator contract.
//!
//! A model-backed service may propose raw candidates for `(text, style, k)`.
//! It is optional, may be slow, and may fail; the engine treats every failure
//! the same way and continues with rule-based generation.

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::style::StyleProfile;
use crate::text::collapse_whitespace;

#[derive(Debug, thiserror::Error)]
pub enum ExternalError {
    #[error("external generator unavailable: {0}")]
    Unavailable(String),
    #[error("external generator timed out after {0:?}")]
    Timeout(Duration),
    #[error("external generator failed: {0}")]
    Failed(String),
    #[error("external generator worker disconnected")]
    Disconnected,
}

/// A source of raw candidate strings. May return fewer than `k`, or none.
pub trait ExternalGenerator: Send + Sync {
    fn generate(&self, text: &str, style: StyleProfile, k: usize)
        -> Result<Vec<String>, ExternalError>;
}

/// Constructor-injected external dependency. `Disabled` is a normal state,
/// not a failure.
#[derive(Clone, Default)]
pub enum ExternalSource {
    #[default]
    Disabled,
    Enabled(Arc<dyn ExternalGenerator>),
}

impl ExternalSource {
    pub fn new(generator: impl ExternalGenerator + 'static) -> Self {
        Self::Enabled(Arc::new(generator))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// One attempt, bounded by `timeout`.
    ///
    /// The call runs on its own thread. On timeout the thread is detached and
    /// its eventual result is dropped.
    pub fn call(
        &self,
        text: &str,
        style: StyleProfile,
        k: usize,
        timeout: Duration,
    ) -> Result<Vec<String>, ExternalError> {
        let Self::Enabled(generator) = self else {
            return Err(ExternalError::Unavailable("not configured".into()));
        };
        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(generator);
        let owned = text.to_string();
        thread::Builder::new()
            .name("rephrase-external".into())
            .spawn(move || {
                // The receiver may be gone after a timeout.
                let _ = tx.send(generator.generate(&owned, style, k));
            })
            .map_err(|e| ExternalError::Unavailable(e.to_string()))?;
        match rx.recv_timeout(timeout) {
            Ok(result) => {
                if let Ok(raw) = &result {
                    debug!(count = raw.len(), "external generator returned");
                }
                result
            }
            Err(mpsc::RecvTimeoutError::Timeout) => Err(ExternalError::Timeout(timeout)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(ExternalError::Disconnected),
        }
    }

    /// Like [`ExternalSource::call`], but failure is logged and becomes an
    /// empty list.
    pub fn call_or_empty(
        &self,
        text: &str,
        style: StyleProfile,
        k: usize,
        timeout: Duration,
    ) -> Vec<String> {
        if !self.is_enabled() {
            return Vec::new();
        }
        match self.call(text, style, k, timeout) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "external generator failed, continuing with rules");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for ExternalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Enabled(_) => f.write_str("Enabled(..)"),
        }
    }
}

/// Echoed instruction prefixes a model may put before its answer.
static ECHO_PREFIXES: &[&str] = &[
    "here is the corrected sentence:",
    "the corrected sentence is:",
    "corrected sentence:",
    "grammar corrected:",
    "fixed sentence:",
    "corrected:",
    "fixed:",
    "paraphrase:",
    "paraphrased:",
    "rewritten:",
    "answer:",
    "response:",
    "result:",
];

/// Strip echoed prefixes, collapse whitespace and unquote a fully-quoted
/// answer. Returns `None` when nothing is left.
pub fn clean_candidate(raw: &str) -> Option<String> {
    let mut cleaned = collapse_whitespace(raw);
    loop {
        let lower = cleaned.to_lowercase();
        let Some(prefix) = ECHO_PREFIXES.iter().find(|p| lower.starts_with(*p)) else {
            break;
        };
        let Some(rest) = cleaned.get(prefix.len()..) else {
            break;
        };
        cleaned = rest.trim().to_string();
    }
    if cleaned.len() >= 2 && cleaned.starts_with('"') && cleaned.ends_with('"') {
        cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
    }
    (!cleaned.is_empty()).then_some(cleaned)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    struct Fixed(Vec<&'static str>);

    impl ExternalGenerator for Fixed {
        fn generate(&self, _: &str, _: StyleProfile, k: usize) -> Result<Vec<String>, ExternalError> {
            Ok(self.0.iter().take(k).map(|s| s.to_string()).collect())
        }
    }

    struct Failing;

    impl ExternalGenerator for Failing {
        fn generate(&self, _: &str, _: StyleProfile, _: usize) -> Result<Vec<String>, ExternalError> {
            Err(ExternalError::Failed("model exploded".into()))
        }
    }

    struct Sleeping(Duration);

    impl ExternalGenerator for Sleeping {
        fn generate(&self, _: &str, _: StyleProfile, _: usize) -> Result<Vec<String>, ExternalError> {
            thread::sleep(self.0);
            Ok(vec!["too late".into()])
        }
    }

    #[test]
    fn disabled_is_unavailable() {
        let source = ExternalSource::Disabled;
        let err = source
            .call("x", StyleProfile::Default, 1, Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ExternalError::Unavailable(_)));
        assert!(source
            .call_or_empty("x", StyleProfile::Default, 1, Duration::from_secs(1))
            .is_empty());
    }

    #[test]
    fn returns_generator_output() {
        let source = ExternalSource::new(Fixed(vec!["a", "b", "c"]));
        let out = source
            .call("x", StyleProfile::Default, 2, Duration::from_secs(5))
            .unwrap();
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn failure_becomes_empty() {
        let source = ExternalSource::new(Failing);
        assert!(source
            .call_or_empty("x", StyleProfile::Default, 2, Duration::from_secs(5))
            .is_empty());
    }

    #[test]
    fn slow_generator_times_out() {
        let source = ExternalSource::new(Sleeping(Duration::from_secs(2)));
        let start = Instant::now();
        let err = source
            .call("x", StyleProfile::Default, 2, Duration::from_millis(50))
            .unwrap_err();
        assert!(matches!(err, ExternalError::Timeout(_)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn cleans_echoed_prefixes() {
        assert_eq!(
            clean_candidate("Corrected:   \"The cat is  happy.\"").as_deref(),
            Some("The cat is happy.")
        );
        assert_eq!(
            clean_candidate("Answer: Paraphrase: Hi there.").as_deref(),
            Some("Hi there.")
        );
        assert!(clean_candidate("  Result:  ").is_none());
        assert!(clean_candidate("\"\"").is_none());
    }
}
