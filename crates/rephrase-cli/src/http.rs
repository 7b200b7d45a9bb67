//! External generator backed by an HTTP endpoint.
//!
//! Request: `POST <url>` with `{"text": ..., "style": ..., "k": ...}`.
//! Reply: `{"candidates": [...]}` or a bare JSON array of strings.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use rephrase_core::{ExternalError, ExternalGenerator, StyleProfile};

pub struct HttpGenerator {
    url: String,
    timeout: Duration,
    agent: ureq::Agent,
}

impl HttpGenerator {
    /// `timeout` bounds the whole exchange so a detached worker does not
    /// outlive the request by much.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            url: url.into(),
            timeout,
            agent,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Reply {
    Wrapped { candidates: Vec<String> },
    Bare(Vec<String>),
}

/// Decode a reply body into candidate strings.
pub fn parse_reply(body: &str) -> Result<Vec<String>, ExternalError> {
    match serde_json::from_str::<Reply>(body) {
        Ok(Reply::Wrapped { candidates }) | Ok(Reply::Bare(candidates)) => Ok(candidates),
        Err(e) => Err(ExternalError::Failed(format!("malformed reply: {e}"))),
    }
}

impl ExternalGenerator for HttpGenerator {
    fn generate(
        &self,
        text: &str,
        style: StyleProfile,
        k: usize,
    ) -> Result<Vec<String>, ExternalError> {
        let request = serde_json::json!({
            "text": text,
            "style": style.as_str(),
            "k": k,
        })
        .to_string();

        let body = self
            .agent
            .post(&self.url)
            .header("Content-Type", "application/json")
            .send(request)
            .map_err(|e| self.map_err(e))?
            .into_body()
            .read_to_string()
            .map_err(|e| self.map_err(e))?;

        let candidates = parse_reply(&body)?;
        debug!(url = %self.url, count = candidates.len(), "external reply");
        Ok(candidates)
    }
}

impl HttpGenerator {
    fn map_err(&self, e: ureq::Error) -> ExternalError {
        match e {
            ureq::Error::Timeout(_) => ExternalError::Timeout(self.timeout),
            ureq::Error::StatusCode(code) => {
                ExternalError::Failed(format!("{}: HTTP {code}", self.url))
            }
            ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => {
                ExternalError::Unavailable(format!("{}: {e}", self.url))
            }
            other => ExternalError::Failed(format!("{}: {other}", self.url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_reply() {
        let got = parse_reply(r#"{"candidates": ["One.", "Two."]}"#).unwrap();
        assert_eq!(got, vec!["One.", "Two."]);
    }

    #[test]
    fn parses_bare_array() {
        let got = parse_reply(r#"["Only one."]"#).unwrap();
        assert_eq!(got, vec!["Only one."]);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(
            parse_reply(r#"{"text": "nope"}"#),
            Err(ExternalError::Failed(_))
        ));
        assert!(matches!(parse_reply("not json"), Err(ExternalError::Failed(_))));
    }

    #[test]
    fn unreachable_endpoint_is_an_error() {
        let generator = HttpGenerator::new("http://127.0.0.1:1/paraphrase", Duration::from_secs(2));
        assert!(generator
            .generate("Hello there.", StyleProfile::Default, 2)
            .is_err());
    }
}
