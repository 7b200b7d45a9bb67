mod scenarios;

use std::thread;
use std::time::Duration;

use crate::external::{ExternalError, ExternalGenerator, ExternalSource};
use crate::style::StyleProfile;

/// Returns a fixed list, ignoring the request.
pub(super) struct Canned(pub Vec<&'static str>);

impl ExternalGenerator for Canned {
    fn generate(&self, _: &str, _: StyleProfile, _: usize) -> Result<Vec<String>, ExternalError> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

pub(super) struct Broken;

impl ExternalGenerator for Broken {
    fn generate(&self, _: &str, _: StyleProfile, _: usize) -> Result<Vec<String>, ExternalError> {
        Err(ExternalError::Failed("connection refused".into()))
    }
}

pub(super) struct Slow;

impl ExternalGenerator for Slow {
    fn generate(&self, text: &str, _: StyleProfile, _: usize) -> Result<Vec<String>, ExternalError> {
        thread::sleep(Duration::from_secs(3));
        Ok(vec![format!("Late: {text}")])
    }
}

pub(super) fn canned(items: Vec<&'static str>) -> ExternalSource {
    ExternalSource::new(Canned(items))
}
