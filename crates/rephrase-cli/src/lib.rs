pub mod commands;
pub mod http;
pub mod trace_init;

use std::io;
use std::path::PathBuf;

use rephrase_core::settings::SettingsError;
use rephrase_core::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CliError::Io { path, source }
    }
}
