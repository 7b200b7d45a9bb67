use std::fs;
use std::io::Write;
use std::path::Path;

use rephrase_core::settings::{self, Settings};

use crate::CliError;

pub fn settings_export(out: &mut impl Write) -> Result<(), CliError> {
    out.write_all(settings::default_toml().as_bytes())?;
    Ok(())
}

pub fn settings_validate(file: &Path) -> Result<Settings, CliError> {
    let content = fs::read_to_string(file).map_err(CliError::io(file))?;
    Ok(settings::parse_settings_toml(&content)?)
}

/// Install `file` as the process-wide settings. Must run before the first
/// engine is built.
pub fn settings_load(file: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(file).map_err(CliError::io(file))?;
    settings::init_custom(content)?;
    Ok(())
}
