use std::io::Write;

use rephrase_core::Engine;

use crate::CliError;

/// Correct `text`. Plain output is the corrected text followed by one
/// indented line per applied correction.
pub fn correct(engine: &Engine, text: &str, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let result = engine.correct(text)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(());
    }
    writeln!(out, "{}", result.corrected_text)?;
    for c in &result.corrections {
        writeln!(
            out,
            "  {:<24} {} -> {} ({:.2})",
            c.kind, c.original, c.corrected, c.confidence
        )?;
    }
    writeln!(out, "confidence: {:.2}", result.confidence)?;
    Ok(())
}
