use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use rephrase_core::{format_text, Candidate, CorrectionResult, Engine, StyleProfile};

use crate::CliError;

pub fn paraphrase(
    engine: &Engine,
    text: &str,
    style: &str,
    n: usize,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for line in engine.transform(text, style, n)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn explain(
    engine: &Engine,
    text: &str,
    style: &str,
    n: usize,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let result = engine.explain(text, style, n)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write!(out, "{}", format_text(&result))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub style: StyleProfile,
    pub n: usize,
    /// Run grammar correction instead of paraphrasing.
    pub correct: bool,
}

/// One JSONL output line.
#[derive(Serialize)]
#[serde(untagged)]
enum BatchRecord<'a> {
    Paraphrase {
        text: &'a str,
        style: StyleProfile,
        alternatives: Vec<Candidate>,
    },
    Correction {
        text: &'a str,
        correction: CorrectionResult,
    },
}

/// Lines read vs. records written.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines: usize,
    pub records: usize,
}

/// Run every non-empty, non-`#` line of `input` through the engine and
/// write one JSON object per line to `output`.
pub fn batch(
    engine: &Engine,
    input: &Path,
    output: &Path,
    opts: &BatchOptions,
) -> Result<BatchSummary, CliError> {
    let content = fs::read_to_string(input).map_err(CliError::io(input))?;
    let file = fs::File::create(output).map_err(CliError::io(output))?;
    let mut writer = BufWriter::new(file);
    let mut summary = BatchSummary::default();

    for line in content.lines() {
        summary.lines += 1;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let record = if opts.correct {
            BatchRecord::Correction {
                text,
                correction: engine.correct(text)?,
            }
        } else {
            BatchRecord::Paraphrase {
                text,
                style: opts.style,
                alternatives: engine.transform_candidates(text, opts.style, opts.n)?,
            }
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n").map_err(CliError::io(output))?;
        summary.records += 1;
    }
    writer.flush().map_err(CliError::io(output))?;
    info!(lines = summary.lines, records = summary.records, "batch complete");
    Ok(summary)
}
