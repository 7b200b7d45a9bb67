use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use rephrase_cli::commands::{correct_ops, paraphrase_ops, settings_ops};
use rephrase_cli::http::HttpGenerator;
use rephrase_cli::trace_init::init_tracing;
use rephrase_core::{Engine, ExternalSource, StyleProfile};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "rephrase", about = "Rule-based paraphrasing and grammar correction")]
struct Cli {
    /// Settings TOML replacing the built-in defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// HTTP endpoint of an external candidate generator
    #[arg(long, global = true)]
    external_url: Option<String>,
    /// Timeout for the external generator in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
    /// Debug logging for the engine
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write JSON trace lines to this directory
    #[cfg(feature = "trace")]
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print alternative phrasings, one per line
    Paraphrase {
        text: String,
        /// default, formal, casual, creative or academic
        #[arg(short, long, default_value = "default")]
        style: String,
        /// Number of alternatives
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Correct grammar and spelling
    Correct {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show what every generation stage proposed
    Explain {
        text: String,
        #[arg(short, long, default_value = "default")]
        style: String,
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Process a file (one sentence per line) into JSONL
    Batch {
        input_file: PathBuf,
        output_file: PathBuf,
        #[arg(short, long, default_value = "default")]
        style: String,
        #[arg(short, long)]
        n: Option<usize>,
        /// Run grammar correction instead of paraphrasing
        #[arg(long)]
        correct: bool,
    },
    /// Settings operations
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate { file: PathBuf },
}

fn build_engine(cli: &Cli) -> Engine {
    if let Some(path) = &cli.settings {
        die!(settings_ops::settings_load(path), "Error: {}");
    }
    let mut engine = Engine::new();
    if let Some(ms) = cli.timeout_ms {
        engine = engine.with_timeout(Duration::from_millis(ms));
    }
    if let Some(url) = &cli.external_url {
        let timeout = engine.settings().external.timeout();
        engine = engine.with_external(ExternalSource::new(HttpGenerator::new(url.as_str(), timeout)));
    }
    engine
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "trace")]
    let log_dir = cli.log_dir.as_deref();
    #[cfg(not(feature = "trace"))]
    let log_dir = None;
    let _guard = init_tracing(cli.verbose, log_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Settings { action } => match action {
            SettingsAction::Export => {
                die!(settings_ops::settings_export(&mut out), "Error: {}");
            }
            SettingsAction::Validate { file } => {
                let s = die!(settings_ops::settings_validate(file), "Error: {}");
                println!(
                    "OK: engine.max_alternatives={}, external.timeout_ms={}, scorer.min_viable={}",
                    s.engine.max_alternatives, s.external.timeout_ms, s.scorer.min_viable
                );
            }
        },
        Command::Paraphrase { text, style, n } => {
            let engine = build_engine(&cli);
            let n = n.unwrap_or(engine.settings().engine.default_alternatives);
            die!(
                paraphrase_ops::paraphrase(&engine, text, style, n, &mut out),
                "Error: {}"
            );
        }
        Command::Correct { text, json } => {
            let engine = build_engine(&cli);
            die!(
                correct_ops::correct(&engine, text, *json, &mut out),
                "Error: {}"
            );
        }
        Command::Explain {
            text,
            style,
            n,
            json,
        } => {
            let engine = build_engine(&cli);
            let n = n.unwrap_or(engine.settings().engine.default_alternatives);
            die!(
                paraphrase_ops::explain(&engine, text, style, n, *json, &mut out),
                "Error: {}"
            );
        }
        Command::Batch {
            input_file,
            output_file,
            style,
            n,
            correct,
        } => {
            let engine = build_engine(&cli);
            let opts = paraphrase_ops::BatchOptions {
                style: StyleProfile::parse_lenient(style),
                n: n.unwrap_or(engine.settings().engine.default_alternatives),
                correct: *correct,
            };
            let summary = die!(
                paraphrase_ops::batch(&engine, input_file, output_file, &opts),
                "Error: {}"
            );
            eprintln!(
                "Wrote {} records from {} lines to {}",
                summary.records,
                summary.lines,
                output_file.display()
            );
        }
    }
}
