use std::path::Path;

use tracing_subscriber::EnvFilter;

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "rephrase_core=debug,rephrase_cli=debug"
    } else {
        "warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Keeps the background log writer alive. Hold it until exit.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber. `RUST_LOG` overrides the level.
///
/// With a `log_dir` (trace builds only) events go to
/// `<log_dir>/rephrase-trace.jsonl` as JSON lines, spans logged on close;
/// otherwise human-readable events go to stderr.
pub fn init_tracing(verbose: bool, log_dir: Option<&Path>) -> TraceGuard {
    #[cfg(feature = "trace")]
    if let Some(dir) = log_dir {
        let file_appender = tracing_appender::rolling::never(dir, "rephrase-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter(verbose))
            .try_init();
        return TraceGuard {
            _worker: Some(guard),
        };
    }
    #[cfg(not(feature = "trace"))]
    let _ = log_dir;

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter(verbose))
        .try_init();
    TraceGuard {
        #[cfg(feature = "trace")]
        _worker: None,
    }
}
