//! Tracing subscriber setup for the CLI
//!
//! Events go to stderr so `--json` output on stdout stays machine-readable.

use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

/// Filter directive: `RUST_LOG` when set, else derived from verbosity
pub fn filter_directive(rust_log: Option<String>, verbosity: Verbosity) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbosity == Verbosity::Quiet => "error".to_string(),
        _ => format!("warn,slugmap={}", verbosity.filter_directive()),
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbosity: Verbosity) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), verbosity);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(false),
    );

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already initialised");
    }
}
