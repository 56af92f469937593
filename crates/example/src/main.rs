//! Prints the example tool definitions.
//!
//! # Usage
//!
//! ```bash
//! schemas [openai|claude] [--strict]
//! ```
//!
//! Without a dialect, both are printed. Logging follows `RUST_LOG` and
//! `FNSCHEMA_LOG_FORMAT` (`pretty`, `compact` or `json`).

use example::{TracingConfig, render_all};
use fnschema::Dialect;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    TracingConfig::from_env().init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let strict = args.iter().any(|arg| arg == "--strict");

    let dialects = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(name) => match name.parse::<Dialect>() {
            Ok(dialect) => vec![dialect],
            Err(err) => {
                tracing::error!(%err, "Cannot render tool schemas");
                return ExitCode::FAILURE;
            }
        },
        None => vec![Dialect::OpenAi, Dialect::Anthropic],
    };

    let mut stdout = std::io::stdout().lock();
    for dialect in dialects {
        let tools: Vec<_> = render_all(dialect, strict)
            .iter()
            .map(fnschema::ToolSchema::to_value)
            .collect();
        let written = serde_json::to_writer_pretty(&mut stdout, &tools)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(stdout));
        if let Err(err) = written {
            tracing::error!(%err, "Failed to write tool schemas");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
