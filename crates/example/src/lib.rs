//! Example tool definitions compiled with fnschema.
//!
//! [`tools`] declares a few functions with `#[function_schema]`;
//! [`render_all`] compiles them into every dialect.

pub mod logging;
pub mod tools;

pub use logging::{TracingConfig, TracingFormat};

use fnschema::{CompileOptions, Dialect, ToolSchema, tool_schema};

/// Renders every example tool in `dialect`.
#[must_use]
pub fn render_all(dialect: Dialect, strict: bool) -> Vec<ToolSchema> {
    let options = CompileOptions::default()
        .with_dialect(dialect)
        .with_strict(strict);

    tools::signatures()
        .iter()
        .map(|signature| {
            let rendered = tool_schema(signature, &options);
            tracing::info!(tool = %signature.name, dialect = %dialect, strict, "Rendered tool schema");
            rendered
        })
        .collect()
}
