//! Compilation options.

use crate::docstring::DocstringStyle;
use crate::format::Dialect;
use serde::{Deserialize, Serialize};

/// Options controlling how a signature is compiled and rendered.
///
/// # Example
///
/// ```
/// use fnschema_core::{CompileOptions, Dialect};
///
/// let options = CompileOptions::default()
///     .with_dialect(Dialect::Anthropic)
///     .with_strict(true);
/// assert_eq!(options.dialect, Dialect::Anthropic);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Output dialect.
    pub dialect: Dialect,
    /// Normalize the parameters object for strict tool-calling modes.
    pub strict: bool,
    /// Describe undocumented parameters as "The {name} parameter" instead of
    /// omitting the `description` key.
    pub placeholder_descriptions: bool,
    /// Docstring layouts to parse for parameter descriptions.
    pub docstring_style: DocstringStyle,
}

impl CompileOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Enables or disables strict-mode normalization.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enables or disables placeholder descriptions.
    #[must_use]
    pub fn with_placeholder_descriptions(mut self, enabled: bool) -> Self {
        self.placeholder_descriptions = enabled;
        self
    }

    /// Sets which docstring layouts are parsed.
    #[must_use]
    pub fn with_docstring_style(mut self, style: DocstringStyle) -> Self {
        self.docstring_style = style;
        self
    }
}
