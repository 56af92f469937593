//! Docstring extraction.
//!
//! Splits raw documentation text into a summary line and a
//! `name -> description` map. Each supported layout is a separate
//! [`ParamSection`] strategy:
//!
//! - [`GoogleArgs`]: an `Args:` block of `name: text` lines.
//! - [`SphinxTags`]: `:param name: text` and `@param name text` tags.
//! - [`RustdocArguments`]: a `# Arguments` heading with `` * `name` - text `` items.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static GOOGLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Args|Arguments|Parameters|Params|Keyword Args|Keyword Arguments):\s*$")
        .expect("valid regex")
});

static GOOGLE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*{0,2}(?P<name>[A-Za-z_]\w*)\s*(?:\([^)]*\))?\s*:(?:\s+(?P<desc>.*))?$")
        .expect("valid regex")
});

static SPHINX_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^:(?:param|parameter|arg|argument|key|keyword)\s+(?:[^:]+?\s+)?\*{0,2}(?P<name>[A-Za-z_]\w*)\s*:(?:\s+(?P<desc>.*))?$",
    )
    .expect("valid regex")
});

static EPYDOC_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^@(?:param|parameter|arg|argument)\s+\*{0,2}(?P<name>[A-Za-z_]\w*)\s*:?(?:\s+(?P<desc>.*))?$",
    )
    .expect("valid regex")
});

static RUSTDOC_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+\s*(?:Arguments|Parameters|Params|Args)\s*$").expect("valid regex")
});

static RUSTDOC_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*-]\s+`?(?P<name>[A-Za-z_]\w*)`?\s*(?:[-:]\s*(?P<desc>.*))?$")
        .expect("valid regex")
});

/// Which parameter layouts to look for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocstringStyle {
    /// Try every layout; the first entry found for a name wins.
    #[default]
    Auto,
    /// Google-style `Args:` blocks only.
    Google,
    /// Sphinx-style `:param:` tags only.
    Sphinx,
    /// Rustdoc `# Arguments` lists only.
    Rustdoc,
}

impl DocstringStyle {
    fn sections(self) -> &'static [&'static dyn ParamSection] {
        match self {
            Self::Auto => &[&GoogleArgs, &SphinxTags, &RustdocArguments],
            Self::Google => &[&GoogleArgs],
            Self::Sphinx => &[&SphinxTags],
            Self::Rustdoc => &[&RustdocArguments],
        }
    }
}

/// A strategy that finds per-parameter descriptions in docstring lines.
pub trait ParamSection: Sync {
    /// Appends every `(name, description)` pair found in `lines`.
    fn extract(&self, lines: &[&str], out: &mut Vec<(String, String)>);
}

/// Google-style `Args:` blocks.
///
/// ```text
/// Args:
///     city: The city to look up.
///     unit (str): Temperature unit,
///         either celsius or fahrenheit.
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleArgs;

impl ParamSection for GoogleArgs {
    fn extract(&self, lines: &[&str], out: &mut Vec<(String, String)>) {
        let mut index = 0;
        while index < lines.len() {
            let header = lines[index];
            index += 1;
            if !GOOGLE_HEADER.is_match(header.trim()) {
                continue;
            }

            let header_indent = indent_of(header);
            let mut entry_indent: Option<usize> = None;
            let mut current: Option<(String, String)> = None;

            while index < lines.len() {
                let line = lines[index];
                if line.trim().is_empty() {
                    index += 1;
                    continue;
                }

                let indent = indent_of(line);
                if indent <= header_indent {
                    break;
                }
                index += 1;

                let level = *entry_indent.get_or_insert(indent);
                let entry = if indent <= level {
                    GOOGLE_ENTRY.captures(line.trim())
                } else {
                    None
                };

                match entry {
                    Some(caps) => {
                        out.extend(current.take());
                        current = Some((caps["name"].to_string(), capture_desc(&caps)));
                    }
                    None => append_continuation(&mut current, line),
                }
            }

            out.extend(current);
        }
    }
}

/// Sphinx / reST field lists.
///
/// ```text
/// :param city: The city to look up.
/// :param str unit: Temperature unit.
/// @param country Country code.
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SphinxTags;

impl ParamSection for SphinxTags {
    fn extract(&self, lines: &[&str], out: &mut Vec<(String, String)>) {
        let mut current: Option<(String, String)> = None;
        let mut tag_indent = 0;

        for line in lines {
            let trimmed = line.trim();
            let tag = SPHINX_TAG
                .captures(trimmed)
                .or_else(|| EPYDOC_TAG.captures(trimmed));
            if let Some(caps) = tag {
                out.extend(current.take());
                tag_indent = indent_of(line);
                current = Some((caps["name"].to_string(), capture_desc(&caps)));
            } else if trimmed.is_empty()
                || trimmed.starts_with(':')
                || trimmed.starts_with('@')
                || indent_of(line) <= tag_indent
            {
                out.extend(current.take());
            } else {
                append_continuation(&mut current, line);
            }
        }

        out.extend(current);
    }
}

/// Rustdoc argument lists.
///
/// ```text
/// # Arguments
///
/// * `city` - The city to look up.
/// * `unit` - Temperature unit.
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RustdocArguments;

impl ParamSection for RustdocArguments {
    fn extract(&self, lines: &[&str], out: &mut Vec<(String, String)>) {
        let mut in_section = false;
        let mut current: Option<(String, String)> = None;

        for line in lines {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                out.extend(current.take());
                in_section = RUSTDOC_HEADING.is_match(trimmed);
                continue;
            }
            if !in_section {
                continue;
            }

            if let Some(caps) = RUSTDOC_ITEM.captures(trimmed) {
                out.extend(current.take());
                current = Some((caps["name"].to_string(), capture_desc(&caps)));
            } else if trimmed.is_empty() {
                out.extend(current.take());
            } else {
                append_continuation(&mut current, line);
            }
        }

        out.extend(current);
    }
}

/// A parsed docstring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Docstring {
    summary: String,
    params: IndexMap<String, String>,
}

impl Docstring {
    /// Parses `text`, trying every supported layout.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, DocstringStyle::Auto)
    }

    /// Parses `text` using only the layouts selected by `style`.
    #[must_use]
    pub fn parse_with(text: &str, style: DocstringStyle) -> Self {
        let lines: Vec<&str> = text.lines().collect();

        let summary = lines
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string();

        let mut found = Vec::new();
        for section in style.sections() {
            section.extract(&lines, &mut found);
        }

        let mut params = IndexMap::new();
        for (name, description) in found {
            params.entry(name).or_insert(description);
        }

        Self { summary, params }
    }

    /// The first non-blank line, trimmed. Empty if there is none.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The description documented for `name`, if any.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Every documented parameter, in the order found.
    #[must_use]
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.params
    }
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn capture_desc(caps: &regex::Captures<'_>) -> String {
    caps.name("desc")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn append_continuation(current: &mut Option<(String, String)>, line: &str) {
    if let Some((_, description)) = current {
        let text = line.trim();
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(text);
    }
}
