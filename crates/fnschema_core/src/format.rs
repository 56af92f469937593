//! Output dialects.
//!
//! Both dialects carry `name` and `description` at the top level and differ
//! only in the key holding the parameters object:
//!
//! | Dialect | Key |
//! |---|---|
//! | [`Dialect::OpenAi`] (`"openai"`) | `parameters` |
//! | [`Dialect::Anthropic`] (`"claude"`) | `input_schema` |

use crate::config::CompileOptions;
use crate::error::SchemaError;
use crate::schema::CompiledSchema;
use crate::signature::{Signature, assemble, compile};
use crate::strict::{normalize_schema_for_strict_mode, require_all_properties};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A tool-definition wrapping convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// OpenAI function calling: parameters under `parameters`.
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    /// Anthropic tool use: parameters under `input_schema`.
    #[serde(rename = "claude")]
    Anthropic,
}

impl Dialect {
    /// The selector string for this dialect.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "claude",
        }
    }

    /// The key the parameters object is nested under.
    #[must_use]
    pub fn wrapper_key(self) -> &'static str {
        match self {
            Self::OpenAi => "parameters",
            Self::Anthropic => "input_schema",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Self::OpenAi),
            "claude" => Ok(Self::Anthropic),
            other => Err(SchemaError::unsupported_dialect(other)),
        }
    }
}

/// An OpenAI function definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenAiFunction {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// The parameters object.
    pub parameters: Value,
    /// Strict schema adherence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// An Anthropic tool definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnthropicTool {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for input.
    pub input_schema: Value,
    /// Enable strict mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// A rendered tool definition in one of the supported dialects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolSchema {
    /// [`Dialect::OpenAi`] output.
    OpenAi(OpenAiFunction),
    /// [`Dialect::Anthropic`] output.
    Anthropic(AnthropicTool),
}

impl ToolSchema {
    /// The dialect this definition was rendered in.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::OpenAi(_) => Dialect::OpenAi,
            Self::Anthropic(_) => Dialect::Anthropic,
        }
    }

    /// Returns this definition as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let (name, description, parameters, strict) = match self {
            Self::OpenAi(def) => (&def.name, &def.description, &def.parameters, def.strict),
            Self::Anthropic(def) => (&def.name, &def.description, &def.input_schema, def.strict),
        };

        let mut value = json!({
            "name": name,
            "description": description,
            (self.dialect().wrapper_key()): parameters,
        });
        if let (Some(strict), Some(obj)) = (strict, value.as_object_mut()) {
            obj.insert("strict".to_string(), Value::Bool(strict));
        }
        value
    }
}

/// Renders `schema` in `dialect`.
#[must_use]
pub fn render(schema: &CompiledSchema, dialect: Dialect) -> ToolSchema {
    wrap(schema, dialect, schema.parameters.to_value(), None)
}

/// Renders `schema` in `dialect`, normalized for strict tool-calling modes.
///
/// Every property becomes required (optional ones become nullable),
/// unsupported keywords are removed, and `additionalProperties: false` is set
/// on every object.
#[must_use]
pub fn render_strict(schema: &CompiledSchema, dialect: Dialect) -> ToolSchema {
    let parameters = normalize_schema_for_strict_mode(require_all_properties(
        schema.parameters.to_value(),
    ));
    wrap(schema, dialect, parameters, Some(true))
}

fn wrap(schema: &CompiledSchema, dialect: Dialect, parameters: Value, strict: Option<bool>) -> ToolSchema {
    let name = schema.name.clone();
    let description = schema.description.clone();

    match dialect {
        Dialect::OpenAi => ToolSchema::OpenAi(OpenAiFunction {
            name,
            description,
            parameters,
            strict,
        }),
        Dialect::Anthropic => ToolSchema::Anthropic(AnthropicTool {
            name,
            description,
            input_schema: parameters,
            strict,
        }),
    }
}

/// Compiles and renders `signature` according to `options`.
#[must_use]
pub fn tool_schema(signature: &Signature, options: &CompileOptions) -> ToolSchema {
    let compiled = assemble(&compile(signature, options));
    if options.strict {
        render_strict(&compiled, options.dialect)
    } else {
        render(&compiled, options.dialect)
    }
}

/// Compiles `signature` and renders it in the dialect named by `format`
/// (`"openai"` or `"claude"`).
///
/// # Errors
///
/// Returns [`SchemaError::UnsupportedDialect`] if `format` names no dialect.
///
/// # Example
///
/// ```
/// use fnschema_core::{Parameter, Signature, TypeAnnotation, function_schema};
///
/// let signature = Signature::new("get_weather")
///     .with_docstring("Returns the weather.")
///     .with_parameter(Parameter::new("city", TypeAnnotation::string()));
///
/// let schema = function_schema(&signature, "claude").unwrap();
/// assert_eq!(schema["input_schema"]["required"][0], "city");
/// assert!(function_schema(&signature, "gemini").is_err());
/// ```
pub fn function_schema(signature: &Signature, format: &str) -> Result<Value, SchemaError> {
    let dialect = format.parse::<Dialect>()?;
    let options = CompileOptions::default().with_dialect(dialect);
    Ok(tool_schema(signature, &options).to_value())
}
