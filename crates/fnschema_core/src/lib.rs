//! Signature-to-schema compiler for LLM tool definitions.
//!
//! This crate turns a function's declared parameters and docstring into the
//! JSON Schema object that tool-calling APIs expect, rendered in either the
//! OpenAI (`parameters`) or Anthropic (`input_schema`) dialect.
//!
//! # Quick Start
//!
//! ```
//! use fnschema_core::{Parameter, Signature, TypeAnnotation, function_schema};
//!
//! let signature = Signature::new("get_weather")
//!     .with_docstring("Get the current weather.\n\nArgs:\n    city: The city name.")
//!     .with_parameter(Parameter::new("city", TypeAnnotation::string()))
//!     .with_parameter(
//!         Parameter::new("unit", TypeAnnotation::literal(["celsius", "fahrenheit"]))
//!             .with_default("celsius"),
//!     );
//!
//! let schema = function_schema(&signature, "openai").unwrap();
//! assert_eq!(schema["parameters"]["required"], serde_json::json!(["city"]));
//! ```
//!
//! # Architecture
//!
//! - [`TypeAnnotation`] / [`MetadataItem`]: declared types and their metadata
//! - [`resolve`]: maps one type to a JSON Schema fragment
//! - [`Docstring`] / [`resolve_description`]: parameter descriptions
//! - [`compile_parameter`]: one property plus its required verdict
//! - [`compile`] / [`assemble`]: whole signatures into a [`CompiledSchema`]
//! - [`render`] / [`Dialect`]: dialect wrapping, optionally strict

pub mod annotation;
pub mod config;
pub mod describe;
pub mod docstring;
pub mod error;
pub mod field;
pub mod format;
pub mod param;
pub mod resolve;
pub mod schema;
pub mod signature;
pub mod strict;

// Re-export core types at crate root.
pub use annotation::{MetadataItem, Primitive, Scalar, TypeAnnotation};
pub use config::CompileOptions;
pub use describe::resolve_description;
pub use docstring::{Docstring, DocstringStyle, ParamSection};
pub use error::SchemaError;
pub use field::{FieldInfo, JsonType, Numeric};
pub use format::{
    AnthropicTool, Dialect, OpenAiFunction, ToolSchema, function_schema, render, render_strict,
    tool_schema,
};
pub use param::{CompiledParameter, Parameter, ParameterSpec, compile_parameter};
pub use resolve::{Resolved, resolve, resolve_detailed};
pub use schema::{CompiledSchema, ObjectSchema};
pub use signature::{FunctionSpec, Signature, assemble, compile};

// Re-exported for `TypeAnnotation::json_schema` callers and generated code.
pub use schemars;
pub use serde_json;

/// Commonly used types for building and rendering signatures.
pub mod prelude {
    pub use crate::annotation::{MetadataItem, TypeAnnotation};
    pub use crate::config::CompileOptions;
    pub use crate::field::FieldInfo;
    pub use crate::format::{Dialect, ToolSchema, function_schema, tool_schema};
    pub use crate::param::Parameter;
    pub use crate::signature::Signature;
}
