//! Signatures and the signature compiler.
//!
//! A [`Signature`] is what a caller hands in: the function name, its raw
//! docstring and its declared parameters. [`compile`] resolves it into a
//! [`FunctionSpec`], and [`assemble`] builds the [`CompiledSchema`].

use crate::config::CompileOptions;
use crate::docstring::Docstring;
use crate::param::{Parameter, ParameterSpec, compile_parameter};
use crate::schema::CompiledSchema;
use serde::{Deserialize, Serialize};

/// A function's declared signature and documentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Function name.
    pub name: String,
    /// Raw docstring text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Signature {
    /// Creates a signature with no docstring and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: None,
            parameters: Vec::new(),
        }
    }

    /// Sets the raw docstring.
    #[must_use]
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A signature with every parameter resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSpec {
    /// Function name.
    pub name: String,
    /// Docstring summary line. May be empty.
    pub description: String,
    /// Resolved parameters, in declaration order.
    pub parameters: Vec<ParameterSpec>,
}

impl FunctionSpec {
    /// Names of required parameters, in declaration order.
    ///
    /// A repeated name keeps the requiredness of its last declaration, as
    /// in the assembled schema.
    #[must_use]
    pub fn required(&self) -> Vec<String> {
        let mut required: Vec<String> = Vec::new();
        for param in &self.parameters {
            required.retain(|name| name != &param.name);
            if param.is_required() {
                required.push(param.name.clone());
            }
        }
        required
    }
}

/// Resolves descriptions and enums for every parameter of `signature`.
#[must_use]
pub fn compile(signature: &Signature, options: &CompileOptions) -> FunctionSpec {
    let docs = signature
        .docstring
        .as_deref()
        .map(|text| Docstring::parse_with(text, options.docstring_style))
        .unwrap_or_default();

    let parameters = signature
        .parameters
        .iter()
        .map(|param| ParameterSpec::from_parameter(param, &docs, options))
        .collect::<Vec<_>>();

    tracing::debug!(
        function = %signature.name,
        parameters = parameters.len(),
        "Compiled function signature"
    );

    FunctionSpec {
        name: signature.name.clone(),
        description: docs.summary().to_string(),
        parameters,
    }
}

/// Builds the compiled schema for `spec`.
#[must_use]
pub fn assemble(spec: &FunctionSpec) -> CompiledSchema {
    spec.parameters.iter().map(compile_parameter).fold(
        CompiledSchema::new(&spec.name).with_description(&spec.description),
        CompiledSchema::add_parameter,
    )
}
