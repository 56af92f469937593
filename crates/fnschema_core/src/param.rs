//! Parameters and the per-parameter compiler.
//!
//! - [`Parameter`]: a declared parameter as it appears in a signature
//! - [`ParameterSpec`]: a parameter with its description and enum resolved
//! - [`CompiledParameter`]: the JSON Schema property plus its required verdict

use crate::annotation::{MetadataItem, Scalar, TypeAnnotation};
use crate::config::CompileOptions;
use crate::describe::resolve_description;
use crate::docstring::Docstring;
use crate::field::FieldInfo;
use crate::resolve::{resolve, resolve_detailed};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A declared function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type. [`TypeAnnotation::Unknown`] when unannotated.
    #[serde(default)]
    pub annotation: TypeAnnotation,
    /// Default value, if the parameter has one. Never type-checked.
    ///
    /// An explicit `null` default is still a default.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

impl Parameter {
    /// Creates a parameter without a default.
    pub fn new(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            annotation,
            default: None,
        }
    }

    /// Creates a parameter with no type annotation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, TypeAnnotation::Unknown)
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether a default value is present.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A parameter with its description and allowed values resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub annotation: TypeAnnotation,
    /// Default value, emitted verbatim.
    pub default_value: Option<Value>,
    /// Resolved description. Empty when none was found.
    pub description: String,
    /// Allowed values, from explicit metadata or the declared type.
    pub enum_values: Option<Vec<Value>>,
}

impl ParameterSpec {
    /// Resolves `param` against the parsed docstring of its function.
    #[must_use]
    pub fn from_parameter(param: &Parameter, docs: &Docstring, options: &CompileOptions) -> Self {
        let (_, metadata) = param.annotation.unwrap_annotated();

        let mut description = resolve_description(&metadata, &param.name, docs);
        if description.is_empty() && options.placeholder_descriptions {
            description = format!("The {} parameter", param.name);
        }

        Self {
            name: param.name.clone(),
            annotation: param.annotation.clone(),
            default_value: param.default.clone(),
            description,
            enum_values: resolve_enum(&param.annotation, &metadata),
        }
    }

    /// Whether a default value is present.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Whether the compiled parameter belongs in `required`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        let (_, metadata) = self.annotation.unwrap_annotated();
        let nullable = resolve_detailed(&self.annotation).nullable;
        requiredness(&merged_field(&metadata), nullable, self.has_default())
    }
}

/// A parameter compiled into its JSON Schema property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledParameter {
    /// Property name.
    pub name: String,
    /// JSON Schema for the property.
    pub schema: Value,
    /// Whether the parameter belongs in `required`.
    pub required: bool,
}

/// Compiles a resolved parameter into its property schema.
///
/// The parameter is required unless its type admits `null` or it has a
/// default; a `Field` item with `required` set overrides both.
#[must_use]
pub fn compile_parameter(spec: &ParameterSpec) -> CompiledParameter {
    let (_, metadata) = spec.annotation.unwrap_annotated();
    let field = merged_field(&metadata);
    let resolved = resolve_detailed(&spec.annotation);

    let mut schema = resolved.fragment;
    if schema.is_empty() {
        tracing::debug!(
            parameter = %spec.name,
            "No mappable type for parameter, leaving it unconstrained"
        );
    }

    if let Some(json_type) = field.json_type {
        schema.insert("type".to_string(), Value::from(json_type.as_str()));
    }
    if let Some(values) = &spec.enum_values {
        schema.insert("enum".to_string(), Value::Array(values.clone()));
    }
    for (keyword, value) in field.constraint_keywords() {
        schema.insert(keyword.to_string(), value);
    }
    if !spec.description.is_empty() {
        schema.insert(
            "description".to_string(),
            Value::String(spec.description.clone()),
        );
    }
    if let Some(default) = &spec.default_value {
        schema.insert("default".to_string(), default.clone());
    }
    for item in &metadata {
        if let MetadataItem::Extra(extra) = item {
            for (key, value) in extra {
                schema.insert(key.clone(), value.clone());
            }
        }
    }

    let required = requiredness(&field, resolved.nullable, spec.has_default());

    CompiledParameter {
        name: spec.name.clone(),
        schema: Value::Object(schema),
        required,
    }
}

fn requiredness(field: &FieldInfo, nullable: bool, has_default: bool) -> bool {
    field.required.unwrap_or(!nullable && !has_default)
}

fn merged_field(metadata: &[&MetadataItem]) -> FieldInfo {
    let mut merged = FieldInfo::default();
    for item in metadata {
        if let MetadataItem::Field(field) = item {
            merged.merge(field);
        }
    }
    merged
}

/// `EnumClass` metadata, then `Field` enums, then whatever the type itself
/// enumerates (`Literal`, `EnumRef`).
fn resolve_enum(annotation: &TypeAnnotation, metadata: &[&MetadataItem]) -> Option<Vec<Value>> {
    let from_class = metadata.iter().find_map(|item| match item {
        MetadataItem::EnumClass(members) => {
            Some(members.iter().cloned().map(Value::String).collect())
        }
        _ => None,
    });

    from_class
        .or_else(|| {
            merged_field(metadata).enum_values.map(|values| {
                values
                    .iter()
                    .filter(|v| !v.is_null())
                    .map(Scalar::to_value)
                    .collect()
            })
        })
        .or_else(|| {
            resolve(annotation)
                .get("enum")
                .and_then(Value::as_array)
                .cloned()
        })
}
