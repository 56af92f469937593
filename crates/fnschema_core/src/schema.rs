//! Compiled schema types.
//!
//! [`ObjectSchema`] is the `{"type": "object", "properties", "required"}`
//! object describing a function's parameters, and [`CompiledSchema`] pairs it
//! with the function name and description ahead of dialect rendering.

use crate::param::CompiledParameter;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The parameters object of a tool definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    kind: String,
    /// Property schemas, in declaration order.
    pub properties: IndexMap<String, Value>,
    /// Names of required properties, in declaration order.
    pub required: Vec<String>,
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self {
            kind: "object".to_string(),
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }
}

impl ObjectSchema {
    /// Creates an empty object schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a compiled parameter.
    ///
    /// A parameter with a name already present replaces the earlier property
    /// in place and keeps at most one entry in `required`.
    pub fn insert(&mut self, param: CompiledParameter) {
        let CompiledParameter {
            name,
            schema,
            required,
        } = param;

        if self.properties.insert(name.clone(), schema).is_some() {
            tracing::warn!(parameter = %name, "Duplicate parameter name, later declaration wins");
            self.required.retain(|existing| existing != &name);
        }
        if required {
            self.required.push(name);
        }
    }

    /// Returns this schema as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "type": self.kind,
            "properties": self.properties,
            "required": self.required,
        })
    }
}

/// A function compiled into its name, description and parameters object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledSchema {
    /// Function name.
    pub name: String,
    /// Function description. May be empty.
    pub description: String,
    /// The parameters object.
    pub parameters: ObjectSchema,
}

impl CompiledSchema {
    /// Creates a schema for a function with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: ObjectSchema::new(),
        }
    }

    /// Sets the function description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a compiled parameter.
    #[must_use]
    pub fn add_parameter(mut self, param: CompiledParameter) -> Self {
        self.parameters.insert(param);
        self
    }
}
