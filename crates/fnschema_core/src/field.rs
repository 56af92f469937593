//! Field-level JSON Schema keywords attached as parameter metadata.

use crate::annotation::Scalar;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON Schema `type` name usable as an explicit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `object`
    Object,
    /// `array`
    Array,
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
}

impl JsonType {
    /// Returns the keyword value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

/// A numeric bound. Integers stay integers in the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// An integer bound.
    Int(i64),
    /// A floating-point bound.
    Float(f64),
}

impl Numeric {
    /// Converts the bound into a JSON number, or `None` if it is not finite.
    #[must_use]
    pub fn to_value(self) -> Option<Value> {
        match self {
            Self::Int(i) => Some(Value::from(i)),
            Self::Float(f) => serde_json::Number::from_f64(f).map(Value::Number),
        }
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f32> for Numeric {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Schema keywords and overrides for one parameter.
///
/// Only a subset of JSON Schema is covered. Unset fields contribute nothing.
///
/// ```
/// use fnschema_core::{FieldInfo, TypeAnnotation};
///
/// let percent = TypeAnnotation::integer().with_metadata(
///     FieldInfo::new()
///         .with_description("A percentage")
///         .ge(0)
///         .le(100),
/// );
/// # let _ = percent;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldInfo {
    /// Replaces the type inferred from the annotation.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub json_type: Option<JsonType>,
    /// Description, used when no text metadata is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Scalar>>,
    /// Forces the parameter in or out of `required`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Numeric>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Numeric>,
    /// Exclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Numeric>,
    /// Exclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Numeric>,
    /// Minimum string length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum string length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldInfo {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the JSON type.
    #[must_use]
    pub fn with_type(mut self, json_type: JsonType) -> Self {
        self.json_type = Some(json_type);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the allowed values.
    #[must_use]
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Forces requiredness.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// `value >= bound`
    #[must_use]
    pub fn ge(mut self, bound: impl Into<Numeric>) -> Self {
        self.minimum = Some(bound.into());
        self
    }

    /// `value > bound`
    #[must_use]
    pub fn gt(mut self, bound: impl Into<Numeric>) -> Self {
        self.exclusive_minimum = Some(bound.into());
        self
    }

    /// `value <= bound`
    #[must_use]
    pub fn le(mut self, bound: impl Into<Numeric>) -> Self {
        self.maximum = Some(bound.into());
        self
    }

    /// `value < bound`
    #[must_use]
    pub fn lt(mut self, bound: impl Into<Numeric>) -> Self {
        self.exclusive_maximum = Some(bound.into());
        self
    }

    /// Sets the minimum string length.
    #[must_use]
    pub fn with_min_length(mut self, length: u64) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Sets the maximum string length.
    #[must_use]
    pub fn with_max_length(mut self, length: u64) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Sets the pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Merges `other` into `self`; fields set in `other` win.
    pub fn merge(&mut self, other: &FieldInfo) {
        fn take<T: Clone>(slot: &mut Option<T>, incoming: &Option<T>) {
            if incoming.is_some() {
                slot.clone_from(incoming);
            }
        }

        take(&mut self.json_type, &other.json_type);
        take(&mut self.description, &other.description);
        take(&mut self.enum_values, &other.enum_values);
        take(&mut self.required, &other.required);
        take(&mut self.minimum, &other.minimum);
        take(&mut self.maximum, &other.maximum);
        take(&mut self.exclusive_minimum, &other.exclusive_minimum);
        take(&mut self.exclusive_maximum, &other.exclusive_maximum);
        take(&mut self.min_length, &other.min_length);
        take(&mut self.max_length, &other.max_length);
        take(&mut self.pattern, &other.pattern);
    }

    /// Returns the validation keywords this field sets, in a stable order.
    ///
    /// `type`, `description`, `enum` and `required` are handled by the
    /// parameter compiler and are not included.
    #[must_use]
    pub fn constraint_keywords(&self) -> Vec<(&'static str, Value)> {
        let bounds = [
            ("minimum", self.minimum),
            ("maximum", self.maximum),
            ("exclusiveMinimum", self.exclusive_minimum),
            ("exclusiveMaximum", self.exclusive_maximum),
        ];

        let mut keywords: Vec<(&'static str, Value)> = bounds
            .into_iter()
            .filter_map(|(key, bound)| bound.and_then(Numeric::to_value).map(|v| (key, v)))
            .collect();

        if let Some(length) = self.min_length {
            keywords.push(("minLength", Value::from(length)));
        }
        if let Some(length) = self.max_length {
            keywords.push(("maxLength", Value::from(length)));
        }
        if let Some(pattern) = &self.pattern {
            keywords.push(("pattern", Value::String(pattern.clone())));
        }
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bounds_keep_integer_form() {
        let field = FieldInfo::new().ge(1).lt(2.5);
        assert_eq!(
            field.constraint_keywords(),
            vec![("minimum", json!(1)), ("exclusiveMaximum", json!(2.5))]
        );
    }

    #[test]
    fn merge_prefers_later_values() {
        let mut field = FieldInfo::new().ge(1).le(100);
        field.merge(&FieldInfo::new().with_pattern("^[0-9]+$").le(50));

        assert_eq!(field.minimum, Some(Numeric::Int(1)));
        assert_eq!(field.maximum, Some(Numeric::Int(50)));
        assert_eq!(field.pattern.as_deref(), Some("^[0-9]+$"));
    }

    #[test]
    fn non_finite_bounds_are_dropped() {
        let field = FieldInfo::new().ge(f64::INFINITY);
        assert!(field.constraint_keywords().is_empty());
    }

    #[test]
    fn lengths_and_pattern() {
        let field = FieldInfo::new()
            .with_min_length(5)
            .with_max_length(10)
            .with_pattern("^a");
        assert_eq!(
            field.constraint_keywords(),
            vec![
                ("minLength", json!(5)),
                ("maxLength", json!(10)),
                ("pattern", json!("^a")),
            ]
        );
    }
}
