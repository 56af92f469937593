//! Declared types and the metadata attached to them.
//!
//! A [`TypeAnnotation`] is the structural form of a parameter's declared
//! type. Wrapping forms (optional, union, annotated) are explicit variants so
//! the resolver can walk them with a plain `match`.

use crate::field::FieldInfo;
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A primitive JSON-compatible type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Text.
    String,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Number,
    /// `true` / `false`.
    Boolean,
    /// The absent value. A union member of this kind marks the union optional.
    Null,
}

impl Primitive {
    /// Returns the JSON Schema `type` keyword for this primitive.
    #[must_use]
    pub fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

/// A scalar value, as used by literal types and `enum` lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Number(f64),
    /// A string.
    String(String),
}

impl Scalar {
    /// Returns the JSON Schema type of this value, or `None` for `null`.
    #[must_use]
    pub fn json_type(&self) -> Option<&'static str> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some("boolean"),
            Self::Integer(_) => Some("integer"),
            Self::Number(_) => Some("number"),
            Self::String(_) => Some("string"),
        }
    }

    /// Returns `true` for [`Scalar::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts this scalar into a JSON value.
    ///
    /// Non-finite numbers have no JSON form and become `null`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::from(*i),
            Self::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One element of the metadata attached to a type through
/// [`TypeAnnotation::Annotated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetadataItem {
    /// A bare string used as the parameter description.
    PlainText(String),
    /// An explicit documentation marker.
    DocTag(String),
    /// The ordered member names of an enumeration.
    EnumClass(Vec<String>),
    /// JSON Schema keywords and overrides for the parameter.
    Field(FieldInfo),
    /// Raw JSON Schema keywords merged into the property verbatim.
    Extra(serde_json::Map<String, Value>),
    /// Anything else. Ignored.
    Other,
}

impl MetadataItem {
    /// Creates a [`DocTag`](Self::DocTag).
    pub fn doc(text: impl Into<String>) -> Self {
        Self::DocTag(text.into())
    }

    /// Creates a [`PlainText`](Self::PlainText).
    pub fn text(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    /// Creates an [`EnumClass`](Self::EnumClass) from member names.
    pub fn enum_class<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::EnumClass(members.into_iter().map(Into::into).collect())
    }

    /// Creates an [`Extra`](Self::Extra) from a JSON value.
    ///
    /// Values that are not objects carry no keywords and become
    /// [`Other`](Self::Other).
    #[must_use]
    pub fn extra(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Extra(map),
            _ => Self::Other,
        }
    }
}

impl From<FieldInfo> for MetadataItem {
    fn from(field: FieldInfo) -> Self {
        Self::Field(field)
    }
}

/// The declared type of a parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeAnnotation {
    /// A primitive type.
    Primitive(Primitive),
    /// A homogeneous sequence.
    Array(Box<TypeAnnotation>),
    /// A string-keyed map. The value type is not constrained in the output.
    ObjectMap(Box<TypeAnnotation>),
    /// A fixed-length positional sequence.
    Tuple(Vec<TypeAnnotation>),
    /// Any one of the members, in declaration order.
    Union(Vec<TypeAnnotation>),
    /// Exactly one of the listed values.
    Literal(Vec<Scalar>),
    /// An enumeration, captured as its ordered member names.
    EnumRef(Vec<String>),
    /// A type with extra metadata attached.
    Annotated {
        /// The wrapped type.
        inner: Box<TypeAnnotation>,
        /// Attached metadata, in declaration order.
        metadata: Vec<MetadataItem>,
    },
    /// A JSON Schema fragment resolved ahead of time.
    Schema(Value),
    /// No annotation present.
    #[default]
    Unknown,
}

impl TypeAnnotation {
    /// `string`.
    #[must_use]
    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    /// `integer`.
    #[must_use]
    pub fn integer() -> Self {
        Self::Primitive(Primitive::Integer)
    }

    /// `number`.
    #[must_use]
    pub fn number() -> Self {
        Self::Primitive(Primitive::Number)
    }

    /// `boolean`.
    #[must_use]
    pub fn boolean() -> Self {
        Self::Primitive(Primitive::Boolean)
    }

    /// `null`.
    #[must_use]
    pub fn null() -> Self {
        Self::Primitive(Primitive::Null)
    }

    /// A sequence of `element`.
    #[must_use]
    pub fn array(element: TypeAnnotation) -> Self {
        Self::Array(Box::new(element))
    }

    /// A map with values of type `value`.
    #[must_use]
    pub fn object_map(value: TypeAnnotation) -> Self {
        Self::ObjectMap(Box::new(value))
    }

    /// A fixed-length tuple.
    pub fn tuple(elements: impl IntoIterator<Item = TypeAnnotation>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// A union of `members`.
    pub fn union(members: impl IntoIterator<Item = TypeAnnotation>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// The optional shorthand: a union of `inner` and `null`.
    #[must_use]
    pub fn optional(inner: TypeAnnotation) -> Self {
        Self::Union(vec![inner, Self::null()])
    }

    /// A literal type over `values`.
    pub fn literal<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        Self::Literal(values.into_iter().map(Into::into).collect())
    }

    /// An enumeration with the given member names.
    pub fn enum_ref<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::EnumRef(members.into_iter().map(Into::into).collect())
    }

    /// Wraps `inner` with metadata.
    pub fn annotated(inner: TypeAnnotation, metadata: impl IntoIterator<Item = MetadataItem>) -> Self {
        Self::Annotated {
            inner: Box::new(inner),
            metadata: metadata.into_iter().collect(),
        }
    }

    /// Wraps this type with a single metadata item.
    #[must_use]
    pub fn with_metadata(self, item: impl Into<MetadataItem>) -> Self {
        Self::annotated(self, [item.into()])
    }

    /// Uses the `schemars` schema of `T` as a pre-resolved type.
    ///
    /// Nested types are inlined, since the fragment ends up under a
    /// property where `#/$defs/...` pointers would not resolve.
    #[must_use]
    pub fn json_schema<T: JsonSchema>() -> Self {
        let mut generator = SchemaSettings::default()
            .with(|settings| settings.inline_subschemas = true)
            .into_generator();
        let schema = T::json_schema(&mut generator);
        if !generator.definitions().is_empty() {
            tracing::warn!(
                schema = %T::schema_name(),
                definitions = generator.definitions().len(),
                "Recursive type keeps $ref pointers that cannot resolve inside a tool schema"
            );
        }
        let value = serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}));
        Self::Schema(value)
    }

    /// Strips every `Annotated` layer.
    ///
    /// Returns the innermost non-annotated type together with all metadata
    /// found on the way, inner layers first.
    #[must_use]
    pub fn unwrap_annotated(&self) -> (&TypeAnnotation, Vec<&MetadataItem>) {
        match self {
            Self::Annotated { inner, metadata } => {
                let (leaf, mut collected) = inner.unwrap_annotated();
                collected.extend(metadata.iter());
                (leaf, collected)
            }
            other => (other, Vec::new()),
        }
    }

    /// Returns `true` if this is the `null` primitive once annotations are
    /// stripped.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.unwrap_annotated().0, Self::Primitive(Primitive::Null))
    }
}

impl From<Primitive> for TypeAnnotation {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}
