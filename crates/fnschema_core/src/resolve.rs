//! Type resolution: [`TypeAnnotation`] to JSON Schema fragment.
//!
//! Resolution never fails. Anything that has no JSON Schema counterpart
//! degrades to the unconstrained schema `{}`.
//!
//! | Annotation | Fragment |
//! |---|---|
//! | `string` / `integer` / `number` / `boolean` / `null` | `{"type": ...}` |
//! | `Array(T)` | `{"type": "array", "items": T}` |
//! | `ObjectMap(V)` | `{"type": "object"}` |
//! | `Tuple(T1..Tn)` | `{"type": "array", "items": [T1, ..., Tn]}` |
//! | `Union` | single member after dropping `null`, else `{"anyOf": [...]}` |
//! | `Literal(values)` | `{"type": inferred, "enum": values}` |
//! | `EnumRef(names)` | `{"type": "string", "enum": names}` |
//! | `Schema(v)` | `v` as given |
//! | `Unknown` | `{}` |

use crate::annotation::{Scalar, TypeAnnotation};
use serde_json::{Map, Value, json};

/// The result of resolving a declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The JSON Schema fragment. Always an object.
    pub fragment: Map<String, Value>,
    /// Whether the top-level type admits `null` (an optional union or a
    /// literal containing `null`).
    pub nullable: bool,
}

impl Resolved {
    fn new(fragment: Value) -> Self {
        Self {
            fragment: into_object(fragment),
            nullable: false,
        }
    }

    fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Resolves `annotation` into a JSON Schema fragment.
///
/// Nullability of the top-level type is discarded; use [`resolve_detailed`]
/// when it matters.
#[must_use]
pub fn resolve(annotation: &TypeAnnotation) -> Value {
    Value::Object(resolve_detailed(annotation).fragment)
}

/// Resolves `annotation`, reporting whether the top-level type is nullable.
#[must_use]
pub fn resolve_detailed(annotation: &TypeAnnotation) -> Resolved {
    let (leaf, _) = annotation.unwrap_annotated();

    match leaf {
        TypeAnnotation::Primitive(primitive) => Resolved::new(json!({ "type": primitive.json_type() })),
        TypeAnnotation::Array(element) => Resolved::new(json!({
            "type": "array",
            "items": resolve(element),
        })),
        TypeAnnotation::ObjectMap(_) => Resolved::new(json!({ "type": "object" })),
        TypeAnnotation::Tuple(elements) => {
            let items: Vec<Value> = elements.iter().map(resolve).collect();
            Resolved::new(json!({ "type": "array", "items": items }))
        }
        TypeAnnotation::Union(members) => resolve_union(members),
        TypeAnnotation::Literal(values) => resolve_literal(values),
        TypeAnnotation::EnumRef(members) => Resolved::new(json!({
            "type": "string",
            "enum": members,
        })),
        TypeAnnotation::Schema(schema) => {
            if !schema.is_object() {
                tracing::debug!(
                    schema = %schema,
                    "Non-object schema fragment resolved to an unconstrained type"
                );
            }
            Resolved::new(schema.clone())
        }
        TypeAnnotation::Annotated { .. } | TypeAnnotation::Unknown => Resolved::new(json!({})),
    }
}

fn resolve_union(members: &[TypeAnnotation]) -> Resolved {
    let mut nullable = false;
    let mut fragments: Vec<Value> = Vec::with_capacity(members.len());

    for member in members {
        if member.is_null() {
            nullable = true;
            continue;
        }

        let resolved = resolve_detailed(member);
        nullable |= resolved.nullable;

        let fragment = Value::Object(resolved.fragment);
        if !fragments.contains(&fragment) {
            fragments.push(fragment);
        }
    }

    let resolved = match fragments.len() {
        0 => Resolved::new(json!({ "type": "null" })),
        1 => Resolved::new(fragments.remove(0)),
        _ => Resolved::new(json!({ "anyOf": fragments })),
    };

    if nullable { resolved.nullable() } else { resolved }
}

fn resolve_literal(values: &[Scalar]) -> Resolved {
    let nullable = values.iter().any(Scalar::is_null);
    let present: Vec<&Scalar> = values.iter().filter(|v| !v.is_null()).collect();

    if present.is_empty() {
        return Resolved::new(json!({ "type": "null" })).nullable();
    }

    let has_float = present.iter().any(|v| matches!(v, Scalar::Number(_)));
    let mut types: Vec<&'static str> = Vec::new();
    for value in &present {
        let Some(mut json_type) = value.json_type() else {
            continue;
        };
        // JSON Schema `number` already covers integers.
        if has_float && json_type == "integer" {
            json_type = "number";
        }
        if !types.contains(&json_type) {
            types.push(json_type);
        }
    }

    let type_value = match types.as_slice() {
        [single] => Value::from(*single),
        many => Value::from(many.to_vec()),
    };
    let enum_values: Vec<Value> = present.iter().map(|v| v.to_value()).collect();

    let resolved = Resolved::new(json!({ "type": type_value, "enum": enum_values }));
    if nullable { resolved.nullable() } else { resolved }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::MetadataItem;

    #[test]
    fn primitives() {
        assert_eq!(resolve(&TypeAnnotation::string()), json!({ "type": "string" }));
        assert_eq!(resolve(&TypeAnnotation::integer()), json!({ "type": "integer" }));
        assert_eq!(resolve(&TypeAnnotation::number()), json!({ "type": "number" }));
        assert_eq!(resolve(&TypeAnnotation::boolean()), json!({ "type": "boolean" }));
    }

    #[test]
    fn containers() {
        assert_eq!(
            resolve(&TypeAnnotation::array(TypeAnnotation::integer())),
            json!({ "type": "array", "items": { "type": "integer" } })
        );
        assert_eq!(
            resolve(&TypeAnnotation::object_map(TypeAnnotation::integer())),
            json!({ "type": "object" })
        );
        assert_eq!(
            resolve(&TypeAnnotation::tuple([
                TypeAnnotation::string(),
                TypeAnnotation::number()
            ])),
            json!({
                "type": "array",
                "items": [{ "type": "string" }, { "type": "number" }]
            })
        );
    }

    #[test]
    fn optional_collapses_to_member() {
        let resolved = resolve_detailed(&TypeAnnotation::optional(TypeAnnotation::string()));
        assert!(resolved.nullable);
        assert_eq!(Value::Object(resolved.fragment), json!({ "type": "string" }));
    }

    #[test]
    fn union_of_many_is_any_of() {
        let resolved = resolve_detailed(&TypeAnnotation::union([
            TypeAnnotation::integer(),
            TypeAnnotation::string(),
            TypeAnnotation::null(),
        ]));
        assert!(resolved.nullable);
        assert_eq!(
            Value::Object(resolved.fragment),
            json!({ "anyOf": [{ "type": "integer" }, { "type": "string" }] })
        );
    }

    #[test]
    fn union_dedupes_structurally_equal_members() {
        let ty = TypeAnnotation::union([
            TypeAnnotation::string(),
            TypeAnnotation::string().with_metadata(MetadataItem::doc("ignored")),
        ]);
        let resolved = resolve_detailed(&ty);
        assert!(!resolved.nullable);
        assert_eq!(Value::Object(resolved.fragment), json!({ "type": "string" }));
    }

    #[test]
    fn union_of_only_null() {
        let resolved = resolve_detailed(&TypeAnnotation::union([TypeAnnotation::null()]));
        assert!(resolved.nullable);
        assert_eq!(Value::Object(resolved.fragment), json!({ "type": "null" }));
    }

    #[test]
    fn literal_strings() {
        assert_eq!(
            resolve(&TypeAnnotation::literal(["a", "b"])),
            json!({ "type": "string", "enum": ["a", "b"] })
        );
    }

    #[test]
    fn literal_mixed_numbers_fold_into_number() {
        let ty = TypeAnnotation::Literal(vec![Scalar::Integer(1), Scalar::Number(2.5)]);
        assert_eq!(resolve(&ty), json!({ "type": "number", "enum": [1, 2.5] }));
    }

    #[test]
    fn literal_mixed_kinds_use_type_array() {
        let ty = TypeAnnotation::Literal(vec![Scalar::from("a"), Scalar::Integer(1), Scalar::Null]);
        let resolved = resolve_detailed(&ty);
        assert!(resolved.nullable);
        assert_eq!(
            Value::Object(resolved.fragment),
            json!({ "type": ["string", "integer"], "enum": ["a", 1] })
        );
    }

    #[test]
    fn enum_ref_uses_member_names() {
        assert_eq!(
            resolve(&TypeAnnotation::enum_ref(["dog", "cat"])),
            json!({ "type": "string", "enum": ["dog", "cat"] })
        );
    }

    #[test]
    fn unknown_and_bad_schema_are_unconstrained() {
        assert_eq!(resolve(&TypeAnnotation::Unknown), json!({}));
        assert_eq!(resolve(&TypeAnnotation::Schema(json!(true))), json!({}));
    }

    #[test]
    fn annotated_resolves_inner() {
        let ty = TypeAnnotation::annotated(
            TypeAnnotation::array(TypeAnnotation::boolean()),
            [MetadataItem::doc("flags")],
        );
        assert_eq!(
            resolve(&ty),
            json!({ "type": "array", "items": { "type": "boolean" } })
        );
    }

    #[test]
    fn nested_optional_drops_nullability() {
        let ty = TypeAnnotation::array(TypeAnnotation::optional(TypeAnnotation::integer()));
        let resolved = resolve_detailed(&ty);
        assert!(!resolved.nullable);
        assert_eq!(
            Value::Object(resolved.fragment),
            json!({ "type": "array", "items": { "type": "integer" } })
        );
    }
}
