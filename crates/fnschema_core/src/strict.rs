//! Strict-mode normalization for tool parameter schemas.
//!
//! Strict tool-calling APIs accept a narrower JSON Schema subset: every
//! object must close its property set, every property must be listed in
//! `required`, and several validation keywords are rejected outright.

use serde_json::{Map, Value, json};

/// `format` values a strict tool schema may keep.
const KEPT_FORMATS: &[&str] = &[
    "date",
    "time",
    "date-time",
    "duration",
    "email",
    "hostname",
    "ipv4",
    "ipv6",
    "uri",
    "uuid",
];

/// Validation keywords dropped from strict tool schemas.
const DROPPED_KEYWORDS: &[&str] = &[
    // numeric bounds
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    // string length
    "minLength",
    "maxLength",
    // collection size
    "maxItems",
    "uniqueItems",
    "minProperties",
    "maxProperties",
    // document metadata
    "$schema",
    "title",
];

/// Normalizes a JSON Schema for strict mode, recursively.
///
/// - Sets `additionalProperties: false` on every object schema.
/// - Removes [`DROPPED_KEYWORDS`] and any `format` outside [`KEPT_FORMATS`].
/// - Removes `minItems` values greater than 1.
/// - Removes external `$ref` URLs and `$ref` entries inside `allOf`.
pub fn normalize_schema_for_strict_mode(schema: Value) -> Value {
    normalize_at(schema, "#")
}

/// `path` is a JSON pointer to `schema` within the parameters object,
/// used only for log fields.
fn normalize_at(mut schema: Value, path: &str) -> Value {
    match &mut schema {
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                *item = normalize_at(item.take(), &format!("{path}/{index}"));
            }
        }
        Value::Object(obj) => {
            drop_keywords(obj, path);
            drop_format(obj, path);
            drop_min_items(obj, path);

            let is_object = obj.get("type").and_then(Value::as_str) == Some("object")
                || obj.contains_key("properties");
            if is_object {
                obj.insert("additionalProperties".to_string(), Value::Bool(false));
            }

            normalize_children(obj, path);
            drop_external_ref(obj, path);
            drop_all_of_refs(obj, path);
        }
        _ => {}
    }
    schema
}

/// Lists every property of an object schema in `required`, making the
/// previously optional ones nullable.
///
/// Non-object values are returned unchanged.
pub fn require_all_properties(mut schema: Value) -> Value {
    let Some(obj) = schema.as_object_mut() else {
        return schema;
    };

    let required: Vec<String> = obj
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(|n| n.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let Some(Value::Object(properties)) = obj.get_mut("properties") else {
        return schema;
    };

    let mut all = Vec::with_capacity(properties.len());
    for (name, property) in properties.iter_mut() {
        if !required.contains(name) {
            make_nullable(property);
        }
        all.push(Value::String(name.clone()));
    }

    obj.insert("required".to_string(), Value::Array(all));
    schema
}

/// Keywords that describe a property without constraining its values.
const ANNOTATION_KEYWORDS: &[&str] = &["description", "default", "examples"];

fn make_nullable(property: &mut Value) {
    let Some(obj) = property.as_object_mut() else {
        return;
    };

    match obj.get_mut("type") {
        Some(Value::String(single)) if single != "null" => {
            let widened = json!([single.clone(), "null"]);
            obj.insert("type".to_string(), widened);
        }
        Some(Value::Array(types)) => {
            if !types.iter().any(|t| t == "null") {
                types.push(Value::from("null"));
            }
        }
        Some(_) => {}
        None => match obj.get_mut("anyOf") {
            Some(Value::Array(branches)) => {
                let null_branch = json!({ "type": "null" });
                if !branches.contains(&null_branch) {
                    branches.push(null_branch);
                }
            }
            _ => {
                wrap_in_null_union(obj);
                return;
            }
        },
    }

    if let Some(Value::Array(values)) = obj.get_mut("enum")
        && !values.contains(&Value::Null)
    {
        values.push(Value::Null);
    }
}

/// Moves the constraining keywords of `obj` into the first branch of an
/// `anyOf` whose second branch is `null`. Annotation keywords stay on the
/// property. A property with no constraints already accepts `null`.
fn wrap_in_null_union(obj: &mut Map<String, Value>) {
    if obj.keys().all(|key| ANNOTATION_KEYWORDS.contains(&key.as_str())) {
        return;
    }

    let mut branch = Map::new();
    for (key, value) in std::mem::take(obj) {
        if ANNOTATION_KEYWORDS.contains(&key.as_str()) {
            obj.insert(key, value);
        } else {
            branch.insert(key, value);
        }
    }

    let mut wrapped = Map::new();
    wrapped.insert(
        "anyOf".to_string(),
        json!([Value::Object(branch), { "type": "null" }]),
    );
    wrapped.extend(std::mem::take(obj));
    *obj = wrapped;
}

fn drop_keywords(obj: &mut Map<String, Value>, path: &str) {
    for keyword in DROPPED_KEYWORDS {
        if obj.remove(*keyword).is_some() {
            tracing::warn!(
                at = path,
                keyword = *keyword,
                "Strict schema cannot carry keyword, dropping it"
            );
        }
    }
}

fn drop_format(obj: &mut Map<String, Value>, path: &str) {
    let keep = match obj.get("format") {
        None => return,
        Some(format) => format.as_str().is_some_and(|name| KEPT_FORMATS.contains(&name)),
    };

    if !keep && let Some(format) = obj.remove("format") {
        tracing::warn!(at = path, %format, "Strict schema cannot carry format, dropping it");
    }
}

fn drop_min_items(obj: &mut Map<String, Value>, path: &str) {
    let keep = match obj.get("minItems") {
        None => return,
        Some(min_items) => min_items.as_u64().is_some_and(|n| n <= 1),
    };

    if !keep && let Some(min_items) = obj.remove("minItems") {
        tracing::warn!(
            at = path,
            %min_items,
            "Strict schema allows minItems of 0 or 1 only, dropping it"
        );
    }
}

fn normalize_children(obj: &mut Map<String, Value>, path: &str) {
    for key in ["properties", "$defs", "definitions"] {
        if let Some(Value::Object(children)) = obj.get_mut(key) {
            for (name, child) in children.iter_mut() {
                *child = normalize_at(child.take(), &format!("{path}/{key}/{name}"));
            }
        }
    }

    for key in ["items", "allOf", "anyOf", "oneOf"] {
        if let Some(child) = obj.get_mut(key) {
            *child = normalize_at(child.take(), &format!("{path}/{key}"));
        }
    }
}

fn drop_external_ref(obj: &mut Map<String, Value>, path: &str) {
    let external = obj
        .get("$ref")
        .and_then(Value::as_str)
        .is_some_and(|r| r.starts_with("http://") || r.starts_with("https://"));

    if external && let Some(target) = obj.remove("$ref") {
        tracing::warn!(at = path, %target, "Strict schema cannot follow remote $ref, dropping it");
    }
}

fn drop_all_of_refs(obj: &mut Map<String, Value>, path: &str) {
    let Some(Value::Array(all_of)) = obj.get_mut("allOf") else {
        return;
    };

    let before = all_of.len();
    all_of.retain(|item| !item.as_object().is_some_and(|o| o.contains_key("$ref")));
    let dropped = before - all_of.len();
    if dropped > 0 {
        tracing::warn!(
            at = path,
            dropped,
            "Strict schema cannot merge $ref inside allOf, dropping them"
        );
    }

    if all_of.is_empty() && before > 0 {
        obj.remove("allOf");
    }
}
