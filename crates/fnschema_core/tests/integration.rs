//! Integration tests for the `fnschema_core` crate.

use fnschema_core::{
    CompileOptions, Dialect, DocstringStyle, FieldInfo, MetadataItem, Parameter, SchemaError,
    Signature, TypeAnnotation, assemble, compile, function_schema, tool_schema,
};
use schemars::JsonSchema;
use serde_json::json;

fn get_weather() -> Signature {
    Signature::new("get_weather")
        .with_docstring("Returns the weather.")
        .with_parameter(Parameter::new("city", TypeAnnotation::string()))
        .with_parameter(
            Parameter::new("unit", TypeAnnotation::optional(TypeAnnotation::string()))
                .with_default("celsius"),
        )
}

// ─────────────────────────────────────────────────────────────────────
// 1. Dialects
// ─────────────────────────────────────────────────────────────────────

#[test]
fn get_weather_openai() {
    let schema = function_schema(&get_weather(), "openai").unwrap();
    assert_eq!(
        schema,
        json!({
            "name": "get_weather",
            "description": "Returns the weather.",
            "parameters": {
                "type": "object",
                "properties": {
                    "city": { "type": "string" },
                    "unit": { "type": "string", "default": "celsius" }
                },
                "required": ["city"]
            }
        })
    );
}

#[test]
fn get_weather_claude() {
    let openai = function_schema(&get_weather(), "openai").unwrap();
    let claude = function_schema(&get_weather(), "claude").unwrap();

    assert_eq!(claude["name"], openai["name"]);
    assert_eq!(claude["description"], openai["description"]);
    assert_eq!(claude["input_schema"], openai["parameters"]);
    assert!(claude.get("parameters").is_none());
}

#[test]
fn key_order_is_stable() {
    let schema = function_schema(&get_weather(), "claude").unwrap();
    let keys: Vec<_> = schema.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["name", "description", "input_schema"]);

    let properties: Vec<_> = schema["input_schema"]["properties"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(properties, ["city", "unit"]);
}

#[test]
fn zero_parameter_function() {
    let signature = Signature::new("ping");
    for format in ["openai", "claude"] {
        let schema = function_schema(&signature, format).unwrap();
        let key = format.parse::<Dialect>().unwrap().wrapper_key();
        assert_eq!(
            schema[key],
            json!({ "type": "object", "properties": {}, "required": [] })
        );
        assert_eq!(schema["description"], "");
    }
}

#[test]
fn unsupported_dialect() {
    let err = function_schema(&get_weather(), "gemini").unwrap_err();
    assert_eq!(err, SchemaError::UnsupportedDialect("gemini".to_string()));
    assert_eq!(
        err.to_string(),
        "unsupported dialect 'gemini': expected 'openai' or 'claude'"
    );
}

#[test]
fn compilation_is_idempotent() {
    let signature = get_weather();
    let first = function_schema(&signature, "openai").unwrap();
    let second = function_schema(&signature, "openai").unwrap();
    assert_eq!(first, second);
}

// ─────────────────────────────────────────────────────────────────────
// 2. Requiredness
// ─────────────────────────────────────────────────────────────────────

#[test]
fn required_follows_defaults_and_optionality() {
    let signature = Signature::new("f")
        .with_parameter(Parameter::new("a", TypeAnnotation::integer()))
        .with_parameter(Parameter::new("b", TypeAnnotation::integer()).with_default(1))
        .with_parameter(Parameter::new(
            "c",
            TypeAnnotation::optional(TypeAnnotation::integer()),
        ))
        .with_parameter(Parameter::new(
            "d",
            TypeAnnotation::union([
                TypeAnnotation::integer(),
                TypeAnnotation::string(),
                TypeAnnotation::null(),
            ]),
        ));

    let spec = compile(&signature, &CompileOptions::default());
    assert_eq!(spec.required(), vec!["a"]);

    let schema = assemble(&spec);
    assert_eq!(
        schema.parameters.properties["d"],
        json!({ "anyOf": [{ "type": "integer" }, { "type": "string" }] })
    );
}

#[test]
fn literal_and_enum_ref_enums() {
    let signature = Signature::new("f")
        .with_parameter(Parameter::new("mode", TypeAnnotation::literal(["r", "w"])))
        .with_parameter(Parameter::new(
            "color",
            TypeAnnotation::enum_ref(["RED", "GREEN"]),
        ))
        .with_parameter(Parameter::new("level", TypeAnnotation::literal([1, 2, 3])));

    let schema = function_schema(&signature, "openai").unwrap();
    let properties = &schema["parameters"]["properties"];
    assert_eq!(properties["mode"], json!({ "type": "string", "enum": ["r", "w"] }));
    assert_eq!(
        properties["color"],
        json!({ "type": "string", "enum": ["RED", "GREEN"] })
    );
    assert_eq!(properties["level"], json!({ "type": "integer", "enum": [1, 2, 3] }));
}

// ─────────────────────────────────────────────────────────────────────
// 3. Descriptions
// ─────────────────────────────────────────────────────────────────────

#[test]
fn description_precedence() {
    let docstring = "Search things.\n\nArgs:\n    query: From the docstring.\n    limit: Max results.\n    tag: Docstring tag.";
    let signature = Signature::new("search")
        .with_docstring(docstring)
        .with_parameter(Parameter::new(
            "query",
            TypeAnnotation::annotated(
                TypeAnnotation::string(),
                [
                    MetadataItem::Other,
                    MetadataItem::text("Plain text."),
                    MetadataItem::doc("From doc tag."),
                ],
            ),
        ))
        .with_parameter(Parameter::new("limit", TypeAnnotation::integer()).with_default(10))
        .with_parameter(Parameter::new(
            "tag",
            TypeAnnotation::string().with_metadata(FieldInfo::new().with_description("From field.")),
        ))
        .with_parameter(Parameter::new("unused", TypeAnnotation::boolean()));

    let schema = function_schema(&signature, "openai").unwrap();
    let properties = &schema["parameters"]["properties"];
    assert_eq!(schema["description"], "Search things.");
    assert_eq!(properties["query"]["description"], "From doc tag.");
    assert_eq!(properties["limit"]["description"], "Max results.");
    assert_eq!(properties["tag"]["description"], "From field.");
    assert!(properties["unused"].get("description").is_none());
}

#[test]
fn docstring_dialects() {
    let sphinx = "Do it.\n\n:param a: Sphinx a.\n:param int b: Sphinx b.";
    let rustdoc = "Do it.\n\n# Arguments\n\n* `a` - Rustdoc a.\n* `b` - Rustdoc b.";

    for (text, style, expected) in [
        (sphinx, DocstringStyle::Sphinx, "Sphinx"),
        (rustdoc, DocstringStyle::Rustdoc, "Rustdoc"),
        (rustdoc, DocstringStyle::Auto, "Rustdoc"),
    ] {
        let signature = Signature::new("f")
            .with_docstring(text)
            .with_parameter(Parameter::new("a", TypeAnnotation::string()))
            .with_parameter(Parameter::new("b", TypeAnnotation::integer()));
        let options = CompileOptions::default().with_docstring_style(style);
        let schema = tool_schema(&signature, &options).to_value();
        let properties = &schema["parameters"]["properties"];
        assert_eq!(properties["a"]["description"], format!("{expected} a."));
        assert_eq!(properties["b"]["description"], format!("{expected} b."));
    }
}

// ─────────────────────────────────────────────────────────────────────
// 4. Field metadata
// ─────────────────────────────────────────────────────────────────────

#[test]
fn field_constraints() {
    let signature = Signature::new("set_volume").with_parameter(Parameter::new(
        "level",
        TypeAnnotation::annotated(
            TypeAnnotation::integer(),
            [
                MetadataItem::from(FieldInfo::new().ge(0).le(10)),
                MetadataItem::from(FieldInfo::new().le(11)),
                MetadataItem::extra(json!({ "examples": [5] })),
            ],
        ),
    ));

    let schema = function_schema(&signature, "claude").unwrap();
    assert_eq!(
        schema["input_schema"]["properties"]["level"],
        json!({ "type": "integer", "minimum": 0, "maximum": 11, "examples": [5] })
    );
}

// ─────────────────────────────────────────────────────────────────────
// 5. Strict mode
// ─────────────────────────────────────────────────────────────────────

#[test]
fn strict_mode() {
    let signature = Signature::new("get_weather")
        .with_docstring("Returns the weather.")
        .with_parameter(Parameter::new(
            "city",
            TypeAnnotation::string().with_metadata(FieldInfo::new().with_max_length(64)),
        ))
        .with_parameter(
            Parameter::new("unit", TypeAnnotation::optional(TypeAnnotation::string()))
                .with_default("celsius"),
        );
    let options = CompileOptions::default()
        .with_dialect(Dialect::Anthropic)
        .with_strict(true);

    assert_eq!(
        tool_schema(&signature, &options).to_value(),
        json!({
            "name": "get_weather",
            "description": "Returns the weather.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "city": { "type": "string" },
                    "unit": { "type": ["string", "null"], "default": "celsius" }
                },
                "required": ["city", "unit"],
                "additionalProperties": false
            },
            "strict": true
        })
    );
}

#[test]
fn strict_mode_admits_null_for_optional_composites() {
    let either = json!({ "oneOf": [{ "type": "string" }, { "type": "integer" }] });
    let signature = Signature::new("pick").with_parameter(Parameter::new(
        "choice",
        TypeAnnotation::optional(TypeAnnotation::Schema(either.clone())),
    ));

    let options = CompileOptions::default().with_strict(true);
    let schema = tool_schema(&signature, &options).to_value();
    assert_eq!(schema["parameters"]["required"], json!(["choice"]));
    assert_eq!(
        schema["parameters"]["properties"]["choice"],
        json!({ "anyOf": [either, { "type": "null" }] })
    );
}

// ─────────────────────────────────────────────────────────────────────
// 6. Inputs
// ─────────────────────────────────────────────────────────────────────

#[derive(JsonSchema)]
#[expect(dead_code, reason = "only the schema is used")]
struct Location {
    lat: f64,
    lon: f64,
}

#[test]
fn schemars_backed_type() {
    let signature = Signature::new("locate").with_parameter(Parameter::new(
        "at",
        TypeAnnotation::json_schema::<Location>(),
    ));

    let schema = function_schema(&signature, "openai").unwrap();
    let at = &schema["parameters"]["properties"]["at"];
    assert_eq!(at["type"], "object");
    assert_eq!(at["properties"]["lat"]["type"], "number");
    assert_eq!(schema["parameters"]["required"], json!(["at"]));
}

#[derive(JsonSchema)]
#[expect(dead_code, reason = "only the schema is used")]
struct Trip {
    from: Location,
    to: Option<Location>,
}

#[test]
fn nested_schemars_types_are_inlined() {
    let signature =
        Signature::new("plan").with_parameter(Parameter::new("trip", TypeAnnotation::json_schema::<Trip>()));

    let schema = function_schema(&signature, "claude").unwrap();
    let trip = &schema["input_schema"]["properties"]["trip"];
    assert_eq!(trip["properties"]["from"]["type"], "object");
    assert_eq!(trip["properties"]["from"]["properties"]["lon"]["type"], "number");
    assert!(!schema.to_string().contains("$ref"));
    assert!(!schema.to_string().contains("$defs"));
}

#[test]
fn deserialized_signature() {
    let signature: Signature = serde_json::from_value(json!({
        "name": "get_weather",
        "docstring": "Returns the weather.",
        "parameters": [
            { "name": "city", "annotation": { "kind": "primitive", "of": "string" } },
            {
                "name": "unit",
                "annotation": {
                    "kind": "union",
                    "of": [
                        { "kind": "primitive", "of": "string" },
                        { "kind": "primitive", "of": "null" }
                    ]
                },
                "default": "celsius"
            }
        ]
    }))
    .unwrap();

    assert_eq!(signature, get_weather());
}

#[test]
fn options_from_json() {
    let options: CompileOptions =
        serde_json::from_value(json!({ "dialect": "claude", "strict": true })).unwrap();
    let schema = tool_schema(&get_weather(), &options).to_value();
    assert_eq!(schema["strict"], true);
    assert!(schema.get("input_schema").is_some());
}

// ─────────────────────────────────────────────────────────────────────
// 7. Concurrency
// ─────────────────────────────────────────────────────────────────────

#[test]
fn compiles_from_many_threads() {
    let signature = get_weather();
    let expected = function_schema(&signature, "openai").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| function_schema(&signature, "openai").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
