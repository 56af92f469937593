//! Tests for the `fnschema` prelude, used the way downstream crates use it.

use fnschema::prelude::*;
use serde_json::json;

#[function_schema]
/// Convert an amount between currencies.
///
/// Args:
///     amount: Amount in the source currency.
fn convert(
    #[field(minimum = 0)] amount: f64,
    #[members(EUR, USD, NOK)] to: String,
    #[default(2)] precision: u8,
) -> String {
    format!("{amount:.prec$} {to}", prec = usize::from(precision))
}

#[test]
fn prelude_covers_macro_and_rendering() {
    assert_eq!(convert(1.5, "EUR".to_string(), 1), "1.5 EUR");

    let options = CompileOptions::default().with_dialect(Dialect::Anthropic);
    let schema = tool_schema(&convert_signature(), &options).to_value();
    assert_eq!(
        schema,
        json!({
            "name": "convert",
            "description": "Convert an amount between currencies.",
            "input_schema": {
                "type": "object",
                "properties": {
                    "amount": {
                        "type": "number",
                        "minimum": 0,
                        "description": "Amount in the source currency."
                    },
                    "to": { "type": "string", "enum": ["EUR", "USD", "NOK"] },
                    "precision": { "type": "integer", "default": 2 }
                },
                "required": ["amount", "to"]
            }
        })
    );
}

#[test]
fn function_schema_fn_and_macro_share_a_name() {
    let schema = function_schema(&convert_signature(), "openai").unwrap();
    assert!(schema.get("parameters").is_some());
    assert!(matches!(
        function_schema(&convert_signature(), "anthropic"),
        Err(fnschema::SchemaError::UnsupportedDialect(_))
    ));
}
