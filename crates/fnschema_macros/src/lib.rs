//! Procedural macros for fnschema.
//!
//! Provides `#[function_schema]`, which reads a function's parameters and doc
//! comments at compile time and emits a companion constructor returning its
//! `Signature`.

mod common;
mod crate_path;
mod signature_fn;
mod type_map;

use proc_macro::TokenStream;

/// Generates a `<name>_signature()` constructor for a free function.
///
/// The function itself is kept unchanged apart from the parameter
/// attributes below, which are consumed. Its doc comments become the raw
/// docstring, so Google `Args:`, Sphinx `:param:` and rustdoc `# Arguments`
/// sections all supply parameter descriptions.
///
/// # Parameter Attributes
///
/// - `/// doc comment`: the parameter's description
/// - `#[default(value)]`: makes the parameter optional with a default value
/// - `#[members(a, b)]`: restricts the parameter to the listed names
/// - `#[field(minimum = 1, max_length = 64, pattern = "...")]`: JSON Schema
///   constraints; also `maximum`, `exclusive_minimum`, `exclusive_maximum`,
///   `min_length`, `description`, `required` and `json_type`
/// - `#[schema]`: uses the type's `schemars::JsonSchema` schema
///
/// # Type Mapping
///
/// Strings, integers, floats and `bool` map to their JSON types; `Vec`,
/// sets, slices and arrays to `array`; maps to `object`; tuples to
/// positional arrays; `()` to `null`; `Option<T>` to an optional `T`.
/// `Box`, `Arc`, `Rc`, `Cow` and references are transparent. Anything else
/// is left unconstrained unless marked `#[schema]`.
///
/// # Example
///
/// ```
/// use fnschema_core::function_schema as render;
/// use fnschema_macros::function_schema;
///
/// #[function_schema]
/// /// Get the current weather.
/// fn get_weather(
///     /// The city name.
///     city: String,
///     #[default("celsius")]
///     #[members(celsius, fahrenheit)]
///     unit: Option<String>,
/// ) -> String {
///     format!("{city}: 21 {}", unit.unwrap_or_default())
/// }
///
/// let schema = render(&get_weather_signature(), "openai").unwrap();
/// assert_eq!(schema["parameters"]["required"][0], "city");
/// ```
#[proc_macro_attribute]
pub fn function_schema(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    signature_fn::generate_signature_fn(&input).into()
}
