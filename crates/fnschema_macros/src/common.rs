//! Attribute parsing shared by the signature macro.

use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, FnArg, Ident, Lit, LitStr, Meta, Pat, PatType, Signature, Token, Type};

/// Parameter attributes consumed by `#[function_schema]`.
const PARAM_ATTRS: &[&str] = &["doc", "default", "members", "field", "schema"];

/// Rejects signatures `#[function_schema]` cannot describe.
pub(crate) fn validate_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(
            receiver,
            "#[function_schema] cannot be applied to methods with a `self` receiver",
        ));
    }
    Ok(())
}

/// Parsed information about a single function parameter.
#[derive(Debug, Clone)]
pub(crate) struct ParamInfo {
    /// Parameter name, without any `r#` prefix.
    pub name: String,
    /// Declared type.
    pub ty: Type,
    /// Description from doc comments.
    pub description: Option<String>,
    /// Default value expression from `#[default(expr)]`.
    pub default_expr: Option<Expr>,
    /// Member names from `#[members(..)]`.
    pub members: Option<Vec<String>>,
    /// Field constraints from `#[field(..)]`, in declaration order.
    pub field: Vec<FieldArg>,
    /// Whether `#[schema]` asks for the `schemars` schema of the type.
    pub use_schema: bool,
}

/// One `key = value` pair of a `#[field(..)]` attribute.
#[derive(Debug, Clone)]
pub(crate) struct FieldArg {
    pub key: Ident,
    pub value: Expr,
}

/// Joins the `#[doc]` attributes of an item, keeping relative indentation.
///
/// `///` comments arrive with a single leading space; only that space is
/// removed so that indented docstring sections survive.
pub(crate) fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if attr.path().is_ident("doc")
                && let Meta::NameValue(meta) = &attr.meta
                && let Expr::Lit(ExprLit {
                    lit: Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                let line = lit_str.value();
                Some(line.strip_prefix(' ').unwrap_or(&line).trim_end().to_string())
            } else {
                None
            }
        })
        .collect();

    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a typed function parameter into a [`ParamInfo`].
pub(crate) fn parse_param(pat_type: &PatType) -> syn::Result<ParamInfo> {
    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return Err(syn::Error::new_spanned(
            &pat_type.pat,
            "#[function_schema] parameters must be plain identifiers",
        ));
    };

    let mut info = ParamInfo {
        name: pat_ident.ident.unraw().to_string(),
        ty: (*pat_type.ty).clone(),
        description: extract_doc_comments(&pat_type.attrs),
        default_expr: None,
        members: None,
        field: Vec::new(),
        use_schema: false,
    };

    for attr in &pat_type.attrs {
        let path = attr.path();
        if path.is_ident("default") {
            info.default_expr = Some(attr.parse_args::<Expr>()?);
        } else if path.is_ident("members") {
            info.members = Some(parse_members(attr)?);
        } else if path.is_ident("field") {
            info.field.extend(parse_field_args(attr)?);
        } else if path.is_ident("schema") {
            attr.meta.require_path_only()?;
            info.use_schema = true;
        }
    }

    Ok(info)
}

/// Removes the attributes consumed by the macro so the function compiles.
pub(crate) fn strip_param_attrs(pat_type: &PatType) -> PatType {
    let mut cleaned = pat_type.clone();
    cleaned
        .attrs
        .retain(|attr| !PARAM_ATTRS.iter().any(|name| attr.path().is_ident(name)));
    cleaned
}

/// `#[members(celsius, fahrenheit)]` or `#[members("a b", "c")]`.
fn parse_members(attr: &Attribute) -> syn::Result<Vec<String>> {
    attr.parse_args_with(|input: ParseStream| {
        let mut members = Vec::new();
        while !input.is_empty() {
            if input.peek(LitStr) {
                members.push(input.parse::<LitStr>()?.value());
            } else {
                members.push(input.call(Ident::parse_any)?.unraw().to_string());
            }
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(members)
    })
}

fn parse_field_args(attr: &Attribute) -> syn::Result<Vec<FieldArg>> {
    let mut args = Vec::new();
    attr.parse_nested_meta(|meta| {
        let Some(key) = meta.path.get_ident().cloned() else {
            return Err(meta.error("expected a field keyword"));
        };
        let value: Expr = meta.value()?.parse()?;
        args.push(FieldArg { key, value });
        Ok(())
    })?;
    Ok(args)
}

/// Converts the `json_type = "..."` value of a `#[field]` attribute into the
/// matching `JsonType` variant name.
pub(crate) fn json_type_variant(value: &Expr) -> syn::Result<Ident> {
    let variant = match value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => match lit.value().as_str() {
            "object" => "Object",
            "array" => "Array",
            "string" => "String",
            "number" => "Number",
            "integer" => "Integer",
            "boolean" => "Boolean",
            _ => {
                return Err(syn::Error::new_spanned(
                    lit,
                    "unknown JSON type; expected object, array, string, number, integer or boolean",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                value,
                "`json_type` expects a string literal",
            ));
        }
    };
    Ok(Ident::new(variant, value.span()))
}

/// Combines errors into one compile error token stream.
pub(crate) fn to_compile_errors(errors: Vec<syn::Error>) -> TokenStream {
    errors
        .into_iter()
        .reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
        .map(|err| err.to_compile_error())
        .unwrap_or_default()
}
