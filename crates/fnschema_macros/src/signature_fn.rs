//! Code generation for `#[function_schema]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn};

use crate::common::{
    FieldArg, ParamInfo, extract_doc_comments, json_type_variant, parse_param, strip_param_attrs,
    to_compile_errors, validate_signature,
};
use crate::crate_path::resolve_core_path;
use crate::type_map::annotation_for;

/// Keeps the annotated function and adds a `<name>_signature()` constructor
/// next to it.
///
/// The function is re-emitted with the parameter attributes consumed by the
/// macro removed.
pub(crate) fn generate_signature_fn(input: &ItemFn) -> TokenStream {
    if let Err(err) = validate_signature(&input.sig) {
        return err.to_compile_error();
    }

    let mut errors = Vec::new();
    let mut params = Vec::new();
    for arg in &input.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            match parse_param(pat_type) {
                Ok(param) => params.push(param),
                Err(err) => errors.push(err),
            }
        }
    }

    let core = resolve_core_path();
    let parameters: Vec<TokenStream> = params
        .iter()
        .filter_map(|param| match generate_parameter(param, &core) {
            Ok(tokens) => Some(tokens),
            Err(err) => {
                errors.push(err);
                None
            }
        })
        .collect();

    if !errors.is_empty() {
        return to_compile_errors(errors);
    }

    let fn_name = &input.sig.ident;
    let fn_name_str = fn_name.to_string();
    let signature_fn = format_ident!("{}_signature", fn_name);
    let signature_doc = format!("Returns the declared signature of [`{fn_name_str}`].");

    let docstring = extract_doc_comments(&input.attrs)
        .map(|text| quote! { .with_docstring(#text) })
        .unwrap_or_default();

    let mut cleaned = input.clone();
    for arg in &mut cleaned.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            *pat_type = strip_param_attrs(pat_type);
        }
    }
    let vis = &input.vis;

    quote! {
        #cleaned

        #[doc = #signature_doc]
        #[must_use]
        #vis fn #signature_fn() -> #core::Signature {
            #core::Signature::new(#fn_name_str)
                #docstring
                #(
                    .with_parameter(#parameters)
                )*
        }
    }
}

/// Builds the `Parameter` expression for one parameter.
fn generate_parameter(param: &ParamInfo, core: &TokenStream) -> syn::Result<TokenStream> {
    let name = &param.name;
    let base = annotation_for(&param.ty, param.use_schema, core);

    let mut metadata = Vec::new();
    if let Some(description) = &param.description {
        metadata.push(quote! { #core::MetadataItem::doc(#description) });
    }
    if let Some(members) = &param.members {
        metadata.push(quote! { #core::MetadataItem::enum_class([#(#members),*]) });
    }
    if !param.field.is_empty() {
        let field = generate_field(&param.field, core)?;
        metadata.push(quote! { #core::MetadataItem::from(#field) });
    }

    let annotation = if metadata.is_empty() {
        base
    } else {
        quote! { #core::TypeAnnotation::annotated(#base, [#(#metadata),*]) }
    };

    let default = param
        .default_expr
        .as_ref()
        .map(|expr| quote! { .with_default(#core::serde_json::json!(#expr)) })
        .unwrap_or_default();

    Ok(quote! {
        #core::Parameter::new(#name, #annotation) #default
    })
}

/// Builds the `FieldInfo` expression for `#[field(..)]` arguments.
fn generate_field(args: &[FieldArg], core: &TokenStream) -> syn::Result<TokenStream> {
    let mut calls = Vec::with_capacity(args.len());
    for FieldArg { key, value } in args {
        let call = match key.to_string().as_str() {
            "minimum" | "ge" => quote! { .ge(#value) },
            "maximum" | "le" => quote! { .le(#value) },
            "exclusive_minimum" | "gt" => quote! { .gt(#value) },
            "exclusive_maximum" | "lt" => quote! { .lt(#value) },
            "min_length" => quote! { .with_min_length(#value) },
            "max_length" => quote! { .with_max_length(#value) },
            "pattern" => quote! { .with_pattern(#value) },
            "description" => quote! { .with_description(#value) },
            "required" => quote! { .with_required(#value) },
            "json_type" | "type" => {
                let variant = json_type_variant(value)?;
                quote! { .with_type(#core::JsonType::#variant) }
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    key,
                    "unknown #[field] keyword; expected one of minimum, maximum, \
                     exclusive_minimum, exclusive_maximum, min_length, max_length, pattern, \
                     description, required or json_type",
                ));
            }
        };
        calls.push(call);
    }

    Ok(quote! { #core::FieldInfo::new() #(#calls)* })
}
