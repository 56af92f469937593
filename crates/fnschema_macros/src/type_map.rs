//! Syntactic mapping from Rust types to `TypeAnnotation` constructors.
//!
//! Types are matched by the last path segment, so `std::string::String`
//! and `String` map alike. Anything unrecognized becomes `Unknown`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Emits the `TypeAnnotation` expression for `ty`.
///
/// With `use_schema`, the innermost non-`Option` type is resolved through
/// its `schemars::JsonSchema` impl instead.
pub(crate) fn annotation_for(ty: &Type, use_schema: bool, core: &TokenStream) -> TokenStream {
    if use_schema {
        return match unwrap_option_inner(ty) {
            Some(inner) => quote! {
                #core::TypeAnnotation::optional(#core::TypeAnnotation::json_schema::<#inner>())
            },
            None => quote! { #core::TypeAnnotation::json_schema::<#ty>() },
        };
    }

    map_type(ty, core)
}

fn map_type(ty: &Type, core: &TokenStream) -> TokenStream {
    match ty {
        Type::Reference(reference) => map_type(&reference.elem, core),
        Type::Paren(paren) => map_type(&paren.elem, core),
        Type::Group(group) => map_type(&group.elem, core),
        Type::Slice(slice) => {
            let element = map_type(&slice.elem, core);
            quote! { #core::TypeAnnotation::array(#element) }
        }
        Type::Array(array) => {
            let element = map_type(&array.elem, core);
            quote! { #core::TypeAnnotation::array(#element) }
        }
        Type::Tuple(tuple) if tuple.elems.is_empty() => quote! { #core::TypeAnnotation::null() },
        Type::Tuple(tuple) => {
            let elements = tuple.elems.iter().map(|elem| map_type(elem, core));
            quote! { #core::TypeAnnotation::tuple([#(#elements),*]) }
        }
        Type::Path(path) => map_path(path, core),
        _ => quote! { #core::TypeAnnotation::Unknown },
    }
}

fn map_path(path: &TypePath, core: &TokenStream) -> TokenStream {
    let Some(segment) = path.path.segments.last() else {
        return quote! { #core::TypeAnnotation::Unknown };
    };
    let args = type_args(&segment.arguments);

    match segment.ident.to_string().as_str() {
        "String" | "str" | "char" | "PathBuf" | "Path" | "OsString" | "OsStr" => {
            quote! { #core::TypeAnnotation::string() }
        }
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => quote! { #core::TypeAnnotation::integer() },
        "f32" | "f64" => quote! { #core::TypeAnnotation::number() },
        "bool" => quote! { #core::TypeAnnotation::boolean() },
        "Option" => match args.as_slice() {
            [inner] => {
                let inner = map_type(inner, core);
                quote! { #core::TypeAnnotation::optional(#inner) }
            }
            _ => quote! { #core::TypeAnnotation::Unknown },
        },
        "Cow" | "Box" | "Arc" | "Rc" => match args.last() {
            Some(inner) => map_type(inner, core),
            None => quote! { #core::TypeAnnotation::Unknown },
        },
        "Vec" | "VecDeque" | "HashSet" | "BTreeSet" | "IndexSet" => match args.first() {
            Some(element) => {
                let element = map_type(element, core);
                quote! { #core::TypeAnnotation::array(#element) }
            }
            None => quote! { #core::TypeAnnotation::array(#core::TypeAnnotation::Unknown) },
        },
        "HashMap" | "BTreeMap" | "IndexMap" => {
            let value = args
                .get(1)
                .map(|value| map_type(value, core))
                .unwrap_or_else(|| quote! { #core::TypeAnnotation::Unknown });
            quote! { #core::TypeAnnotation::object_map(#value) }
        }
        _ => quote! { #core::TypeAnnotation::Unknown },
    }
}

/// The type arguments of a path segment, skipping lifetimes and consts.
fn type_args(arguments: &PathArguments) -> Vec<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Extracts `T` from `Option<T>`, returning `None` if the type is not `Option`.
fn unwrap_option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let [inner] = type_args(&segment.arguments).as_slice()
    {
        Some(*inner)
    } else {
        None
    }
}
