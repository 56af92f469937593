//! Auto-detection of the crate path for generated code.
//!
//! Generated code refers to `fnschema_core` when the consuming crate depends
//! on it directly, and to the `fnschema` umbrella crate (which re-exports the
//! core at its root) otherwise.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

const CORE: &str = "fnschema_core";
const UMBRELLA: &str = "fnschema";

/// Returns the token path under which `Signature`, `TypeAnnotation` and
/// friends are reachable.
///
/// Resolution order:
/// 1. Direct dependency on `fnschema_core` (possibly renamed).
/// 2. The `fnschema` umbrella crate (possibly renamed).
/// 3. The literal `fnschema_core` name, so the compile error points at the
///    missing dependency.
pub(crate) fn resolve_core_path() -> TokenStream {
    let name = match crate_name(CORE) {
        Ok(FoundCrate::Itself) => CORE.to_string(),
        Ok(FoundCrate::Name(found)) => found,
        Err(_) => match crate_name(UMBRELLA) {
            Ok(FoundCrate::Itself) => UMBRELLA.to_string(),
            Ok(FoundCrate::Name(found)) => found,
            Err(_) => CORE.to_string(),
        },
    };

    let ident = format_ident!("{}", name);
    quote!(#ident)
}
