//! Compile annotated function signatures into JSON Schema tool definitions.
//!
//! Re-exports the runtime from `fnschema_core` and the
//! `#[function_schema]` attribute from `fnschema_macros`.

pub use fnschema_core::*;
pub use fnschema_macros::function_schema;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use fnschema_core::prelude::*;
    pub use fnschema_macros::function_schema;
}
