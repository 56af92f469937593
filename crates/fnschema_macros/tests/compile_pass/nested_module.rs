use fnschema_macros::function_schema;

mod tools {
    use super::function_schema;

    #[function_schema]
    /// Add two numbers.
    pub fn add(a: i64, b: i64) -> i64 {
        a + b
    }
}

fn main() {
    assert_eq!(tools::add(1, 2), 3);
    let signature: fnschema_core::Signature = tools::add_signature();
    assert_eq!(signature.name, "add");
}
