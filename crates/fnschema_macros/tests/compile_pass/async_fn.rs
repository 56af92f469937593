use fnschema_macros::function_schema;

#[function_schema]
/// Fetch a page.
async fn fetch(url: String, #[default(3)] retries: u8) -> usize {
    url.len() + usize::from(retries)
}

fn main() {
    let _pending = fetch(String::new(), 1);
    let signature = fetch_signature();
    assert_eq!(signature.parameters.len(), 2);
}
