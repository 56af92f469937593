use fnschema_macros::function_schema;

#[function_schema]
/// Resize an image.
fn resize(
    #[field(gt = 0, le = 4096, required = true)] width: u32,
    #[field(exclusive_minimum = 0.0, exclusive_maximum = 10.5)] scale: f64,
    #[field(json_type = "integer", min_length = 1)] label: String,
    #[field(minimum = -90, maximum = 90)] angle: i32,
) -> bool {
    width > 0 && scale > 0.0 && !label.is_empty() && angle.abs() <= 90
}

fn main() {
    let _ = resize(1, 1.0, "a".to_string(), 0);
    let schema = fnschema_core::function_schema(&resize_signature(), "openai").unwrap();
    assert_eq!(schema["parameters"]["properties"]["angle"]["minimum"], -90);
}
