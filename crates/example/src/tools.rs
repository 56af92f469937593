//! Tool functions described with `#[function_schema]`.

use fnschema::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[function_schema]
/// Returns the weather.
///
/// Args:
///     city: The city to look up.
///     unit: Temperature unit.
pub fn get_weather(
    city: String,
    #[default("celsius")]
    #[members(celsius, fahrenheit)]
    unit: Option<String>,
) -> String {
    let unit = unit.unwrap_or_else(|| "celsius".to_string());
    format!("21 degrees {unit} in {city}")
}

#[function_schema]
/// Search indexed documents.
///
/// # Arguments
///
/// * `query` - Free-text query.
/// * `limit` - Maximum number of hits.
pub fn search_documents(
    #[field(min_length = 1, max_length = 200)] query: &str,
    #[field(minimum = 1, maximum = 100)]
    #[default(10)]
    limit: u32,
    tags: Option<Vec<String>>,
) -> Vec<String> {
    let mut hits = vec![query.to_string(); limit.min(3) as usize];
    hits.extend(tags.unwrap_or_default());
    hits
}

/// A closed time range.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TimeRange {
    /// Start, as an RFC 3339 timestamp.
    pub start: String,
    /// End, as an RFC 3339 timestamp.
    pub end: String,
}

#[function_schema]
/// Book a meeting room.
pub fn book_room(
    /// Room identifier.
    room: String,
    /// When the room is needed.
    #[schema]
    during: TimeRange,
    /// Attendee emails.
    attendees: Vec<String>,
) -> bool {
    !room.is_empty() && !attendees.is_empty() && during.start <= during.end
}

/// Every example tool signature, in display order.
#[must_use]
pub fn signatures() -> Vec<Signature> {
    vec![
        get_weather_signature(),
        search_documents_signature(),
        book_room_signature(),
    ]
}
