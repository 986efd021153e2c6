use serde::{Deserialize, Serialize};

fn default_trip_duration() -> String {
    "1-day".to_string()
}

fn default_budget() -> String {
    "Moderate".to_string()
}

/// Inbound body for POST /api/itinerary/generate.
///
/// `city` stays optional at the serde level so the handler can return the
/// exact validation error body instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub city: Option<String>,
    pub location: Option<String>,
    #[serde(default = "default_trip_duration")]
    pub trip_duration: String,
    #[serde(default = "default_budget")]
    pub budget: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
