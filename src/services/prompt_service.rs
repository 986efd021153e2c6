use crate::models::trip::TripRequest;
use crate::services::trip_config::{budget_guidance, interest_phrase};

/// System + user message pair sent to the chat-completions API.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

const SYSTEM_MESSAGE: &str = "You are a professional Indian travel guide. \
    Be descriptive, engaging, and informative while staying factually safe. \
    Never invent exact prices.";

pub struct PromptService;

impl PromptService {
    /// Build the full prompt for a validated trip request. Deterministic;
    /// missing optional fields just drop their clause.
    pub fn compose(request: &TripRequest) -> ComposedPrompt {
        let city = request.city.as_deref().unwrap_or("");

        let interest_str = request
            .interests
            .iter()
            .filter_map(|interest| interest_phrase(interest))
            .collect::<Vec<_>>()
            .join(", ");

        let location_str = match &request.location {
            Some(location) => format!("The user is currently near {}. ", location),
            None => String::new(),
        };

        let guidance = budget_guidance(&request.budget);

        let user = format!(
            "\nYou are an expert Indian travel planner and storyteller.\n\n\
{location_str}\n\
Create a {trip_duration} itinerary for {city}.\n\n\
User Interests: {interest_str}\n\
Budget Category: {budget}\n\
Budget Guidance: {guidance}\n\n\
IMPORTANT STYLE REQUIREMENTS:\n\
- Each attraction MUST include a short descriptive paragraph (2–3 lines).\n\
- Explain why the place is famous or worth visiting.\n\
- Mention historical, cultural, or experiential value.\n\
- Suggest what the traveler should DO there.\n\
- Maintain an engaging, friendly tone.\n\n\
STRICT COST RULES:\n\
- NEVER invent exact monument entry fees.\n\
- Use ONLY these cost labels:\n\
  • Free\n\
  • Low-cost (₹0–₹100)\n\
  • Moderate (₹100–₹500)\n\
  • Premium (₹500+)\n\
- Food & transport may be estimated as ranges.\n\
- If unsure, say \"Cost varies\".\n\n\
FOR EACH DAY INCLUDE:\n\
- Morning / Afternoon / Evening plan\n\
- Attraction name + description + cost label\n\
- Suggested timings\n\
- Local food suggestions with cost range\n\
- Transport estimate\n\
- Estimated daily spend range\n\n\
Respond in plain text using:\n\
Day 1:\n\
Day 2:\n\
etc.\n",
            location_str = location_str,
            trip_duration = request.trip_duration,
            city = city,
            interest_str = interest_str,
            budget = request.budget,
            guidance = guidance,
        );

        ComposedPrompt {
            system: SYSTEM_MESSAGE.to_string(),
            user,
        }
    }
}
