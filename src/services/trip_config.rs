// India-specific lookup tables. All of this is read-only, process-wide
// configuration consulted on every request.

pub const INTEREST_MAP: &[(&str, &str)] = &[
    ("Temples & Shrines", "temples, shrines, religious sites"),
    ("Forts & Palaces", "historic forts, palaces, royal heritage"),
    ("Cultural Heritage", "cultural heritage, traditional arts"),
    ("Traditional Food", "local cuisine, street food, traditional dishes"),
    ("Museums & Art Galleries", "museums, art galleries, exhibitions"),
];

pub const KNOWN_FREE_PLACES: &[&str] = &[
    "Gateway of India",
    "Marine Drive",
    "Juhu Beach",
    "India Gate",
    "Charminar",
    "Howrah Bridge",
    "Rock Beach",
    "Marina Beach",
    "Haji Ali Dargah",
];

/// Daily spending cap in rupees per budget tier.
pub const BUDGET_CAPS: &[(&str, u32)] = &[
    ("Budget Friendly", 2000),
    ("Moderate", 5000),
    ("Luxury Experience", 12000),
];

const BUDGET_GUIDANCE: &[(&str, &str)] = &[
    (
        "Budget Friendly",
        "Keep daily spending under ₹2,000 using free attractions and local food.",
    ),
    (
        "Moderate",
        "Spend ₹2,000–₹5,000 per day with comfort and value.",
    ),
    (
        "Luxury Experience",
        "Flexible spending with premium experiences.",
    ),
];

/// Map a user-facing interest to its descriptive phrase for the prompt.
/// Unrecognized interests are dropped by the caller.
pub fn interest_phrase(interest: &str) -> Option<&'static str> {
    INTEREST_MAP
        .iter()
        .find(|(name, _)| *name == interest)
        .map(|(_, phrase)| *phrase)
}

pub fn budget_cap(budget: &str) -> Option<u32> {
    BUDGET_CAPS
        .iter()
        .find(|(tier, _)| *tier == budget)
        .map(|(_, cap)| *cap)
}

/// Guidance sentence embedded in the prompt; empty for unknown tiers.
pub fn budget_guidance(budget: &str) -> &'static str {
    BUDGET_GUIDANCE
        .iter()
        .find(|(tier, _)| *tier == budget)
        .map(|(_, guidance)| *guidance)
        .unwrap_or("")
}

/// Trip length in days. Unrecognized durations intentionally fall back to a
/// single day rather than failing the request.
pub fn get_day_count(trip_duration: &str) -> u32 {
    match trip_duration {
        "1-day" => 1,
        "2–3 days" => 3,
        "Week" => 7,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_phrase_lookup() {
        assert_eq!(
            interest_phrase("Temples & Shrines"),
            Some("temples, shrines, religious sites")
        );
        assert_eq!(interest_phrase("Skydiving"), None);
    }

    #[test]
    fn test_budget_cap_lookup() {
        assert_eq!(budget_cap("Budget Friendly"), Some(2000));
        assert_eq!(budget_cap("Moderate"), Some(5000));
        assert_eq!(budget_cap("Luxury Experience"), Some(12000));
        assert_eq!(budget_cap("Backpacker"), None);
    }

    #[test]
    fn test_budget_guidance_unknown_tier_is_empty() {
        assert_eq!(budget_guidance("Backpacker"), "");
        assert!(budget_guidance("Moderate").contains("₹2,000–₹5,000"));
    }

    #[test]
    fn test_get_day_count() {
        assert_eq!(get_day_count("1-day"), 1);
        assert_eq!(get_day_count("2–3 days"), 3);
        assert_eq!(get_day_count("Week"), 7);
        assert_eq!(get_day_count("Fortnight"), 1);
        assert_eq!(get_day_count(""), 1);
    }
}
