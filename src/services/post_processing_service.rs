use regex::Regex;
use std::env;

use crate::models::cost::{BudgetCard, CostRange};
use crate::services::trip_config::{budget_cap, get_day_count, KNOWN_FREE_PLACES};

const ATTRACTIONS_LABEL: &str = "Attractions per day";
const FOOD_LABEL: &str = "Food per day";
const TRANSPORT_LABEL: &str = "Transport per day";

/// Which budget annotation gets appended to the generated itinerary.
/// The endpoint accreted two styles over time; this flag selects between
/// them instead of duplicating the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetMode {
    None,
    StaticNote,
    AggregatedSummary,
}

impl BudgetMode {
    /// Read from BUDGET_SUMMARY_MODE; unknown values fall back to the
    /// static note, the original behavior of the endpoint.
    pub fn from_env() -> Self {
        match env::var("BUDGET_SUMMARY_MODE") {
            Ok(value) => match value.to_lowercase().as_str() {
                "none" => BudgetMode::None,
                "aggregated" => BudgetMode::AggregatedSummary,
                _ => BudgetMode::StaticNote,
            },
            Err(_) => BudgetMode::StaticNote,
        }
    }
}

#[derive(Clone)]
pub struct PostProcessingService {
    mode: BudgetMode,
}

impl PostProcessingService {
    pub fn new(mode: BudgetMode) -> Self {
        Self { mode }
    }

    pub fn from_env() -> Self {
        Self::new(BudgetMode::from_env())
    }

    /// Full pipeline: force known free attractions to read "Free", then
    /// append the configured budget annotation. Nothing in here fails the
    /// request; unmatched patterns degrade to soft defaults.
    pub fn process(&self, text: &str, budget: &str, trip_duration: &str) -> String {
        let text = normalize_costs(text);

        match self.mode {
            BudgetMode::None => text,
            BudgetMode::StaticNote => enforce_budget_language(&text, budget),
            BudgetMode::AggregatedSummary => {
                let card = build_budget_card(&text, budget, trip_duration);
                format!("{}{}", text, card.render())
            }
        }
    }
}

/// Rewrite any paid cost label on a known always-free attraction to "Free".
/// Longer names are replaced first so a name embedded in a longer one never
/// clobbers it.
pub fn normalize_costs(text: &str) -> String {
    let mut places: Vec<&str> = KNOWN_FREE_PLACES.to_vec();
    places.sort_by_key(|place| std::cmp::Reverse(place.len()));

    let mut text = text.to_string();
    for place in places {
        for label in ["Low-cost", "Moderate", "Premium"] {
            text = text.replace(
                &format!("{} – {}", place, label),
                &format!("{} – Free", place),
            );
        }
    }
    text
}

/// Append the static note matching the tier's daily cap. Unknown tiers get
/// no note.
pub fn enforce_budget_language(text: &str, budget: &str) -> String {
    let cap = match budget_cap(budget) {
        Some(cap) => cap,
        None => return text.to_string(),
    };

    let note = if cap <= 2000 {
        "\n\n📝 Budget Note: Focuses on free attractions, street food, and public transport."
    } else if cap <= 5000 {
        "\n\n📝 Budget Note: Balanced comfort with popular attractions."
    } else {
        "\n\n📝 Budget Note: Includes premium experiences and flexible spending."
    };

    format!("{}{}", text, note)
}

/// Best-effort extraction of a labeled rupee range such as
/// "Food per day: ₹300–400". Case-insensitive label, hyphen or en-dash
/// separator, first occurrence only. Anything that does not match yields
/// (0, 0) rather than an error.
pub fn extract_range(text: &str, label: &str) -> CostRange {
    let pattern = format!(
        r"(?i){}[^0-9\n]*?(\d+)\s*[–-]\s*₹?\s*(\d+)",
        regex::escape(label)
    );

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return CostRange::default(),
    };

    match re.captures(text) {
        Some(captures) => {
            let min = captures[1].parse::<u32>().unwrap_or(0);
            let max = captures[2].parse::<u32>().unwrap_or(0);
            CostRange::new(min, max)
        }
        None => CostRange::default(),
    }
}

/// Extract the per-day category ranges, scale them to the trip length, and
/// compare the total against the tier's cap. Extraction misses render as
/// ₹0–₹0 in the card; only a known cap can produce a warning.
pub fn build_budget_card(text: &str, budget: &str, trip_duration: &str) -> BudgetCard {
    let days = get_day_count(trip_duration);

    let attractions = extract_range(text, ATTRACTIONS_LABEL).scale(days);
    let food = extract_range(text, FOOD_LABEL).scale(days);
    let transport = extract_range(text, TRANSPORT_LABEL).scale(days);

    let total = attractions.add(&food).add(&transport);

    let warning = budget_cap(budget).and_then(|cap| {
        if total.max > cap.saturating_mul(days) {
            Some(format!(
                "⚠️ Estimated total may exceed your {} budget. Consider reducing premium activities or dining.",
                budget
            ))
        } else {
            None
        }
    });

    BudgetCard {
        attractions,
        food,
        transport,
        total,
        days,
        budget: budget.to_string(),
        warning,
    }
}
