// Pipeline tests against a realistic generated itinerary, covering both
// budget annotation modes end to end.

use yatra_api::services::post_processing_service::{BudgetMode, PostProcessingService};

const SAMPLE_ITINERARY: &str = "\
Day 1:
Morning: Gateway of India – Moderate
Start your day at Mumbai's iconic waterfront arch, built to commemorate
the visit of King George V. Watch the boats head out to Elephanta.
Suggested timing: 8:00–10:00 AM

Afternoon: Haji Ali Dargah – Low-cost
Walk the causeway to this striking mosque and tomb resting on an islet
off Worli. The qawwali performances are a highlight.

Evening: Marine Drive – Premium
Stroll the Queen's Necklace at sunset and grab bhel puri from a vendor.

Local food: vada pav, pav bhaji
Attractions per day: ₹100–300
Food per day: ₹300–400
Transport per day: ₹100-200
Estimated daily spend range: ₹500–900";

#[test]
fn test_static_note_mode_full_pipeline() {
    let service = PostProcessingService::new(BudgetMode::StaticNote);
    let output = service.process(SAMPLE_ITINERARY, "Budget Friendly", "1-day");

    // All three known-free attractions forced to Free
    assert!(output.contains("Gateway of India – Free"));
    assert!(output.contains("Haji Ali Dargah – Free"));
    assert!(output.contains("Marine Drive – Free"));
    assert!(!output.contains("Gateway of India – Moderate"));

    // Narrative text untouched
    assert!(output.contains("Watch the boats head out to Elephanta."));
    assert!(output.contains("vada pav, pav bhaji"));

    assert!(output.ends_with(
        "📝 Budget Note: Focuses on free attractions, street food, and public transport."
    ));
}

#[test]
fn test_static_note_varies_by_tier() {
    let service = PostProcessingService::new(BudgetMode::StaticNote);

    let moderate = service.process(SAMPLE_ITINERARY, "Moderate", "1-day");
    assert!(moderate.ends_with("📝 Budget Note: Balanced comfort with popular attractions."));

    let luxury = service.process(SAMPLE_ITINERARY, "Luxury Experience", "1-day");
    assert!(luxury.ends_with("📝 Budget Note: Includes premium experiences and flexible spending."));
}

#[test]
fn test_aggregated_mode_single_day() {
    let service = PostProcessingService::new(BudgetMode::AggregatedSummary);
    let output = service.process(SAMPLE_ITINERARY, "Budget Friendly", "1-day");

    assert!(output.contains("💰 BUDGET SUMMARY (1 day, Budget Friendly)"));
    assert!(output.contains("Attractions: ₹100–₹300"));
    assert!(output.contains("Food: ₹300–₹400"));
    // Hyphen-separated range parses the same as the en-dash ones
    assert!(output.contains("Transport: ₹100–₹200"));
    assert!(output.contains("Estimated total: ₹500–₹900"));
    // 900 is well under the ₹2000 daily cap
    assert!(!output.contains("⚠️"));
}

#[test]
fn test_aggregated_mode_scales_to_week() {
    let service = PostProcessingService::new(BudgetMode::AggregatedSummary);
    let output = service.process(SAMPLE_ITINERARY, "Moderate", "Week");

    assert!(output.contains("💰 BUDGET SUMMARY (7 days, Moderate)"));
    assert!(output.contains("Attractions: ₹700–₹2100"));
    assert!(output.contains("Estimated total: ₹3500–₹6300"));
    assert!(!output.contains("⚠️"));
}

#[test]
fn test_aggregated_mode_overage_warning() {
    let expensive = "Attractions per day: ₹1500–2500\n\
                     Food per day: ₹500–800\n\
                     Transport per day: ₹200–400";

    let service = PostProcessingService::new(BudgetMode::AggregatedSummary);
    let output = service.process(expensive, "Budget Friendly", "1-day");

    // 3700 > 2000 × 1
    assert!(output.contains("Estimated total: ₹2200–₹3700"));
    assert!(output.contains("⚠️"));
    assert!(output.contains("reducing premium activities or dining"));
}

#[test]
fn test_aggregated_mode_renders_zeros_when_nothing_matches() {
    let service = PostProcessingService::new(BudgetMode::AggregatedSummary);
    let output = service.process("A lovely prose-only itinerary.", "Moderate", "2–3 days");

    assert!(output.starts_with("A lovely prose-only itinerary."));
    assert!(output.contains("Attractions: ₹0–₹0"));
    assert!(output.contains("Food: ₹0–₹0"));
    assert!(output.contains("Transport: ₹0–₹0"));
    assert!(output.contains("Estimated total: ₹0–₹0"));
    assert!(!output.contains("⚠️"));
}

#[test]
fn test_unknown_duration_defaults_to_one_day() {
    let service = PostProcessingService::new(BudgetMode::AggregatedSummary);
    let output = service.process(SAMPLE_ITINERARY, "Moderate", "Fortnight");

    assert!(output.contains("💰 BUDGET SUMMARY (1 day, Moderate)"));
    assert!(output.contains("Estimated total: ₹500–₹900"));
}
