/// An estimated spend range in rupees, as extracted from itinerary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl CostRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Scale both ends of the range by a day count. Saturates instead of
    /// overflowing; extracted figures come from arbitrary LLM text.
    pub fn scale(&self, days: u32) -> Self {
        Self {
            min: self.min.saturating_mul(days),
            max: self.max.saturating_mul(days),
        }
    }

    pub fn add(&self, other: &CostRange) -> Self {
        Self {
            min: self.min.saturating_add(other.min),
            max: self.max.saturating_add(other.max),
        }
    }
}

/// Rendered budget summary appended to an itinerary in aggregated mode.
///
/// Category ranges are already scaled to the full trip length. Extraction
/// misses leave ranges at (0, 0), which still render as ₹0–₹0.
#[derive(Debug, Clone)]
pub struct BudgetCard {
    pub attractions: CostRange,
    pub food: CostRange,
    pub transport: CostRange,
    pub total: CostRange,
    pub days: u32,
    pub budget: String,
    pub warning: Option<String>,
}

impl BudgetCard {
    pub fn render(&self) -> String {
        let mut block = format!(
            "\n\n💰 BUDGET SUMMARY ({} day{}, {})\n\
             Attractions: ₹{}–₹{}\n\
             Food: ₹{}–₹{}\n\
             Transport: ₹{}–₹{}\n\
             Estimated total: ₹{}–₹{}",
            self.days,
            if self.days == 1 { "" } else { "s" },
            self.budget,
            self.attractions.min,
            self.attractions.max,
            self.food.min,
            self.food.max,
            self.transport.min,
            self.transport.max,
            self.total.min,
            self.total.max,
        );

        if let Some(warning) = &self.warning {
            block.push('\n');
            block.push_str(warning);
        }

        block
    }
}
