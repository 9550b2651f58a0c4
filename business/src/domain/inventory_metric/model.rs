/// Label of the roll-up row appended after the per-category rows.
pub const OVERALL_LABEL: &str = "Overall";

/// Stock totals for one category, or for the whole in-stock inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryMetric {
    pub category: String,
    pub total_quantity: i64,
    /// Sum of unit price times stock quantity.
    pub total_value: f64,
    /// `total_value / total_quantity`, or 0 when nothing is counted.
    pub average_price: f64,
}

impl InventoryMetric {
    pub fn new(category: impl Into<String>, total_quantity: i64, total_value: f64) -> Self {
        let average_price = if total_quantity == 0 {
            0.0
        } else {
            total_value / total_quantity as f64
        };
        Self {
            category: category.into(),
            total_quantity,
            total_value,
            average_price,
        }
    }

    pub fn is_overall(&self) -> bool {
        self.category == OVERALL_LABEL
    }
}
