use poem_openapi::Object;

use business::domain::inventory_metric::model::InventoryMetric;

/// Stock totals for one category. The last row, labelled `Overall`, covers
/// every in-stock product.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct InventoryMetricResponse {
    pub category: String,
    /// Units in stock across the category
    #[oai(rename = "totalProducts")]
    pub total_quantity: i64,
    /// Sum of unit price times stock quantity
    pub total_value: f64,
    pub average_price: f64,
}

impl From<InventoryMetric> for InventoryMetricResponse {
    fn from(metric: InventoryMetric) -> Self {
        Self {
            category: metric.category,
            total_quantity: metric.total_quantity,
            total_value: metric.total_value,
            average_price: metric.average_price,
        }
    }
}
