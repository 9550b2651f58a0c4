use std::collections::BTreeMap;

use crate::domain::product::model::Product;

use super::model::{InventoryMetric, OVERALL_LABEL};

#[derive(Default)]
struct Totals {
    quantity: i64,
    value: f64,
}

/// Groups in-stock products by their exact category string and appends an
/// `Overall` row summing every group.
///
/// Grouping is case-sensitive and untrimmed, unlike the listing filter.
/// Category rows come out in ascending category order; `Overall` is always last.
pub fn aggregate(products: &[Product]) -> Vec<InventoryMetric> {
    let mut groups: BTreeMap<&str, Totals> = BTreeMap::new();

    for product in products.iter().filter(|p| !p.is_out_of_stock()) {
        let totals = groups.entry(product.category.as_str()).or_default();
        let quantity = i64::from(product.stock_quantity);
        totals.quantity += quantity;
        totals.value += product.unit_price * quantity as f64;
    }

    let mut overall = Totals::default();
    let mut metrics: Vec<InventoryMetric> = Vec::with_capacity(groups.len() + 1);
    for (category, totals) in groups {
        overall.quantity += totals.quantity;
        overall.value += totals.value;
        metrics.push(InventoryMetric::new(category, totals.quantity, totals.value));
    }
    metrics.push(InventoryMetric::new(
        OVERALL_LABEL,
        overall.quantity,
        overall.value,
    ));

    metrics
}
