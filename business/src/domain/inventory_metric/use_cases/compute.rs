use async_trait::async_trait;

use crate::domain::inventory_metric::model::InventoryMetric;

#[async_trait]
pub trait ComputeInventoryMetricsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<InventoryMetric>;
}
