use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inventory_metric::aggregator::aggregate;
use crate::domain::inventory_metric::model::InventoryMetric;
use crate::domain::inventory_metric::use_cases::compute::ComputeInventoryMetricsUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ComputeInventoryMetricsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComputeInventoryMetricsUseCase for ComputeInventoryMetricsUseCaseImpl {
    async fn execute(&self) -> Vec<InventoryMetric> {
        let products = self.repository.find_all().await;
        let metrics = aggregate(&products);
        self.logger.info(&format!(
            "Computed inventory metrics for {} categories from {} products",
            metrics.len() - 1,
            products.len()
        ));
        metrics
    }
}
