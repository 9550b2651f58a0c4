use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::InMemoryProductRepository;

use business::application::inventory_metric::compute::ComputeInventoryMetricsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list_paginated::ListPaginatedProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::clock::SystemClock;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub inventory_metric_api: crate::api::inventory_metric::routes::InventoryMetricApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let clock = Arc::new(SystemClock);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(InMemoryProductRepository::new());

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            clock,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_paginated_use_case = Arc::new(ListPaginatedProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Inventory metric use cases
        let compute_metrics_use_case = Arc::new(ComputeInventoryMetricsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            list_paginated_use_case,
        );

        let inventory_metric_api =
            crate::api::inventory_metric::routes::InventoryMetricApi::new(compute_metrics_use_case);

        Self {
            health_api,
            product_api,
            inventory_metric_api,
        }
    }
}
