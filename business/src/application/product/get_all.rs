use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Vec<Product> {
        let products = self.repository.find_all().await;

        if params.filter.is_empty() {
            self.logger
                .info(&format!("Listing all {} products", products.len()));
            return products;
        }

        self.logger
            .debug(&format!("Filtering products with {:?}", params.filter));
        let matching = params.filter.apply(products);
        self.logger
            .info(&format!("Found {} matching products", matching.len()));
        matching
    }
}
