use async_trait::async_trait;

use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;

#[derive(Default)]
pub struct GetAllProductsParams {
    pub filter: ProductFilter,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Vec<Product>;
}
