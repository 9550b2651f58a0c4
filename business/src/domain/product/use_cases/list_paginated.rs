use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::sort::SortSpec;
use crate::domain::shared::pagination::Page;

pub struct ListPaginatedProductsParams {
    /// Zero-based.
    pub page: i64,
    pub size: i64,
    /// `None` keeps the store's own order.
    pub sort: Option<SortSpec>,
}

#[async_trait]
pub trait ListPaginatedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListPaginatedProductsParams,
    ) -> Result<Page<Product>, ProductError>;
}
