use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_paginated::{
    ListPaginatedProductsParams, ListPaginatedProductsUseCase,
};
use crate::domain::shared::pagination::{Page, PageRequest, paginate};

pub struct ListPaginatedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListPaginatedProductsUseCase for ListPaginatedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: ListPaginatedProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        let request = PageRequest::new(params.page, params.size).map_err(|violations| {
            self.logger.warn(&format!(
                "Rejected page request page={} size={}",
                params.page, params.size
            ));
            ProductError::Validation(violations)
        })?;

        let products = self.repository.find_all().await;
        let ordered = match params.sort {
            Some(sort) => {
                self.logger.debug(&format!("Sorting products by {:?}", sort));
                sort.apply(products)
            }
            None => products,
        };

        let page = paginate(ordered, request);
        self.logger.info(&format!(
            "Serving page {} ({} of {} products)",
            page.page,
            page.items.len(),
            page.total_count
        ));
        Ok(page)
    }
}
