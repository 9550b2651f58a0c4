use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        params.input.validate(self.clock.today())?;

        let mut product = self
            .repository
            .find_by_id(params.id)
            .await
            .ok_or(ProductError::NotFound(params.id))?;

        product.apply_update(params.input, self.clock.now());
        // The record may have been deleted since it was read.
        let product = self
            .repository
            .save(product)
            .await
            .ok_or(ProductError::NotFound(params.id))?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductId;
    use crate::test_support::{
        MockProductRepo, fixed_clock, fixed_now, mock_logger, product_input, stored_product,
    };
    use chrono::NaiveDate;

    #[tokio::test]
    async fn should_overwrite_mutable_fields_when_product_exists() {
        let original = stored_product(5, "Bread", "Bakery", 15.0, 5);
        let created = original.creation_date;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == ProductId::new(5))
            .returning(move |_| Some(original.clone()));
        mock_repo.expect_save().times(1).returning(|product| Some(product));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let mut input = product_input("Wholegrain Bread", "Bakery", 18.0, 12);
        input.expiration_date = NaiveDate::from_ymd_opt(2026, 3, 22);

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(5),
                input,
            })
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.creation_date, created);
        assert_eq!(product.last_updated_date, fixed_now());
        assert!(product.last_updated_date > created);
        assert_eq!(product.name, "Wholegrain Bread");
        assert_eq!(product.unit_price, 18.0);
        assert_eq!(product.stock_quantity, 12);
        assert_eq!(product.expiration_date, NaiveDate::from_ymd_opt(2026, 3, 22));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| None);
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(42),
                input: product_input("Butter", "Dairy", 3.0, 1),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == ProductId::new(42)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_deleted_before_save() {
        let original = stored_product(8, "Butter", "Dairy", 3.0, 4);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Some(original.clone()));
        mock_repo.expect_save().times(1).returning(|_| None);

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(8),
                input: product_input("Butter", "Dairy", 3.5, 4),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == ProductId::new(8)));
    }

    #[tokio::test]
    async fn should_reject_update_when_input_is_invalid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().never();
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                input: product_input("Butter", "", -1.0, 1),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(v)) if v.len() == 2));
    }

    #[tokio::test]
    async fn should_clear_expiration_date_when_update_omits_it() {
        let mut original = stored_product(3, "Cheese", "Dairy", 4.0, 2);
        original.expiration_date = NaiveDate::from_ymd_opt(2026, 5, 1);

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Some(original.clone()));
        mock_repo.expect_save().returning(|product| Some(product));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: fixed_clock(),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(3),
                input: product_input("Cheese", "Dairy", 4.0, 2),
            })
            .await
            .unwrap();

        assert_eq!(product.expiration_date, None);
    }
}
