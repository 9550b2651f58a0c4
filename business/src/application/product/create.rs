use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let input = params.input;
        self.logger.info(&format!("Creating product: {}", input.name));

        input.validate(self.clock.today())?;

        let wanted = input.name.to_lowercase();
        let name_taken = self
            .repository
            .find_all()
            .await
            .iter()
            .any(|p| p.name.to_lowercase() == wanted);
        if name_taken {
            self.logger
                .warn(&format!("Rejected duplicate product name: {}", input.name));
            return Err(ProductError::DuplicateName(input.name));
        }

        let product = self
            .repository
            .insert(NewProduct::from_input(input, self.clock.now()))
            .await;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
