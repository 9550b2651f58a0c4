//! Shared doubles for use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, ProductId, ProductInput};
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn insert(&self, product: NewProduct) -> Product;
        async fn save(&self, product: Product) -> Option<Product>;
        async fn find_by_id(&self, id: ProductId) -> Option<Product>;
        async fn find_all(&self) -> Vec<Product>;
        async fn delete_by_id(&self, id: ProductId);
        async fn exists_by_id(&self, id: ProductId) -> bool;
        async fn clear(&self);
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Clock frozen at a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 10, 30, 0).unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(fixed_now()))
}

pub fn product_input(name: &str, category: &str, unit_price: f64, stock: i32) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        category: category.to_string(),
        unit_price,
        stock_quantity: stock,
        expiration_date: None,
    }
}

pub fn stored_product(id: u64, name: &str, category: &str, unit_price: f64, stock: i32) -> Product {
    let created = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
    NewProduct::from_input(product_input(name, category, unit_price, stock), created)
        .with_id(ProductId::new(id))
}
