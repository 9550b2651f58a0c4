use async_trait::async_trait;

use super::model::{NewProduct, Product, ProductId};

/// Record store port. Every operation is total: there is nothing to fail on
/// for an in-process mapping, so no `Result` is returned.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Assigns the next unused id and stores the record.
    async fn insert(&self, product: NewProduct) -> Product;
    /// Overwrites the record stored under `product.id`. Returns `None`, and
    /// stores nothing, when that id is no longer present.
    async fn save(&self, product: Product) -> Option<Product>;
    async fn find_by_id(&self, id: ProductId) -> Option<Product>;
    /// No ordering is promised to callers.
    async fn find_all(&self) -> Vec<Product>;
    /// No-op when the id is absent.
    async fn delete_by_id(&self, id: ProductId);
    async fn exists_by_id(&self, id: ProductId) -> bool;
    async fn clear(&self);
}
