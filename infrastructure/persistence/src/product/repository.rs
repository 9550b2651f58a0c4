use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::product::model::{NewProduct, Product, ProductId};
use business::domain::product::repository::ProductRepository;

/// Process-local product store.
///
/// Reads share the lock, writes take it exclusively. Ids come from a
/// monotonic sequence starting at 1 and are never handed out twice, even
/// after a delete or `clear`. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> Product {
        let id = ProductId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let product = product.with_id(id);

        self.products.write().await.insert(id, product.clone());

        tracing::debug!(product_id = %id, "Inserted product");
        product
    }

    async fn save(&self, product: Product) -> Option<Product> {
        let mut products = self.products.write().await;
        let Some(stored) = products.get_mut(&product.id) else {
            tracing::debug!(product_id = %product.id, "Skipped save of deleted product");
            return None;
        };
        *stored = product.clone();

        tracing::debug!(product_id = %product.id, "Saved product");
        Some(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.read().await.get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        // HashMap order is arbitrary; id order keeps unsorted pages stable between requests.
        products.sort_by_key(|p| p.id);
        products
    }

    async fn delete_by_id(&self, id: ProductId) {
        if self.products.write().await.remove(&id).is_some() {
            tracing::debug!(product_id = %id, "Deleted product");
        }
    }

    async fn exists_by_id(&self, id: ProductId) -> bool {
        self.products.read().await.contains_key(&id)
    }

    async fn clear(&self) {
        self.products.write().await.clear();
        tracing::debug!("Cleared product store");
    }
}
