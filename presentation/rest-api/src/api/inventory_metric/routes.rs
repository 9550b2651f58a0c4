use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::inventory_metric::use_cases::compute::ComputeInventoryMetricsUseCase;

use crate::api::inventory_metric::dto::InventoryMetricResponse;
use crate::api::tags::ApiTags;

pub struct InventoryMetricApi {
    compute_use_case: Arc<dyn ComputeInventoryMetricsUseCase>,
}

impl InventoryMetricApi {
    pub fn new(compute_use_case: Arc<dyn ComputeInventoryMetricsUseCase>) -> Self {
        Self { compute_use_case }
    }
}

#[OpenApi]
impl InventoryMetricApi {
    /// Inventory metrics per category
    ///
    /// Out-of-stock products are left out. Categories come in ascending
    /// order followed by the `Overall` row.
    #[oai(
        path = "/products/metrics",
        method = "get",
        tag = "ApiTags::InventoryMetrics"
    )]
    async fn get_metrics(&self) -> Json<Vec<InventoryMetricResponse>> {
        let metrics = self.compute_use_case.execute().await;
        Json(metrics.into_iter().map(|m| m.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::setup::dependency_injection::DependencyContainer;

    #[tokio::test]
    async fn should_return_category_rows_then_overall() {
        let container = DependencyContainer::new();
        let service = OpenApiService::new(
            (container.product_api, container.inventory_metric_api),
            "Inventory Service API",
            "test",
        );
        let cli = TestClient::new(Route::new().nest("/", service));

        for (name, category, price, stock) in [
            ("Milk", "Dairy", 2.0, 5),
            ("Cheese", "Dairy", 6.0, 5),
            ("Bread", "Bakery", 1.5, 0),
            ("Apples", "Fruit", 1.0, 10),
        ] {
            cli.post("/products")
                .body_json(&json!({
                    "name": name,
                    "category": category,
                    "unitPrice": price,
                    "stockQuantity": stock,
                }))
                .send()
                .await
                .assert_status(poem::http::StatusCode::CREATED);
        }

        let resp = cli.get("/products/metrics").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let rows = json.value().array();
        rows.assert_len(3);

        let dairy = rows.get(0).object();
        dairy.get("category").assert_string("Dairy");
        dairy.get("totalProducts").assert_i64(10);
        dairy.get("totalValue").assert_f64(40.0);
        dairy.get("averagePrice").assert_f64(4.0);

        rows.get(1).object().get("category").assert_string("Fruit");

        let overall = rows.get(2).object();
        overall.get("category").assert_string("Overall");
        overall.get("totalProducts").assert_i64(20);
        overall.get("totalValue").assert_f64(50.0);
        overall.get("averagePrice").assert_f64(2.5);
    }

    #[tokio::test]
    async fn should_return_only_overall_row_when_store_is_empty() {
        let container = DependencyContainer::new();
        let service =
            OpenApiService::new(container.inventory_metric_api, "Inventory Service API", "test");
        let cli = TestClient::new(Route::new().nest("/", service));

        let resp = cli.get("/products/metrics").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let rows = json.value().array();
        rows.assert_len(1);
        let overall = rows.get(0).object();
        overall.get("category").assert_string("Overall");
        overall.get("totalProducts").assert_i64(0);
        overall.get("averagePrice").assert_f64(0.0);
    }
}
