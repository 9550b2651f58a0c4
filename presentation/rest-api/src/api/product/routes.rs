use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::model::ProductId;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list_paginated::{
    ListPaginatedProductsParams, ListPaginatedProductsUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    ProductPageResponse, ProductRequest, ProductResponse, SortQuery, product_filter,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    list_paginated_use_case: Arc<dyn ListPaginatedProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        list_paginated_use_case: Arc<dyn ListPaginatedProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            list_paginated_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.parse::<u64>()
        .map(ProductId::new)
        .map_err(|_| Json(ErrorResponse::new("ValidationError", "product.invalid_id")))
}

/// Product catalog API
///
/// Endpoints for managing inventory products and browsing the catalog.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Names must be unique ignoring case.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let input = match body.0.into_input() {
            Ok(input) => input,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return CreateProductResponse::BadRequest(json);
            }
        };
        let params = CreateProductParams { input };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::BadRequest(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Without query parameters returns every product. `name` matches a
    /// case-insensitive substring, `category` keeps products whose category
    /// contains any of the given values (ignoring case), `inStock` selects by
    /// stock availability.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        name: Query<Option<String>>,
        category: Query<Option<Vec<String>>>,
        #[oai(name = "inStock")] in_stock: Query<Option<bool>>,
    ) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            filter: product_filter(name.0, category.0, in_stock.0),
        };

        let products = self.get_all_use_case.execute(params).await;
        let responses: Vec<ProductResponse> = products.into_iter().map(|p| p.into()).collect();
        GetAllProductsResponse::Ok(Json(responses))
    }

    /// List products one page at a time
    ///
    /// Sorting happens before slicing. `sortBy1` and `sortBy2` accept
    /// `name`, `category`, `unitPrice`, `stockQuantity` or `expirationDate`;
    /// a direction of `desc` sorts descending, anything else ascending.
    #[oai(path = "/products/paginated", method = "get", tag = "ApiTags::Products")]
    async fn list_paginated_products(
        &self,
        page: Query<i64>,
        size: Query<i64>,
        #[oai(name = "sortBy1")] sort_by_1: Query<Option<String>>,
        #[oai(name = "direction1")] direction_1: Query<Option<String>>,
        #[oai(name = "sortBy2")] sort_by_2: Query<Option<String>>,
        #[oai(name = "direction2")] direction_2: Query<Option<String>>,
    ) -> ListPaginatedProductsResponse {
        let sort = SortQuery {
            sort_by_1: sort_by_1.0,
            direction_1: direction_1.0,
            sort_by_2: sort_by_2.0,
            direction_2: direction_2.0,
        }
        .into_sort_spec();

        let sort = match sort {
            Ok(sort) => sort,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ListPaginatedProductsResponse::BadRequest(json);
            }
        };

        let params = ListPaginatedProductsParams {
            page: page.0,
            size: size.0,
            sort,
        };

        match self.list_paginated_use_case.execute(params).await {
            Ok(page) => ListPaginatedProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ListPaginatedProductsResponse::BadRequest(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetProductByIdResponse::NotFound(json)
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every mutable field. The creation date is kept and the last
    /// update date is refreshed.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let input = match body.0.into_input() {
            Ok(input) => input,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return UpdateProductResponse::BadRequest(json);
            }
        };
        let params = UpdateProductParams { id, input };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::BadRequest(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                DeleteProductResponse::NotFound(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListPaginatedProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
