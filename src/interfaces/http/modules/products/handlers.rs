//! Product REST API handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::dto::{AdjustStockRequest, CreateProductRequest, ProductDto, ProductListFilter};
use crate::application::CatalogService;
use crate::domain::product::ProductFilter;
use crate::interfaces::http::common::{
    error_response, ApiResponse, CallerId, PaginatedResponse, PaginationParams, ValidatedJson,
};

/// Catalog handler state
#[derive(Clone)]
pub struct CatalogAppState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(ProductListFilter, PaginationParams),
    responses(
        (status = 200, description = "Product list", body = PaginatedResponse<ProductDto>)
    )
)]
pub async fn list_products(
    State(state): State<CatalogAppState>,
    Query(filter): Query<ProductListFilter>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<ProductDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let domain_filter = ProductFilter {
        merchant_id: filter.merchant_id,
        is_available: filter.is_available,
    };

    let limit = pagination.limit();
    let (products, total) = state
        .catalog
        .list_products(&domain_filter, u64::from(limit), pagination.offset())
        .await
        .map_err(error_response)?;

    let items: Vec<ProductDto> = products.into_iter().map(Into::into).collect();
    Ok(Json(PaginatedResponse::new(
        items,
        total,
        pagination.page,
        limit,
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<CatalogAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProductDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let product = state.catalog.get_product(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    security(("caller_identity" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid product data")
    )
)]
pub async fn create_product(
    State(state): State<CatalogAppState>,
    CallerId(merchant_id): CallerId,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let created = state
        .catalog
        .create_product(body.into_domain(merchant_id))
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}/stock",
    tag = "Products",
    security(("caller_identity" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = AdjustStockRequest,
    responses(
        (status = 200, description = "Stock adjusted", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Adjustment would take stock below zero")
    )
)]
pub async fn adjust_stock(
    State(state): State<CatalogAppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<AdjustStockRequest>,
) -> Result<Json<ApiResponse<ProductDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let updated = state
        .catalog
        .adjust_stock(id, body.delta)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(updated.into())))
}
