//! Order REST API handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::dto::{CreateOrderRequest, OrderDto, OrderListParams, OrderSummaryDto};
use crate::application::{OrderService, PlaceOrder};
use crate::domain::order::OrderRole;
use crate::interfaces::http::common::{
    error_response, ApiResponse, CallerId, ValidatedJson,
};

/// Order handler state
#[derive(Clone)]
pub struct OrderAppState {
    pub orders: Arc<OrderService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Orders",
    security(("caller_identity" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderDto>),
        (status = 400, description = "Invalid request or cross-merchant cart"),
        (status = 404, description = "A requested product does not exist"),
        (status = 409, description = "Insufficient stock")
    )
)]
pub async fn create_order(
    State(state): State<OrderAppState>,
    CallerId(customer_id): CallerId,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let request = PlaceOrder {
        merchant_id: body.merchant_id,
        items: body.items_as_lines(),
        payment_method: body.payment_method.into(),
        delivery_address_id: body.delivery_address_id,
        notes: body.notes.clone(),
    };

    let order = state
        .orders
        .place_order(customer_id, request)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(OrderDto::from_domain(order))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/my",
    tag = "Orders",
    security(("caller_identity" = [])),
    params(OrderListParams),
    responses(
        (status = 200, description = "Caller's purchase history, newest first", body = ApiResponse<Vec<OrderSummaryDto>>)
    )
)]
pub async fn list_my_orders(
    State(state): State<OrderAppState>,
    CallerId(customer_id): CallerId,
    Query(params): Query<OrderListParams>,
) -> Result<Json<ApiResponse<Vec<OrderSummaryDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let summaries = state
        .orders
        .list_orders(customer_id, OrderRole::Customer, u64::from(params.limit))
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(
        summaries.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/merchant",
    tag = "Orders",
    security(("caller_identity" = [])),
    params(OrderListParams),
    responses(
        (status = 200, description = "Caller's sales, newest first", body = ApiResponse<Vec<OrderSummaryDto>>)
    )
)]
pub async fn list_merchant_orders(
    State(state): State<OrderAppState>,
    CallerId(merchant_id): CallerId,
    Query(params): Query<OrderListParams>,
) -> Result<Json<ApiResponse<Vec<OrderSummaryDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let summaries = state
        .orders
        .list_orders(merchant_id, OrderRole::Merchant, u64::from(params.limit))
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(
        summaries.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = "Orders",
    security(("caller_identity" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its lines", body = ApiResponse<OrderDto>),
        (status = 404, description = "Not found or caller is not a participant")
    )
)]
pub async fn get_order(
    State(state): State<OrderAppState>,
    CallerId(caller): CallerId,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let (order, lines) = state
        .orders
        .get_order(caller, id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(OrderDto::with_lines(
        order, lines,
    ))))
}
