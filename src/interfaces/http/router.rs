//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CatalogService, OrderService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::modules::{health, orders, products};

/// Security scheme modifier for OpenAPI: the upstream gateway forwards the
/// authenticated principal in the X-User-Id header.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "caller_identity",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-User-Id"))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Products
        products::handlers::list_products,
        products::handlers::get_product,
        products::handlers::create_product,
        products::handlers::adjust_stock,
        // Orders
        orders::handlers::create_order,
        orders::handlers::list_my_orders,
        orders::handlers::list_merchant_orders,
        orders::handlers::get_order,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<products::ProductDto>,
            PaginationParams,
            // Health
            health::handlers::HealthStatus,
            // Products
            products::ProductDto,
            products::CreateProductRequest,
            products::AdjustStockRequest,
            // Orders
            orders::CreateOrderRequest,
            orders::OrderItemRequest,
            orders::PaymentMethodDto,
            orders::OrderDto,
            orders::OrderLineDto,
            orders::OrderSummaryDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Products", description = "Product catalog and stock management"),
        (name = "Orders", description = "Order placement and history"),
    ),
    info(
        title = "Bairro Market API",
        version = "1.0.0",
        description = "REST API for the local marketplace order engine",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>) -> Router {
    let order_service = Arc::new(OrderService::new(repos.clone()));
    let catalog_service = Arc::new(CatalogService::new(repos));

    let order_state = orders::OrderAppState {
        orders: order_service,
    };
    let catalog_state = products::CatalogAppState {
        catalog: catalog_service,
    };

    let order_routes = Router::new()
        .route("/", post(orders::handlers::create_order))
        .route("/my", get(orders::handlers::list_my_orders))
        .route("/merchant", get(orders::handlers::list_merchant_orders))
        .route("/{id}", get(orders::handlers::get_order))
        .with_state(order_state);

    let product_routes = Router::new()
        .route(
            "/",
            get(products::handlers::list_products).post(products::handlers::create_product),
        )
        .route("/{id}", get(products::handlers::get_product))
        .route("/{id}/stock", patch(products::handlers::adjust_stock))
        .with_state(catalog_state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::handlers::health_check))
        .nest("/api/v1/orders", order_routes)
        .nest("/api/v1/products", product_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
