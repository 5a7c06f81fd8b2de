pub mod dto;
pub mod handlers;

pub use dto::{AdjustStockRequest, CreateProductRequest, ProductDto, ProductListFilter};
pub use handlers::CatalogAppState;
