//! Business logic and use cases

pub mod catalog;
pub mod orders;

pub use catalog::CatalogService;
pub use orders::{OrderService, PlaceOrder};
