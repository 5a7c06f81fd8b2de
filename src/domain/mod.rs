//! Core business entities, types and repository traits

pub mod order;
pub mod product;
pub mod repositories;

pub use order::{
    NewOrder, Order, OrderLine, OrderRepository, OrderRole, OrderStatus, OrderSummary,
    PaymentMethod, PaymentStatus, PricedLine,
};
pub use product::{CatalogProduct, NewProduct, ProductFilter, ProductRepository};
pub use repositories::RepositoryProvider;
