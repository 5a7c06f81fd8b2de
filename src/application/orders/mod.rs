pub mod service;
pub mod validate;

pub use service::{OrderService, PlaceOrder};
pub use validate::{RequestedLine, ValidatedOrder};
