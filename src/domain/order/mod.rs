pub mod model;
pub mod repository;

pub use model::{
    NewOrder, Order, OrderLine, OrderRole, OrderStatus, OrderSummary, PaymentMethod,
    PaymentStatus, PricedLine,
};
pub use repository::OrderRepository;
