pub mod dto;
pub mod handlers;

pub use dto::{
    CreateOrderRequest, OrderDto, OrderLineDto, OrderListParams, OrderItemRequest,
    OrderSummaryDto, PaymentMethodDto,
};
pub use handlers::OrderAppState;
