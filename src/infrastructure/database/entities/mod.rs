pub mod merchant_profile;
pub mod order;
pub mod order_item;
pub mod product;
pub mod user;
