pub mod model;
pub mod repository;

pub use model::{CatalogProduct, NewProduct, ProductFilter};
pub use repository::ProductRepository;
