//! # Bairro Market
//!
//! Multi-role local marketplace backend: the order-placement transaction and
//! inventory-consistency engine.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic (order validation and placement, catalog)
//! - **infrastructure**: External concerns (database, migrations, repositories)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error taxonomy and result aliases

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig};
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;

// Re-export API router
pub use interfaces::http::create_api_router;
