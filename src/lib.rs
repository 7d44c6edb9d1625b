//! # User Registry
//!
//! A small REST service over an in-memory, file-seeded list of users.
//!
//! ## Architecture
//!
//! - **domain**: User entity, field validation and repository trait
//! - **application**: `UserService` use-cases
//! - **infrastructure**: in-memory registry and seed file loading
//! - **interfaces**: HTTP REST API with Swagger documentation
//! - **server**: runtime lifecycle (startup, graceful shutdown, tracing)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
