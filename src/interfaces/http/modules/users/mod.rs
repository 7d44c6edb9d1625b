//! Users module: the registry's CRUD and role filter endpoints

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
