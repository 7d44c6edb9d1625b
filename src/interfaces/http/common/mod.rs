//! Shared HTTP building blocks

mod api_json;
mod response;

pub use api_json::{ApiJson, ApiJsonRejection};
pub use response::{handle_panic, ApiError, ApiResponse};
