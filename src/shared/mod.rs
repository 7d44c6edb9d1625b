pub mod id;
pub mod panic;
pub mod serde_helpers;
pub mod shutdown;

pub use id::*;
pub use panic::panic_message;
pub use shutdown::*;
