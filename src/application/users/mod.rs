//! User registry use-cases
//!
//! `UserService` is the only entry point HTTP handlers call; it owns the
//! repository handle and turns "no such record" into domain errors.

pub mod service;

pub use service::UserService;
