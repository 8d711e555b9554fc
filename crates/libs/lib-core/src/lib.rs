//! # Core Library
//!
//! Configuration, error type and the SQLite registration store behind the
//! registration endpoint.

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{create_pool, DbPool, RegistrationRepository};
