//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the browser app (`club-web`) and the
//! registration endpoint (`backend`). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::registration`]**: Registration request/response bodies
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::short_date`]**: Trim the year off a display date
//!   - **[`utils::attended_label`]**: Render the "attended before" flag
//!
//! ## Wire Format
//!
//! The registration body keeps the field names the endpoint has always accepted
//! (`FullName`, `Programming_Experience`, `boolean_before`, ...). Those names are
//! fixed with `#[serde(rename = "...")]` rather than a blanket `rename_all`, since
//! they follow no single case convention.
//!
//! ## Usage in Frontend
//!
//! ```rust,no_run
//! use shared::dto::registration::RegistrationRequest;
//!
//! let body = serde_json::to_string(&RegistrationRequest::default()).unwrap();
//! assert!(body.contains("\"FullName\""));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
