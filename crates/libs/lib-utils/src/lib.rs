//! # Utilities Library
//!
//! Shared utility functions for field validation, environment variables and time.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or};
pub use time::{now_utc, format_timestamp, parse_timestamp};
pub use validation::{is_blank, is_valid_email, is_valid_phone, strip_whitespace};
