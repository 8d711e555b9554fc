//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged between the landing page
//! and the registration endpoint.
//!
//! ## Module Organization
//!
//! - [`registration`] - Registration submission, acknowledgement and error bodies
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /register
//! Content-Type: application/json
//!
//! {
//!   "FullName": "Ann Lee",
//!   "Email": "ann@x.co",
//!   "Phone": "555-123-4567",
//!   "Year": "2nd",
//!   "Branch": "CS",
//!   "Programming_Experience": "beginner",
//!   "Interests": "AI/ML, Web Dev",
//!   "GitHub_Profile": "",
//!   "boolean_before": false
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "message": "Registration successful!", "saved": true }
//! ```

pub mod registration;

pub use registration::*;
