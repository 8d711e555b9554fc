//! # Web Library
//!
//! HTTP layer of the registration endpoint: handlers, middleware and server
//! startup.
//!
//! ## Endpoints
//!
//! ```text
//! GET  /          -> {"message": "Programming Club API running", "status": "OK"}
//! GET  /health    -> OK
//! POST /register  -> {"message": "Registration successful!", "saved": true}
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{create_router, start_server, AppState, ServerConfig};
