//! # HTTP Request Handlers
//!
//! - **[`health`]**: liveness
//!   - `GET /` - Service banner
//!   - `GET /health` - Plain `OK`
//!
//! - **[`registration`]**: membership intake
//!   - `POST /register` - Store one registration
//!
//! Handlers extract the pool through `State<DbPool>` (see
//! [`AppState`](crate::AppState)) and return [`lib_core::AppError`] on
//! failure, which renders as `{"error": ..., "code": ...}`.

pub mod health;
pub mod registration;
