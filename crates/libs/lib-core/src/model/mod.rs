//! # Model Layer
//!
//! Persistent records and their repositories.

pub mod store;
