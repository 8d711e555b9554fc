//! State management

pub mod intake;
pub mod page;
