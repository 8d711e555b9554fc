//! Browser services

pub mod registration;
pub mod scroll;

pub use registration::GlooTransport;
pub use scroll::{provide_scroll_service, use_scroll_service, ScrollService};
