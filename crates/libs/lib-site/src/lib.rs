//! # Landing Page Controller
//!
//! Browser-free state behind the club landing page. The Leptos app wraps
//! these types in signals and feeds them DOM measurements; everything here
//! can be driven from plain unit tests.
//!
//! ## Modules
//!
//! - [`catalog`] - Static event data (past events, next event, stats)
//! - [`sections`] - Page sections, nav items and the active-section tracker
//! - [`carousel`] - Paged past-events gallery
//! - [`overlay`] - Modal and menu visibility, event detail viewer
//! - [`scroll`] - Eased smooth-scroll animation with a start/stop lifecycle
//! - [`reveal`] - Once-only entrance reveal bookkeeping
//! - [`typewriter`] - Hero phrase typing loop

pub mod carousel;
pub mod catalog;
pub mod overlay;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod typewriter;

pub use carousel::{Carousel, ITEMS_PER_PAGE};
pub use catalog::{
    find_event, EventCategory, EventExtra, EventRecord, Stat, UpcomingEvent, PAST_EVENTS,
    STATS, UPCOMING_EVENT,
};
pub use overlay::{EventViewer, Overlays};
pub use reveal::RevealTracker;
pub use scroll::{ease, ScrollStart, SmoothScroller, SCROLL_DURATION_MS};
pub use sections::{NavItem, Section, SectionBounds, SectionTracker, NAV_ITEMS, PROBE_OFFSET};
pub use typewriter::{Frame, Typewriter, HERO_WORDS};
