//! Landing page state

use leptos::prelude::*;
use lib_site::{
    Carousel, EventViewer, NavItem, Overlays, Section, SectionBounds, SectionTracker, PAST_EVENTS,
};

/// Global page context
#[derive(Clone, Copy)]
pub struct PageContext {
    pub tracker: RwSignal<SectionTracker>,
    pub overlays: RwSignal<Overlays>,
    pub carousel: RwSignal<Carousel>,
    pub viewer: RwSignal<EventViewer>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            tracker: RwSignal::new(SectionTracker::new()),
            overlays: RwSignal::new(Overlays::default()),
            carousel: RwSignal::new(Carousel::new(PAST_EVENTS.len())),
            viewer: RwSignal::new(EventViewer::default()),
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.tracker.with(|t| t.active() == section)
    }

    pub fn registration_open(&self) -> bool {
        self.overlays.with(|o| o.registration_open)
    }

    pub fn menu_open(&self) -> bool {
        self.overlays.with(|o| o.mobile_menu_open)
    }

    pub fn open_registration(&self) {
        self.overlays.update(|o| o.open_registration());
    }

    pub fn close_registration(&self) {
        self.overlays.update(|o| o.close_registration());
    }

    pub fn toggle_menu(&self) {
        self.overlays.update(|o| o.toggle_menu());
    }

    pub fn navigate(&self, item: &NavItem) {
        self.overlays.update(|o| o.navigate(item));
    }

    pub fn open_event(&self, id: u32) {
        self.viewer.update(|v| {
            if v.open(id).is_none() {
                log::warn!("No past event with id {id}");
            }
        });
    }

    pub fn close_event(&self) {
        self.viewer.update(|v| v.close());
    }

    /// Re-run the tracker for a scroll position. Only writes the signal when
    /// the active section changes.
    pub fn track_scroll<F>(&self, offset: f64, layout: F)
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        let mut tracker = self.tracker.get_untracked();
        let before = tracker.active();
        if tracker.on_scroll(offset, layout) != before {
            self.tracker.set(tracker);
        }
    }
}

pub fn provide_page_context() -> PageContext {
    let context = PageContext::new();
    provide_context(context);
    context
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
