//! # Overlays
//!
//! Visibility of the registration modal and mobile menu, and the event
//! detail viewer.

use log::debug;

use crate::catalog::{find_event, EventRecord};
use crate::sections::NavItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    pub registration_open: bool,
    pub mobile_menu_open: bool,
}

impl Overlays {
    pub fn open_registration(&mut self) {
        self.registration_open = true;
        self.mobile_menu_open = false;
    }

    pub fn close_registration(&mut self) {
        self.registration_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Selecting a nav item always closes the mobile menu.
    pub fn navigate(&mut self, item: &NavItem) {
        debug!("Navigating to {}", item.section);
        self.mobile_menu_open = false;
    }
}

/// Read-only detail modal for one past event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventViewer {
    selected: Option<&'static EventRecord>,
}

impl EventViewer {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&'static EventRecord> {
        self.selected
    }

    /// Show the event with `id`. Unknown ids leave the viewer as it was.
    pub fn open(&mut self, id: u32) -> Option<&'static EventRecord> {
        let event = find_event(id)?;
        self.selected = Some(event);
        Some(event)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
