//! # Page Sections
//!
//! Maps the window scroll offset onto the section the navbar highlights.

use std::fmt;
use std::str::FromStr;

use log::debug;

/// Distance below the top of the viewport used as the probe point.
pub const PROBE_OFFSET: f64 = 100.0;

/// Tracked sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Stats,
    Upcoming,
    Past,
    JoinUs,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Stats,
        Section::Upcoming,
        Section::Past,
        Section::JoinUs,
    ];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Stats => "stats",
            Section::Upcoming => "upcoming",
            Section::Past => "past",
            Section::JoinUs => "join-us",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL.into_iter().find(|sec| sec.id() == s).ok_or(())
    }
}

/// Layout box of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: Section,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", section: Section::Hero },
    NavItem { label: "Events", section: Section::Upcoming },
    NavItem { label: "Gallery", section: Section::Past },
    NavItem { label: "Contact Us", section: Section::JoinUs },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: Section,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            active: Section::Hero,
        }
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// `layout` returns `None` for sections that are not in the DOM yet.
    /// The first section in page order containing the probe point wins;
    /// with no match the previous section stays active.
    pub fn on_scroll<F>(&mut self, scroll_offset: f64, layout: F) -> Section
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        let probe = scroll_offset + PROBE_OFFSET;
        let hit = Section::ALL
            .into_iter()
            .find(|&section| layout(section).is_some_and(|b| b.contains(probe)));

        if let Some(section) = hit {
            if section != self.active {
                debug!("Active section {} -> {}", self.active, section);
                self.active = section;
            }
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(section: Section) -> Option<SectionBounds> {
        let top = match section {
            Section::Hero => 0.0,
            Section::Stats => 800.0,
            Section::Upcoming => 1100.0,
            Section::Past => 1700.0,
            Section::JoinUs => 2400.0,
        };
        let height = if section == Section::JoinUs { 400.0 } else { 300.0 };
        Some(SectionBounds { top, height })
    }

    #[test]
    fn test_initial_section_is_hero() {
        assert_eq!(SectionTracker::new().active(), Section::Hero);
    }

    #[test]
    fn test_probe_point_offset() {
        let mut tracker = SectionTracker::new();
        // 700 + 100 lands on the top edge of stats.
        assert_eq!(tracker.on_scroll(700.0, stacked), Section::Stats);
        // 1000 + 100 is the exclusive bottom edge of stats and the top of upcoming.
        assert_eq!(tracker.on_scroll(1000.0, stacked), Section::Upcoming);
    }

    #[test]
    fn test_gap_keeps_previous_section() {
        let mut tracker = SectionTracker::new();
        tracker.on_scroll(800.0, stacked);
        // Hero ends at 300, stats starts at 800: nothing contains 400.
        assert_eq!(tracker.on_scroll(300.0, stacked), Section::Stats);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let overlapping = |section: Section| match section {
            Section::Upcoming | Section::Past => Some(SectionBounds {
                top: 1000.0,
                height: 500.0,
            }),
            _ => None,
        };

        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.on_scroll(1000.0, overlapping), Section::Upcoming);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let only_join = |section: Section| {
            (section == Section::JoinUs).then_some(SectionBounds {
                top: 0.0,
                height: 1000.0,
            })
        };

        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.on_scroll(50.0, only_join), Section::JoinUs);
    }

    #[test]
    fn test_nav_targets() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|n| n.section.id()).collect();
        assert_eq!(ids, vec!["hero", "upcoming", "past", "join-us"]);
        assert_eq!("join-us".parse::<Section>(), Ok(Section::JoinUs));
    }
}
