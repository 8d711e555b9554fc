//! # Event Catalog
//!
//! Read-only content for the landing page. Defined at compile time and never
//! mutated.

use shared::short_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Competition,
    Workshop,
    Conference,
}

impl EventCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Competition => "Competition",
            EventCategory::Workshop => "Workshop",
            EventCategory::Conference => "Conference",
        }
    }

    /// CSS modifier for the category badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            EventCategory::Competition => "badge-competition",
            EventCategory::Workshop => "badge-workshop",
            EventCategory::Conference => "badge-conference",
        }
    }
}

/// Event-specific detail section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventExtra {
    Winners {
        first: &'static str,
        second: &'static str,
        third: &'static str,
    },
    Projects {
        instructor: &'static str,
        projects: &'static [&'static str],
    },
    Speakers(&'static [&'static str]),
    Achievements {
        total_prs: u32,
        repositories: u32,
        new_contributors: u32,
    },
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRecord {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub participants: u32,
    pub duration: &'static str,
    pub location: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub rating: f32,
    pub category: EventCategory,
    pub extra: EventExtra,
}

impl EventRecord {
    /// Number of technology tags shown on a gallery card.
    pub const TECH_PREVIEW: usize = 3;

    /// Date without the year, for gallery cards.
    pub fn short_date(&self) -> &'static str {
        short_date(self.date)
    }

    /// First few technology tags and how many were left out.
    pub fn tech_preview(&self) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(Self::TECH_PREVIEW);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub static PAST_EVENTS: [EventRecord; 4] = [
    EventRecord {
        id: 1,
        title: "HackFest 2025",
        date: "June 20-22, 2025",
        participants: 150,
        duration: "48 hours",
        location: "Main Campus",
        short_description: "Epic 48-hour coding marathon",
        full_description: "Our biggest hackathon yet! Teams battled through the night building \
            innovative solutions across multiple tracks including AI/ML, Web3 and Social Impact. \
            Winners received cash prizes up to $5000 and internship opportunities.",
        highlights: &[
            "25 teams competed",
            "$10 000 in total prizes",
            "Industry mentors from Google, Microsoft",
            "3 problem tracks",
        ],
        technologies: &["React", "Python", "TensorFlow", "Blockchain"],
        rating: 4.9,
        category: EventCategory::Competition,
        extra: EventExtra::Winners {
            first: "AI Health Assistant",
            second: "EcoTrack App",
            third: "DeFi Portfolio Manager",
        },
    },
    EventRecord {
        id: 2,
        title: "React.js Masterclass",
        date: "May 18, 2025",
        participants: 80,
        duration: "6 hours",
        location: "Tech Lab B",
        short_description: "Advanced React patterns workshop",
        full_description: "Deep dive into React 18 features, advanced patterns, and performance \
            optimisation. Led by senior engineers from top tech companies.",
        highlights: &[
            "React 18 new features",
            "Performance optimisation",
            "Custom hooks workshop",
            "Real projects built",
        ],
        technologies: &["React", "Next.js", "TypeScript", "Tailwind"],
        rating: 4.8,
        category: EventCategory::Workshop,
        extra: EventExtra::Projects {
            instructor: "Sarah Chen - Senior Engineer at Meta",
            projects: &["Real-time Chat App", "E-commerce Dashboard"],
        },
    },
    EventRecord {
        id: 3,
        title: "Open Source Contribution Day",
        date: "April 25, 2025",
        participants: 60,
        duration: "4 hours",
        location: "Innovation Hub",
        short_description: "Learn to contribute to open source",
        full_description: "Beginner-friendly session on contributing to open-source projects. \
            Participants made their first PRs to popular repositories and learned about Git \
            workflows, code reviews and community guidelines.",
        highlights: &[
            "40+ first-time contributors",
            "15 successful PRs merged",
            "Git / GitHub mastery",
            "Open-source best practices",
        ],
        technologies: &["Git", "GitHub", "Various Languages"],
        rating: 4.7,
        category: EventCategory::Workshop,
        extra: EventExtra::Achievements {
            total_prs: 23,
            repositories: 8,
            new_contributors: 42,
        },
    },
    EventRecord {
        id: 4,
        title: "Blockchain & DeFi Summit",
        date: "March 30, 2025",
        participants: 90,
        duration: "Full day",
        location: "Auditorium",
        short_description: "Crypto and smart-contract deep dive",
        full_description: "Comprehensive introduction to blockchain technology, cryptocurrency \
            fundamentals and DeFi protocols. Featured guest speakers from leading crypto companies.",
        highlights: &[
            "Industry expert speakers",
            "Smart-contract deployment",
            "DeFi protocol analysis",
            "Networking with crypto professionals",
        ],
        technologies: &["Solidity", "Web3.js", "Ethereum", "MetaMask"],
        rating: 4.6,
        category: EventCategory::Conference,
        extra: EventExtra::Speakers(&[
            "Alex Johnson - Ethereum Foundation",
            "Maria Rodriguez - Chainlink Labs",
        ]),
    },
];

/// Look up a past event by id.
pub fn find_event(id: u32) -> Option<&'static EventRecord> {
    PAST_EVENTS.iter().find(|e| e.id == id)
}

/// The "Next Event" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingEvent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub spots: u32,
    pub registered: u32,
}

impl UpcomingEvent {
    pub fn spots_left(&self) -> u32 {
        self.spots.saturating_sub(self.registered)
    }
}

pub static UPCOMING_EVENT: UpcomingEvent = UpcomingEvent {
    title: "AI/ML Workshop",
    subtitle: "Building Your First Neural Network",
    date: "Aug 15, 2025",
    time: "2:00 - 5:00 PM",
    location: "Tech Lab A",
    description: "Dive into ML fundamentals. Perfect for beginners!",
    spots: 25,
    registered: 18,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Active Members" },
    Stat { value: "50+", label: "Events Hosted" },
    Stat { value: "200+", label: "Projects Built" },
    Stat { value: "10+", label: "Industry Partners" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, event) in PAST_EVENTS.iter().enumerate() {
            assert!(PAST_EVENTS[i + 1..].iter().all(|other| other.id != event.id));
        }
    }

    #[test]
    fn test_find_event() {
        assert_eq!(find_event(3).map(|e| e.title), Some("Open Source Contribution Day"));
        assert!(find_event(99).is_none());
    }

    #[test]
    fn test_tech_preview() {
        let hackfest = find_event(1).unwrap();
        assert_eq!(hackfest.tech_preview(), (&["React", "Python", "TensorFlow"][..], 1));

        let open_source = find_event(3).unwrap();
        assert_eq!(open_source.tech_preview().1, 0);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(find_event(2).unwrap().short_date(), "May 18");
        assert_eq!(find_event(1).unwrap().short_date(), "June 20-22");
    }

    #[test]
    fn test_spots_left_saturates() {
        assert_eq!(UPCOMING_EVENT.spots_left(), 7);

        let overbooked = UpcomingEvent {
            registered: 30,
            ..UPCOMING_EVENT
        };
        assert_eq!(overbooked.spots_left(), 0);
    }
}
