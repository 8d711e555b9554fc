//! # Registration Draft
//!
//! The in-progress form contents and the fixed catalogs behind its select and
//! checkbox controls.

use std::fmt;
use std::str::FromStr;

use shared::RegistrationRequest;

/// Academic year select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcademicYear {
    First,
    Second,
    Third,
    Fourth,
    Graduate,
}

impl AcademicYear {
    pub const ALL: [AcademicYear; 5] = [
        AcademicYear::First,
        AcademicYear::Second,
        AcademicYear::Third,
        AcademicYear::Fourth,
        AcademicYear::Graduate,
    ];

    /// Option value sent to the endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicYear::First => "1st",
            AcademicYear::Second => "2nd",
            AcademicYear::Third => "3rd",
            AcademicYear::Fourth => "4th",
            AcademicYear::Graduate => "graduate",
        }
    }

    /// Option label shown in the select.
    pub fn label(&self) -> &'static str {
        match self {
            AcademicYear::First => "1st Year",
            AcademicYear::Second => "2nd Year",
            AcademicYear::Third => "3rd Year",
            AcademicYear::Fourth => "4th Year",
            AcademicYear::Graduate => "Graduate",
        }
    }
}

impl FromStr for AcademicYear {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AcademicYear::ALL
            .into_iter()
            .find(|year| year.as_str() == s)
            .ok_or(())
    }
}

/// Programming experience select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

/// Interest tags offered as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    WebDev,
    Mobile,
    AiMl,
    DataScience,
    Cybersecurity,
    GameDev,
    DevOps,
    Blockchain,
}

impl Interest {
    /// Catalog order, which is also the checkbox order.
    pub const ALL: [Interest; 8] = [
        Interest::WebDev,
        Interest::Mobile,
        Interest::AiMl,
        Interest::DataScience,
        Interest::Cybersecurity,
        Interest::GameDev,
        Interest::DevOps,
        Interest::Blockchain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::WebDev => "Web Dev",
            Interest::Mobile => "Mobile",
            Interest::AiMl => "AI/ML",
            Interest::DataScience => "Data Science",
            Interest::Cybersecurity => "Cybersecurity",
            Interest::GameDev => "Game Dev",
            Interest::DevOps => "DevOps",
            Interest::Blockchain => "Blockchain",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|interest| interest.label() == s)
            .ok_or(())
    }
}

/// Form contents while the registration modal is open.
///
/// Text fields hold exactly what was typed; trimming only happens inside the
/// validation predicates. `interests` keeps selection order and never holds
/// the same tag twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub year: Option<AcademicYear>,
    pub branch: String,
    pub experience: Option<ExperienceLevel>,
    interests: Vec<Interest>,
    pub github_profile: String,
    pub attended_before: bool,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Check or uncheck one interest tag.
    ///
    /// Checking an already selected tag, or unchecking one that is not
    /// selected, leaves the selection untouched.
    pub fn set_interest(&mut self, interest: Interest, checked: bool) {
        let selected = self.has_interest(interest);
        if checked && !selected {
            self.interests.push(interest);
        } else if !checked && selected {
            self.interests.retain(|&i| i != interest);
        }
    }

    /// Interests as the endpoint stores them: `"AI/ML, Web Dev"`.
    pub fn interests_joined(&self) -> String {
        self.interests
            .iter()
            .map(Interest::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build the fixed-shape request body.
    ///
    /// Values are copied verbatim; an unset select becomes an empty string,
    /// which only happens when a caller skips validation.
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            year: self.year.map(|y| y.as_str()).unwrap_or_default().to_string(),
            branch: self.branch.clone(),
            programming_experience: self
                .experience
                .map(|e| e.as_str())
                .unwrap_or_default()
                .to_string(),
            interests: self.interests_joined(),
            github_profile: self.github_profile.clone(),
            attended_before: self.attended_before,
        }
    }
}
