//! # Field Changes
//!
//! Typed edits to a [`RegistrationDraft`], plus the bridge from the raw
//! `name`/`value`/`checked` triple an input event delivers.

use std::fmt;
use std::str::FromStr;

use crate::draft::{AcademicYear, ExperienceLevel, Interest};
use crate::error::FieldInputError;

/// Form field identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Year,
    Branch,
    Experience,
    Interests,
    GithubProfile,
    AttendedBefore,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Year,
        Field::Branch,
        Field::Experience,
        Field::Interests,
        Field::GithubProfile,
        Field::AttendedBefore,
    ];

    /// The input `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Year => "year",
            Field::Branch => "branch",
            Field::Experience => "experience",
            Field::Interests => "interests",
            Field::GithubProfile => "githubProfile",
            Field::AttendedBefore => "attendedBefore",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldInputError::UnknownField(s.to_string()))
    }
}

/// One edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    FullName(String),
    Email(String),
    Phone(String),
    Year(Option<AcademicYear>),
    Branch(String),
    Experience(Option<ExperienceLevel>),
    Interest { interest: Interest, checked: bool },
    GithubProfile(String),
    AttendedBefore(bool),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::FullName(_) => Field::FullName,
            FieldChange::Email(_) => Field::Email,
            FieldChange::Phone(_) => Field::Phone,
            FieldChange::Year(_) => Field::Year,
            FieldChange::Branch(_) => Field::Branch,
            FieldChange::Experience(_) => Field::Experience,
            FieldChange::Interest { .. } => Field::Interests,
            FieldChange::GithubProfile(_) => Field::GithubProfile,
            FieldChange::AttendedBefore(_) => Field::AttendedBefore,
        }
    }

    /// Map an input event onto a typed change.
    ///
    /// `checked` is only read for the interest and attended-before
    /// checkboxes. An empty select value means the option was cleared.
    pub fn from_input(name: &str, value: &str, checked: bool) -> Result<Self, FieldInputError> {
        let field: Field = name.parse()?;
        let invalid = || FieldInputError::InvalidValue {
            field: field.as_str(),
            value: value.to_string(),
        };

        let change = match field {
            Field::FullName => FieldChange::FullName(value.to_string()),
            Field::Email => FieldChange::Email(value.to_string()),
            Field::Phone => FieldChange::Phone(value.to_string()),
            Field::Branch => FieldChange::Branch(value.to_string()),
            Field::GithubProfile => FieldChange::GithubProfile(value.to_string()),
            Field::Year if value.is_empty() => FieldChange::Year(None),
            Field::Year => FieldChange::Year(Some(value.parse().map_err(|_| invalid())?)),
            Field::Experience if value.is_empty() => FieldChange::Experience(None),
            Field::Experience => {
                FieldChange::Experience(Some(value.parse().map_err(|_| invalid())?))
            }
            Field::Interests => FieldChange::Interest {
                interest: value.parse().map_err(|_| invalid())?,
                checked,
            },
            Field::AttendedBefore => FieldChange::AttendedBefore(checked),
        };

        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_inputs_keep_raw_value() {
        let change = FieldChange::from_input("fullName", "  Ann  ", false).unwrap();
        assert_eq!(change, FieldChange::FullName("  Ann  ".to_string()));
        assert_eq!(change.field(), Field::FullName);
    }

    #[test]
    fn test_select_inputs() {
        assert_eq!(
            FieldChange::from_input("year", "3rd", false).unwrap(),
            FieldChange::Year(Some(AcademicYear::Third))
        );
        assert_eq!(
            FieldChange::from_input("experience", "", false).unwrap(),
            FieldChange::Experience(None)
        );
    }

    #[test]
    fn test_checkbox_inputs() {
        assert_eq!(
            FieldChange::from_input("interests", "Game Dev", true).unwrap(),
            FieldChange::Interest {
                interest: Interest::GameDev,
                checked: true
            }
        );
        assert_eq!(
            FieldChange::from_input("attendedBefore", "on", false).unwrap(),
            FieldChange::AttendedBefore(false)
        );
    }

    #[test]
    fn test_rejects_unknown_input() {
        assert_eq!(
            FieldChange::from_input("nickname", "ann", false),
            Err(FieldInputError::UnknownField("nickname".to_string()))
        );

        let err = FieldChange::from_input("year", "7th", false).unwrap_err();
        assert!(matches!(err, FieldInputError::InvalidValue { field: "year", .. }));
    }
}
