use chrono::{DateTime, Utc};
use lib_utils::{format_timestamp, parse_timestamp};
use serde::Serialize;
use shared::{attended_label, RegistrationRequest};
use sqlx::FromRow;

/// A stored registration row.
///
/// `attended_before` holds the `Yes`/`No` label and `created_at` the UTC
/// timestamp in `%Y-%m-%d %H:%M:%S` form.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub year: String,
    pub branch: String,
    pub programming_experience: String,
    pub interests: String,
    pub github_profile: String,
    pub attended_before: String,
    pub created_at: String,
}

impl Registration {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at).ok()
    }
}

/// Data structure for inserting a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForCreate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub year: String,
    pub branch: String,
    pub programming_experience: String,
    pub interests: String,
    pub github_profile: String,
    pub attended_before: String,
    pub created_at: String,
}

impl RegistrationForCreate {
    /// Build an insertable row from a request body received at `received_at`.
    pub fn from_request(req: &RegistrationRequest, received_at: DateTime<Utc>) -> Self {
        Self {
            full_name: req.full_name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            year: req.year.clone(),
            branch: req.branch.clone(),
            programming_experience: req.programming_experience.clone(),
            interests: req.interests.clone(),
            github_profile: req.github_profile.clone(),
            attended_before: attended_label(req.attended_before).to_string(),
            created_at: format_timestamp(received_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_request_maps_attended_and_timestamp() {
        let req = RegistrationRequest {
            full_name: "Ann".to_string(),
            attended_before: true,
            ..Default::default()
        };
        let at = Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap();

        let row = RegistrationForCreate::from_request(&req, at);

        assert_eq!(row.attended_before, "Yes");
        assert_eq!(row.created_at, "2025-08-01 09:30:00");
        assert_eq!(row.full_name, "Ann");
        assert_eq!(row.interests, "");
    }
}
