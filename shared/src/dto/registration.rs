use serde::{Deserialize, Serialize};

/// Registration body posted by the intake form.
///
/// Every field is taken verbatim from the draft except `interests`, which is the
/// selected tags joined with `", "`. Missing keys deserialize to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrationRequest {
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "Programming_Experience")]
    pub programming_experience: String,
    #[serde(rename = "Interests")]
    pub interests: String,
    #[serde(rename = "GitHub_Profile")]
    pub github_profile: String,
    #[serde(rename = "boolean_before")]
    pub attended_before: bool,
}

/// Acknowledgement returned when a registration was stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    pub message: String,
    pub saved: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness body served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}
