//! # Intake Errors
//!
//! Errors raised while editing or submitting a registration.
//!
//! Validation failures are not errors in this sense: they are collected into
//! [`ValidationErrors`] and shown next to each field. The types here cover
//! the submit boundary and the bridge from raw DOM input.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Why `begin_submit` refused to hand out a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// A request for this form is still pending.
    #[error("A registration is already being submitted")]
    InFlight,

    /// The form is showing its success state and will reset shortly.
    #[error("This registration has already been submitted")]
    AlreadySubmitted,

    /// One or more fields failed validation.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationErrors),
}

/// A submission that left the browser but did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request never produced a response (network, CORS, serialization).
    #[error("Network error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("Server rejected registration ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl SubmissionError {
    /// Message shown in the failure banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Transport(_) => {
                "Registration failed: we couldn't reach the server. Please try again.".to_string()
            }
            SubmissionError::Rejected { message, .. } => {
                format!("Registration failed: {message}. Please try again.")
            }
        }
    }
}

/// A DOM `name`/`value` pair that does not map onto a draft field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldInputError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },
}
