//! # Registration Intake Library
//!
//! The membership form behind the "Join Now" buttons: the draft being edited,
//! per-field validation, the submit state machine and the transport seam the
//! browser app plugs its HTTP client into.
//!
//! ## Flow
//!
//! ```text
//! Editing ──begin_submit──▶ (validate) ──errors──▶ Editing (inline messages)
//!                               │
//!                               └─clean─▶ Submitting ──settle(Ok)──▶ Success ──2s──▶ Editing (fresh)
//!                                              │
//!                                              └──settle(Err)──▶ Editing (failure banner)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lib_intake::{FieldChange, IntakeForm, Interest};
//!
//! let mut form = IntakeForm::new();
//! form.apply(FieldChange::FullName("Ann".to_string()));
//! form.apply(FieldChange::Interest { interest: Interest::AiMl, checked: true });
//!
//! // Still missing email, phone, year, branch and experience.
//! assert!(form.begin_submit().is_err());
//! assert_eq!(form.errors().len(), 5);
//! ```

pub mod draft;
pub mod error;
pub mod field;
pub mod form;
pub mod transport;
pub mod validation;

pub use draft::{AcademicYear, ExperienceLevel, Interest, RegistrationDraft};
pub use error::{FieldInputError, SubmissionError, SubmitRejected};
pub use field::{Field, FieldChange};
pub use form::{IntakeForm, IntakePhase, Settlement, SubmissionTicket, SUCCESS_DISPLAY_MS};
pub use transport::{deliver, RegistrationTransport};
pub use validation::{validate, FieldError, ValidationErrorKind, ValidationErrors};
