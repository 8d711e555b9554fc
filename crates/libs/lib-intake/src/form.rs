//! # Intake Form State Machine
//!
//! [`IntakeForm`] owns the draft while the registration modal is open.
//! Submission is split in two so the UI never holds the form across an
//! await point:
//!
//! 1. [`IntakeForm::begin_submit`] validates and hands out a
//!    [`SubmissionTicket`] carrying the request body.
//! 2. The caller sends the ticket through a
//!    [`RegistrationTransport`](crate::RegistrationTransport) and reports the
//!    result with [`IntakeForm::settle`].
//!
//! Every reset bumps a session generation. A ticket from an older session
//! settles as [`Settlement::Discarded`] and leaves the form untouched.

use log::{debug, error, info};
use shared::RegistrationRequest;

use crate::draft::RegistrationDraft;
use crate::error::{SubmissionError, SubmitRejected};
use crate::field::FieldChange;
use crate::transport::{deliver, RegistrationTransport};
use crate::validation::{validate, ValidationErrors};

/// How long the success message stays up before the modal closes.
pub const SUCCESS_DISPLAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakePhase {
    Editing,
    Submitting,
    Success,
}

/// One outbound registration, tied to the session that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub request: RegistrationRequest,
}

/// What [`IntakeForm::settle`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Succeeded,
    Failed,
    /// The ticket belongs to a session that was closed meanwhile.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct IntakeForm {
    draft: RegistrationDraft,
    errors: ValidationErrors,
    phase: IntakePhase,
    failure: Option<String>,
    generation: u64,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            draft: RegistrationDraft::new(),
            errors: ValidationErrors::default(),
            phase: IntakePhase::Editing,
            failure: None,
            generation: 0,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> IntakePhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == IntakePhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == IntakePhase::Success
    }

    /// Banner text from the last failed submission.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Apply one edit and clear that field's inline error.
    pub fn apply(&mut self, change: FieldChange) {
        let field = change.field();

        match change {
            FieldChange::FullName(v) => self.draft.full_name = v,
            FieldChange::Email(v) => self.draft.email = v,
            FieldChange::Phone(v) => self.draft.phone = v,
            FieldChange::Year(v) => self.draft.year = v,
            FieldChange::Branch(v) => self.draft.branch = v,
            FieldChange::Experience(v) => self.draft.experience = v,
            FieldChange::Interest { interest, checked } => {
                self.draft.set_interest(interest, checked)
            }
            FieldChange::GithubProfile(v) => self.draft.github_profile = v,
            FieldChange::AttendedBefore(v) => self.draft.attended_before = v,
        }

        if self.errors.clear(field) {
            debug!("Cleared validation error for {field}");
        }
    }

    /// Validate and, when clean, move to `Submitting`.
    ///
    /// On a validation failure the full error map is stored on the form and
    /// also returned inside [`SubmitRejected::Invalid`].
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitRejected> {
        match self.phase {
            IntakePhase::Submitting => return Err(SubmitRejected::InFlight),
            IntakePhase::Success => return Err(SubmitRejected::AlreadySubmitted),
            IntakePhase::Editing => {}
        }

        self.failure = None;
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!("Registration blocked by {} invalid field(s)", self.errors.len());
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.phase = IntakePhase::Submitting;
        info!("Submitting registration for {}", self.draft.email);

        Ok(SubmissionTicket {
            generation: self.generation,
            request: self.draft.to_request(),
        })
    }

    /// Record the transport result for a ticket.
    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<(), SubmissionError>,
    ) -> Settlement {
        if generation != self.generation || self.phase != IntakePhase::Submitting {
            debug!("Discarding settlement from closed session {generation}");
            return Settlement::Discarded;
        }

        match result {
            Ok(()) => {
                info!("Registration accepted");
                self.phase = IntakePhase::Success;
                Settlement::Succeeded
            }
            Err(e) => {
                error!("Registration failed: {e}");
                self.phase = IntakePhase::Editing;
                self.failure = Some(e.user_message());
                Settlement::Failed
            }
        }
    }

    /// End the success display. Returns `true` when the modal should close,
    /// i.e. the session that succeeded is still the current one.
    pub fn finish_success(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != IntakePhase::Success {
            return false;
        }
        self.reset();
        true
    }

    /// Start a fresh session: empty draft, no errors, `Editing`.
    pub fn reset(&mut self) {
        self.draft = RegistrationDraft::new();
        self.errors = ValidationErrors::default();
        self.phase = IntakePhase::Editing;
        self.failure = None;
        self.generation += 1;
    }

    /// Run a whole submission against a transport.
    ///
    /// Holds the form for the duration of the request, which suits callers
    /// that own it outright. The browser app drives `begin_submit` and
    /// `settle` separately.
    pub async fn submit_with<T: RegistrationTransport>(
        &mut self,
        transport: &T,
    ) -> Result<Settlement, SubmitRejected> {
        let ticket = self.begin_submit()?;
        let result = deliver(transport, &ticket).await;
        Ok(self.settle(ticket.generation, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{AcademicYear, ExperienceLevel, Interest};
    use crate::field::Field;
    use crate::validation::ValidationErrorKind;

    fn fill_valid(form: &mut IntakeForm) {
        form.apply(FieldChange::FullName("Ann".to_string()));
        form.apply(FieldChange::Email("ann@x.co".to_string()));
        form.apply(FieldChange::Phone("555-123-4567".to_string()));
        form.apply(FieldChange::Year(Some(AcademicYear::Second)));
        form.apply(FieldChange::Branch("CS".to_string()));
        form.apply(FieldChange::Experience(Some(ExperienceLevel::Beginner)));
        form.apply(FieldChange::Interest {
            interest: Interest::AiMl,
            checked: true,
        });
    }

    #[test]
    fn test_invalid_submit_stores_errors() {
        let mut form = IntakeForm::new();
        form.apply(FieldChange::FullName("Ann".to_string()));

        let rejected = form.begin_submit().unwrap_err();
        match rejected {
            SubmitRejected::Invalid(errors) => assert_eq!(&errors, form.errors()),
            other => panic!("unexpected rejection: {other:?}"),
        }
        assert_eq!(form.phase(), IntakePhase::Editing);
        assert!(!form.errors().contains(Field::FullName));
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = IntakeForm::new();
        let _ = form.begin_submit();
        assert!(form.errors().contains(Field::Email));

        form.apply(FieldChange::Email("not-an-email".to_string()));

        assert!(!form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Phone));

        // Re-validation picks the bad value back up.
        let _ = form.begin_submit();
        assert_eq!(form.errors().kind(Field::Email), Some(ValidationErrorKind::InvalidFormat));
    }

    #[test]
    fn test_resubmit_rejected_while_in_flight() {
        let mut form = IntakeForm::new();
        fill_valid(&mut form);

        let ticket = form.begin_submit().unwrap();
        assert_eq!(ticket.request.full_name, "Ann");
        assert_eq!(ticket.request.interests, "AI/ML");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_success_then_reset() {
        let mut form = IntakeForm::new();
        fill_valid(&mut form);
        let ticket = form.begin_submit().unwrap();

        assert_eq!(form.settle(ticket.generation, Ok(())), Settlement::Succeeded);
        assert!(form.is_success());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitted));

        assert!(form.finish_success(ticket.generation));
        assert_eq!(form.phase(), IntakePhase::Editing);
        assert_eq!(form.draft(), &RegistrationDraft::new());
    }

    #[test]
    fn test_failure_shows_banner_and_keeps_draft() {
        let mut form = IntakeForm::new();
        fill_valid(&mut form);
        let ticket = form.begin_submit().unwrap();

        let outcome = form.settle(
            ticket.generation,
            Err(SubmissionError::Rejected {
                status: 500,
                message: "Failed to save registration".to_string(),
            }),
        );

        assert_eq!(outcome, Settlement::Failed);
        assert!(!form.is_submitting());
        assert_eq!(
            form.failure(),
            Some("Registration failed: Failed to save registration. Please try again.")
        );
        assert_eq!(form.draft().full_name, "Ann");

        // The banner survives edits and goes away on the next attempt.
        form.apply(FieldChange::Branch("ECE".to_string()));
        assert!(form.failure().is_some());
        let _ = form.begin_submit().unwrap();
        assert!(form.failure().is_none());
    }

    #[test]
    fn test_close_discards_stale_settlement() {
        let mut form = IntakeForm::new();
        fill_valid(&mut form);
        let ticket = form.begin_submit().unwrap();

        form.reset();
        fill_valid(&mut form);

        assert_eq!(form.settle(ticket.generation, Ok(())), Settlement::Discarded);
        assert_eq!(form.phase(), IntakePhase::Editing);
        assert!(!form.finish_success(ticket.generation));
        assert_eq!(form.draft().full_name, "Ann");
    }
}
