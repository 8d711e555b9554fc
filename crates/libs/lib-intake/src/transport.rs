//! # Transport Seam
//!
//! The intake form never talks HTTP itself. The browser app implements
//! [`RegistrationTransport`] over `gloo-net`; tests use a recorder.

use std::future::Future;

use log::debug;
use shared::RegistrationRequest;

use crate::error::SubmissionError;
use crate::form::SubmissionTicket;

pub trait RegistrationTransport {
    /// POST one registration. `Ok` means a 2xx response.
    fn send(
        &self,
        request: &RegistrationRequest,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Send a ticket exactly once and log the outcome.
pub async fn deliver<T: RegistrationTransport>(
    transport: &T,
    ticket: &SubmissionTicket,
) -> Result<(), SubmissionError> {
    debug!("Sending registration (session {})", ticket.generation);

    let result = transport.send(&ticket.request).await;
    if let Err(e) = &result {
        debug!("Submission error: {e}");
    }
    result
}
