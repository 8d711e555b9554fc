//! # Registration Handler
//!
//! Accepts the body posted by the landing page's registration modal and
//! stores it. The form validates in the browser; the endpoint records what
//! it receives, including repeated submissions.

use axum::extract::{Json, State};
use lib_core::model::store::{RegistrationForCreate, RegistrationRepository};
use lib_core::{AppError, DbPool};
use lib_utils::now_utc;
use shared::{RegistrationRequest, RegistrationResponse};
use tracing::{debug, error, info, instrument};

#[cfg(test)]
mod tests;

/// `POST /register`
///
/// Missing keys in the body default to empty strings and `false`.
/// A storage failure answers 500 with `Failed to save registration`.
#[instrument(skip_all)]
pub async fn register(
    State(pool): State<DbPool>,
    Json(req): Json<RegistrationRequest>,
) -> Result<Json<RegistrationResponse>, AppError> {
    info!("[REGISTER] New registration received");
    debug!("   Name: {}", req.full_name);
    debug!("   Email: {}", req.email);

    let row = RegistrationForCreate::from_request(&req, now_utc());
    let saved = RegistrationRepository::create(&pool, &row)
        .await
        .map_err(|e| {
            error!("[REGISTER] Failed to save registration: {}", e);
            AppError::from(e)
        })?;

    info!(id = saved.id, "[REGISTER] Registration saved");

    Ok(Json(RegistrationResponse {
        message: "Registration successful!".to_string(),
        saved: true,
    }))
}
