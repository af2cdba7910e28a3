use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    profiles::{
        dto::{CreateProfileResponse, ProfileSubmission, SAVE_SUCCESS_MESSAGE},
        errors::ProfileError,
        services::validate,
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profiles", post(create_profile))
}

#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> Result<Json<CreateProfileResponse>, ProfileError> {
    let Json(submission) = payload.map_err(|e| {
        warn!(error = %e, "undecodable profile body");
        ProfileError::MalformedBody
    })?;

    if let Err(reason) = validate(&submission) {
        warn!(%reason, "profile rejected");
        return Err(reason.into());
    }

    let id = match state
        .profiles
        .create(&submission, &state.config.system_actor)
        .await
    {
        Ok(id) => id,
        Err(e) => {
            error!(error = ?e, "create profile failed");
            return Err(e.into());
        }
    };

    info!(profile_id = %id, "profile saved");
    Ok(Json(CreateProfileResponse {
        id,
        message: SAVE_SUCCESS_MESSAGE,
    }))
}
