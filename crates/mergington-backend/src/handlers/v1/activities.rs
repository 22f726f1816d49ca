use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use mergington::data::{Catalog, MessageResponse, ParticipantQuery};
use mergington::log;

use crate::error::ApiError;
use crate::services::ActivityService;

/// Handler to list every activity with its participants
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Result<Json<Catalog>, ApiError> {
    let catalog = state.activities.list().await?;
    Ok(Json(catalog))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(ParticipantQuery { email }) = query?;

    let updated = state.activities.signup(&activity, &email).await?;
    log::info!(
        activity = %activity,
        email = %email,
        enrolled = updated.participants.len(),
        spots_left = updated.spots_left(),
        "Student signed up"
    );

    Ok(Json(MessageResponse::signed_up(&email, &activity)))
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(ParticipantQuery { email }) = query?;

    let updated = state.activities.unregister(&activity, &email).await?;
    log::info!(
        activity = %activity,
        email = %email,
        enrolled = updated.participants.len(),
        "Student unregistered"
    );

    Ok(Json(MessageResponse::unregistered(&email, &activity)))
}
