use axum::{
    extract::State,
    Json,
};
use chrono::NaiveDate;
use gymflow_core::{models::user::TrainerSummary, wall_clock::WallClock};
use std::sync::Arc;

use crate::{
    checker,
    extract::ApiPath,
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_trainers(
    State(state): State<Arc<ApiState>>,
    _caller: AuthUser,
) -> Result<Json<Vec<TrainerSummary>>, AppError> {
    let trainers = state
        .store
        .list_trainers()
        .await?
        .into_iter()
        .map(TrainerSummary::from)
        .collect();

    Ok(Json(trainers))
}

/// Lists the full hours a trainer can still take a personal session at.
///
/// # Endpoint
///
/// ```text
/// GET /api/trainers/:trainer_id/availability/:date
/// ```
///
/// Returns `["06:00", "07:00", ...]`, computed with the same rules that
/// guard booking requests.
#[axum::debug_handler]
pub async fn get_trainer_availability(
    State(state): State<Arc<ApiState>>,
    _caller: AuthUser,
    ApiPath((trainer_id, date)): ApiPath<(i32, NaiveDate)>,
) -> Result<Json<Vec<WallClock>>, AppError> {
    let hours = checker::trainer_free_hours(state.store.as_ref(), trainer_id, date).await?;

    Ok(Json(hours))
}
