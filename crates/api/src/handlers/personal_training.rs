use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use gymflow_core::{
    errors::GymError,
    models::personal_training::{
        BookPersonalTrainingRequest, ClientBooking, PersonalTraining, TrainerBooking,
        UpdateBookingStatusRequest,
    },
};
use std::sync::Arc;
use tracing::info;

use crate::{
    checker,
    extract::{ApiJson, ApiPath},
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn book_personal_training(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    ApiJson(payload): ApiJson<BookPersonalTrainingRequest>,
) -> Result<(StatusCode, Json<PersonalTraining>), AppError> {
    let booking = checker::book_personal_training(state.store.as_ref(), &caller, payload).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

#[axum::debug_handler]
pub async fn get_client_bookings(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
) -> Result<Json<Vec<ClientBooking>>, AppError> {
    let bookings = state
        .store
        .client_bookings(caller.id)
        .await?
        .into_iter()
        .map(ClientBooking::try_from)
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn get_trainer_bookings(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
) -> Result<Json<Vec<TrainerBooking>>, AppError> {
    if !caller.is_trainer() {
        return Err(AppError(GymError::Authorization(
            "Only trainers can list their bookings".to_string(),
        )));
    }

    let bookings = state
        .store
        .trainer_bookings(caller.id)
        .await?
        .into_iter()
        .map(TrainerBooking::try_from)
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn update_booking_status(
    State(state): State<Arc<ApiState>>,
    caller: AuthUser,
    ApiPath(booking_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateBookingStatusRequest>,
) -> Result<Json<PersonalTraining>, AppError> {
    let booking = state
        .store
        .get_booking(booking_id)
        .await?
        .ok_or_else(|| GymError::NotFound(format!("Booking with ID {} not found", booking_id)))?;

    // Only the trainer running the session decides on it
    if booking.trainer_id != caller.id {
        return Err(AppError(GymError::Authorization(format!(
            "Booking {} belongs to another trainer",
            booking_id
        ))));
    }

    let updated = state
        .store
        .update_booking_status(booking_id, payload.status)
        .await?;

    info!(booking_id, status = %payload.status, "Booking status updated");

    Ok(Json(PersonalTraining::try_from(updated)?))
}
