use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers::personal_training, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/personal-training/book",
            post(personal_training::book_personal_training),
        )
        .route(
            "/api/personal-training/my-bookings",
            get(personal_training::get_client_bookings),
        )
        .route(
            "/api/personal-training/trainer-bookings",
            get(personal_training::get_trainer_bookings),
        )
        .route(
            "/api/personal-training/bookings/:booking_id/status",
            patch(personal_training::update_booking_status),
        )
}
