use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::trainer, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/trainers", get(trainer::list_trainers))
        .route(
            "/api/trainers/:trainer_id/availability/:date",
            get(trainer::get_trainer_availability),
        )
}
