//! # Gymflow API
//!
//! HTTP surface of the gym booking service. Clients book personal training
//! sessions with trainers, trainers confirm or reject them.
//!
//! ## Architecture
//!
//! - **Routes**: URL structure, one module per resource
//! - **Handlers**: request extraction and response shaping
//! - **Checker**: the availability rules applied before a booking is stored
//! - **Middleware**: bearer authentication and error mapping
//! - **Config**: environment configuration
//!
//! Storage is reached only through [`gymflow_db::BookingStore`], so the
//! router can be driven by the in-memory store in tests.

/// Availability checks and the booking flow
pub mod checker;
/// Configuration module for API settings
pub mod config;
/// Body and path extractors with JSON error responses
pub mod extract;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use gymflow_db::BookingStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::middleware::auth::Jwt;

/// Shared application state handed to every handler.
pub struct ApiState {
    pub store: Arc<dyn BookingStore>,
    pub jwt: Jwt,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, jwt_secret: &str) -> Self {
        Self {
            store,
            jwt: Jwt::new(jwt_secret),
        }
    }
}

/// Builds the application router with all routes and the shared state attached.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::personal_training::routes())
        .merge(routes::trainer::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, "Skipping invalid CORS origin: {}", e);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server on `config.server_addr()` backed by `store`.
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let pool = gymflow_db::create_pool(&config.database_url).await?;
/// start_server(config, Arc::new(PgBookingStore::new(pool))).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(store, &config.jwt_secret));
    let app = build_router(state);

    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
