use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod passwords;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Shared state handed to every handler: the pooled database connection.
/// Each request borrows it for the duration of its handler; every exit
/// path releases it when the handler future completes.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Build the full application router: health plus the three password routes
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/password/",
            get(passwords::search_password).post(passwords::create_password),
        )
        .route("/password/:service_name", get(passwords::get_password))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
