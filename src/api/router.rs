//! Router setup and configuration.

use axum::{
    Router,
    http::Method,
    routing::{get, patch},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, question};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    // Question routes; PATCH/DELETE without an id are bad requests, not 404/405
    let question_routes = Router::new()
        .route(
            "/questions",
            get(question::list_questions)
                .post(question::create_question)
                .patch(question::missing_question_id)
                .delete(question::missing_question_id),
        )
        .route(
            "/questions/",
            patch(question::missing_question_id).delete(question::missing_question_id),
        )
        .route(
            "/questions/{question_id}",
            patch(question::update_question).delete(question::delete_question),
        );

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", question_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// CORS for any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}
