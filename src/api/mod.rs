mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub use models::{
    AskRequest, CodeReviewRequest, ErrorResponse, EvaluationRequest, ExplainRequest,
    ReviewResponse, SuggestRequest, SuggestResponse,
};

pub fn router(state: Arc<AppState>) -> Router {
    // One known front-end origin, with credentials. tower-http rejects
    // wildcards alongside credentials, so methods and headers mirror the
    // request instead.
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origin.clone())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/ask_stream", post(handlers::ask_stream))
        .route("/suggest_questions", post(handlers::suggest_questions))
        .route("/evaluate", post(handlers::evaluate))
        .route("/code_review", post(handlers::code_review))
        .route("/patterns", get(handlers::get_patterns))
        .route("/explain_pattern", post(handlers::explain_pattern))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
