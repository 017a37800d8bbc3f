use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{extract, gemini::GeminiError, patterns, prompts, relay, AppState};

use super::models::{
    AskRequest, CodeReviewRequest, ErrorResponse, EvaluationRequest, ExplainRequest,
    ReviewResponse, SuggestRequest, SuggestResponse,
};

/// Cap on the free-text fields forwarded into a prompt. The upstream model is
/// billed per token, so unbounded client input is a cost lever we refuse.
const MAX_INPUT_BYTES: usize = 64 * 1024;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: String) -> ApiError {
    (status, Json(ErrorResponse { error }))
}

fn check_field(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Field \"{name}\" must be a non-empty string"),
        ));
    }
    if value.len() > MAX_INPUT_BYTES {
        return Err(error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Field \"{name}\" exceeds the {MAX_INPUT_BYTES}-byte limit"),
        ));
    }
    Ok(())
}

fn upstream_failed(err: GeminiError) -> ApiError {
    tracing::warn!(error = %err, "model call failed");
    error_response(StatusCode::BAD_GATEWAY, err.to_string())
}

pub async fn ask_stream(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<Response, ApiError> {
    check_field("question", &payload.question)?;

    let prompt = prompts::ask(&payload.question, &payload.topic, &payload.difficulty);
    let chunks = state
        .gemini
        .stream(&state.config.chat_model, &prompt)
        .await
        .map_err(upstream_failed)?;

    Ok(relay::sse_response(chunks))
}

pub async fn suggest_questions(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    check_field("topic", &payload.topic)?;

    let prompt = prompts::suggest(&payload.topic, &payload.difficulty);
    let questions = state
        .gemini
        .generate(&state.config.chat_model, &prompt)
        .await
        .map_err(upstream_failed)?;

    Ok(Json(SuggestResponse { questions }))
}

/// Always answers 200: either the model's JSON verdict, or an error-shaped
/// payload carrying the raw text when no JSON could be extracted.
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<Value>, ApiError> {
    check_field("question", &payload.question)?;
    check_field("user_answer", &payload.user_answer)?;

    let prompt = prompts::evaluate(&payload.question, &payload.user_answer);
    let text = state
        .gemini
        .generate(&state.config.chat_model, &prompt)
        .await
        .map_err(upstream_failed)?;

    Ok(Json(extract::extract_json(text.trim())))
}

pub async fn code_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CodeReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    check_field("language", &payload.language)?;
    check_field("code", &payload.code)?;

    let prompt = prompts::code_review(&payload.language, &payload.code, payload.title.as_deref());
    let feedback = state
        .gemini
        .generate(&state.config.review_model, &prompt)
        .await
        .map_err(upstream_failed)?;

    Ok(Json(ReviewResponse { feedback }))
}

pub async fn get_patterns(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let records = patterns::fetch_patterns(
        &state.http,
        &state.config.patterns_url,
        state.config.patterns_timeout_ms,
    )
    .await
    .map_err(|err| {
        tracing::warn!(error = %err, "patterns fetch failed");
        error_response(StatusCode::BAD_GATEWAY, err.to_string())
    })?;

    Ok(Json(records))
}

pub async fn explain_pattern(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExplainRequest>,
) -> Result<Response, ApiError> {
    check_field("title", &payload.title)?;
    check_field("pattern", &payload.pattern)?;

    let prompt = prompts::explain(
        &payload.title,
        &payload.url,
        &payload.difficulty,
        &payload.pattern,
    );
    let chunks = state
        .gemini
        .stream(&state.config.review_model, &prompt)
        .await
        .map_err(upstream_failed)?;

    Ok(relay::sse_response(chunks))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
