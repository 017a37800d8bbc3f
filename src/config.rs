use axum::http::HeaderValue;
use std::env;

pub const DEFAULT_PATTERNS_URL: &str =
    "https://raw.githubusercontent.com/seanprashad/leetcode-patterns/main/src/data/questions.json";

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Runtime configuration, read once at startup and injected into the
/// application state. Every field has a default so a bare `cargo run` comes
/// up; an empty `GEMINI_API_KEY` surfaces as an error on the first model call.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    /// Model for plain Q&A, suggestions and answer evaluation.
    pub chat_model: String,
    /// Stronger model for code review and pattern explanation.
    pub review_model: String,
    /// The single front-end origin allowed by CORS.
    pub allowed_origin: HeaderValue,
    pub patterns_url: String,
    pub patterns_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8000),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            chat_model: env::var("GEMINI_CHAT_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            review_model: env::var("GEMINI_REVIEW_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .ok()
                .and_then(|v| v.parse::<HeaderValue>().ok())
                .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)),
            patterns_url: env::var("PATTERNS_URL")
                .unwrap_or_else(|_| DEFAULT_PATTERNS_URL.to_string()),
            patterns_timeout_ms: env::var("PATTERNS_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(20_000),
        }
    }
}
