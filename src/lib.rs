pub mod api;
pub mod config;
pub mod extract;
pub mod gemini;
pub mod patterns;
pub mod prompts;
pub mod relay;

use std::sync::Arc;

use axum::Router;

use config::AppConfig;
use gemini::{GeminiClient, GeminiConfig};

pub struct AppState {
    pub config: AppConfig,
    pub gemini: GeminiClient,
    pub http: reqwest::Client,
}

pub fn app_state(config: AppConfig) -> Arc<AppState> {
    let gemini = GeminiClient::new(GeminiConfig {
        api_key: config.gemini_api_key.clone(),
        base_url: config.gemini_base_url.clone(),
    });

    Arc::new(AppState {
        gemini,
        http: reqwest::Client::new(),
        config,
    })
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}
