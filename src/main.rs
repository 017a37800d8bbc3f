use interview_gateway::{app_state, build_app, config::AppConfig, run_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let port = config.port;

    tracing::info!(
        port,
        chat_model = %config.chat_model,
        review_model = %config.review_model,
        "starting interview gateway"
    );

    let app = build_app(app_state(config));
    run_server(app, port).await;
}
