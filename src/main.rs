mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::companion::CannedReplyPolicy;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    tracing::info!(
        history_limit = config.history_limit,
        summary_turns = config.summary_turns,
        max_threads = config.max_threads,
        thread = %config.default_thread,
        "chat memory configured"
    );

    let state = state::AppState::new(config, Arc::new(CannedReplyPolicy));
    state.seed_default_thread().await;

    let app = routes::app(state).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "mindful listening");
    axum::serve(listener, app).await.expect("server failed");
}
