use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

use chat_gateway::config::Config;
use chat_gateway::routes;
use chat_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Verbose diagnostics unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new());

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🚀 chat gateway running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
