use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use chat_relay::{
    config::Config,
    routes,
    services::anthropic::AnthropicClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    chat_relay::init_tracing();
    let config = Config::from_env();

    if config.api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY is not set, every chat request will fail");
    }

    let llm = AnthropicClient::new(&config);
    tracing::info!(model = llm.model(), "upstream client ready");
    let state = Arc::new(AppState::new(Arc::new(llm)));

    let app = routes::create_router_with_public(&config.public_dir)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "chat relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
