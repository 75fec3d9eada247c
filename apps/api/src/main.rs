mod analysis;
mod config;
mod errors;
mod llm_client;
mod resume;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::catalog::SkillCatalog;
use crate::skills::recommender::{LlmSkillRecommender, SkillRecommender};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillGraph API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is built once and shared read-only
    let catalog = Arc::new(SkillCatalog::builtin());
    anyhow::ensure!(!catalog.is_empty(), "Skill catalog is empty");
    info!("Skill catalog loaded ({} skills)", catalog.len());

    // Optional LLM second opinion for uploads
    let recommender = build_recommender(&config, &catalog)?;

    let state = AppState::new(catalog, recommender, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_recommender(
    config: &Config,
    catalog: &Arc<SkillCatalog>,
) -> Result<Option<Arc<dyn SkillRecommender>>> {
    let Some(api_key) = config.llm_api_key() else {
        warn!("LLM skill extraction disabled; uploads use keyword matching only");
        return Ok(None);
    };

    let llm = LlmClient::new(api_key.to_string())?;
    info!("LLM recommender initialized (model: {})", llm_client::MODEL);
    Ok(Some(Arc::new(LlmSkillRecommender::new(
        llm,
        Arc::clone(catalog),
    ))))
}
