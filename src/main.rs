use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use pantry_api::api::{create_router, AppState};
use pantry_api::config::Config;
use pantry_api::services::recognition::MockRecognizer;
use pantry_api::storage::{load_recipes, JsonFileStore, Profile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let recipes = load_recipes(Path::new(&config.recipes_path))?;

    let store = Arc::new(JsonFileStore::new(&config.storage_path));
    let profile = Profile::load(store).await?;

    let recognizer = Arc::new(MockRecognizer::new(Duration::from_millis(
        config.recognition_delay_ms,
    )));

    let state = AppState::new(recipes, recognizer, profile);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
