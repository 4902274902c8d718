//! Churn Prediction API server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use churn_api::{config, create_router, AppState, ModelStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Churn Prediction API starting...");
    tracing::info!("Attempting to load model from: {}", config.model_path.display());

    // One-time model load. A failed load leaves the store empty rather than
    // aborting; /predict reports the missing model at request time.
    let store = ModelStore::load(&config.model_path);
    if store.is_loaded() {
        tracing::info!(
            "Model loaded successfully ({} features). Ready to predict.",
            store.feature_list().len()
        );
    } else {
        tracing::error!("Failed to load model; serving without a predictor");
    }

    let state = AppState {
        store: Arc::new(store),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
