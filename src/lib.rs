//! Churn Prediction API
//!
//! Thin HTTP wrapper around a pre-trained binary churn classifier.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  CHURN-API                          │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌────────────┐ │
//! │  │  Router   │   │  Inference   │   │  Model     │ │
//! │  │  (Axum)   │──▶│  Dispatcher  │──▶│  Store     │ │
//! │  │           │   │  (alignment) │   │ (read-only)│ │
//! │  └───────────┘   └──────────────┘   └─────┬──────┘ │
//! │                                           ▼        │
//! │                                  ┌───────────────┐ │
//! │                                  │ artifact file │ │
//! │                                  └───────────────┘ │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The artifact is loaded once at startup; everything after that is
//! stateless request handling against the read-only store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
pub use model::ModelStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ModelStore>,
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/info", get(handlers::info::info))
        .route("/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
