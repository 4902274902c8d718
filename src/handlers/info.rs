//! Model metadata handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// How many feature names `/info` shows as a sample.
const FEATURE_SAMPLE: usize = 10;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub model_type: String,
    pub features_count: usize,
    pub expected_features: Vec<String>,
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let features = state.store.feature_list();

    Json(InfoResponse {
        model_type: state
            .store
            .model_type()
            .unwrap_or("No model loaded")
            .to_string(),
        features_count: features.len(),
        expected_features: features
            .iter()
            .take(FEATURE_SAMPLE)
            .cloned()
            .collect(),
    })
}
