//! Prediction handler: record alignment + inference dispatch.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{AppError, AppResult, AppState};

/// An incoming customer record: open schema, any keys accepted.
pub type CustomerRecord = Map<String, Value>;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub churn_prediction: u8,
    pub churn_probability: f64,
    pub message: &'static str,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(record): Json<CustomerRecord>,
) -> AppResult<Json<PredictResponse>> {
    if !state.store.is_loaded() {
        return Err(AppError::ModelUnavailable);
    }

    let vector = align(state.store.feature_list(), &record)?;

    let (label, probability) = state
        .store
        .predict(&vector)
        .ok_or(AppError::ModelUnavailable)?;

    Ok(Json(PredictResponse {
        churn_prediction: label,
        churn_probability: probability,
        message: if label == 1 {
            "Customer will leave"
        } else {
            "Customer will stay"
        },
    }))
}

/// Reindex an open record onto the training feature order.
///
/// One slot per expected feature. Missing features fill with 0 and keys
/// outside the feature list are dropped.
fn align(features: &[String], record: &CustomerRecord) -> Result<Vec<f64>, AppError> {
    features
        .iter()
        .map(|name| match record.get(name) {
            Some(value) => numeric(name, value),
            None => Ok(0.0),
        })
        .collect()
}

/// Coerce a JSON scalar to f64. Numbers pass through and booleans count
/// as 0/1. Anything else fails the request.
fn numeric(name: &str, value: &Value) -> Result<f64, AppError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            AppError::Inference(format!("value for field '{}' is out of range", name))
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(AppError::Inference(format!(
            "non-numeric value for field '{}': {}",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn features(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn record(value: Value) -> CustomerRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn missing_features_fill_with_zero_in_training_order() {
        let features = features(&["tenure", "monthly_charges", "contract_two_year"]);
        let record = record(json!({ "monthly_charges": 70.5 }));

        let vector = align(&features, &record).unwrap();
        assert_eq!(vector, vec![0.0, 70.5, 0.0]);
    }

    #[test]
    fn extra_keys_are_dropped() {
        let features = features(&["tenure"]);
        let record = record(json!({
            "tenure": 12,
            "customer_name": "not even numeric",
            "favourite_color": [1, 2, 3]
        }));

        let vector = align(&features, &record).unwrap();
        assert_eq!(vector, vec![12.0]);
    }

    #[test]
    fn booleans_coerce_to_zero_and_one() {
        let features = features(&["is_senior", "has_partner"]);
        let record = record(json!({ "is_senior": true, "has_partner": false }));

        let vector = align(&features, &record).unwrap();
        assert_eq!(vector, vec![1.0, 0.0]);
    }

    #[test]
    fn non_numeric_expected_field_fails_with_field_name() {
        let features = features(&["tenure"]);
        let record = record(json!({ "tenure": "twelve" }));

        let err = align(&features, &record).unwrap_err();
        match err {
            AppError::Inference(msg) => assert!(msg.contains("tenure"), "got: {}", msg),
            other => panic!("expected inference error, got {:?}", other),
        }
    }

    #[test]
    fn null_expected_field_fails() {
        let features = features(&["tenure"]);
        let record = record(json!({ "tenure": null }));
        assert!(align(&features, &record).is_err());
    }

    #[test]
    fn empty_record_aligns_to_all_zeros() {
        let features = features(&["a", "b", "c"]);
        let vector = align(&features, &CustomerRecord::new()).unwrap();
        assert_eq!(vector, vec![0.0, 0.0, 0.0]);
    }
}
