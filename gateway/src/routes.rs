//! Dataset read endpoints.
//!
//! Every GET runs `ensure` before `read`, so a missing backing file is
//! healed transparently and clients never see a not-found state for
//! the five core datasets. No filtering or pagination is supported.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use dataset_store::Dataset;

use crate::error::ApiError;
use crate::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to OceanEye API",
        "status": "active"
    }))
}

fn dataset_response(state: &AppState, dataset: Dataset) -> Result<Json<Vec<Value>>, ApiError> {
    let mut rng = rand::thread_rng();
    state.datasets.ensure(dataset, &mut rng)?;
    Ok(Json(state.datasets.read(dataset)?))
}

pub async fn get_anomalies(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    dataset_response(&state, Dataset::Anomalies)
}

pub async fn get_biodiversity(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    dataset_response(&state, Dataset::Biodiversity)
}

pub async fn get_disaster_predictions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    dataset_response(&state, Dataset::DisasterPredictions)
}

pub async fn get_map_features(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    dataset_response(&state, Dataset::MapFeatures)
}

pub async fn get_historical_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    dataset_response(&state, Dataset::HistoricalData)
}
