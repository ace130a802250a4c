//! OceanEye Gateway
//!
//! REST surface over the mock oceanographic datasets and the research
//! upload store. Dataset endpoints lazily regenerate missing files;
//! upload endpoints parse documents into JSON envelopes on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use dataset_store::{DatasetStore, ResearchStore};

pub mod error;
pub mod research_routes;
pub mod routes;

/// Front-end origin used when none is configured or the configured
/// value is not a valid header.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("OCEANEYE_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let data_dir = std::env::var("OCEANEYE_DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();

        let allowed_origin = std::env::var("OCEANEYE_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        Self {
            port,
            data_dir,
            allowed_origin,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<DatasetStore>,
    pub research: Arc<ResearchStore>,
}

impl AppState {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            datasets: Arc::new(DatasetStore::new(data_dir)),
            research: Arc::new(ResearchStore::new(data_dir.join("research"))),
        }
    }
}

/// Build the application router. Cross-origin access is limited to the
/// configured front-end origin, with all methods and headers allowed.
pub fn app(state: AppState, allowed_origin: &str) -> Router {
    // Fail closed: an unparsable origin falls back to the default
    // front-end origin, never to a wildcard.
    let origin = allowed_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!(
            origin = allowed_origin,
            "invalid CORS origin, using {}",
            DEFAULT_ALLOWED_ORIGIN
        );
        HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)
    });
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/anomalies", get(routes::get_anomalies))
        .route("/biodiversity", get(routes::get_biodiversity))
        .route("/disaster-predictions", get(routes::get_disaster_predictions))
        .route("/map-features", get(routes::get_map_features))
        .route("/historical-data", get(routes::get_historical_data))
        .route("/upload-research-data", post(research_routes::upload_research_data))
        .route("/research-data", get(research_routes::list_research_data))
        .route("/research-data/:filename", get(research_routes::get_research_data))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
