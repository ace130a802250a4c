use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dataset_store::Dataset;
use oceaneye_gateway::{app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "oceaneye_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let state = AppState::new(&config.data_dir);

    // Seed the datasets up front so first requests do not pay for it.
    // Checking one file is enough: the default policy regenerates all
    // five whenever any is missing.
    let mut rng = rand::thread_rng();
    state.datasets.ensure(Dataset::Anomalies, &mut rng)?;
    tracing::info!(data_dir = %config.data_dir.display(), "datasets ready");

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("OceanEye API starting on {}", addr);
    tracing::info!("   CORS origin: {}", config.allowed_origin);

    let router = app(state, &config.allowed_origin);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
