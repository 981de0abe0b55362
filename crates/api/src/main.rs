use std::path::Path;
use std::sync::Arc;

use stockcast_forecast::{LinearScorer, Scorer};

#[tokio::main]
async fn main() {
    stockcast_observability::init();

    let model_path = std::env::var("MODEL_PATH").unwrap_or_else(|_| {
        tracing::warn!("MODEL_PATH not set; using ./model.json");
        "model.json".to_string()
    });

    // Artifact problems are fatal: there is nothing to serve without a model.
    let scorer = match LinearScorer::from_path(Path::new(&model_path)) {
        Ok(scorer) => scorer,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            std::process::exit(1);
        }
    };
    let scorer: Arc<dyn Scorer> = Arc::new(scorer);

    let app = stockcast_api::app::build_app(scorer);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
