use metrics_service::config::Config;
use metrics_service::providers::books::HttpBooksProvider;
use metrics_service::repositories::books::ProviderBooksRepository;
use metrics_service::services::metrics::BooksMetricsService;
use metrics_service::{app, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metrics_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    info!("Using books API at {}", config.books_api_url);
    let provider = Arc::new(HttpBooksProvider::new(config.books_api_url.clone())?);
    let repository = Arc::new(ProviderBooksRepository::new(provider));
    let metrics = Arc::new(BooksMetricsService::new(repository));

    let state = AppState {
        metrics,
        request_timeout: config.request_timeout,
    };

    let addr = config.bind_address();
    info!("Metrics service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
