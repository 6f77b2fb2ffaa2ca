use crate::models::responses::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures while talking to the upstream catalog. Never leaves the provider:
/// it is logged and the caller gets an empty catalog instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("error building HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("error creating request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("error making HTTP request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status code: {0}")]
    Status(reqwest::StatusCode),
    #[error("error reading response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Books source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid query parameters")]
    InvalidQuery,
    #[error("Failed to get metrics")]
    Metrics(#[from] MetricsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidQuery => StatusCode::BAD_REQUEST,
            ApiError::Metrics(e) => {
                error!("Failed to get metrics: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
