use crate::context::RequestContext;
use crate::error::ApiError;
use crate::models::responses::MetricsResponse;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use tracing::{info, warn};

/// Query pairs in request order, so a repeated key is still visible.
type QueryPairs = Vec<(String, String)>;

/// The first `author` value wins when the parameter is repeated.
fn author_param(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "author")
        .map(|(_, value)| value)
        .filter(|author| !author.is_empty())
}

pub async fn get_metrics(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let Query(pairs) = query.map_err(|e| {
        warn!("Rejected metrics query: {}", e);
        ApiError::InvalidQuery
    })?;

    let Some(author) = author_param(pairs) else {
        warn!("Rejected metrics query: missing or empty author");
        return Err(ApiError::InvalidQuery);
    };

    info!("Metrics query for author {:?}", author);

    let ctx = RequestContext::with_timeout(state.request_timeout);
    let metrics = state.metrics.get_metrics(&ctx, &author).await?;

    Ok(Json(metrics))
}
