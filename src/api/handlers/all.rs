use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Response,
};
use std::sync::Arc;
use tracing::info;
use crate::{
    AppState,
    api::handlers::common::{nums_from, ApiError},
    NumsQuery, Operation, ReplyFormat, SummaryResponse,
};
use crate::stats;

/// Computes all three statistics over the same parsed sequence.
pub async fn get_all(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<NumsQuery>,
) -> Result<Response, ApiError> {
    let format = ReplyFormat::from_headers(&headers);
    let nums = nums_from(&params, format)?;

    let summary = SummaryResponse {
        operation: Operation::All,
        mean: stats::mean(&nums),
        median: stats::median(&nums),
        mode: stats::mode(&nums),
    };

    info!("Computed full summary of {} values", nums.len());
    state.record(format!(
        "all of {} values -> mean {}, median {}, mode {}",
        nums.len(),
        summary.mean,
        summary.median,
        summary.mode
    ));

    Ok(format.render(&summary))
}
