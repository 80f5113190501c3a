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
    NumsQuery, Operation, ReplyFormat, StatResponse,
};
use crate::stats;

pub async fn get_median(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<NumsQuery>,
) -> Result<Response, ApiError> {
    let format = ReplyFormat::from_headers(&headers);
    let nums = nums_from(&params, format)?;

    let value = stats::median(&nums);

    info!("Computed median of {} values: {}", nums.len(), value);
    state.record(format!("median of {} values -> {}", nums.len(), value));

    Ok(format.render(&StatResponse {
        operation: Operation::Median,
        value,
    }))
}
