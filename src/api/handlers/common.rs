use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::{
    api::{ErrorResponse, NumsQuery, ReplyFormat},
    parse, Error,
};

/// A request failure paired with the reply format negotiated for the
/// request, so error bodies render the same way success bodies would
/// have. Converting into a response is the single boundary every failure
/// passes through.
#[derive(Debug)]
pub struct ApiError {
    error: Error,
    format: ReplyFormat,
}

impl ApiError {
    pub fn new(error: Error, format: ReplyFormat) -> Self {
        Self { error, format }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.error.to_string(),
        };
        (StatusCode::BAD_REQUEST, self.format.render(&body)).into_response()
    }
}

/// Pulls the parsed number list out of the query parameters.
///
/// An absent or empty `nums` value is rejected as missing input before
/// the parser runs; a parse failure carries the offending token. Both
/// come back as `ApiError` so handlers can bail with `?`.
pub fn nums_from(params: &NumsQuery, format: ReplyFormat) -> Result<Vec<f64>, ApiError> {
    let Some(raw) = params.nums.as_deref().filter(|raw| !raw.is_empty()) else {
        warn!("Rejecting request with no nums parameter");
        return Err(ApiError::new(Error::MissingInput, format));
    };

    parse::parse_nums(raw).map_err(|error| {
        warn!("Rejecting request with unparsable nums: {}", error);
        ApiError::new(error, format)
    })
}
