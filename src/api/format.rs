use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Serialize;
use tracing::error;

/// The single Accept value that switches a response to preformatted text.
pub const HTML_ACCEPT: &str = "text/html";

/// How a response body should be rendered. Every payload, success or
/// failure, goes out through one of these two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    Json,
    Html,
}

impl ReplyFormat {
    /// Negotiates the reply format from the request headers. Exactly one
    /// value is recognized: an `Accept` header equal to `text/html` by
    /// exact string comparison. Lists like `text/html, application/xml`,
    /// any other value, or no header at all select JSON.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok());
        if accept == Some(HTML_ACCEPT) {
            ReplyFormat::Html
        } else {
            ReplyFormat::Json
        }
    }

    /// Renders a payload in this format: plain JSON, or the same payload
    /// pretty-printed with 2-space indentation inside a `<pre>` block.
    pub fn render<T: Serialize>(self, payload: &T) -> Response {
        match self {
            ReplyFormat::Json => Json(payload).into_response(),
            ReplyFormat::Html => match serde_json::to_string_pretty(payload) {
                Ok(body) => Html(format!("<pre>{}</pre>", body)).into_response(),
                Err(e) => {
                    error!("Failed to serialize response body: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
        }
    }
}
