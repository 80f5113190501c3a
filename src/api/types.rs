use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Query parameters accepted by every statistics endpoint.
#[derive(Debug, Deserialize)]
pub struct NumsQuery {
    pub nums: Option<String>,
}

/// Tag naming the statistic a response carries.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Mean,
    Median,
    Mode,
    All,
}

/// Single-statistic payload for `/mean`, `/median` and `/mode`.
#[derive(Debug, Serialize)]
pub struct StatResponse {
    pub operation: Operation,
    pub value: f64,
}

/// Combined payload for `/all`.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub operation: Operation,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

/// Body shape shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
