use serde::{Deserialize, Serialize};

use crate::models::domain::ScoredScheme;

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<ScoredScheme>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response after logging an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogExpenseResponse {
    pub id: String,
    pub status: String,
}
