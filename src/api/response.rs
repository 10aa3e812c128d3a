//! Response types for the Prevailing Wage Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::CraftRateQuote;
use crate::error::EngineError;
use crate::models::{AuditWarning, ProjectCostResult};

/// Response body for the `/calculate` endpoint.
///
/// The identifiers and timestamp belong to the request; `result` depends only
/// on the request body and the loaded rate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The version of the rate table used.
    pub rate_table_version: String,
    /// Warnings about request fields that could not be read as numbers.
    pub input_warnings: Vec<AuditWarning>,
    /// The project cost result.
    pub result: ProjectCostResult,
}

/// One craft in the `/crafts` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftSummary {
    /// The craft name.
    pub name: String,
    /// Default hourly rate on market work.
    pub market_rate: Decimal,
    /// Statewide default hourly rate on prevailing wage work.
    pub regulated_rate: Decimal,
}

/// Response body for the `/crafts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftsResponse {
    /// The version of the rate table.
    pub rate_table_version: String,
    /// All crafts, ordered by name.
    pub crafts: Vec<CraftSummary>,
}

/// Response body for the `/regions/:region/rates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRatesResponse {
    /// The region queried.
    pub region: String,
    /// Whether the region is listed in the rate table.
    pub known_region: bool,
    /// The version of the rate table.
    pub rate_table_version: String,
    /// Rates for every craft, ordered by craft name.
    pub rates: Vec<CraftRateQuote>,
}

/// Response body for the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the server is answering.
    pub status: String,
    /// The version of the engine.
    pub engine_version: String,
    /// The loaded rate table name.
    pub rate_table: String,
    /// The loaded rate table version.
    pub rate_table_version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a craft not found error response.
    pub fn craft_not_found(craft: &str) -> Self {
        Self::with_details(
            "CRAFT_NOT_FOUND",
            format!("Craft not found: {}", craft),
            format!("The craft '{}' is not defined in the loaded rate table", craft),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::CraftNotFound { craft } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::craft_not_found(&craft),
            },
            config_error => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    config_error.to_string(),
                ),
            },
        }
    }
}
