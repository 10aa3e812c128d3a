//! HTTP request handlers for the Prevailing Wage Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{assemble_project_cost, provenance_note, quote_region_rates, resolve_rate};
use crate::models::{RateSource, WageMode};

use super::request::CalculationRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, CraftSummary, CraftsResponse,
    HealthResponse, RegionRatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .route("/crafts", get(crafts_handler))
        .route("/crafts/:craft/rate", get(craft_rate_handler))
        .route("/regions/:region/rates", get(region_rates_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let metadata = state.config().metadata();
    Json(HealthResponse {
        status: "ok".to_string(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_table: metadata.name.clone(),
        rate_table_version: metadata.version.clone(),
    })
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a project and returns its labor, material and total cost along
/// with the prevailing wage impact.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let (inputs, input_warnings) = request.into_inputs();
    if !input_warnings.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            count = input_warnings.len(),
            "Non-numeric input treated as zero"
        );
    }

    let table = state.config().table();
    let start_time = Instant::now();
    let result = assemble_project_cost(&inputs, table);
    let duration = start_time.elapsed();

    if !result.labor.skipped_items.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            skipped = result.labor.skipped_items.len(),
            "Work items excluded from labor totals"
        );
    }
    info!(
        correlation_id = %correlation_id,
        region = %inputs.region,
        items_count = inputs.items.len(),
        total_project_cost = %result.total_project_cost,
        prevailing_wage_impact = %result.prevailing_wage_impact,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_table_version: table.metadata().version.clone(),
        input_warnings,
        result,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /crafts.
async fn crafts_handler(State(state): State<AppState>) -> Json<CraftsResponse> {
    let table = state.config().table();
    Json(CraftsResponse {
        rate_table_version: table.metadata().version.clone(),
        crafts: table
            .crafts()
            .map(|craft| CraftSummary {
                name: craft.name.clone(),
                market_rate: craft.market_rate,
                regulated_rate: craft.regulated_rate,
            })
            .collect(),
    })
}

/// Query parameters for GET /crafts/:craft/rate.
#[derive(Debug, Deserialize)]
struct CraftRateQuery {
    region: String,
    #[serde(default)]
    wage_mode: WageMode,
}

/// Response body for GET /crafts/:craft/rate.
#[derive(Debug, Serialize, Deserialize)]
struct CraftRateResponse {
    craft: String,
    region: String,
    wage_mode: WageMode,
    rate: Decimal,
    source: RateSource,
    note: String,
}

/// Handler for GET /crafts/:craft/rate.
///
/// Resolves the hourly rate a single work item would be costed at.
async fn craft_rate_handler(
    State(state): State<AppState>,
    Path(craft): Path<String>,
    query: Result<Query<CraftRateQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(craft = %craft, error = %body_text, "Invalid rate lookup query");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(body_text)),
            )
                .into_response();
        }
    };
    let table = state.config().table();

    match resolve_rate(&craft, &query.region, query.wage_mode, table, 1) {
        Ok(resolved) => {
            let note = provenance_note(resolved.source, &query.region, &table.metadata().version);
            (
                StatusCode::OK,
                Json(CraftRateResponse {
                    craft,
                    region: query.region,
                    wage_mode: query.wage_mode,
                    rate: resolved.rate,
                    source: resolved.source,
                    note,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(craft = %craft, error = %err, "Rate lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /regions/:region/rates.
///
/// Lists every craft's rates in the region and where the prevailing wage
/// rate comes from.
async fn region_rates_handler(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Json<RegionRatesResponse> {
    let table = state.config().table();
    Json(RegionRatesResponse {
        known_region: table.is_known_region(&region),
        rate_table_version: table.metadata().version.clone(),
        rates: quote_region_rates(&region, table),
        region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::WorkItemRequest;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/california").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            region: "Los Angeles".to_string(),
            system_size_kw: json!(50),
            material_cost_per_watt: json!(1.25),
            items: vec![
                WorkItemRequest {
                    id: "item_001".to_string(),
                    craft: "Electrician (General)".to_string(),
                    wage_mode: Some(WageMode::Regulated),
                    is_prevailing_wage: None,
                    hours: json!(160),
                    crew_size: json!(2),
                },
                WorkItemRequest {
                    id: "item_002".to_string(),
                    craft: "Laborer (General)".to_string(),
                    wage_mode: Some(WageMode::Market),
                    is_prevailing_wage: None,
                    hours: json!(80),
                    crew_size: json!(1),
                },
            ],
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = router.oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(response.rate_table_version, "2025-26");
        assert!(response.input_warnings.is_empty());
        assert_eq!(response.result.labor.line_items.len(), 2);
        assert_eq!(
            response.result.total_project_cost.round_dp(2),
            dec("103479.31")
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, post_json("{invalid json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_region_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = json!({ "items": [] }).to_string();

        let (status, body) = send(router, post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("region"));
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from("{}"))
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_craft_rate_lookup() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/crafts/Plumber/rate?region=San%20Francisco&wage_mode=regulated")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        let response: CraftRateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.rate, dec("102.00"));
        assert_eq!(response.source, RateSource::RegionOverride);
        assert!(response.note.contains("San Francisco"));
    }

    #[tokio::test]
    async fn test_unknown_craft_rate_lookup_returns_404() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/crafts/Boilermaker/rate?region=Napa")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "CRAFT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_craft_rate_lookup_without_region_returns_json_error() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/crafts/Plumber/rate")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("region"));
    }

    #[tokio::test]
    async fn test_craft_rate_lookup_with_bad_wage_mode_returns_json_error() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/crafts/Plumber/rate?region=Napa&wage_mode=union")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_reports_rate_table() {
        let router = create_router(create_test_state());
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(router, request).await;

        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.rate_table, "California Solar Trades");
    }
}
