//! HTTP API module for the Prevailing Wage Engine.
//!
//! This module provides the REST API endpoints for costing projects and
//! inspecting the loaded rate table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, WorkItemRequest};
pub use response::{
    ApiError, CalculationResponse, CraftSummary, CraftsResponse, HealthResponse,
    RegionRatesResponse,
};
pub use state::AppState;
