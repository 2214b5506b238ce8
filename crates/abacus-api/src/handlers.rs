use std::sync::Arc;

use abacus_calculator::to_response;
use abacus_types::{CalculationRequest, CalculationResponse, Operation};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationsResponse {
    pub operations: Vec<Operation>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.elapsed().as_secs(),
        started_at: state.start_time,
    })
}

pub async fn operations(State(state): State<Arc<AppState>>) -> Json<OperationsResponse> {
    Json(OperationsResponse { operations: state.calculator.operations().to_vec() })
}

/// Evaluates one calculation. Engine rejections are returned as 422 with the
/// same body shape as a success, so the front end always has `display`.
#[instrument(skip_all, fields(operation = tracing::field::Empty))]
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::Span::current().record("operation", request.operation.as_str());

    let outcome = state.calculator.evaluate(&request.a, &request.b, &request.operation);
    match outcome {
        Ok(_) => {
            info!("Calculation served");
            Ok(Json(to_response(&outcome)))
        }
        Err(err) => {
            info!(code = %err.code(), "Calculation rejected");
            Err(err.into())
        }
    }
}
