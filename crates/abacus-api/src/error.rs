//! Error handling for the Abacus API
//!
//! Engine rejections keep the calculation response shape so a front end can
//! render `display` regardless of outcome. Everything else uses a small
//! `{"error": {"code", "message"}}` envelope.

use abacus_calculator::{CalculationError, to_response};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The engine rejected the calculation (422 Unprocessable Entity)
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// The request body could not be read as a calculation request
    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Calculation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidBody { status, .. } => *status,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Calculation(err) => err.code().as_str(),
            ApiError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody { status: rejection.status(), message: rejection.body_text() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Calculation(err) => (status, Json(to_response(&Err(err)))).into_response(),
            other => {
                let body = ApiErrorResponse {
                    error: ApiErrorBody {
                        code: other.error_code().to_string(),
                        message: other.to_string(),
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
