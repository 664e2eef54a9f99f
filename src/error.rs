// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::{gemini::UpstreamError, reply::MalformedResponse};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponse),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream details stay in the logs.
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(UpstreamError::NoReply) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No reply from Gemini API".to_string(),
            ),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch chatbot response".to_string(),
            ),
            AppError::MalformedResponse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid response format from Gemini API".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
