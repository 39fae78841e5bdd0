// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ErrorBody, services::generator::GenerationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Chatbot error: {0}")]
    Generation(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            // Body read failures keep their own status; anything wrong with the JSON is a 422.
            AppError::InvalidBody(rejection @ JsonRejection::BytesRejection(_)) => {
                (rejection.status(), rejection.body_text())
            }
            AppError::InvalidBody(rejection) => (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
            AppError::Generation(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
