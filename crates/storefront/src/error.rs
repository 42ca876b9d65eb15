//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` type that route handlers return; it maps
//! every failure onto a status code and a client-safe message. Transport
//! causes are logged for diagnostics, never shown to the customer.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use pie_orders_core::contact::ContactError;
use pie_orders_core::session::{SUBMISSION_FAILED_MESSAGE, SubmitError};

use crate::services::IntakeError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submission guard rejected the session contents.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The session already holds a submitted order.
    #[error("Order already submitted")]
    AlreadySubmitted,

    /// Delivering the order to the intake endpoint failed.
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    /// Malformed client input.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::MissingContact | SubmitError::EmptyCart => {
                Self::Validation(err.to_string())
            }
            SubmitError::InFlight | SubmitError::AlreadySubmitted => Self::AlreadySubmitted,
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Intake(err) = &self {
            tracing::error!(error = %err, "order submission failed");
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AlreadySubmitted => StatusCode::CONFLICT,
            Self::Intake(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose transport details to clients
        let message = match self {
            Self::Validation(msg) | Self::BadRequest(msg) => msg,
            Self::AlreadySubmitted => {
                "This order was already submitted. Reset to place another.".to_string()
            }
            Self::Intake(_) => SUBMISSION_FAILED_MESSAGE.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
