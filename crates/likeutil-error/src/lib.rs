//! JSON error responses for axum handlers.
//!
//! Errors fall in two groups:
//!
//! - *expected*: an [`AppError`] tagged with a status code by the application, or a
//!   [`ValidationError`] describing bad input. The client sees their status and message.
//! - *unexpected*: anything else. It is logged in full at error level and the client only
//!   receives `500` with the message `"Internal Error"`.
//!
//! Every response body has the shape `{"error": <status>, "message": <text>}`.
//!
//! ```no_run
//! use axum::http::StatusCode;
//! use likeutil_error::{AppError, ResponseError};
//!
//! async fn find_user() -> Result<String, ResponseError> {
//!     Err(AppError::new(StatusCode::NOT_FOUND, "not found").into())
//! }
//! ```

#![forbid(unsafe_code)]

use std::error::Error as StdError;
use std::fmt::Write as _;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Message sent to clients in place of the details of an unexpected error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Error";

/// An error the application raised on purpose, carrying the status to respond with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        AppError {
            status,
            message: message.into(),
        }
    }

    /// Numeric status variant of [`AppError::new`]. Codes outside 100..=999 become 500.
    pub fn with_code(code: u16, message: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        AppError::new(status, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::new(StatusCode::CONFLICT, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Rejected input. Responds with 400 unless a status is attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    field: Option<String>,
    status: Option<StatusCode>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
            field: None,
            status: None,
        }
    }

    /// Validation failure of a named input field.
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: Some(field.into()),
            ..ValidationError::new(message)
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::BAD_REQUEST)
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: u16,
    pub message: String,
}

/// An error returned from a handler, classified by how much of it the client may see.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Unexpected(BoxError),
}

impl ResponseError {
    pub fn unexpected(err: impl Into<BoxError>) -> Self {
        ResponseError::Unexpected(err.into())
    }

    /// Sort a type-erased error: [`AppError`] and [`ValidationError`] stay expected, anything
    /// else is unexpected.
    pub fn classify(err: BoxError) -> Self {
        let err = match err.downcast::<AppError>() {
            Ok(app) => return ResponseError::App(*app),
            Err(err) => err,
        };

        match err.downcast::<ValidationError>() {
            Ok(validation) => ResponseError::Validation(*validation),
            Err(err) => ResponseError::Unexpected(err),
        }
    }

    pub fn is_expected(&self) -> bool {
        !matches!(self, ResponseError::Unexpected(_))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ResponseError::App(e) => e.status(),
            ResponseError::Validation(e) => e.status(),
            ResponseError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The body sent to the client.
    pub fn body(&self) -> ErrorBody {
        let message = match self {
            ResponseError::App(e) => e.message().to_string(),
            ResponseError::Validation(e) => e.message().to_string(),
            ResponseError::Unexpected(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        ErrorBody {
            error: self.status().as_u16(),
            message,
        }
    }
}

impl From<BoxError> for ResponseError {
    fn from(err: BoxError) -> Self {
        ResponseError::classify(err)
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        if let ResponseError::Unexpected(err) = &self {
            error!("unexpected error: {}", error_chain(&**err));
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Error handler for `axum::error_handling::HandleErrorLayer`.
pub async fn handle_error(err: BoxError) -> Response {
    ResponseError::classify(err).into_response()
}

/// `err` followed by each of its sources, separated by `": "`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }

    out
}
