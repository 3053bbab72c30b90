//! Request error responses
//!
//! Errors are returned as plain text. Upload failures while updating a
//! project name the failing step (`Error message copy file: ...`); every
//! other error is prefixed with `Message:`, and request errors add a
//! `Hint:` line when there is one.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio_core::Error;
use portfolio_core::error::UploadStage;
use tracing::warn;

/// How an error body is worded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageStyle {
    Plain,
    Staged,
}

/// Error returned from request handlers
#[derive(Debug)]
pub struct AppError {
    error: Error,
    style: MessageStyle,
}

impl AppError {
    /// Word upload failures by their step
    pub fn staged(error: Error) -> Self {
        Self {
            error,
            style: MessageStyle::Staged,
        }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            Error::ProjectNotFound { .. } => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> String {
        match (&self.error, self.style) {
            (Error::UploadFailed { stage, message }, MessageStyle::Staged) => {
                format!("Error message {}: {}", stage, message)
            }
            (error, _) => match error.suggestion() {
                Some(hint) if error.is_client_error() => {
                    format!("Message: {}\nHint: {}", error, hint)
                }
                _ => format!("Message: {}", error),
            },
        }
    }
}

impl From<Error> for AppError {
    fn from(error: Error) -> Self {
        Self {
            error,
            style: MessageStyle::Plain,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let suggestion = self.error.suggestion().unwrap_or_default();
        warn!(
            code = self.error.code(),
            status = status.as_u16(),
            error = %self.error,
            suggestion = %suggestion,
            "Request failed"
        );
        (status, self.body()).into_response()
    }
}

/// The image field was absent or had no file name
pub fn missing_image() -> Error {
    Error::upload(UploadStage::UploadFile, "no file was submitted in the image field")
}
