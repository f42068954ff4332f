//! Error types for the gateway crate.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use walker_core::ValidationError;

/// Errors that can occur while handling a traversal request.
///
/// Every variant is a client error; none affect later requests.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The request carried no payload, or the payload was JSON `null`.
    #[error("Must supply a grid")]
    MissingBody,

    /// The body is present but is not a well-formed integer matrix.
    #[error("Malformed grid: {0}")]
    MalformedInput(String),

    /// The matrix was parsed but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingBody
            | GatewayError::MalformedInput(_)
            | GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
