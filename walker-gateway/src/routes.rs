//! Axum route handlers for the grid-walker API.

use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};
use walker_core::{traverse, validate};

use crate::{config::GatewayConfig, error::GatewayError};

/// Path of the single traversal endpoint.
pub const TRAVERSED_GRID_PATH: &str = "/api/traversed-grid";

// ── Request types ─────────────────────────────────────────────────────────────

/// JSON body of a traversal request: `{"matrix": [[0, 1], [2, 3]]}`.
///
/// Serialising a `GridBody` produces the same JSON form the endpoint accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBody {
    #[serde(default)]
    pub matrix: Option<Vec<Vec<i32>>>,
}

impl GridBody {
    /// Wrap `matrix` in a request body.
    #[must_use]
    pub fn new(matrix: Vec<Vec<i32>>) -> Self {
        Self { matrix: Some(matrix) }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router(config: &GatewayConfig) -> Router {
    let trailing = format!("{TRAVERSED_GRID_PATH}/");
    Router::new()
        .route(TRAVERSED_GRID_PATH, post(traverse_grid))
        .route(&trailing, post(traverse_grid))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `POST /api/traversed-grid` — walk the supplied matrix in clockwise spiral
/// order and return the values as `"0, 1, 2, ..."`.
///
/// # Errors
/// Returns [`GatewayError::MissingBody`] for an empty or `null` body,
/// [`GatewayError::MalformedInput`] if the body is not an integer matrix, and
/// [`GatewayError::Validation`] if the matrix is null, empty, or ragged.
pub async fn traverse_grid(body: Bytes) -> Result<String, GatewayError> {
    handle_traversal(&body).inspect_err(|e| warn!(error = %e, "rejected grid"))
}

fn handle_traversal(body: &[u8]) -> Result<String, GatewayError> {
    let matrix = validate(decode_body(body)?)?;
    debug!(rows = matrix.rows(), columns = matrix.columns(), "traversing grid");
    Ok(format_traversal(&traverse(&matrix)))
}

// ── Boundary helpers ──────────────────────────────────────────────────────────

/// Decode a raw request body into the optional matrix it carries.
///
/// Cell values must be JSON integers within the `i32` range; strings, floats,
/// and out-of-range numbers are rejected here, before validation.
///
/// # Errors
/// Returns [`GatewayError::MissingBody`] if `body` is blank or the JSON
/// literal `null`, or [`GatewayError::MalformedInput`] if it does not parse.
pub fn decode_body(body: &[u8]) -> Result<Option<Vec<Vec<i32>>>, GatewayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(GatewayError::MissingBody);
    }
    let parsed: Option<GridBody> = serde_json::from_slice(body)
        .map_err(|e| GatewayError::MalformedInput(e.to_string()))?;
    parsed.map(|b| b.matrix).ok_or(GatewayError::MissingBody)
}

/// Join traversal output with `", "`.
#[must_use]
pub fn format_traversal(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
