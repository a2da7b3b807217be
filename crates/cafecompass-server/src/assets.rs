//! Embedded static assets.

use axum::http::header;
use axum::response::{IntoResponse, Response};

const PLACEHOLDER_SVG: &str = include_str!("assets/cafe-placeholder.svg");

/// Serves the bundled placeholder café image used for listings with no photo.
pub(crate) async fn placeholder_image() -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG).into_response()
}
