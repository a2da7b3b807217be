mod cafes;
mod suggest;

use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use cafecompass_core::AppConfig;
use cafecompass_places::{PlacesClient, PlacesError};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState};
use crate::{assets, pages};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub places: Arc<PlacesClient>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Maps a place-service failure onto the API error envelope.
///
/// An unresolvable place is the caller's problem (bad request, mirroring the
/// backend contract); anything else is an upstream fault.
pub(super) fn map_places_error(request_id: String, error: &PlacesError) -> ApiError {
    match error {
        PlacesError::UnknownPlace { query } => ApiError::new(
            request_id,
            "bad_request",
            format!("could not find location: {query}"),
        ),
        _ => {
            tracing::error!(error = %error, "place service request failed");
            ApiError::new(request_id, "upstream_error", "place service request failed")
        }
    }
}

fn build_cors(frontend_origin: &str) -> CorsLayer {
    let origin = match frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => tower_http::cors::AllowOrigin::exact(origin),
        Err(error) => {
            tracing::warn!(%error, frontend_origin, "invalid frontend origin; allowing any");
            tower_http::cors::AllowOrigin::any()
        }
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

fn api_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/cafes", get(cafes::list_cafes))
        .route("/api/places/suggest", get(suggest::suggest_places))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(health))
        .route("/", get(pages::search_page))
        .route("/cafes", get(pages::cafes_page))
        .route(
            "/assets/cafe-placeholder.svg",
            get(assets::placeholder_image),
        );

    let cors = build_cors(&state.config.frontend_origin);

    Router::new()
        .merge(public_routes)
        .merge(api_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, Duration::from_secs(60))
}
