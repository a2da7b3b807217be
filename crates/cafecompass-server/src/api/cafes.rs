use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use cafecompass_core::{CafeListing, RadiusMiles, MAX_CARDS};

use crate::middleware::RequestId;

use super::{map_places_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CafesParams {
    #[serde(rename = "selectedPlace")]
    selected_place: Option<String>,
    /// Radius in miles; parsed leniently so a malformed value falls back to
    /// the default instead of rejecting the request.
    radius: Option<String>,
}

/// Wire shape of the café lookup API: a bare `cafes` array.
#[derive(Debug, Serialize)]
pub(super) struct CafesResponse {
    cafes: Vec<CafeListing>,
}

pub(super) async fn list_cafes(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CafesParams>,
) -> Result<Json<CafesResponse>, ApiError> {
    let place = params
        .selected_place
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if place.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "selectedPlace query parameter is required",
        ));
    }

    let radius = RadiusMiles::lenient(params.radius.as_deref());
    tracing::debug!(place, radius = %radius, "café lookup");

    let mut cafes = state
        .places
        .find_cafes(place, radius.to_meters())
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;
    cafes.truncate(MAX_CARDS);

    Ok(Json(CafesResponse { cafes }))
}
