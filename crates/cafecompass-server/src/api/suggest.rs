use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use cafecompass_places::PlaceSuggestion;

use crate::middleware::RequestId;

use super::{map_places_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SuggestParams {
    query: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SuggestResponse {
    suggestions: Vec<PlaceSuggestion>,
}

pub(super) async fn suggest_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let query = params.query.unwrap_or_default();
    let suggestions = state
        .places
        .suggest_places(query.trim())
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;

    Ok(Json(SuggestResponse { suggestions }))
}
