//! Provider implementations for café lookup and place suggestions.
//!
//! Each module maps one upstream service's response format into the
//! provider-neutral [`cafecompass_core::CafeListing`] and
//! [`crate::types::PlaceSuggestion`] shapes.

pub(crate) mod foursquare;
pub(crate) mod google;

use cafecompass_core::PlaceProvider;
use serde::de::DeserializeOwned;

use crate::error::PlacesError;

/// Sends a prepared request and parses its JSON body.
///
/// Maps HTTP 429 to [`PlacesError::RateLimited`] (honoring `Retry-After`),
/// any other non-2xx to [`PlacesError::UnexpectedStatus`], and a
/// non-conforming body to [`PlacesError::Deserialize`] tagged with `context`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    url: &str,
    context: &str,
    provider: PlaceProvider,
) -> Result<T, PlacesError> {
    let response = request.send().await?;
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        return Err(PlacesError::RateLimited {
            provider: provider.to_string(),
            retry_after_secs,
        });
    }

    if !status.is_success() {
        return Err(PlacesError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| PlacesError::Deserialize {
        context: context.to_string(),
        source,
    })
}
