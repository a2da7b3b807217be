//! Google-style place provider: geocode the place, sweep nearby searches
//! per place type, and serve city autocomplete.

use std::collections::HashSet;

use cafecompass_core::{CafeListing, MAX_CARDS};
use serde::Deserialize;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::providers::send_json;
use crate::types::{GeoPoint, PlaceSuggestion};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";
const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
const PHOTO_PATH: &str = "/maps/api/place/photo";

/// Place types swept per lookup; results are merged and deduped by place id.
const PLACE_TYPES: [&str; 2] = ["cafe", "coffee"];

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    results: Vec<NearbyPlace>,
}

#[derive(Debug, Deserialize)]
struct NearbyPlace {
    place_id: String,
    name: String,
    vicinity: Option<String>,
    rating: Option<f64>,
    #[serde(default)]
    photos: Vec<PhotoReference>,
}

#[derive(Debug, Deserialize)]
struct PhotoReference {
    photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
}

/// Resolves a place name to coordinates.
async fn geocode(pc: &PlacesClient, place: &str) -> Result<GeoPoint, PlacesError> {
    let url = format!("{}{GEOCODE_PATH}", pc.endpoints.google_maps_base);
    let request = pc
        .client
        .get(&url)
        .query(&[("address", place), ("key", pc.api_key.as_str())]);
    let response: GeocodeResponse =
        send_json(request, &url, "geocode response", pc.provider).await?;

    response
        .results
        .into_iter()
        .next()
        .map(|result| result.geometry.location)
        .ok_or_else(|| PlacesError::UnknownPlace {
            query: place.to_owned(),
        })
}

pub(crate) async fn find_cafes(
    pc: &PlacesClient,
    place: &str,
    radius_meters: u32,
) -> Result<Vec<CafeListing>, PlacesError> {
    let point = geocode(pc, place).await?;
    tracing::debug!(place, lat = point.lat, lng = point.lng, "geocoded search place");

    let mut seen = HashSet::new();
    let mut places: Vec<NearbyPlace> = Vec::new();

    for place_type in PLACE_TYPES {
        let url = format!("{}{NEARBY_SEARCH_PATH}", pc.endpoints.google_maps_base);
        let request = pc.client.get(&url).query(&[
            ("location", format!("{},{}", point.lat, point.lng).as_str()),
            ("radius", radius_meters.to_string().as_str()),
            ("type", place_type),
            ("keyword", place_type),
            ("key", pc.api_key.as_str()),
        ]);
        let response: NearbySearchResponse =
            send_json(request, &url, "nearby search response", pc.provider).await?;

        for candidate in response.results {
            if seen.insert(candidate.place_id.clone()) {
                places.push(candidate);
            }
        }
    }

    // Unrated places are dropped; the rest rank best-rated first.
    places.retain(|p| p.rating.is_some());
    places.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(places
        .into_iter()
        .take(MAX_CARDS)
        .map(|p| to_listing(pc, p))
        .collect())
}

fn to_listing(pc: &PlacesClient, place: NearbyPlace) -> CafeListing {
    let photo_url = place.photos.first().map(|photo| {
        photo_url(
            &pc.endpoints.google_maps_base,
            &photo.photo_reference,
            &pc.api_key,
        )
    });
    CafeListing {
        name: place.name,
        address: place.vicinity,
        rating: place.rating,
        photo_url,
    }
}

fn photo_url(base: &str, photo_reference: &str, api_key: &str) -> String {
    format!("{base}{PHOTO_PATH}?maxwidth=400&photo_reference={photo_reference}&key={api_key}")
}

pub(crate) async fn suggest_places(
    pc: &PlacesClient,
    query: &str,
) -> Result<Vec<PlaceSuggestion>, PlacesError> {
    let url = format!("{}{AUTOCOMPLETE_PATH}", pc.endpoints.google_maps_base);
    let request = pc.client.get(&url).query(&[
        ("input", query),
        ("types", "(cities)"),
        ("key", pc.api_key.as_str()),
    ]);
    let response: AutocompleteResponse =
        send_json(request, &url, "autocomplete response", pc.provider).await?;

    Ok(response
        .predictions
        .into_iter()
        .map(|p| PlaceSuggestion {
            id: p.place_id,
            description: p.description,
        })
        .collect())
}
