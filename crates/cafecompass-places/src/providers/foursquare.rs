//! Foursquare-style place provider: a single distance-ordered search with
//! the place name geocoded upstream via `near`.

use cafecompass_core::{CafeListing, MAX_CARDS};
use serde::Deserialize;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::providers::send_json;
use crate::types::PlaceSuggestion;

const SEARCH_PATH: &str = "/v3/places/search";
const AUTOCOMPLETE_PATH: &str = "/v3/autocomplete";

/// One query covers all the storefront types a café search should surface.
const SEARCH_QUERY: &str = "cafe coffee tea";

/// Icon size slug for category icons, which stand in for café photos.
const ICON_SIZE: &str = "bg_64";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<FoursquarePlace>,
}

#[derive(Debug, Deserialize)]
struct FoursquarePlace {
    name: String,
    location: Option<PlaceLocation>,
    rating: Option<f64>,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct PlaceLocation {
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Category {
    icon: Option<CategoryIcon>,
}

#[derive(Debug, Deserialize)]
struct CategoryIcon {
    prefix: String,
    suffix: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    results: Vec<AutocompleteItem>,
}

#[derive(Debug, Deserialize)]
struct AutocompleteItem {
    text: AutocompleteText,
}

#[derive(Debug, Deserialize)]
struct AutocompleteText {
    primary: String,
    secondary: Option<String>,
}

pub(crate) async fn find_cafes(
    pc: &PlacesClient,
    place: &str,
    radius_meters: u32,
) -> Result<Vec<CafeListing>, PlacesError> {
    let url = format!("{}{SEARCH_PATH}", pc.endpoints.foursquare_base);
    let request = pc
        .client
        .get(&url)
        .header(reqwest::header::AUTHORIZATION, &pc.api_key)
        .header(reqwest::header::ACCEPT, "application/json")
        .query(&[
            ("query", SEARCH_QUERY),
            ("near", place),
            ("radius", radius_meters.to_string().as_str()),
            ("sort", "DISTANCE"),
            ("limit", MAX_CARDS.to_string().as_str()),
        ]);

    let response: SearchResponse = match send_json(request, &url, "place search response", pc.provider).await {
        // Foursquare reports an unresolvable `near` value as a 400.
        Err(PlacesError::UnexpectedStatus { status: 400, .. }) => {
            return Err(PlacesError::UnknownPlace {
                query: place.to_owned(),
            });
        }
        other => other?,
    };

    Ok(response.results.into_iter().map(to_listing).collect())
}

fn to_listing(place: FoursquarePlace) -> CafeListing {
    let photo_url = place
        .categories
        .first()
        .and_then(|category| category.icon.as_ref())
        .map(icon_url);
    CafeListing {
        name: place.name,
        address: place.location.and_then(|l| l.formatted_address),
        rating: place.rating,
        photo_url,
    }
}

fn icon_url(icon: &CategoryIcon) -> String {
    format!("{}{ICON_SIZE}{}", icon.prefix, icon.suffix)
}

pub(crate) async fn suggest_places(
    pc: &PlacesClient,
    query: &str,
) -> Result<Vec<PlaceSuggestion>, PlacesError> {
    let url = format!("{}{AUTOCOMPLETE_PATH}", pc.endpoints.foursquare_base);
    let request = pc
        .client
        .get(&url)
        .header(reqwest::header::AUTHORIZATION, &pc.api_key)
        .header(reqwest::header::ACCEPT, "application/json")
        .query(&[("query", query), ("types", "geo")]);

    let response: AutocompleteResponse =
        send_json(request, &url, "autocomplete response", pc.provider).await?;

    Ok(response
        .results
        .into_iter()
        .enumerate()
        .map(|(index, item)| PlaceSuggestion {
            id: (index + 1).to_string(),
            description: match item.text.secondary {
                Some(secondary) => format!("{}, {secondary}", item.text.primary),
                None => item.text.primary,
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_inserts_size_between_prefix_and_suffix() {
        let icon = CategoryIcon {
            prefix: "https://ss3.4sqi.net/img/categories_v2/food/cafe_".to_string(),
            suffix: ".png".to_string(),
        };
        assert_eq!(
            icon_url(&icon),
            "https://ss3.4sqi.net/img/categories_v2/food/cafe_bg_64.png"
        );
    }

    #[test]
    fn to_listing_handles_missing_location_and_categories() {
        let place = FoursquarePlace {
            name: "Bare Bones Beans".to_string(),
            location: None,
            rating: None,
            categories: vec![],
        };
        let listing = to_listing(place);
        assert_eq!(listing.name, "Bare Bones Beans");
        assert!(listing.address.is_none());
        assert!(listing.photo_url.is_none());
    }
}
