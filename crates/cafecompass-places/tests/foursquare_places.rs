//! Integration tests for the Foursquare-style provider path of `PlacesClient`.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cafecompass_core::PlaceProvider;
use cafecompass_places::{PlacesClient, PlacesError, ProviderEndpoints};

fn test_client(base: &str) -> PlacesClient {
    PlacesClient::new(
        PlaceProvider::Foursquare,
        "fsq-test-key",
        5,
        "cafecompass-test/0.1",
        0,
        0,
    )
    .expect("failed to build test PlacesClient")
    .with_endpoints(ProviderEndpoints {
        foursquare_base: base.to_string(),
        ..ProviderEndpoints::default()
    })
}

fn search_result(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "location": { "formatted_address": format!("{name} Ave, San Jose, CA 95110") },
        "categories": [{
            "icon": {
                "prefix": "https://ss3.4sqi.net/img/categories_v2/food/cafe_",
                "suffix": ".png"
            }
        }]
    })
}

#[tokio::test]
async fn find_cafes_sends_key_and_maps_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/places/search"))
        .and(header("authorization", "fsq-test-key"))
        .and(query_param("query", "cafe coffee tea"))
        .and(query_param("near", "San Jose, CA"))
        .and(query_param("sort", "DISTANCE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [search_result("Cozy Corner"), search_result("Green Bean")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let listings = client
        .find_cafes("San Jose, CA", 4828)
        .await
        .expect("lookup should succeed");

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].name, "Cozy Corner");
    assert_eq!(
        listings[0].address.as_deref(),
        Some("Cozy Corner Ave, San Jose, CA 95110")
    );
    assert_eq!(
        listings[0].photo_url.as_deref(),
        Some("https://ss3.4sqi.net/img/categories_v2/food/cafe_bg_64.png")
    );
    // Foursquare search results carry no rating by default.
    assert!(listings[0].rating.is_none());
}

#[tokio::test]
async fn find_cafes_maps_bad_request_to_unknown_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/places/search"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&json!({
            "message": "Unable to geocode your near"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.find_cafes("Atlantis", 4828).await;
    assert!(
        matches!(result, Err(PlacesError::UnknownPlace { ref query }) if query == "Atlantis"),
        "expected UnknownPlace, got: {result:?}"
    );
}

#[tokio::test]
async fn find_cafes_maps_429_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/places/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.find_cafes("San Jose, CA", 4828).await;
    assert!(
        matches!(
            result,
            Err(PlacesError::RateLimited {
                retry_after_secs: 3,
                ..
            })
        ),
        "expected RateLimited(3s), got: {result:?}"
    );
}

#[tokio::test]
async fn find_cafes_tolerates_missing_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/places/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{ "name": "Bare Bones Beans" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let listings = client
        .find_cafes("San Jose, CA", 4828)
        .await
        .expect("lookup should succeed");
    assert_eq!(listings.len(), 1);
    assert!(listings[0].address.is_none());
    assert!(listings[0].photo_url.is_none());
}

#[tokio::test]
async fn suggest_places_joins_primary_and_secondary_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/autocomplete"))
        .and(header("authorization", "fsq-test-key"))
        .and(query_param("query", "san"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [
                { "text": { "primary": "San Jose", "secondary": "CA, USA" } },
                { "text": { "primary": "San Francisco" } },
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client.suggest_places("san").await.expect("suggest");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].description, "San Jose, CA, USA");
    assert_eq!(suggestions[0].id, "1");
    assert_eq!(suggestions[1].description, "San Francisco");
    assert_eq!(suggestions[1].id, "2");
}
