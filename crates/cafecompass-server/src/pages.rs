//! The two server-rendered screens: the search form and the results list.

use std::sync::LazyLock;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Environment};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use cafecompass_core::{
    build_cards, rank_cafes, split_address, toggle, Cafe, RadiusMiles, RankBy,
};

use crate::api::AppState;

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.add_template("search", include_str!("templates/search.html.jinja"))
        .expect("valid search template");
    env.add_template("cafes", include_str!("templates/cafes.html.jinja"))
        .expect("valid cafes template");
    env
});

fn render(name: &str, ctx: minijinja::Value) -> Response {
    match TEMPLATES.get_template(name).and_then(|t| t.render(ctx)) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!(%error, template = name, "template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn search_page() -> Response {
    render(
        "search",
        context! {
            min_radius => cafecompass_core::radius::MIN_RADIUS_MILES,
            max_radius => cafecompass_core::radius::MAX_RADIUS_MILES,
            default_radius => cafecompass_core::radius::DEFAULT_RADIUS_MILES,
        },
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct CafesPageParams {
    #[serde(rename = "selectedPlace")]
    selected_place: Option<String>,
    radius: Option<String>,
    sort: Option<String>,
}

/// One café card as the results template consumes it: strings only, star
/// lines prerendered, address split into its display lines.
#[derive(Debug, Serialize)]
struct CardView {
    id: usize,
    name: String,
    street: Option<String>,
    locality: Option<String>,
    rating: String,
    seating_stars: String,
    outlets_stars: String,
    quietness_stars: String,
    photo_url: String,
}

fn card_view(cafe: &Cafe) -> CardView {
    let (street, locality) = match cafe.address.as_deref() {
        Some(address) => {
            let lines = split_address(address);
            (
                lines.street.map(str::to_string),
                Some(lines.locality.to_string()),
            )
        }
        None => (None, None),
    };
    CardView {
        id: cafe.id,
        name: cafe.name.clone(),
        street,
        locality,
        rating: format!("{:.1}", cafe.rating),
        seating_stars: cafe.seating.stars(),
        outlets_stars: cafe.outlets.stars(),
        quietness_stars: cafe.noise.stars_inverted(),
        photo_url: cafe.photo_url.clone(),
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SortLink {
    label: &'static str,
    href: String,
    active: bool,
}

/// Builds the three criterion links for the results page. Each link
/// re-navigates with the toggled criterion, so clicking the active one
/// clears it.
fn sort_links(place: Option<&str>, radius: RadiusMiles, active: Option<RankBy>) -> Vec<SortLink> {
    [
        (RankBy::Seating, "Seating"),
        (RankBy::Outlets, "Outlets"),
        (RankBy::Noise, "Quietest"),
    ]
    .into_iter()
    .map(|(criterion, label)| {
        let mut href = String::from("/cafes?");
        if let Some(place) = place {
            href.push_str("selectedPlace=");
            href.extend(utf8_percent_encode(place, NON_ALPHANUMERIC));
            href.push('&');
        }
        href.push_str(&format!("radius={radius}"));
        if let Some(target) = toggle(active, criterion) {
            href.push_str(&format!("&sort={target}"));
        }
        SortLink {
            label,
            href,
            active: active == Some(criterion),
        }
    })
    .collect()
}

pub(crate) async fn cafes_page(
    State(state): State<AppState>,
    Query(params): Query<CafesPageParams>,
) -> Response {
    let place = params
        .selected_place
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    let radius = RadiusMiles::lenient(params.radius.as_deref());
    let sort = params
        .sort
        .as_deref()
        .and_then(|raw| raw.parse::<RankBy>().ok());

    // Missing parameters, no matches, and lookup failures all render the
    // same empty list; failures are only visible in the logs.
    let cards = match place {
        None => Vec::new(),
        Some(place) => match state.places.find_cafes(place, radius.to_meters()).await {
            Ok(listings) => build_cards(listings),
            Err(error) => {
                tracing::error!(error = %error, place, "café lookup failed; rendering empty list");
                Vec::new()
            }
        },
    };

    let ranked = rank_cafes(&cards, sort);
    let cards: Vec<CardView> = ranked.iter().map(card_view).collect();

    render(
        "cafes",
        context! {
            place_label => place.unwrap_or("Your Location"),
            radius => radius.miles(),
            cards => cards,
            sort_links => sort_links(place, radius, sort),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafecompass_core::{CafeListing, Score};

    fn sample_cafe() -> Cafe {
        build_cards(vec![CafeListing {
            name: "Cozy Corner".to_string(),
            address: Some("123 Bean St, San Jose, CA".to_string()),
            rating: Some(4.25),
            photo_url: None,
        }])
        .remove(0)
    }

    #[test]
    fn card_view_splits_address_and_renders_stars() {
        let view = card_view(&sample_cafe());
        assert_eq!(view.street.as_deref(), Some("123 Bean St"));
        assert_eq!(view.locality.as_deref(), Some("San Jose, CA"));
        assert_eq!(view.rating, "4.2");
        assert_eq!(view.seating_stars, "★★★☆☆");
        assert_eq!(view.quietness_stars, "★★★☆☆");
        assert_eq!(view.photo_url, cafecompass_core::PLACEHOLDER_PHOTO);
    }

    #[test]
    fn card_view_without_address_has_no_lines() {
        let mut cafe = sample_cafe();
        cafe.address = None;
        let view = card_view(&cafe);
        assert!(view.street.is_none());
        assert!(view.locality.is_none());
    }

    #[test]
    fn card_view_inverts_noise_for_quietness() {
        let mut cafe = sample_cafe();
        cafe.noise = Score::new(1);
        assert_eq!(card_view(&cafe).quietness_stars, "★★★★★");
        cafe.noise = Score::new(5);
        assert_eq!(card_view(&cafe).quietness_stars, "★☆☆☆☆");
    }

    #[test]
    fn sort_links_encode_place_and_toggle_active_criterion() {
        let radius = RadiusMiles::new(3.0);
        let links = sort_links(Some("San Jose, CA"), radius, Some(RankBy::Seating));

        // Active criterion links back to a sort-free URL (toggle clears it).
        assert!(links[0].active);
        assert_eq!(
            links[0].href,
            "/cafes?selectedPlace=San%20Jose%2C%20CA&radius=3"
        );
        // Inactive criteria link to themselves.
        assert!(!links[1].active);
        assert_eq!(
            links[1].href,
            "/cafes?selectedPlace=San%20Jose%2C%20CA&radius=3&sort=outlets"
        );
        assert_eq!(links[2].label, "Quietest");
        assert!(links[2].href.ends_with("&sort=noise"));
    }

    #[test]
    fn sort_links_without_place_omit_the_parameter() {
        let links = sort_links(None, RadiusMiles::default(), None);
        assert_eq!(links[0].href, "/cafes?radius=5&sort=seating");
    }
}
