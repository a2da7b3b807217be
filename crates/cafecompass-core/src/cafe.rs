//! The café card and the upstream-listing mapping that produces it.

use serde::{Deserialize, Serialize};

use crate::score::Score;

/// Placeholder used for seating/outlets/noise until an upstream source
/// reports real values for them.
pub const PLACEHOLDER_SCORE: u8 = 3;

/// Bundled image served for listings without a usable photo URL.
pub const PLACEHOLDER_PHOTO: &str = "/assets/cafe-placeholder.svg";

/// Maximum number of cards shown per lookup.
pub const MAX_CARDS: usize = 5;

/// One café listing as produced by a place provider.
///
/// This is the provider-neutral shape: every provider maps its own response
/// format into this, and it is also the wire shape of the lookup API's
/// `cafes` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeListing {
    pub name: String,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub photo_url: Option<String>,
}

/// A display-ready café card. Immutable once built; ranking reorders copies
/// rather than touching the set a lookup produced.
#[derive(Debug, Clone, Serialize)]
pub struct Cafe {
    /// Sequence number within the current result set; rendering key only.
    pub id: usize,
    pub name: String,
    pub address: Option<String>,
    pub rating: f64,
    pub seating: Score,
    pub outlets: Score,
    pub noise: Score,
    pub photo_url: String,
}

/// Builds display cards from upstream listings: keeps at most the first
/// [`MAX_CARDS`] entries, numbers them from 1, and substitutes placeholders
/// for everything the upstream source does not provide.
#[must_use]
pub fn build_cards(listings: Vec<CafeListing>) -> Vec<Cafe> {
    listings
        .into_iter()
        .take(MAX_CARDS)
        .enumerate()
        .map(|(index, listing)| Cafe {
            id: index + 1,
            name: listing.name,
            address: listing.address,
            rating: listing.rating.unwrap_or(0.0),
            seating: Score::new(PLACEHOLDER_SCORE),
            outlets: Score::new(PLACEHOLDER_SCORE),
            noise: Score::new(PLACEHOLDER_SCORE),
            photo_url: listing
                .photo_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string()),
        })
        .collect()
}

/// An address broken into its display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressLines<'a> {
    /// Street-number line, present only when the head of the address looks
    /// like one (contains a digit before the first comma).
    pub street: Option<&'a str>,
    /// City/region remainder, or the whole address when no street line was
    /// split off.
    pub locality: &'a str,
}

/// Splits a formatted address on its first comma iff the portion before it
/// contains a digit; otherwise the whole string is treated as the locality.
#[must_use]
pub fn split_address(address: &str) -> AddressLines<'_> {
    match address.split_once(',') {
        Some((head, tail)) if head.chars().any(|c| c.is_ascii_digit()) => AddressLines {
            street: Some(head.trim()),
            locality: tail.trim(),
        },
        _ => AddressLines {
            street: None,
            locality: address.trim(),
        },
    }
}
