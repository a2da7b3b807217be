//! Provider-neutral types shared by the place providers.

use serde::{Deserialize, Serialize};

/// One autocomplete candidate for a free-text place query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    /// Provider-assigned identifier; used only as a rendering key.
    pub id: String,
    /// Human-readable place description, e.g. `"San Jose, CA, USA"`.
    pub description: String,
}

/// A latitude/longitude pair, as geocoding resolves a place name to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}
