pub mod client;
pub mod error;
pub mod providers;
pub mod types;

mod retry;

pub use client::{PlacesClient, ProviderEndpoints};
pub use error::PlacesError;
pub use types::{GeoPoint, PlaceSuggestion};
