//! Client facade over the supported place providers.

use std::time::Duration;

use cafecompass_core::{AppConfig, CafeListing, PlaceProvider};

use crate::error::PlacesError;
use crate::providers::{foursquare, google};
use crate::retry::retry_with_backoff;
use crate::types::PlaceSuggestion;

/// Base URLs for the upstream services, overridable so tests can point the
/// client at a local mock server.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub google_maps_base: String,
    pub foursquare_base: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            google_maps_base: "https://maps.googleapis.com".to_string(),
            foursquare_base: "https://api.foursquare.com".to_string(),
        }
    }
}

/// HTTP client for café lookups and place suggestions against the configured
/// provider.
///
/// Handles rate limiting (429) and other non-2xx responses as typed errors.
/// Transient errors (429, network failures) are automatically retried with
/// exponential backoff up to `max_retries` additional attempts.
pub struct PlacesClient {
    pub(crate) client: reqwest::Client,
    pub(crate) provider: PlaceProvider,
    pub(crate) api_key: String,
    pub(crate) endpoints: ProviderEndpoints,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl PlacesClient {
    /// Creates a `PlacesClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors; set to `0` to disable retries.
    /// `backoff_base_secs` controls the base delay for exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        provider: PlaceProvider,
        api_key: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, PlacesError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            provider,
            api_key: api_key.into(),
            endpoints: ProviderEndpoints::default(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds the client for the provider the application is configured to
    /// use.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::MissingApiKey`] when the configured provider
    /// has no key, or [`PlacesError::Http`] when the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let api_key = match config.provider {
            PlaceProvider::Google => config.google_api_key.clone(),
            PlaceProvider::Foursquare => config.foursquare_api_key.clone(),
        }
        .ok_or_else(|| PlacesError::MissingApiKey(config.provider.to_string()))?;

        Self::new(
            config.provider,
            api_key,
            config.places_timeout_secs,
            &config.places_user_agent,
            config.places_max_retries,
            config.places_retry_backoff_base_secs,
        )
    }

    /// Replaces the upstream base URLs; used by tests to target a mock server.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Looks up cafés near `place` within `radius_meters`, returning at most
    /// the top handful of listings in the provider's ranking order.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::UnknownPlace`] — the provider could not resolve `place`.
    /// - [`PlacesError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`PlacesError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`PlacesError::Http`] — network failure after all retries exhausted.
    /// - [`PlacesError::Deserialize`] — response body is not the expected JSON.
    pub async fn find_cafes(
        &self,
        place: &str,
        radius_meters: u32,
    ) -> Result<Vec<CafeListing>, PlacesError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            match self.provider {
                PlaceProvider::Google => google::find_cafes(self, place, radius_meters).await,
                PlaceProvider::Foursquare => {
                    foursquare::find_cafes(self, place, radius_meters).await
                }
            }
        })
        .await
    }

    /// Returns autocomplete candidates for a free-text place query.
    ///
    /// A blank query yields an empty list without an upstream call.
    ///
    /// # Errors
    ///
    /// Same error surface as [`PlacesClient::find_cafes`], minus
    /// `UnknownPlace`.
    pub async fn suggest_places(&self, query: &str) -> Result<Vec<PlaceSuggestion>, PlacesError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            match self.provider {
                PlaceProvider::Google => google::suggest_places(self, query).await,
                PlaceProvider::Foursquare => foursquare::suggest_places(self, query).await,
            }
        })
        .await
    }
}
