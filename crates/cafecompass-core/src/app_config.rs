use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which external place service backs café lookups and suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceProvider {
    Google,
    Foursquare,
}

impl std::fmt::Display for PlaceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceProvider::Google => write!(f, "google"),
            PlaceProvider::Foursquare => write!(f, "foursquare"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Origin allowed by the API's CORS layer (the frontend dev server).
    pub frontend_origin: String,
    pub provider: PlaceProvider,
    pub google_api_key: Option<String>,
    pub foursquare_api_key: Option<String>,
    pub places_timeout_secs: u64,
    pub places_user_agent: String,
    pub places_max_retries: u32,
    pub places_retry_backoff_base_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("frontend_origin", &self.frontend_origin)
            .field("provider", &self.provider)
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "foursquare_api_key",
                &self.foursquare_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("places_user_agent", &self.places_user_agent)
            .field("places_max_retries", &self.places_max_retries)
            .field(
                "places_retry_backoff_base_secs",
                &self.places_retry_backoff_base_secs,
            )
            .finish()
    }
}
