use crate::app_config::{AppConfig, Environment, PlaceProvider};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("CAFECOMPASS_ENV", "development"));
    let provider = parse_provider(&or_default("CAFECOMPASS_PLACES_PROVIDER", "google"))?;

    let bind_addr = parse_addr("CAFECOMPASS_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("CAFECOMPASS_LOG_LEVEL", "info");
    let frontend_origin = or_default("CAFECOMPASS_FRONTEND_ORIGIN", "http://localhost:3000");

    let google_api_key = lookup("GOOGLE_PLACES_API_KEY").ok();
    let foursquare_api_key = lookup("FOURSQUARE_API_KEY").ok();

    // The selected provider's key is the only hard requirement.
    match provider {
        PlaceProvider::Google if google_api_key.is_none() => {
            return Err(ConfigError::MissingEnvVar("GOOGLE_PLACES_API_KEY".into()));
        }
        PlaceProvider::Foursquare if foursquare_api_key.is_none() => {
            return Err(ConfigError::MissingEnvVar("FOURSQUARE_API_KEY".into()));
        }
        _ => {}
    }

    let places_timeout_secs = parse_u64("CAFECOMPASS_PLACES_TIMEOUT_SECS", "10")?;
    let places_user_agent = or_default(
        "CAFECOMPASS_PLACES_USER_AGENT",
        "cafecompass/0.1 (cafe-search)",
    );
    let places_max_retries = parse_u32("CAFECOMPASS_PLACES_MAX_RETRIES", "2")?;
    let places_retry_backoff_base_secs =
        parse_u64("CAFECOMPASS_PLACES_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        frontend_origin,
        provider,
        google_api_key,
        foursquare_api_key,
        places_timeout_secs,
        places_user_agent,
        places_max_retries,
        places_retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a string into a `PlaceProvider`.
///
/// Unlike the environment, a typo'd provider would silently change which
/// upstream service gets called, so unknown values are an error.
fn parse_provider(s: &str) -> Result<PlaceProvider, ConfigError> {
    match s {
        "google" => Ok(PlaceProvider::Google),
        "foursquare" => Ok(PlaceProvider::Foursquare),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CAFECOMPASS_PLACES_PROVIDER".to_string(),
            reason: format!("unknown provider: {other}"),
        }),
    }
}
