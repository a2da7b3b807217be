pub mod app_config;
pub mod cafe;
pub mod config;
pub mod radius;
pub mod ranking;
pub mod score;

pub use app_config::{AppConfig, Environment, PlaceProvider};
pub use cafe::{
    build_cards, split_address, Cafe, CafeListing, MAX_CARDS, PLACEHOLDER_PHOTO, PLACEHOLDER_SCORE,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use radius::RadiusMiles;
pub use ranking::{rank_cafes, toggle, RankBy};
pub use score::Score;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
