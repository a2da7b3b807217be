mod search;
mod suggest;

use clap::{Parser, Subcommand};

use cafecompass_core::RankBy;

#[derive(Debug, Parser)]
#[command(name = "cafecompass-cli")]
#[command(about = "CaféCompass command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up study-friendly cafés near a place
    Search {
        /// City or place name, e.g. "San Jose, CA"
        place: String,

        /// Search radius in miles (clamped to 0.5–15)
        #[arg(long, default_value_t = 5.0)]
        radius: f64,

        /// Rank results: seating, outlets, or noise (quietest first)
        #[arg(long)]
        rank_by: Option<RankBy>,
    },
    /// Show autocomplete candidates for a place query
    Suggest {
        /// Free-text place query, e.g. "san j"
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cafecompass_core::load_app_config()?;
    let places = cafecompass_places::PlacesClient::from_config(&config)?;

    match cli.command {
        Commands::Search {
            place,
            radius,
            rank_by,
        } => search::run(&places, &place, radius, rank_by).await,
        Commands::Suggest { query } => suggest::run(&places, &query).await,
    }
}
