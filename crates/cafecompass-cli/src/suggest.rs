//! The `suggest` command: autocomplete candidates for a place query.

use cafecompass_places::PlacesClient;

pub(crate) async fn run(places: &PlacesClient, query: &str) -> anyhow::Result<()> {
    let suggestions = places.suggest_places(query).await?;

    if suggestions.is_empty() {
        println!("No matching places.");
        return Ok(());
    }

    for suggestion in &suggestions {
        println!("{}", suggestion.description);
    }
    Ok(())
}
