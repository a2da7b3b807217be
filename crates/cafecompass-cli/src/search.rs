//! The `search` command: the terminal rendition of the results screen.

use cafecompass_core::{build_cards, rank_cafes, split_address, Cafe, RadiusMiles, RankBy};
use cafecompass_places::PlacesClient;

pub(crate) async fn run(
    places: &PlacesClient,
    place: &str,
    radius: f64,
    rank_by: Option<RankBy>,
) -> anyhow::Result<()> {
    let radius = RadiusMiles::new(radius);
    let listings = places.find_cafes(place, radius.to_meters()).await?;
    let cards = build_cards(listings);
    let ranked = rank_cafes(&cards, rank_by);

    if ranked.is_empty() {
        println!("No cafés found near {place} within {radius} miles.");
        return Ok(());
    }

    println!("Cafés near {place} (within {radius} miles):");
    for cafe in &ranked {
        print!("{}", format_card(cafe));
    }
    Ok(())
}

fn format_card(cafe: &Cafe) -> String {
    let mut out = format!("\n{}. {} — rated {:.1}\n", cafe.id, cafe.name, cafe.rating);
    if let Some(address) = &cafe.address {
        let lines = split_address(address);
        if let Some(street) = lines.street {
            out.push_str(&format!("   {street}\n"));
        }
        out.push_str(&format!("   {}\n", lines.locality));
    }
    out.push_str(&format!("   Seating    {}\n", cafe.seating.stars()));
    out.push_str(&format!("   Outlets    {}\n", cafe.outlets.stars()));
    out.push_str(&format!("   Quietness  {}\n", cafe.noise.stars_inverted()));
    out
}
