use std::error::Error;
use std::path::PathBuf;

use movie_catalog::{
    Catalog, CatalogConfig, IdPolicy, JsonFileLoader, LogReporter, NewMovie, SortOrder,
    ThreadRngSource, TracingReporter,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/movies.json")));

    let config = CatalogConfig::new().with_id_policy(IdPolicy::Monotonic);
    let mut catalog =
        Catalog::from_loader_with(&JsonFileLoader::new(&path), config, ThreadRngSource::new())?;
    tracing::info!(count = catalog.len(), path = %path.display(), "catalog ready");

    let romance = catalog.by_genre("romance");
    println!("Romance: {:?}", romance.iter().map(|m| m.title()).collect::<Vec<_>>());

    let by_title = catalog.sorted_by_title();
    println!("By title: {:?}", by_title.iter().map(|m| m.title()).collect::<Vec<_>>());

    let best_and_worst = catalog.best_and_worst()?;
    println!("Best and worst:");
    for movie in best_and_worst.to_vec() {
        println!("  {} ({})", movie.title(), movie.rating());
    }

    println!("Top 3:");
    catalog.print_top(3, &mut LogReporter::new())?;

    println!("Ascending:");
    for movie in catalog.sorted_by_rating(SortOrder::Ascending) {
        println!("  {} ({})", movie.title(), movie.rating());
    }

    let added = catalog
        .add(
            NewMovie::new("Once Upon a Time in Hollywood", "Action")
                .with_thumb("images/QuentinTarantino.jpg")
                .with_subtitle("By Isa")
                .with_field("sources", serde_json::json!([])),
        )
        .id();

    if catalog.rename_by_id(added, "Once Upon a Time... in Hollywood").is_none() {
        tracing::warn!(id = added, "added movie vanished before rename");
    }
    if !catalog.remove_by_id(2) {
        tracing::warn!(id = 2, "no movie to remove");
    }

    println!("Filtered:");
    println!("{}", serde_json::to_string_pretty(&catalog.filtered_view())?);

    catalog.print_top(catalog.len(), &mut TracingReporter)?;
    Ok(())
}
