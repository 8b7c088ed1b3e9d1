use movie_catalog::{Catalog, CatalogConfig, FixedRandomSource, InMemoryLoader, Loader, NewMovie};

pub const MOVIES_JSON: &str = r#"[
    {
        "description": "A heist crew and the detective chasing them.",
        "sources": ["heat.mp4"],
        "subtitle": "By Michael Mann",
        "thumb": "images/heat.jpg",
        "title": "Heat",
        "genre": "Action"
    },
    {
        "description": "A shy waitress decides to change the lives of those around her.",
        "sources": [],
        "subtitle": "By Jean-Pierre Jeunet",
        "thumb": "images/amelie.jpg",
        "title": "Amélie",
        "genre": "Romance"
    },
    {
        "description": "The crew of a commercial spacecraft meets a deadly lifeform.",
        "sources": ["alien.mp4"],
        "subtitle": "By Ridley Scott",
        "thumb": "images/alien.jpg",
        "title": "Alien",
        "genre": "Horror"
    },
    {
        "description": "A poor yet passionate young man falls in love.",
        "sources": [],
        "subtitle": "By Nick Cassavetes",
        "thumb": "images/notebook.jpg",
        "title": "The Notebook",
        "genre": "romance"
    },
    {
        "description": "Mercenaries hunt a mysterious briefcase.",
        "sources": ["ronin.mp4"],
        "subtitle": "By John Frankenheimer",
        "thumb": "images/ronin.jpg",
        "title": "Ronin",
        "genre": "ACTION"
    }
]"#;

pub fn movies() -> Vec<NewMovie> {
    InMemoryLoader::from_json_str(MOVIES_JSON)
        .and_then(|loader| loader.load())
        .expect("fixture parses")
}

/// Ratings in fixture order: Heat 3, Amélie 5, Alien 1, The Notebook 4, Ronin 2.
pub fn fixture_catalog() -> Catalog<FixedRandomSource> {
    Catalog::with_source(
        movies(),
        CatalogConfig::default(),
        FixedRandomSource::new(vec![3, 5, 1, 4, 2]),
    )
}

pub fn titles<'a, I>(movies: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a movie_catalog::MovieRecord>,
{
    movies
        .into_iter()
        .map(|movie| movie.title().to_string())
        .collect()
}
