use crate::core::{Catalog, CatalogError};
use crate::models::Venue;

/// Default restaurant catalog: (name, cuisine, price tier)
const SEED_RESTAURANTS: &[(&str, &str, u8)] = &[
    // Italian
    ("Mama Mia Trattoria", "Italian", 3),
    ("Pizza Napoli", "Italian", 2),
    ("Bella Vista", "Italian", 4),
    // Mexican
    ("Taco Fiesta", "Mexican", 1),
    ("El Mariachi", "Mexican", 2),
    ("Casa Grande", "Mexican", 3),
    // Chinese
    ("Golden Dragon", "Chinese", 2),
    ("Szechuan Palace", "Chinese", 3),
    ("Dim Sum House", "Chinese", 2),
    // Japanese
    ("Sakura Sushi", "Japanese", 3),
    ("Ramen Bowl", "Japanese", 2),
    ("Tokyo Grill", "Japanese", 4),
    // American
    ("The Burger Joint", "American", 2),
    ("Steakhouse Prime", "American", 4),
    ("Diner Deluxe", "American", 1),
    // Indian
    ("Curry House", "Indian", 2),
    ("Taj Mahal", "Indian", 3),
    ("Bombay Spice", "Indian", 2),
    // Thai
    ("Thai Basil", "Thai", 2),
    ("Bangkok Street Food", "Thai", 1),
    ("Royal Thai", "Thai", 3),
    // French
    ("Le Petit Bistro", "French", 4),
    ("Café Paris", "French", 3),
    // Mediterranean
    ("Olive Garden Bistro", "Mediterranean", 3),
    ("Greek Taverna", "Mediterranean", 2),
];

/// Build the default catalog, numbering venues from 1 in seed order
pub fn seed_catalog() -> Result<Catalog, CatalogError> {
    let venues = SEED_RESTAURANTS
        .iter()
        .zip(1u64..)
        .map(|((name, cuisine, price), id)| Venue::new(id, *name, &[*cuisine], *price))
        .collect();

    Catalog::new(venues)
}
