// Unit tests for Venue Match

use venue_match::core::{
    aggregator::{aggregate, WelfareScheme},
    catalog::Catalog,
    resolver::{base_value, ResolverParams, UtilityResolver},
    transforms::{
        cuisine_override_modifier, venue_override_modifier, DEFAULT_UTILITY_SCALE,
        NEUTRAL_RATING, OVERRIDE_CENTER,
    },
};
use venue_match::models::{Cuisine, DayOfRating, StandingPreferences, Venue, VenueId};

fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        Venue::new(1, "Sakura Sushi", &["Japanese"], 3),
        Venue::new(2, "Curry House", &["Indian"], 2),
        Venue::new(3, "Royal Thai", &["Thai"], 3),
    ])
    .unwrap()
}

#[test]
fn test_transforms_identity_at_center() {
    assert_eq!(venue_override_modifier(OVERRIDE_CENTER), 1.0);
    assert_eq!(cuisine_override_modifier(OVERRIDE_CENTER), 1.0);
}

#[test]
fn test_transforms_monotone_over_rating_domain() {
    let ratings: Vec<f64> = (10..=100).map(|t| t as f64 / 10.0).collect();
    for pair in ratings.windows(2) {
        assert!(venue_override_modifier(pair[1]) > venue_override_modifier(pair[0]));
        assert!(cuisine_override_modifier(pair[1]) > cuisine_override_modifier(pair[0]));
    }
}

#[test]
fn test_unrated_venue_is_neutral_times_scale() {
    let catalog = create_test_catalog();
    let resolver = UtilityResolver::new(&catalog, ResolverParams::default());
    let mut prefs = StandingPreferences::default();
    prefs.venue_ratings.insert(VenueId(1), 9.0);

    let utilities = resolver.resolve(Some(&prefs), &[]);

    assert!((utilities[1] - NEUTRAL_RATING * DEFAULT_UTILITY_SCALE).abs() < 1e-12);
    assert!((utilities[2] - NEUTRAL_RATING * DEFAULT_UTILITY_SCALE).abs() < 1e-12);
}

#[test]
fn test_unknown_person_vector_is_uniform_maximum() {
    let catalog = create_test_catalog();
    let params = ResolverParams::default();
    let resolver = UtilityResolver::new(&catalog, params);

    let utilities = resolver.resolve(None, &[DayOfRating::cuisine("Thai", 1.0)]);

    assert_eq!(utilities, vec![params.neutral_utility(); 3]);
}

#[test]
fn test_base_value_prefers_best_cuisine() {
    let venue = Venue::new(9, "Fusion", &["Thai", "Indian"], 2);
    let mut prefs = StandingPreferences::default();
    prefs.cuisine_ratings.insert(Cuisine::new("Thai"), 6.5);
    prefs.cuisine_ratings.insert(Cuisine::new("Indian"), 8.5);

    assert_eq!(base_value(&venue, &prefs), 8.5);
}

#[test]
fn test_single_participant_ranking_matches_vector() {
    let catalog = create_test_catalog();
    let resolver = UtilityResolver::new(&catalog, ResolverParams::default());
    let mut prefs = StandingPreferences::default();
    prefs.venue_ratings.insert(VenueId(2), 7.0);
    prefs.venue_ratings.insert(VenueId(3), 9.0);
    prefs.venue_ratings.insert(VenueId(1), 3.0);
    let vector = resolver.resolve(Some(&prefs), &[]);

    for scheme in [
        WelfareScheme::Egalitarian,
        WelfareScheme::Utilitarian,
        WelfareScheme::Nash,
    ] {
        let ranked = aggregate(&[vector.clone()], scheme).unwrap();
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![2, 1, 0]);
        for entry in &ranked {
            assert_eq!(entry.score, vector[entry.index]);
        }
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let vectors = vec![vec![0.4, 0.6, 0.6, 0.4]];
    let ranked = aggregate(&vectors, WelfareScheme::Nash).unwrap();
    let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
    assert_eq!(order, vec![1, 2, 0, 3]);
}

#[test]
fn test_nash_positive_for_positive_inputs() {
    let vectors = vec![vec![0.1, 0.05], vec![0.02, 1.9], vec![0.5, 0.003]];
    let ranked = aggregate(&vectors, WelfareScheme::Nash).unwrap();
    assert!(ranked.iter().all(|s| s.score > 0.0));
}
