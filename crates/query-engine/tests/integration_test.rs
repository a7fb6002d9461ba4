//! Integration tests for the query engine.
//!
//! These tests load a small CSV through the data loader and run the same
//! calls the CLI makes for one user interaction.

use data_loader::parser::parse_movies_from_reader;
use data_loader::{CategoryValue, Dataset, Movie};
use query_engine::{
    filter, rank, rest, share_of, top_n, ExploreSettings, QueryEngine, Selection,
};
use std::sync::Arc;

const MOVIES_CSV: &str = "\
Release_Date,Title,Overview,Popularity,Vote_Count,Vote_Average,Genre
2021,Spider-Man: No Way Home,Peter Parker is unmasked,5083.954,8940,popular,Action
2022,The Batman,In his second year of fighting crime,3827.658,1151,popular,Crime
2022,No Exit,Stranded at a rest stop,2618.087,122,below_avg,Horror
2021,Encanto,The tale of an extraordinary family,2402.201,5076,popular,Animation
2021,The King's Man,As a collection of history's worst tyrants,1895.511,1793,average,Action
2021,Shang-Chi,Shang-Chi must confront the past,1211.113,4526,popular,Action
2021,Eternals,The Eternals are a team of ancient aliens,1127.392,3910,average,Action
2021,Spider-Man: No Way Home,Duplicate row kept as a distinct record,300.0,10,popular,Action
";

fn load_engine() -> QueryEngine {
    let movies = parse_movies_from_reader(MOVIES_CSV.as_bytes(), "movies.csv").unwrap();
    QueryEngine::new(Arc::new(Dataset::from_movies(movies)))
}

fn titles(rows: &[&Movie]) -> Vec<String> {
    rows.iter().map(|m| m.title.clone()).collect()
}

#[test]
fn test_two_movie_scenario() {
    let input = "\
Title,Genre,Release_Date,Vote_Average,Popularity,Vote_Count
A,Action,2020,7,50.0,10
B,Action,2020,7,90.0,5
";
    let dataset =
        Dataset::from_movies(parse_movies_from_reader(input.as_bytes(), "movies.csv").unwrap());
    assert_eq!(dataset.movies()[0].release_date, Some(CategoryValue::Integer(2020)));
    let selection = Selection::parse("Action", "2020", "7");

    let view = filter(&dataset, &selection);

    assert_eq!(titles(view.rows()), vec!["A", "B"]);
    assert_eq!(titles(&top_n(&view, 1)), vec!["B"]);
    assert_eq!(titles(&rest(&view, 1)), vec!["A"]);
}

#[test]
fn test_zero_match_scenario() {
    let engine = load_engine();
    let selection = Selection::new("Western", 1950, "popular");

    let view = engine.filter(&selection);

    assert!(view.is_empty());
    assert!(top_n(&view, 3).is_empty());
    assert!(rest(&view, 3).is_empty());
    let shares = share_of(rank(&view).rows(), 5);
    assert!(shares.slices.is_empty());
    assert!(!shares.has_data());
}

#[test]
fn test_options_from_csv() {
    let engine = load_engine();
    let options = engine.options();

    assert_eq!(
        options.genres,
        vec!["Action", "Animation", "Crime", "Horror"]
    );
    assert_eq!(
        options.release_values,
        vec![CategoryValue::Integer(2022), CategoryValue::Integer(2021)]
    );
    assert_eq!(
        options.vote_values,
        vec![
            CategoryValue::from("average"),
            CategoryValue::from("below_avg"),
            CategoryValue::from("popular"),
        ]
    );
}

#[test]
fn test_explore_from_raw_selection() {
    let engine = load_engine();
    let selection = Selection::parse("Action", "2021", "popular");

    let exploration = engine.explore(&selection, &ExploreSettings::default());

    // Dataset order, duplicate title preserved
    assert_eq!(
        titles(&exploration.filtered),
        vec!["Spider-Man: No Way Home", "Shang-Chi", "Spider-Man: No Way Home"]
    );
    assert_eq!(
        titles(&exploration.top),
        vec!["Spider-Man: No Way Home", "Shang-Chi", "Spider-Man: No Way Home"]
    );
    assert!(exploration.remaining.is_empty());
    assert_eq!(exploration.top[2].popularity, 300.0);

    let total: f64 = exploration.shares.slices.iter().map(|s| s.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_top_ten_and_rest() {
    let engine = load_engine();
    let selection = Selection::parse("Action", "2021", "average");

    let view = engine.filter(&selection);
    let ranked = rank(&view);

    assert_eq!(titles(ranked.top(10)), vec!["The King's Man", "Eternals"]);
    assert_eq!(titles(ranked.rest(1)), vec!["Eternals"]);
}

#[test]
fn test_exploration_serializes_to_json() {
    let engine = load_engine();
    let selection = Selection::parse("Crime", "2022", "popular");

    let exploration = engine.explore(&selection, &ExploreSettings::default());
    let json = serde_json::to_value(&exploration).unwrap();

    assert_eq!(json["selection"]["genre"], "Crime");
    assert_eq!(json["selection"]["release"], 2022);
    assert_eq!(json["filtered"][0]["title"], "The Batman");
    assert_eq!(json["filtered"][0]["vote_count"], 1151);
    assert_eq!(json["shares"]["slices"][0]["percentage"], 100.0);
}

#[test]
fn test_filter_is_idempotent() {
    let engine = load_engine();
    let selection = Selection::parse("Action", "2021", "popular");

    let first = engine.filter(&selection);
    let second = engine.filter(&selection);

    assert_eq!(first, second);
}
