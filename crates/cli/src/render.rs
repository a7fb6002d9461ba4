//! Text rendering for the terminal dashboard.

use colored::Colorize;
use data_loader::{FilterOptions, Movie};
use query_engine::{Exploration, PopularityShares};

/// Shown whenever a selection has nothing to display
pub const NO_DATA: &str = "No data available for the selected filters.";

/// Width of a 100% bar in the popularity chart
const BAR_WIDTH: usize = 40;

/// Longest title printed before truncation
const MAX_TITLE_WIDTH: usize = 48;

pub fn print_options(options: &FilterOptions) {
    println!("{}", "Filter options".bold().blue());
    println!("{}Genres: {}", "• ".green(), options.genres.join(", "));
    println!("{}Years: {}", "• ".green(), join(&options.release_values));
    println!("{}Vote categories: {}", "• ".green(), join(&options.vote_values));
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_exploration(exploration: &Exploration<'_>, top: usize, chart_limit: usize) {
    println!("{}", format_exploration(exploration, top, chart_limit));
}

/// Filtered table, top-N table, remaining table and popularity chart.
pub fn format_exploration(exploration: &Exploration<'_>, top: usize, chart_limit: usize) -> String {
    let mut lines = vec![
        format!("Filtered Movies ({})", exploration.selection)
            .bold()
            .blue()
            .to_string(),
    ];
    if exploration.is_empty() {
        lines.push(NO_DATA.yellow().to_string());
        return lines.join("\n");
    }
    lines.push(format_movie_table(&exploration.filtered, 1));

    lines.push(String::new());
    lines.push(format!("Top {} Popular Movies", top).bold().blue().to_string());
    lines.push(format_movie_table(&exploration.top, 1));

    if !exploration.remaining.is_empty() {
        lines.push(String::new());
        lines.push("Remaining Movies".bold().blue().to_string());
        lines.push(format_movie_table(
            &exploration.remaining,
            exploration.top.len() + 1,
        ));
    }

    lines.push(String::new());
    lines.push(
        format!("Top {} Popular Movies (Based on Filter)", chart_limit)
            .bold()
            .blue()
            .to_string(),
    );
    lines.push(format_shares(&exploration.shares));
    lines.join("\n")
}

/// Title, Popularity and Vote_Count columns, numbered from `first_rank`.
pub fn format_movie_table(movies: &[&Movie], first_rank: usize) -> String {
    let width = movies
        .iter()
        .map(|m| m.title.chars().count().min(MAX_TITLE_WIDTH))
        .max()
        .unwrap_or(0)
        .max("Title".len());

    let mut lines = vec![format!(
        "{:>4}  {:<width$}  {:>12}  {:>10}",
        "#".dimmed(),
        "Title".bold(),
        "Popularity".bold(),
        "Vote_Count".bold(),
        width = width
    )];
    for (i, movie) in movies.iter().enumerate() {
        let vote_count = movie
            .vote_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:>4}  {:<width$}  {:>12.3}  {:>10}",
            (first_rank + i).to_string().green(),
            truncate(&movie.title, MAX_TITLE_WIDTH),
            movie.popularity,
            vote_count,
            width = width
        ));
    }
    lines.join("\n")
}

/// Horizontal bars, one per slice, with percentages to one decimal place.
pub fn format_shares(shares: &PopularityShares) -> String {
    if !shares.has_data() {
        return NO_DATA.yellow().to_string();
    }

    let width = shares
        .slices
        .iter()
        .map(|s| s.title.chars().count().min(MAX_TITLE_WIDTH))
        .max()
        .unwrap_or(0);

    shares
        .slices
        .iter()
        .map(|slice| {
            let filled =
                ((slice.percentage.max(0.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{:<width$}  {:<bar$}  {:>5.1}%",
                truncate(&slice.title, MAX_TITLE_WIDTH),
                "█".repeat(filled.min(BAR_WIDTH)).cyan(),
                slice.percentage,
                width = width,
                bar = BAR_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        title.to_string()
    } else {
        let mut short: String = title.chars().take(max.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}
