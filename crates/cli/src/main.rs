mod render;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use query_engine::{ExploreSettings, QueryEngine, Selection};
use std::path::PathBuf;
use std::time::Instant;

/// CineScope - Movie Explorer
#[derive(Parser)]
#[command(name = "cinescope")]
#[command(about = "Explore movies based on Genre, Year, and Popularity", long_about = None)]
struct Cli {
    /// Path to the cleaned movie CSV
    #[arg(short, long, env = "CINESCOPE_DATA", default_value = "cleaned_movies.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the genres, years and vote categories present in the dataset
    Options {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Filter by genre, year and vote category, then rank by popularity
    Explore {
        /// Genre to select (defaults to the first genre offered)
        #[arg(long)]
        genre: Option<String>,

        /// Release year to select (defaults to the most recent)
        #[arg(long)]
        year: Option<String>,

        /// Vote category to select (defaults to the first category offered)
        #[arg(long)]
        vote: Option<String>,

        /// Number of movies in the top table
        #[arg(long, default_value = "3")]
        top: usize,

        /// Number of slices in the popularity chart
        #[arg(long, default_value = "5")]
        chart_limit: usize,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,

        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Without a dataset there is nothing to show, so a load error ends the run
    let start = Instant::now();
    let engine = QueryEngine::load(&cli.data)
        .with_context(|| format!("Failed to load movie dataset from {}", cli.data.display()))?;
    tracing::info!(
        "Loaded {} movies in {:?}",
        engine.dataset().len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Options { format } => handle_options(&engine, format)?,
        Commands::Explore {
            genre,
            year,
            vote,
            top,
            chart_limit,
            format,
        } => {
            let selection = resolve_selection(&engine, genre, year, vote)?;
            let settings = ExploreSettings::default()
                .with_top(top)
                .with_chart_limit(chart_limit);
            handle_explore(&engine, &selection, &settings, format)?
        }
        Commands::Search { title, limit } => handle_search(&engine, &title, limit),
    }

    Ok(())
}

/// Fill in any field the user left out from the default selection.
fn resolve_selection(
    engine: &QueryEngine,
    genre: Option<String>,
    year: Option<String>,
    vote: Option<String>,
) -> Result<Selection> {
    let default = engine.default_selection();
    let pick = |raw: Option<String>, fallback: Option<String>, flag: &str| {
        raw.or(fallback)
            .ok_or_else(|| anyhow!("The dataset offers no {flag} values; pass --{flag}"))
    };

    let genre = pick(genre, default.as_ref().map(|s| s.genre.clone()), "genre")?;
    let year = pick(year, default.as_ref().map(|s| s.release.to_string()), "year")?;
    let vote = pick(vote, default.as_ref().map(|s| s.vote.to_string()), "vote")?;

    Ok(Selection::parse(&genre, &year, &vote))
}

/// Handle the 'options' command
fn handle_options(engine: &QueryEngine, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render::print_options(engine.options()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(engine.options())?),
    }
    Ok(())
}

/// Handle the 'explore' command
fn handle_explore(
    engine: &QueryEngine,
    selection: &Selection,
    settings: &ExploreSettings,
    format: OutputFormat,
) -> Result<()> {
    let exploration = engine.explore(selection, settings);

    match format {
        OutputFormat::Text => {
            render::print_exploration(&exploration, settings.top, settings.chart_limit)
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&exploration).context("Failed to serialize results")?
        ),
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(engine: &QueryEngine, title: &str, limit: usize) {
    let matches = engine.search(title, limit);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("{}", "No movies found.".yellow());
        return;
    }
    for (i, movie) in matches.iter().enumerate() {
        let describe = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        println!(
            "{}. {} [{}] {} / {} - Popularity: {:.3}",
            (i + 1).to_string().green(),
            movie.title,
            describe(movie.genre.clone()),
            describe(movie.release_date.as_ref().map(|v| v.to_string())),
            describe(movie.vote_average.as_ref().map(|v| v.to_string())),
            movie.popularity
        );
    }
}
