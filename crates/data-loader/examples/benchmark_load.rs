use data_loader::load_dataset;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let path = Path::new("cleaned_movies.csv");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let (dataset, options) = load_dataset(path)?;
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    println!("Genres: {}", options.genres.len());
    println!("Release values: {}", options.release_values.len());
    println!("Vote values: {}", options.vote_values.len());
    println!("\nPerformance: {:.0} rows/second",
             dataset.len() as f64 / elapsed.as_secs_f64());

    Ok(())
}
