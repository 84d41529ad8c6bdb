mod dataset;
mod importer;

use clap::Parser;
use importer::{clear, import_dataset};
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seed", about = "Seed the trivia database from a JSON file")]
struct Args {
    /// Path to the trivia JSON file (e.g., tools/seed/data/trivia.json)
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:trivia.db?mode=rwc")]
    database_url: String,

    /// Remove existing questions and categories before import
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Connecting to database...");
    let pool = SqlitePool::connect(&args.database_url).await?;

    // Run migrations to ensure schema exists
    sqlx::migrate!("../../backend/migrations").run(&pool).await?;

    if args.clear {
        println!("Clearing existing questions and categories...");
        clear(&pool).await?;
    }

    println!("Parsing trivia file: {:?}", args.file);
    let dataset = dataset::parse_dataset(&args.file)?;
    println!(
        "Found {} categories and {} questions",
        dataset.categories.len(),
        dataset.questions.len()
    );

    println!("Importing...");
    let stats = import_dataset(&pool, dataset).await?;
    pool.close().await;

    println!();
    println!("Import complete:");
    println!("  Categories inserted:          {}", stats.categories_inserted);
    println!("  Questions inserted:           {}", stats.questions_inserted);
    println!("  Duplicates (already stored):  {}", stats.duplicates);
    println!("  Skipped (invalid/no category): {}", stats.skipped);

    Ok(())
}
