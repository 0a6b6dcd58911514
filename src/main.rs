use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use imdb_scraper::{HttpSource, Record, Scraper, Settings};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::warn;

const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Parser)]
#[command(name = "imdb_scraper", about = "Scrape movie and series details from IMDb title pages")]
struct Cli {
    /// Override the site base URL (default: settings / IMDB_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Title page + release dates
    Movie {
        id: String,
        /// Countries to show release dates for (default: all listed)
        #[arg(short, long)]
        country: Vec<String>,
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Title page + episode air dates
    Series {
        id: String,
        #[arg(short, long, requires = "episode")]
        season: Option<u32>,
        #[arg(short, long, requires = "season")]
        episode: Option<u32>,
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build many records, one JSON line each
    Batch {
        ids: Vec<String>,
        /// Treat the ids as series instead of movies
        #[arg(long)]
        series: bool,
        /// Records built at the same time
        #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(base_url) = cli.base_url {
        settings = settings.with_base_url(base_url);
    }
    let scraper = Scraper::new(&settings)?;

    let result = match cli.command {
        Commands::Movie { id, country, json } => {
            let record = scraper.build_movie(&id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
                return Ok(());
            }
            print_summary(&record);

            let countries: Vec<String> = if country.is_empty() {
                record.cinema_dates()?.keys().cloned().collect()
            } else {
                country
            };
            println!("\n--- Release dates ---");
            for c in &countries {
                match record.cinema_date(c) {
                    Ok(Some(date)) => println!("  {:<24.24} {}", c, date),
                    Ok(None) => println!("  {:<24.24} -", c),
                    Err(e) => println!("  {:<24.24} ({})", c, e),
                }
            }
            Ok(())
        }
        Commands::Series {
            id,
            season,
            episode,
            json,
        } => {
            let record = scraper.build_series(&id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
                return Ok(());
            }
            print_summary(&record);

            println!("\n--- Episodes ---");
            match (season, episode) {
                (Some(s), Some(e)) => match record.episode(s, e)? {
                    Some(aired) => println!("  Season {}, Episode {}: {}", s, e, aired),
                    None => println!("  Season {}, Episode {} not listed", s, e),
                },
                _ => {
                    for (label, aired) in record.episodes()? {
                        println!("  {}: {}", label, aired);
                    }
                }
            }
            Ok(())
        }
        Commands::Batch {
            ids,
            series,
            concurrency,
        } => run_batch(scraper, ids, series, concurrency).await,
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_summary(record: &Record) {
    let or_dash = |r: imdb_scraper::Result<String>| r.unwrap_or_else(|_| "-".into());

    println!("Title:   {}", record.title());
    println!("Year:    {}", record.year());
    println!("Rating:  {}", or_dash(record.rating().map(|r| format!("{:.1}/10", r))));
    println!("Votes:   {}", or_dash(record.votes().map(|v| v.to_string())));
    println!("Genre:   {}", record.genre());
    println!("Runtime: {}", or_dash(record.runtime_minutes().map(|m| format!("{} min", m))));
    println!("URL:     {}", record.url());
}

async fn run_batch(
    scraper: Scraper<HttpSource>,
    ids: Vec<String>,
    series: bool,
    concurrency: usize,
) -> anyhow::Result<()> {
    if ids.is_empty() {
        println!("No ids given.");
        return Ok(());
    }

    let scraper = Arc::new(scraper);
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let total = ids.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let (tx, mut rx) = tokio::sync::mpsc::channel(concurrency.max(1) * 2);

    for id in ids {
        let scraper = Arc::clone(&scraper);
        let sem = Arc::clone(&semaphore);
        let tx = tx.clone();

        tokio::spawn(async move {
            let Ok(_permit) = sem.acquire().await else {
                return;
            };
            let result = if series {
                scraper.build_series(&id).await
            } else {
                scraper.build_movie(&id).await
            };
            let _ = tx.send((id, result)).await;
        });
    }

    // rx closes once every task has dropped its sender
    drop(tx);

    let mut ok = 0usize;
    let mut errors = 0usize;
    while let Some((id, result)) = rx.recv().await {
        match result {
            Ok(record) => {
                ok += 1;
                pb.suspend(|| serde_json::to_string(&record).map(|line| println!("{}", line)))?;
            }
            Err(e) => {
                errors += 1;
                pb.suspend(|| warn!("Failed to build {}: {}", id, e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    eprintln!("Done: {} ids ({} ok, {} errors).", total, ok, errors);
    Ok(())
}
