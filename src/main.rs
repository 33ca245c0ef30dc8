//! pubtrawl - PubMed industry-author screening pipeline
//!
//! Fetches research papers from PubMed for a search query and keeps the ones
//! with at least a parseable citation, reporting pharma/biotech-affiliated
//! authors per paper.
//!
//! ## Usage
//!
//! ```bash
//! pubtrawl "cancer immunotherapy"
//! pubtrawl "cancer immunotherapy" -f results.csv
//! pubtrawl --list
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pubtrawl::eutils::{EutilsClient, DEFAULT_MAX_RESULTS};
use pubtrawl::{extract, output};
use std::path::Path;
use tracing::{error, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Fetch research papers from PubMed based on a query and report the
/// pharma/biotech-affiliated authors.
#[derive(Parser)]
#[command(name = "pubtrawl")]
#[command(version, about, long_about = None)]
struct Cli {
    /// PubMed search query
    #[arg(required_unless_present = "list")]
    query: Option<String>,

    /// Print debug information
    #[arg(short, long)]
    debug: bool,

    /// Filename to save the results as CSV
    #[arg(short, long)]
    file: Option<String>,

    /// List the CSV files in the current directory and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; diagnostics go to stderr, results to stdout.
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        return list_downloads();
    }

    let query = cli.query.unwrap_or_default();
    run_pipeline(&query, cli.file).await
}

/// The whole pipeline: search, then fetch and extract one id at a time,
/// then write a single CSV.
async fn run_pipeline(query: &str, file: Option<String>) -> Result<()> {
    let client = EutilsClient::new().context("Failed to build HTTP client")?;

    let pmids = client
        .search(query, DEFAULT_MAX_RESULTS)
        .await
        .context("PubMed search failed")?;

    let mut papers = Vec::new();
    for pmid in &pmids {
        let record = client
            .fetch(pmid)
            .await
            .with_context(|| format!("Failed to fetch PubMed ID {}", pmid))?;

        match extract::extract(&record) {
            Ok(summary) => papers.push(summary),
            Err(e) => error!(pmid = %pmid, error = %e, "Error parsing record"),
        }
    }

    if papers.is_empty() {
        println!("No relevant papers found.");
        return Ok(());
    }

    let filename = match file {
        Some(name) => name,
        None => {
            let name = output::default_output_name(query);
            println!("No filename provided. Saving results as: {}", name);
            name
        }
    };

    output::write_csv(&papers, Path::new(&filename))
        .with_context(|| format!("Failed to write {}", filename))?;
    println!("Results saved to {}", filename);

    Ok(())
}

/// List the CSV files in the current working directory.
fn list_downloads() -> Result<()> {
    let files =
        output::list_csv_files(Path::new(".")).context("Failed to list current directory")?;

    if files.is_empty() {
        println!("No CSV files found in the current directory.");
    } else {
        println!("CSV Files in Directory:");
        for file in files {
            println!("{}", file);
        }
    }
    Ok(())
}
