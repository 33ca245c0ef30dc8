//! # pubtrawl
//!
//! PubMed industry-author screening pipeline.
//!
//! Searches PubMed for a query, fetches each matching record, keeps the
//! authors affiliated with pharmaceutical/biotech organizations, and writes
//! one CSV row per usable article.
//!
//! ## Modules
//!
//! - [`eutils`] - NCBI E-utilities client (ESearch + EFetch)
//! - [`records`] - Typed model of the EFetch XML tree
//! - [`extract`] - Flattening and industry-affiliation filtering
//! - [`output`] - CSV writing and filename helpers
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubtrawl::{eutils::EutilsClient, extract};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EutilsClient::new()?;
//!     let pmids = client.search("cancer immunotherapy", 20).await?;
//!     for pmid in &pmids {
//!         let record = client.fetch(pmid).await?;
//!         if let Ok(summary) = extract::extract(&record) {
//!             println!("{}: {}", summary.pubmed_id, summary.title);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod eutils;
pub mod extract;
pub mod output;
pub mod records;

pub use error::{PubtrawlError, Result};
