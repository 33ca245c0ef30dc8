//! NCBI E-utilities client: ESearch for matching PMIDs, EFetch for full
//! bibliographic records.
//!
//! One request per operation, no batching and no paging: a search asks for at
//! most `max_results` ids and nothing beyond them. Fetches are issued one id
//! at a time by the driver, strictly in sequence.

use crate::error::{PubtrawlError, Result};
use crate::records::PubmedArticleSet;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// ESearch endpoint
const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

/// EFetch endpoint
const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Default search result cap; matches ESearch's own default page size.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// E-utilities HTTP client.
pub struct EutilsClient {
    client: reqwest::Client,
}

impl EutilsClient {
    /// Create a client with the crate's user agent and request timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pubtrawl/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the PMIDs matching `query`, at most `max_results` of them.
    ///
    /// A response without the expected id list yields an empty sequence
    /// rather than an error.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = build_search_url(query, max_results);
        debug!(query = query, url = %url, "Searching PubMed");

        let body = self.get_text(&url).await?;
        let ids = parse_search_response(&body)?;

        info!(query = query, count = ids.len(), "ESearch complete");
        Ok(ids)
    }

    /// Fetch the full bibliographic record for one PMID.
    pub async fn fetch(&self, pmid: &str) -> Result<PubmedArticleSet> {
        let url = build_fetch_url(pmid);
        debug!(pmid = pmid, "Fetching PubMed record");

        let body = self.get_text(&url).await?;
        PubmedArticleSet::from_xml(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PubtrawlError::Api {
                code: status.as_u16(),
                message: format!("E-utilities returned status {}", status),
            });
        }
        Ok(response.text().await?)
    }
}

/// Build the ESearch URL for a query.
fn build_search_url(query: &str, max_results: usize) -> String {
    format!(
        "{}?db=pubmed&term={}&retmode=json&retmax={}",
        ESEARCH_URL,
        urlencoding::encode(query),
        max_results
    )
}

/// Build the EFetch URL for one PMID.
fn build_fetch_url(pmid: &str) -> String {
    format!(
        "{}?db=pubmed&id={}&retmode=xml",
        EFETCH_URL,
        urlencoding::encode(pmid)
    )
}

/// Parse an ESearch JSON body into the id list.
fn parse_search_response(body: &str) -> Result<Vec<String>> {
    #[derive(Debug, Default, Deserialize)]
    struct ESearchResponse {
        #[serde(default)]
        esearchresult: ESearchResult,
    }

    #[derive(Debug, Default, Deserialize)]
    struct ESearchResult {
        #[serde(default)]
        idlist: Vec<String>,
    }

    let response: ESearchResponse = serde_json::from_str(body)?;
    Ok(response.esearchresult.idlist)
}
