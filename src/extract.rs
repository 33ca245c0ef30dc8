//! Extraction and industry-affiliation filtering of fetched records.
//!
//! This is the pipeline's one decision-making step: it flattens a
//! [`PubmedArticleSet`] into a single [`SummaryRecord`], or reports why the
//! record is unusable. Extraction is all-or-nothing: a missing required
//! element anywhere along the citation path fails the whole record instead
//! of producing a partially filled row.

use crate::records::PubmedArticleSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Affiliation substrings that mark an author as industry-affiliated,
/// matched case-insensitively.
const INDUSTRY_MARKERS: [&str; 2] = ["pharma", "biotech"];

/// Literal, case-sensitive marker for the corresponding author.
const CORRESPONDING_MARKER: &str = "Corresponding Author";

/// Reason a fetched record could not be flattened.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The article set contained no article
    #[error("response contains no article")]
    NoArticle,

    /// A required element was absent from the citation tree
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Flattened output row, one per successfully extracted article.
///
/// The serde renames are the literal CSV column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Authors")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliations")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

/// Flatten a fetched article set into a [`SummaryRecord`].
///
/// When the set holds several articles for one id, the first is taken.
/// Authors whose affiliations never mention an industry marker are left out
/// of the author and affiliation columns; an author with no
/// `AffiliationInfo` at all is never classified.
pub fn extract(set: &PubmedArticleSet) -> Result<SummaryRecord, ExtractError> {
    let article = set.articles.first().ok_or(ExtractError::NoArticle)?;

    let citation = article
        .medline_citation
        .as_ref()
        .ok_or(ExtractError::MissingField("MedlineCitation"))?;
    let pmid = citation
        .pmid
        .as_ref()
        .ok_or(ExtractError::MissingField("PMID"))?;
    let article_data = citation
        .article
        .as_ref()
        .ok_or(ExtractError::MissingField("Article"))?;
    let title = article_data
        .title
        .as_ref()
        .ok_or(ExtractError::MissingField("ArticleTitle"))?;
    let pub_date = article_data
        .journal
        .as_ref()
        .ok_or(ExtractError::MissingField("Journal"))?
        .journal_issue
        .as_ref()
        .ok_or(ExtractError::MissingField("JournalIssue"))?
        .pub_date
        .as_ref()
        .ok_or(ExtractError::MissingField("PubDate"))?;

    let authors = article_data
        .author_list
        .as_ref()
        .map(|list| list.authors.as_slice())
        .unwrap_or(&[]);

    let mut non_academic_authors: Vec<String> = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();
    let mut corresponding_author_email = String::new();

    for author in authors {
        let affiliations: Vec<&str> = author
            .affiliation_info
            .iter()
            .filter_map(|info| info.affiliation.as_deref())
            .collect();

        // One industry hit flags the author; every affiliation of a flagged
        // author is reported, not just the matching one.
        if affiliations.iter().copied().any(is_industry_affiliation) {
            non_academic_authors.push(author.last_name.clone().unwrap_or_default());
            company_affiliations.extend(affiliations.iter().map(|a| a.to_string()));
        }

        // Last matching author wins, even when their email is absent.
        if affiliations.iter().any(|a| a.contains(CORRESPONDING_MARKER)) {
            corresponding_author_email = author.email.clone().unwrap_or_default();
        }
    }

    Ok(SummaryRecord {
        pubmed_id: pmid.value.clone(),
        title: title.text.clone(),
        publication_date: format!(
            "{}-{}-{}",
            pub_date.year.clone().unwrap_or_default(),
            pub_date.month.clone().unwrap_or_default(),
            pub_date.day.clone().unwrap_or_default()
        ),
        non_academic_authors: non_academic_authors.join(", "),
        company_affiliations: company_affiliations.join(", "),
        corresponding_author_email,
    })
}

/// Case-insensitive industry test for a single affiliation string.
fn is_industry_affiliation(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    INDUSTRY_MARKERS.iter().any(|marker| lower.contains(marker))
}
