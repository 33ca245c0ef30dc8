//! Typed model of the PubMed EFetch XML tree.
//!
//! Struct and field renames mirror the wire format's tag names. Every element
//! the wire format may emit zero, one, or many times (`PubmedArticle`,
//! `Author`, `AffiliationInfo`) is a defaulted `Vec`, so the list-or-single
//! ambiguity is normalized to an ordered sequence at deserialization time.
//! Elements that carry attributes alongside their text content (`PMID`,
//! `ArticleTitle`) use `$text` wrapper structs.

use crate::error::{PubtrawlError, Result};
use serde::Deserialize;

/// Root of an EFetch response: the set of articles returned for a request.
#[derive(Debug, Deserialize)]
pub struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticle>,
}

impl PubmedArticleSet {
    /// Parse an EFetch XML body.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml)
            .map_err(|e| PubtrawlError::Parse(format!("Failed to parse EFetch XML: {}", e)))
    }
}

/// One article entry of the set.
#[derive(Debug, Deserialize)]
pub struct PubmedArticle {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: Option<MedlineCitation>,
}

#[derive(Debug, Deserialize)]
pub struct MedlineCitation {
    #[serde(rename = "PMID")]
    pub pmid: Option<Pmid>,
    #[serde(rename = "Article")]
    pub article: Option<Article>,
}

/// `<PMID Version="1">12345</PMID>`
#[derive(Debug, Deserialize)]
pub struct Pmid {
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct Article {
    #[serde(rename = "ArticleTitle")]
    pub title: Option<ArticleTitle>,
    #[serde(rename = "Journal")]
    pub journal: Option<Journal>,
    #[serde(rename = "AuthorList")]
    pub author_list: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleTitle {
    #[serde(rename = "$text")]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct Journal {
    #[serde(rename = "JournalIssue")]
    pub journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Deserialize)]
pub struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub pub_date: Option<PubDate>,
}

/// Publication date parts; each may be absent, and `Month` is often a
/// three-letter name rather than a number.
#[derive(Debug, Deserialize)]
pub struct PubDate {
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Day")]
    pub day: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorList {
    #[serde(rename = "Author", default)]
    pub authors: Vec<Author>,
}

#[derive(Debug, Deserialize)]
pub struct Author {
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfo>,
}

/// One free-text institutional affiliation of an author.
#[derive(Debug, Deserialize)]
pub struct AffiliationInfo {
    #[serde(rename = "Affiliation")]
    pub affiliation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> PubmedArticleSet {
        PubmedArticleSet::from_xml(xml).expect("XML should parse")
    }

    #[test]
    fn test_parse_full_record() {
        let xml = r#"
            <PubmedArticleSet>
              <PubmedArticle>
                <MedlineCitation Status="MEDLINE">
                  <PMID Version="1">12345678</PMID>
                  <Article PubModel="Print">
                    <Journal>
                      <JournalIssue CitedMedium="Print">
                        <PubDate>
                          <Year>2021</Year>
                          <Month>Apr</Month>
                          <Day>15</Day>
                        </PubDate>
                      </JournalIssue>
                    </Journal>
                    <ArticleTitle>A study of things.</ArticleTitle>
                    <AuthorList CompleteYN="Y">
                      <Author ValidYN="Y">
                        <LastName>Doe</LastName>
                        <AffiliationInfo>
                          <Affiliation>Acme Pharma, Basel.</Affiliation>
                        </AffiliationInfo>
                      </Author>
                    </AuthorList>
                  </Article>
                </MedlineCitation>
              </PubmedArticle>
            </PubmedArticleSet>
        "#;

        let set = parse(xml);
        assert_eq!(set.articles.len(), 1);

        let citation = set.articles[0]
            .medline_citation
            .as_ref()
            .expect("citation present");
        assert_eq!(citation.pmid.as_ref().expect("pmid").value, "12345678");

        let article = citation.article.as_ref().expect("article present");
        assert_eq!(
            article.title.as_ref().expect("title").text,
            "A study of things."
        );

        let date = article
            .journal
            .as_ref()
            .and_then(|j| j.journal_issue.as_ref())
            .and_then(|i| i.pub_date.as_ref())
            .expect("date present");
        assert_eq!(date.year.as_deref(), Some("2021"));
        assert_eq!(date.month.as_deref(), Some("Apr"));
        assert_eq!(date.day.as_deref(), Some("15"));

        let authors = &article.author_list.as_ref().expect("authors").authors;
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].last_name.as_deref(), Some("Doe"));
        assert_eq!(
            authors[0].affiliation_info[0].affiliation.as_deref(),
            Some("Acme Pharma, Basel.")
        );
    }

    #[test]
    fn test_single_author_normalizes_to_one_element() {
        let xml = r#"
            <PubmedArticleSet>
              <PubmedArticle>
                <MedlineCitation>
                  <PMID>1</PMID>
                  <Article>
                    <ArticleTitle>T</ArticleTitle>
                    <AuthorList>
                      <Author><LastName>Solo</LastName></Author>
                    </AuthorList>
                  </Article>
                </MedlineCitation>
              </PubmedArticle>
            </PubmedArticleSet>
        "#;

        let set = parse(xml);
        let article = set.articles[0]
            .medline_citation
            .as_ref()
            .and_then(|c| c.article.as_ref())
            .expect("article");
        assert_eq!(article.author_list.as_ref().expect("list").authors.len(), 1);
    }

    #[test]
    fn test_repeated_affiliation_info_normalizes_to_sequence() {
        let xml = r#"
            <PubmedArticleSet>
              <PubmedArticle>
                <MedlineCitation>
                  <PMID>2</PMID>
                  <Article>
                    <ArticleTitle>T</ArticleTitle>
                    <AuthorList>
                      <Author>
                        <LastName>Poly</LastName>
                        <AffiliationInfo><Affiliation>First</Affiliation></AffiliationInfo>
                        <AffiliationInfo><Affiliation>Second</Affiliation></AffiliationInfo>
                      </Author>
                    </AuthorList>
                  </Article>
                </MedlineCitation>
              </PubmedArticle>
            </PubmedArticleSet>
        "#;

        let set = parse(xml);
        let author = &set.articles[0]
            .medline_citation
            .as_ref()
            .and_then(|c| c.article.as_ref())
            .and_then(|a| a.author_list.as_ref())
            .expect("list")
            .authors[0];
        let affiliations: Vec<_> = author
            .affiliation_info
            .iter()
            .filter_map(|i| i.affiliation.as_deref())
            .collect();
        assert_eq!(affiliations, vec!["First", "Second"]);
    }

    #[test]
    fn test_absent_author_list_is_empty() {
        let xml = r#"
            <PubmedArticleSet>
              <PubmedArticle>
                <MedlineCitation>
                  <PMID>3</PMID>
                  <Article>
                    <ArticleTitle>No authors listed</ArticleTitle>
                  </Article>
                </MedlineCitation>
              </PubmedArticle>
            </PubmedArticleSet>
        "#;

        let set = parse(xml);
        let article = set.articles[0]
            .medline_citation
            .as_ref()
            .and_then(|c| c.article.as_ref())
            .expect("article");
        assert!(article.author_list.is_none());
    }

    #[test]
    fn test_empty_set() {
        let set = parse("<PubmedArticleSet></PubmedArticleSet>");
        assert!(set.articles.is_empty());
    }

    #[test]
    fn test_invalid_xml_is_parse_error() {
        let err = PubmedArticleSet::from_xml("<PubmedArticleSet><Oops</PubmedArticleSet>")
            .expect_err("must fail");
        assert!(matches!(err, PubtrawlError::Parse(_)));
    }
}
