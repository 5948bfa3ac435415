use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::citation::Citation;

/// Application label attached to every result mapped from a citation.
pub const NUCLEUS_APPLICATION: &str = "Nucleus API";

/// Keyword and filter selections collected by the search form.
///
/// The filters are carried alongside the keyword but the citation service
/// only receives the keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SearchQuery {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_keyword"))
    )]
    pub keyword: String,
    #[serde(default)]
    pub applications: BTreeSet<String>,
    #[serde(default)]
    pub link_types: BTreeSet<String>,
    #[serde(default)]
    pub jurisdictions: BTreeSet<String>,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Default::default()
        }
    }

    pub fn with_applications<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applications = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_link_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_types = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_jurisdictions<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jurisdictions = values.into_iter().map(Into::into).collect();
        self
    }

    /// Total number of filter selections across all three groups.
    pub fn filter_count(&self) -> usize {
        self.applications.len() + self.link_types.len() + self.jurisdictions.len()
    }
}

#[cfg(feature = "validation")]
fn validate_keyword(keyword: &str) -> Result<(), validator::ValidationError> {
    if keyword.trim().is_empty() {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("Enter a keyword to search".into());
        return Err(err);
    }
    Ok(())
}

/// Source system a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Jira,
    Confluence,
    /// Compliance sources served by the citation service.
    Cs,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Jira => "jira",
            ResultType::Confluence => "confluence",
            ResultType::Cs => "cs",
        }
    }

    /// Short label shown on result badges.
    pub fn label(&self) -> &'static str {
        match self {
            ResultType::Jira => "JIRA",
            ResultType::Confluence => "Confluence",
            ResultType::Cs => "Citation",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, display-ready search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub result_type: ResultType,
    /// Navigation target; `"#"` when the source has no link.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the result was mapped, not when the document was written.
    pub created_date: DateTime<Utc>,
    pub application: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(default)]
    pub internal_reference: bool,
}

impl SearchResult {
    /// Map one citation at position `index` (0-based) of the response.
    ///
    /// Missing or empty `uid`, document name and reference URL fall back to
    /// `citation-<index>`, `Document <index + 1>` and `#`.
    pub fn from_citation(citation: &Citation, index: usize, now: DateTime<Utc>) -> Self {
        Self {
            id: non_empty(citation.uid.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("citation-{index}")),
            title: non_empty(citation.document_name())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Document {}", index + 1)),
            result_type: ResultType::Cs,
            url: non_empty(citation.reference_url.as_deref())
                .unwrap_or("#")
                .to_string(),
            summary: citation.text.clone(),
            status: None,
            created_date: now,
            application: NUCLEUS_APPLICATION.to_string(),
            text: citation.text.clone(),
            document_name: citation.document_name().map(str::to_string),
            internal_reference: citation.is_internal(),
        }
    }

    /// Whether the result carries a real navigation target.
    pub fn has_link(&self) -> bool {
        self.url != "#"
    }
}

/// Map a full citation list, preserving length and order.
pub fn map_citations(citations: &[Citation], now: DateTime<Utc>) -> Vec<SearchResult> {
    citations
        .iter()
        .enumerate()
        .map(|(index, citation)| SearchResult::from_citation(citation, index, now))
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
