// file: src/models/search_result.rs
// description: Search response model with per-match summaries
// reference: MarkLogic REST /v1/search JSON response

use serde::{Deserialize, Serialize};

/// Paging window requested from the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// 1-based index of the first result.
    pub start: u64,
    pub page_length: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            start: 1,
            page_length: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching documents, across all pages
    #[serde(default)]
    pub total: u64,

    #[serde(default, rename = "page-length")]
    pub page_length: u64,

    #[serde(default)]
    pub start: u64,

    /// Match summaries in the order the server ranked them
    #[serde(default, rename = "results")]
    pub matches: Vec<MatchSummary>,
}

impl SearchResult {
    pub fn match_results(&self) -> &[MatchSummary] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Server-side position of this match within the whole result set
    #[serde(default)]
    pub index: u64,

    pub uri: String,

    #[serde(default)]
    pub score: f64,

    #[serde(default)]
    pub mimetype: String,

    #[serde(default)]
    pub matches: Vec<Snippet>,
}

impl MatchSummary {
    /// Text of the first snippet with highlight markup flattened, or empty.
    pub fn first_snippet_text(&self) -> String {
        self.matches
            .first()
            .map(Snippet::text)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub path: String,

    #[serde(default, rename = "match-text")]
    pub match_text: Vec<MatchText>,
}

impl Snippet {
    pub fn text(&self) -> String {
        self.match_text.iter().map(MatchText::as_str).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchText {
    Plain(String),
    Highlight { highlight: String },
}

impl MatchText {
    pub fn as_str(&self) -> &str {
        match self {
            MatchText::Plain(text) => text,
            MatchText::Highlight { highlight } => highlight,
        }
    }
}
