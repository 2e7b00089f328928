use serde::{Deserialize, Serialize};

/// One hit scraped off a search results page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    /// Absolute URL, or `None` when the scraped link could not be normalized.
    pub link: Option<String>,
}

impl SearchResult {
    pub fn new(title: String, snippet: String, link: Option<String>) -> SearchResult {
        SearchResult {
            title,
            snippet,
            link,
        }
    }
}

/// Raw outcome of an outbound request, before anyone decides whether the status is acceptable.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: reqwest::StatusCode,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: reqwest::StatusCode, body: String) -> FetchedPage {
        FetchedPage { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
