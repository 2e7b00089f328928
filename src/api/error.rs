use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::extractor::ExtractError;
use crate::fetcher::FetchError;

use super::models::ErrorResponse;

pub const SEARCH_FAILED: &str = "Error fetching search results";
pub const ARTICLE_FAILED: &str = "Error fetching article content";

/// Everything that can go wrong while serving a relay request.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Query parameter \"q\" is required")]
    MissingQuery,
    #[error("URL parameter is required")]
    MissingUrl,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("invalid search endpoint: {0}")]
    SearchEndpoint(#[from] url::ParseError),
    #[error("Failed to fetch search results")]
    SearchStatus(StatusCode),
    #[error("Failed to fetch article from {url}")]
    ArticleStatus { url: String, status: StatusCode },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl RelayError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RelayError::MissingQuery | RelayError::MissingUrl)
    }

    /// Validation failures are reported verbatim with a 400. Anything else
    /// becomes a 500 carrying the endpoint's generic message, with the failure
    /// itself in `details`.
    pub fn into_api_error(self, generic: &'static str) -> ApiError {
        if self.is_validation() {
            ApiError::new(StatusCode::BAD_REQUEST, self.to_string(), None)
        } else {
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                generic.to_string(),
                Some(self.to_string()),
            )
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: String, details: Option<String>) -> ApiError {
        ApiError {
            status,
            body: ErrorResponse { error, details },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
