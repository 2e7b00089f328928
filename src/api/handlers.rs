use axum::{
    Json,
    extract::{RawQuery, State},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::data_models::SearchResult;
use crate::extractor::{extract_article, extract_results};
use crate::url_utils::normalize_url;

use super::AppState;
use super::error::{ARTICLE_FAILED, ApiError, RelayError, SEARCH_FAILED};
use super::models::{ArticleResponse, param_values};

/// Bytes left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Treats a missing parameter and an empty one the same way.
fn required(param: Option<String>) -> Option<String> {
    param.filter(|value| !value.is_empty())
}

/// Appends `q=<term>` to the search endpoint, escaping the term the way
/// browsers escape a URI component (space becomes `%20`).
pub fn search_url(endpoint: &str, query: &str) -> Result<String, RelayError> {
    let endpoint = Url::parse(endpoint)?;
    let separator = if endpoint.query().is_some() { '&' } else { '?' };
    Ok(format!(
        "{endpoint}{separator}q={}",
        utf8_percent_encode(query, URI_COMPONENT)
    ))
}

pub async fn search_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    // repeated `q` values are joined with commas
    let values = param_values(raw_query.as_deref(), "q");
    let query = required((!values.is_empty()).then(|| values.join(",")));
    match search(&state, query.as_deref()).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            if !e.is_validation() {
                log::error!("error fetching search results for {query:?}: {e:#}");
            }
            Err(e.into_api_error(SEARCH_FAILED))
        }
    }
}

async fn search(state: &AppState, query: Option<&str>) -> Result<Vec<SearchResult>, RelayError> {
    let query = query.ok_or(RelayError::MissingQuery)?;
    let search_url = search_url(&state.config.search_endpoint, query)?;

    let page = state.fetcher.fetch(&search_url).await?;
    if !page.is_success() {
        return Err(RelayError::SearchStatus(page.status));
    }

    let results = extract_results(&page.body)?;
    log::info!("search {query:?}: {} results", results.len());
    Ok(results)
}

pub async fn article_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ArticleResponse>, ApiError> {
    let urls = param_values(raw_query.as_deref(), "url");
    match article(&state, &urls).await {
        Ok(content) => Ok(Json(ArticleResponse { content })),
        Err(e) => {
            if !e.is_validation() {
                log::error!("error fetching article content for {urls:?}: {e:#}");
            }
            Err(e.into_api_error(ARTICLE_FAILED))
        }
    }
}

async fn article(state: &AppState, urls: &[String]) -> Result<String, RelayError> {
    let url = match urls {
        [] => return Err(RelayError::MissingUrl),
        [url] if url.is_empty() => return Err(RelayError::MissingUrl),
        [url] => url.as_str(),
        // more than one target cannot be fetched as a single article
        _ => return Err(RelayError::InvalidUrl),
    };
    let absolute_url = match normalize_url(url) {
        Some(absolute_url) => absolute_url,
        None => {
            log::warn!("could not normalize article url {url:?}");
            return Err(RelayError::InvalidUrl);
        }
    };

    let page = state.fetcher.fetch(&absolute_url).await?;
    if !page.is_success() {
        return Err(RelayError::ArticleStatus {
            url: absolute_url,
            status: page.status,
        });
    }

    let content = extract_article(&page.body)?;
    log::info!("article {absolute_url}: {} bytes of text", content.len());
    Ok(content)
}
