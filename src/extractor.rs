use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::data_models::SearchResult;
use crate::url_utils::normalize_url;

/// Only the first results on the page are looked at, the rest are never parsed.
pub const MAX_RESULTS: usize = 10;

pub const NO_TITLE: &str = "No title available";
pub const NO_SNIPPET: &str = "No snippet available";
pub const NO_LINK: &str = "No link available";

const RESULT_BODY: &str = ".result__body";
const RESULT_TITLE: &str = ".result__title .result__a";
const RESULT_SNIPPET: &str = ".result__snippet";
const RESULT_URL: &str = ".result__url";
const ARTICLE_TEXT: &str = "p, h1, h2, h3, h4, h5, h6";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: &'static str, reason: String },
}

fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css,
        reason: e.to_string(),
    })
}

/// Text of every node under `element` matching `sel`, joined and trimmed.
/// Falls back to `sentinel` when nothing matched or the text is blank.
fn text_or(element: &ElementRef, sel: &Selector, sentinel: &str) -> String {
    let text = element
        .select(sel)
        .flat_map(|node| node.text())
        .collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        sentinel.to_string()
    } else {
        text.to_string()
    }
}

/// Pulls up to [`MAX_RESULTS`] hits out of a DuckDuckGo HTML results page, in page order.
///
/// A hit is kept only when its title, snippet and link are all present. The check
/// compares against the placeholder strings, so a real title that reads
/// "No title available" is dropped as well. Known quirk, kept for compatibility
/// with existing clients.
pub fn extract_results(html: &str) -> Result<Vec<SearchResult>, ExtractError> {
    let body_selector = selector(RESULT_BODY)?;
    let title_selector = selector(RESULT_TITLE)?;
    let snippet_selector = selector(RESULT_SNIPPET)?;
    let url_selector = selector(RESULT_URL)?;

    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for fragment in document.select(&body_selector).take(MAX_RESULTS) {
        let title = text_or(&fragment, &title_selector, NO_TITLE);
        let snippet = text_or(&fragment, &snippet_selector, NO_SNIPPET);
        let link = text_or(&fragment, &url_selector, NO_LINK);

        if title == NO_TITLE || snippet == NO_SNIPPET || link == NO_LINK {
            log::debug!("dropping incomplete result fragment (title: {title:?})");
            continue;
        }

        let normalized = normalize_url(&link);
        if normalized.is_none() {
            log::warn!("could not normalize result link {link:?}");
        }
        results.push(SearchResult::new(title, snippet, normalized));
    }

    Ok(results)
}

/// Flattens a page into plain text: the trimmed text of every paragraph and
/// heading, in document order, each followed by a newline. Blank ones are skipped.
pub fn extract_article(html: &str) -> Result<String, ExtractError> {
    let text_selector = selector(ARTICLE_TEXT)?;
    let document = Html::parse_document(html);

    let mut content = String::new();
    for element in document.select(&text_selector) {
        let text = element.text().collect::<String>();
        let text = text.trim();
        if !text.is_empty() {
            content.push_str(text);
            content.push('\n');
        }
    }

    Ok(content)
}
