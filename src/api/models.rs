use serde::{Deserialize, Serialize};

/// Every value given for `key` in a raw query string, in order of appearance.
///
/// Repeated keys are kept rather than rejected, so handlers decide what a
/// repeated parameter means instead of the extractor failing the request.
pub fn param_values(raw_query: Option<&str>, key: &str) -> Vec<String> {
    let Some(raw_query) = raw_query else {
        return Vec::new();
    };
    url::form_urlencoded::parse(raw_query.as_bytes())
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
