/// Turns a possibly scheme-less link into an absolute `http(s)` URL.
///
/// Links that already carry an `http://` or `https://` scheme are returned as-is,
/// anything else gets `https://` prepended. This is a purely syntactic transform:
/// the host is never validated. Returns `None` when there is nothing to build a URL from.
pub fn normalize_url(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }
    Some(format!("https://{raw}"))
}
