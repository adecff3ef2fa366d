use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

/// Describes an HTTP exchange for error context.
pub(crate) fn format_http_context(status: Option<StatusCode>, method: &str, url: &Url) -> String {
    match status {
        Some(status) => format!("{method} {url} [{status}]"),
        None => format!("{method} {url}"),
    }
}

/// Copy of the headers that is safe to log.
pub(crate) fn sanitize_headers(headers: &HeaderMap) -> HeaderMap {
    let mut sanitized = headers.clone();
    if sanitized.contains_key(AUTHORIZATION) {
        sanitized.insert(AUTHORIZATION, HeaderValue::from_static("[REDACTED]"));
    }
    sanitized
}
