//! HTTP request signal extraction.
//!
//! Implements [`RequestSignals`] over `axum` request parts: Cookie header
//! parsing, query-string parameter lookup, Host resolution, and
//! Accept-Language parsing with q-value ordering.

use axum::http::{header, HeaderMap, Uri};

use crate::request::RequestSignals;

/// Borrowed view over an HTTP request's headers and URI.
pub(crate) struct HttpSignals<'a> {
    headers: &'a HeaderMap,
    uri: &'a Uri,
}

impl<'a> HttpSignals<'a> {
    pub(crate) fn new(headers: &'a HeaderMap, uri: &'a Uri) -> Self {
        Self { headers, uri }
    }
}

impl RequestSignals for HttpSignals<'_> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| cookie_value(value, name))
    }

    fn query_param(&self, name: &str) -> Option<String> {
        query_value(self.uri.query()?, name)
    }

    fn hostname(&self) -> Option<String> {
        self.headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(strip_port)
            .or_else(|| self.uri.host().map(|host| host.to_string()))
    }

    fn accept_languages(&self) -> Vec<String> {
        self.headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(parse_accept_language)
            .unwrap_or_default()
    }
}

/// Value of the named cookie within one Cookie header.
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
}

/// Value of the named parameter within a raw query string.
///
/// Locale codes are plain ASCII, so no percent-decoding is attempted.
fn query_value(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Drop a trailing `:port` from a Host header value, keeping IPv6 literals
/// intact.
fn strip_port(host: &str) -> String {
    if let Some(end) = host.strip_prefix('[').and_then(|rest| rest.find(']')) {
        return host[..end + 2].to_string();
    }

    match host.split_once(':') {
        Some((hostname, _)) => hostname.to_string(),
        None => host.to_string(),
    }
}

/// Parse an Accept-Language header into language tags ordered by q-value,
/// highest first (stable for ties, so header order breaks them). Entries
/// with q=0 are excluded per RFC 9110.
pub(crate) fn parse_accept_language(header: &str) -> Vec<String> {
    let mut entries: Vec<(String, f32)> = Vec::new();

    for entry in header.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (tag, quality) = match entry.split_once(';') {
            Some((tag, params)) => {
                let quality = params
                    .trim()
                    .strip_prefix("q=")
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0)
                    .clamp(0.0, 1.0);

                (tag.trim(), quality)
            }
            None => (entry, 1.0),
        };

        if quality > 0.0 && !tag.is_empty() {
            entries.push((tag.to_string(), quality));
        }
    }

    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(tag, _)| tag).collect()
}
