//! The opaque-request contract.
//!
//! The resolver never touches a transport type directly; it reads request
//! signals through [`RequestSignals`]. The HTTP middleware implements this
//! trait over `axum` request parts, and [`RequestParts`] is a plain owned
//! implementation for tests, CLIs, and non-HTTP callers.

use std::collections::HashMap;

/// Read-only view of the request data the built-in lookups consume.
///
/// Implementations must be cheap, synchronous reads; the resolver never
/// awaits or retries them.
pub trait RequestSignals {
    /// Value of the named cookie, if present.
    fn cookie(&self, name: &str) -> Option<String>;

    /// Value of the named query-string parameter, if present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Request hostname, without a port.
    fn hostname(&self) -> Option<String>;

    /// Accepted languages in preference order, most preferred first.
    fn accept_languages(&self) -> Vec<String>;
}

/// Owned request signals, built up field by field.
///
/// # Example
///
/// ```rust,ignore
/// let request = RequestParts::new()
///     .with_cookie("locale", "de")
///     .with_accept_languages(["de-CH", "en"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    cookies: HashMap<String, String>,
    query: HashMap<String, String>,
    hostname: Option<String>,
    accept_languages: Vec<String>,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_accept_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accept_languages = languages.into_iter().map(Into::into).collect();
        self
    }
}

impl RequestSignals for RequestParts {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }

    fn accept_languages(&self) -> Vec<String> {
        self.accept_languages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_has_no_signals() {
        let request = RequestParts::new();

        assert_eq!(request.cookie("locale"), None);
        assert_eq!(request.query_param("locale"), None);
        assert_eq!(request.hostname(), None);
        assert!(request.accept_languages().is_empty());
    }

    #[test]
    fn test_builder_round_trip() {
        let request = RequestParts::new()
            .with_cookie("locale", "de")
            .with_query_param("lang", "fr-CA")
            .with_hostname("example.de")
            .with_accept_languages(["de-CH", "en"]);

        assert_eq!(request.cookie("locale"), Some("de".to_string()));
        assert_eq!(request.query_param("lang"), Some("fr-CA".to_string()));
        assert_eq!(request.hostname(), Some("example.de".to_string()));
        assert_eq!(request.accept_languages(), vec!["de-CH", "en"]);
    }
}
