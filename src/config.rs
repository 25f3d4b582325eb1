//! Resolver configuration.
//!
//! All options are plain data and deserializable, so configuration can come
//! from JSON/TOML as well as code. Validation happens once, when the
//! [`LocaleResolver`](crate::LocaleResolver) is constructed: every error in
//! this module is a construction-time error, never a request-time one.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Configuration problems detected while constructing a resolver.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The priority list names a lookup that is neither built-in nor custom.
    #[error("undefined lookup ({0})")]
    UndefinedLookup(String),

    /// The priority list names the same lookup twice.
    #[error("duplicate lookup ({0}) in priority list")]
    DuplicateLookup(String),

    /// A locale statically used by a lookup is missing from the allow-list.
    #[error("invalid configuration (locale '{locale}' in lookup '{lookup}' should be allowed)")]
    LocaleNotAllowed { locale: String, lookup: String },

    /// A malformed option value (empty lookup name, bad locale code, ...).
    #[error("invalid configuration ({0})")]
    Invalid(String),
}

/// Separator used when formatting a resolved locale code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// "de-CH"
    #[default]
    Hyphen,

    /// "de_CH"
    Underscore,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Underscore => '_',
        }
    }
}

/// Ordered lookup names, either as a list or a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Priority {
    List(Vec<String>),
    Csv(String),
}

impl Priority {
    /// Lookup names in priority order, trimmed and folded to lowercase
    /// (built-in names are case-insensitive).
    pub fn names(&self) -> Vec<String> {
        match self {
            Priority::List(names) => names
                .iter()
                .map(|name| name.trim().to_ascii_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
            Priority::Csv(csv) => csv
                .split(',')
                .map(|name| name.trim().to_ascii_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::List(vec!["accept-language".to_string(), "default".to_string()])
    }
}

impl<const N: usize> From<[&str; N]> for Priority {
    fn from(names: [&str; N]) -> Self {
        Priority::List(names.iter().map(|name| name.to_string()).collect())
    }
}

/// Options for the cookie lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CookieOptions {
    /// Cookie holding the locale code
    pub name: String,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            name: "locale".to_string(),
        }
    }
}

/// Options for the query-string lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Query parameter holding the locale code
    pub name: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            name: "locale".to_string(),
        }
    }
}

/// Resolver configuration, immutable once a resolver has been built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Lookup names in priority order
    pub priority: Priority,

    /// Acceptable locale codes; absent means unrestricted
    pub allowed: Option<Vec<String>>,

    /// Fallback locale emitted by the `default` lookup; always implicitly
    /// allowed even when an explicit allow-list omits it
    #[serde(alias = "default")]
    pub default_locale: String,

    /// Separator used in resolved locale codes
    pub separator: Separator,

    /// Cookie lookup options
    pub cookie: CookieOptions,

    /// Query-string lookup options
    pub query: QueryOptions,

    /// Hostname to locale-code map for the `hostname` lookup
    pub hostname: HashMap<String, String>,

    /// Language to locale-code map for the `map` lookup
    pub map: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            priority: Priority::default(),
            allowed: None,
            default_locale: "en-GB".to_string(),
            separator: Separator::default(),
            cookie: CookieOptions::default(),
            query: QueryOptions::default(),
            hostname: HashMap::new(),
            map: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_priority() {
        let options = Options::default();
        assert_eq!(options.priority.names(), vec!["accept-language", "default"]);
    }

    #[test]
    fn test_default_locale_and_names() {
        let options = Options::default();
        assert_eq!(options.default_locale, "en-GB");
        assert_eq!(options.cookie.name, "locale");
        assert_eq!(options.query.name, "locale");
        assert!(options.allowed.is_none());
    }

    #[test]
    fn test_priority_from_csv_trims_and_lowercases() {
        let priority = Priority::Csv("Cookie, Accept-Language ,default".to_string());
        assert_eq!(priority.names(), vec!["cookie", "accept-language", "default"]);
    }

    #[test]
    fn test_priority_from_list_lowercases() {
        let priority = Priority::from(["Query", "Default"]);
        assert_eq!(priority.names(), vec!["query", "default"]);
    }

    #[test]
    fn test_separator_chars() {
        assert_eq!(Separator::Hyphen.as_char(), '-');
        assert_eq!(Separator::Underscore.as_char(), '_');
    }

    #[test]
    fn test_options_from_json_list_priority() {
        let json = r#"{
            "priority": ["cookie", "map", "default"],
            "default": "en-GB",
            "map": { "de": "de-DE" }
        }"#;

        let options: Options = serde_json::from_str(json).expect("deserialize");
        assert_eq!(options.priority.names(), vec!["cookie", "map", "default"]);
        assert_eq!(options.map.get("de"), Some(&"de-DE".to_string()));
    }

    #[test]
    fn test_options_from_json_csv_priority_and_separator() {
        let json = r#"{
            "priority": "query,default",
            "separator": "underscore",
            "allowed": ["en_GB", "de_DE"]
        }"#;

        let options: Options = serde_json::from_str(json).expect("deserialize");
        assert_eq!(options.priority.names(), vec!["query", "default"]);
        assert_eq!(options.separator, Separator::Underscore);
        assert_eq!(options.allowed.as_ref().map(|a| a.len()), Some(2));
    }
}
