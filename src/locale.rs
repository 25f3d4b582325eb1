//! Locale value types: normalized candidates and the final resolution result.
//!
//! A [`Candidate`] is an intermediate, request-scoped value produced by the
//! normalizer; a [`LocaleValue`] is the immutable, always region-qualified
//! result the resolver hands back to callers.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::config::Separator;

/// A normalized locale candidate emitted by a lookup source.
///
/// Invariants (upheld by the normalizer, the only producer):
/// - `language` is exactly 2 ASCII letters, lowercase
/// - `region`, when present, is exactly 2 ASCII letters, uppercase
///
/// A candidate without a region is a *bare language preference*; it is never
/// returned to callers and only serves as disambiguation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// ISO 639-1 language code (e.g., "de")
    pub language: String,

    /// ISO 3166-1 region code (e.g., "CH"), absent for bare preferences
    pub region: Option<String>,

    /// Name of the lookup source that produced this candidate
    pub source: String,
}

impl Candidate {
    /// Canonical code of this candidate using the given separator.
    ///
    /// A bare language preference yields just the language segment.
    pub fn code(&self, separator: Separator) -> String {
        match &self.region {
            Some(region) => format!("{}{}{}", self.language, separator.as_char(), region),
            None => self.language.clone(),
        }
    }
}

/// Provenance of a resolved locale.
///
/// `Pair` records that a bare language preference from the first lookup was
/// completed by a region-qualified candidate from the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single lookup produced the result outright
    Single(String),

    /// Ordered pair: preference source, then completing source
    Pair(String, String),
}

impl Source {
    /// Name of the lookup that contributed the language preference (or the
    /// whole result when there was no separate preference).
    pub fn first(&self) -> &str {
        match self {
            Source::Single(name) | Source::Pair(name, _) => name,
        }
    }
}

// Serializes the way the original middleware exposed it: a bare string for a
// single source, a two-element array for a merged pair.
impl Serialize for Source {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Source::Single(name) => serializer.serialize_str(name),
            Source::Pair(first, second) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(first)?;
                seq.serialize_element(second)?;
                seq.end()
            }
        }
    }
}

/// The final, public resolution result.
///
/// Always carries a region: the resolver never returns a bare-language
/// result. `code` is precomputed with the separator configured at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleValue {
    /// ISO 639-1 language code, lowercase (e.g., "de")
    pub language: String,

    /// ISO 3166-1 region code, uppercase (e.g., "CH")
    pub region: String,

    /// Canonical code, e.g. "de-CH" (or "de_CH" with the underscore separator)
    pub code: String,

    /// Lookup source(s) that produced this value
    pub source: Source,
}

impl LocaleValue {
    pub(crate) fn new(language: String, region: String, source: Source, separator: Separator) -> Self {
        let code = format!("{}{}{}", language, separator.as_char(), region);

        Self {
            language,
            region,
            code,
            source,
        }
    }
}

impl std::fmt::Display for LocaleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
