//! Default lookup: unconditionally emits the configured fallback locale.
//!
//! Placing this last in the priority order guarantees the resolver always
//! terminates the forward pass with a region-qualified result.

use crate::config::{ConfigError, Separator};
use crate::locale::Candidate;
use crate::lookup::Lookup;
use crate::normalize::normalize;
use crate::request::RequestSignals;

pub struct DefaultLookup {
    locale: String,
}

impl DefaultLookup {
    /// The fallback must normalize to a region-qualified locale; a bare
    /// language or malformed code is a configuration error.
    pub fn new(locale: &str) -> Result<Self, ConfigError> {
        match normalize(locale, "default") {
            Some(candidate) if candidate.region.is_some() => Ok(Self {
                locale: candidate.code(Separator::Hyphen),
            }),
            _ => Err(ConfigError::Invalid(format!(
                "a region-qualified locale is required for the default lookup, got '{locale}'"
            ))),
        }
    }
}

impl Lookup for DefaultLookup {
    fn lookup(&self, _request: &dyn RequestSignals, _resolved: &[Candidate]) -> Vec<String> {
        vec![self.locale.clone()]
    }

    fn uses(&self) -> Vec<String> {
        vec![self.locale.clone()]
    }
}
