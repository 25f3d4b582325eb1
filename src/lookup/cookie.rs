//! Cookie lookup: reads the locale code from a named cookie.

use crate::config::ConfigError;
use crate::locale::Candidate;
use crate::lookup::Lookup;
use crate::request::RequestSignals;

pub struct CookieLookup {
    name: String,
}

impl CookieLookup {
    /// The cookie name must be non-empty; an empty name is a configuration
    /// error, reported at construction.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ConfigError::Invalid(
                "a cookie name is required for the cookie lookup".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl Lookup for CookieLookup {
    fn lookup(&self, request: &dyn RequestSignals, _resolved: &[Candidate]) -> Vec<String> {
        request.cookie(&self.name).into_iter().collect()
    }
}
