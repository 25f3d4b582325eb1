//! Query-string lookup: reads the locale code from a named query parameter.

use crate::config::ConfigError;
use crate::locale::Candidate;
use crate::lookup::Lookup;
use crate::request::RequestSignals;

pub struct QueryLookup {
    name: String,
}

impl QueryLookup {
    /// The parameter name must be non-empty; an empty name is a
    /// configuration error, reported at construction.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ConfigError::Invalid(
                "a query parameter name is required for the query lookup".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl Lookup for QueryLookup {
    fn lookup(&self, request: &dyn RequestSignals, _resolved: &[Candidate]) -> Vec<String> {
        request.query_param(&self.name).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestParts;

    #[test]
    fn test_emits_parameter_value() {
        let lookup = QueryLookup::new("locale").expect("valid name");
        let request = RequestParts::new().with_query_param("locale", "fr-CA");

        assert_eq!(lookup.lookup(&request, &[]), vec!["fr-CA"]);
    }

    #[test]
    fn test_no_opinion_without_parameter() {
        let lookup = QueryLookup::new("locale").expect("valid name");
        let request = RequestParts::new();

        assert!(lookup.lookup(&request, &[]).is_empty());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(QueryLookup::new("").is_err());
    }
}
