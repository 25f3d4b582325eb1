//! Hostname lookup: maps the request hostname to a configured locale code.

use std::collections::HashMap;

use crate::locale::Candidate;
use crate::lookup::Lookup;
use crate::request::RequestSignals;

pub struct HostnameLookup {
    map: HashMap<String, String>,
}

impl HostnameLookup {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }
}

impl Lookup for HostnameLookup {
    fn lookup(&self, request: &dyn RequestSignals, _resolved: &[Candidate]) -> Vec<String> {
        request
            .hostname()
            .and_then(|hostname| self.map.get(&hostname))
            .cloned()
            .into_iter()
            .collect()
    }

    fn uses(&self) -> Vec<String> {
        self.map.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestParts;

    fn lookup_for(pairs: &[(&str, &str)]) -> HostnameLookup {
        HostnameLookup::new(
            pairs
                .iter()
                .map(|(host, locale)| (host.to_string(), locale.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_maps_known_hostname() {
        let lookup = lookup_for(&[("example.de", "de-DE")]);
        let request = RequestParts::new().with_hostname("example.de");

        assert_eq!(lookup.lookup(&request, &[]), vec!["de-DE"]);
    }

    #[test]
    fn test_no_opinion_for_unknown_hostname() {
        let lookup = lookup_for(&[("example.de", "de-DE")]);
        let request = RequestParts::new().with_hostname("example.org");

        assert!(lookup.lookup(&request, &[]).is_empty());
    }

    #[test]
    fn test_no_opinion_without_hostname() {
        let lookup = lookup_for(&[("example.de", "de-DE")]);
        let request = RequestParts::new();

        assert!(lookup.lookup(&request, &[]).is_empty());
    }

    #[test]
    fn test_uses_reports_map_values() {
        let lookup = lookup_for(&[("example.de", "de-DE")]);
        assert_eq!(lookup.uses(), vec!["de-DE"]);
    }
}
