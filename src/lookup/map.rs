//! Language-map lookup: completes bare-language preferences into full
//! locales.
//!
//! Unlike the other lookups this one reads no request signal at all. It
//! inspects the candidates accumulated from higher-priority sources and, for
//! every bare-language candidate whose language is a key in the configured
//! map, emits the mapped full locale string.

use std::collections::HashMap;

use crate::locale::Candidate;
use crate::lookup::Lookup;
use crate::request::RequestSignals;

pub struct MapLookup {
    map: HashMap<String, String>,
}

impl MapLookup {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }
}

impl Lookup for MapLookup {
    fn lookup(&self, _request: &dyn RequestSignals, resolved: &[Candidate]) -> Vec<String> {
        resolved
            .iter()
            .filter(|candidate| candidate.region.is_none())
            .filter_map(|candidate| self.map.get(&candidate.language))
            .cloned()
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

    fn lookup_for(pairs: &[(&str, &str)]) -> MapLookup {
        MapLookup::new(
            pairs
                .iter()
                .map(|(language, locale)| (language.to_string(), locale.to_string()))
                .collect(),
        )
    }

    fn bare(language: &str, source: &str) -> Candidate {
        Candidate {
            language: language.to_string(),
            region: None,
            source: source.to_string(),
        }
    }

    fn full(language: &str, region: &str, source: &str) -> Candidate {
        Candidate {
            language: language.to_string(),
            region: Some(region.to_string()),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_completes_bare_language() {
        let lookup = lookup_for(&[("de", "de-DE")]);
        let request = RequestParts::new();
        let resolved = [bare("de", "cookie")];

        assert_eq!(lookup.lookup(&request, &resolved), vec!["de-DE"]);
    }

    #[test]
    fn test_ignores_region_qualified_candidates() {
        let lookup = lookup_for(&[("de", "de-DE")]);
        let request = RequestParts::new();
        let resolved = [full("de", "CH", "cookie")];

        assert!(lookup.lookup(&request, &resolved).is_empty());
    }

    #[test]
    fn test_ignores_unmapped_languages() {
        let lookup = lookup_for(&[("de", "de-DE")]);
        let request = RequestParts::new();
        let resolved = [bare("fr", "cookie")];

        assert!(lookup.lookup(&request, &resolved).is_empty());
    }

    #[test]
    fn test_emits_in_accumulation_order() {
        let lookup = lookup_for(&[("de", "de-DE"), ("fr", "fr-CA")]);
        let request = RequestParts::new();
        let resolved = [bare("fr", "cookie"), bare("de", "accept-language")];

        assert_eq!(lookup.lookup(&request, &resolved), vec!["fr-CA", "de-DE"]);
    }

    #[test]
    fn test_uses_reports_map_values() {
        let lookup = lookup_for(&[("de", "de-DE")]);
        assert_eq!(lookup.uses(), vec!["de-DE"]);
    }
}
