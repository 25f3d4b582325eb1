//! Accept-Language lookup: emits the request's ordered language list.
//!
//! The transport (or [`RequestParts`](crate::RequestParts)) is responsible
//! for q-value ordering; this lookup only filters out entries that cannot be
//! a 2-letter language or a 5-character locale, such as `*` or extended
//! BCP 47 tags.

use crate::locale::Candidate;
use crate::lookup::Lookup;
use crate::request::RequestSignals;

pub struct AcceptLanguageLookup;

impl Lookup for AcceptLanguageLookup {
    fn lookup(&self, request: &dyn RequestSignals, _resolved: &[Candidate]) -> Vec<String> {
        request
            .accept_languages()
            .into_iter()
            .filter(|language| language.len() == 2 || language.len() == 5)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestParts;

    #[test]
    fn test_preserves_preference_order() {
        let request = RequestParts::new().with_accept_languages(["de-CH", "en-GB", "en"]);

        assert_eq!(
            AcceptLanguageLookup.lookup(&request, &[]),
            vec!["de-CH", "en-GB", "en"]
        );
    }

    #[test]
    fn test_filters_wildcard_and_extended_tags() {
        let request = RequestParts::new().with_accept_languages(["*", "zh-Hans-CN", "de"]);

        assert_eq!(AcceptLanguageLookup.lookup(&request, &[]), vec!["de"]);
    }

    #[test]
    fn test_no_opinion_without_languages() {
        let request = RequestParts::new();
        assert!(AcceptLanguageLookup.lookup(&request, &[]).is_empty());
    }
}
