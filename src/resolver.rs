//! The resolution engine.
//!
//! Consumes, in priority order, the raw candidates produced by the
//! configured lookups, normalizes and filters them, and runs the
//! disambiguation algorithm: a forward pass with early exit, then a
//! backtracking pass that drops the earliest accumulated candidate and
//! re-scans the remainder until a match is found or nothing is left.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::config::{ConfigError, Options, Separator};
use crate::locale::{Candidate, LocaleValue, Source};
use crate::lookup::{create_builtin, Lookup};
use crate::normalize::normalize;
use crate::request::RequestSignals;

/// Resolves a request's locale from prioritized lookup sources.
///
/// Construction validates the whole configuration (priority names,
/// allow-list membership of statically used locales, option values); after
/// that the resolver is immutable and request-time resolution is total.
/// Share one resolver across threads via `Arc`; resolution keeps no state
/// between calls.
pub struct LocaleResolver {
    priority: Vec<String>,
    lookups: HashMap<String, Box<dyn Lookup>>,
    allowed: Option<HashSet<String>>,
    default_code: String,
    separator: Separator,
}

impl LocaleResolver {
    /// Build a resolver from options, using only built-in lookups.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        Self::with_lookups(options, HashMap::new())
    }

    /// Build a resolver from options plus caller-supplied custom lookups.
    ///
    /// Custom lookups are keyed by name (case-insensitive) and take
    /// precedence over built-ins of the same name.
    pub fn with_lookups(
        options: Options,
        custom: HashMap<String, Box<dyn Lookup>>,
    ) -> Result<Self, ConfigError> {
        let priority = options.priority.names();

        let mut seen = HashSet::new();
        for name in &priority {
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateLookup(name.clone()));
            }
        }

        let default_code = canonical_code(&options.default_locale).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "a region-qualified default locale is required, got '{}'",
                options.default_locale
            ))
        })?;

        let allowed = match &options.allowed {
            None => None,
            Some(entries) => {
                let mut codes = HashSet::new();
                for entry in entries {
                    let code = canonical_code(entry).ok_or_else(|| {
                        ConfigError::Invalid(format!(
                            "allow-list entry '{entry}' is not a region-qualified locale"
                        ))
                    })?;
                    codes.insert(code);
                }
                Some(codes)
            }
        };

        let mut custom: HashMap<String, Box<dyn Lookup>> = custom
            .into_iter()
            .map(|(name, lookup)| (name.trim().to_ascii_lowercase(), lookup))
            .collect();

        let mut lookups = HashMap::new();
        for name in &priority {
            let lookup = match custom.remove(name) {
                Some(lookup) => lookup,
                None => match create_builtin(name, &options) {
                    Some(lookup) => lookup?,
                    None => return Err(ConfigError::UndefinedLookup(name.clone())),
                },
            };

            lookups.insert(name.clone(), lookup);
        }

        let resolver = Self {
            priority,
            lookups,
            allowed,
            default_code,
            separator: options.separator,
        };

        for (name, lookup) in &resolver.lookups {
            resolver.check_uses(name, lookup.as_ref())?;
        }

        Ok(resolver)
    }

    /// Add or replace a named lookup.
    ///
    /// A configuration-phase operation: it requires exclusive access and
    /// re-validates the lookup's statically used locales against the
    /// allow-list. Registering a name absent from the priority list is
    /// allowed but has no effect on resolution.
    pub fn register_lookup(
        &mut self,
        name: &str,
        lookup: Box<dyn Lookup>,
    ) -> Result<(), ConfigError> {
        let name = name.trim().to_ascii_lowercase();

        self.check_uses(&name, lookup.as_ref())?;
        self.lookups.insert(name, lookup);

        Ok(())
    }

    /// Resolve the locale for one request.
    ///
    /// Total: malformed candidates are dropped silently and the absence of
    /// any acceptable candidate yields `None`, never an error. Callers that
    /// must always get a locale should keep a `default` lookup last in the
    /// priority order.
    pub fn resolve(&self, request: &dyn RequestSignals) -> Option<LocaleValue> {
        let mut pending: Vec<Candidate> = Vec::new();
        let mut preference: Option<Candidate> = None;
        let mut result: Option<LocaleValue> = None;

        // Forward pass: pull sources one by one, exiting early on a match.
        'sources: for name in &self.priority {
            let Some(lookup) = self.lookups.get(name) else {
                continue;
            };

            for raw in lookup.lookup(request, &pending) {
                let Some(candidate) = normalize(&raw, name) else {
                    trace!("dropped malformed candidate '{}' from {}", raw, name);
                    continue;
                };

                if !self.is_allowed(&candidate) {
                    trace!(
                        "dropped candidate '{}' from {}: not in allow-list",
                        candidate.code(self.separator),
                        name
                    );
                    continue;
                }

                match self.try_accept(&mut preference, &candidate) {
                    Some(value) => {
                        result = Some(value);
                        break 'sources;
                    }
                    None => pending.push(candidate),
                }
            }
        }

        // Backtracking pass: drop the earliest accumulated candidate,
        // re-derive a fresh language preference from the remainder, repeat.
        while result.is_none() && !pending.is_empty() {
            preference = None;
            pending.remove(0);

            for candidate in &pending {
                if let Some(value) = self.try_accept(&mut preference, candidate) {
                    result = Some(value);
                    break;
                }
            }
        }

        match &result {
            Some(value) => debug!("resolved locale {} from {:?}", value.code, value.source),
            None => debug!("no locale resolved"),
        }

        result
    }

    /// One step of the matching rule shared by both passes.
    ///
    /// A region-qualified candidate is accepted outright when no language
    /// preference is buffered, or when it matches the buffered preference
    /// (merging the two sources when they differ). A bare candidate fills
    /// the preference buffer if it is empty. Returns the accepted value, or
    /// `None` when the candidate only updated state.
    fn try_accept(
        &self,
        preference: &mut Option<Candidate>,
        candidate: &Candidate,
    ) -> Option<LocaleValue> {
        let Some(region) = &candidate.region else {
            if preference.is_none() {
                *preference = Some(candidate.clone());
            }
            return None;
        };

        let source = match preference {
            None => Source::Single(candidate.source.clone()),
            Some(pref) if pref.language == candidate.language => {
                if pref.source == candidate.source {
                    Source::Single(candidate.source.clone())
                } else {
                    Source::Pair(pref.source.clone(), candidate.source.clone())
                }
            }
            Some(_) => return None,
        };

        Some(LocaleValue::new(
            candidate.language.clone(),
            region.clone(),
            source,
            self.separator,
        ))
    }

    /// The allow-list only constrains region-qualified candidates; bare
    /// language preferences are disambiguation hints, not results. The
    /// default locale is always implicitly allowed.
    fn is_allowed(&self, candidate: &Candidate) -> bool {
        if candidate.region.is_none() {
            return true;
        }

        let Some(allowed) = &self.allowed else {
            return true;
        };

        let code = candidate.code(Separator::Hyphen);
        allowed.contains(&code) || code == self.default_code
    }

    /// Verify that every locale the lookup is statically configured to emit
    /// is acceptable under the allow-list.
    fn check_uses(&self, name: &str, lookup: &dyn Lookup) -> Result<(), ConfigError> {
        if self.allowed.is_none() {
            return Ok(());
        }

        for locale in lookup.uses() {
            let Some(candidate) = normalize(&locale, name) else {
                continue;
            };

            if !self.is_allowed(&candidate) {
                return Err(ConfigError::LocaleNotAllowed {
                    locale: candidate.code(Separator::Hyphen),
                    lookup: name.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Canonical hyphenated code of a region-qualified locale string, or `None`
/// when the string is malformed or lacks a region.
fn canonical_code(raw: &str) -> Option<String> {
    let candidate = normalize(raw, "config")?;
    candidate.region.as_ref()?;

    Some(candidate.code(Separator::Hyphen))
}
