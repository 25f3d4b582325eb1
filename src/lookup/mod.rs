//! Lookup sources.
//!
//! A lookup is a named, pluggable producer of raw locale candidate strings.
//! Built-ins cover the common signal channels (cookie, query string,
//! hostname, Accept-Language, language map, static default); custom lookups
//! implement the same [`Lookup`] trait and are registered by name.
//!
//! Lookups only emit raw strings. Normalization, allow-list filtering, and
//! disambiguation all happen in the resolver, so a lookup never has to care
//! about casing, separators, or validity.

mod accept_language;
mod cookie;
mod default;
mod hostname;
mod map;
mod query;

pub use accept_language::AcceptLanguageLookup;
pub use cookie::CookieLookup;
pub use default::DefaultLookup;
pub use hostname::HostnameLookup;
pub use map::MapLookup;
pub use query::QueryLookup;

use crate::config::{ConfigError, Options};
use crate::locale::Candidate;
use crate::request::RequestSignals;

/// A named source of raw locale candidate strings.
///
/// `lookup` must be a pure read: no mutation of the request or of any shared
/// state. It returns zero or more raw strings, most preferred first; an
/// empty vector means the source has no opinion for this request.
///
/// `resolved` is the list of candidates accumulated from higher-priority
/// sources in the same resolution. Most lookups ignore it; the `map` lookup
/// uses it to complete bare-language preferences into full locales.
pub trait Lookup: Send + Sync {
    fn lookup(&self, request: &dyn RequestSignals, resolved: &[Candidate]) -> Vec<String>;

    /// Locale codes this lookup is statically configured to emit.
    ///
    /// Used at construction time to verify that every such locale is a
    /// member of the allow-list, when one is configured.
    fn uses(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Instantiate a built-in lookup by name.
///
/// Returns `None` for names that are not built-ins (the resolver then
/// consults the custom lookup map), and `Some(Err(..))` when the built-in
/// exists but its options are invalid.
pub(crate) fn create_builtin(
    name: &str,
    options: &Options,
) -> Option<Result<Box<dyn Lookup>, ConfigError>> {
    let lookup: Result<Box<dyn Lookup>, ConfigError> = match name {
        "cookie" => CookieLookup::new(&options.cookie.name).map(|l| Box::new(l) as Box<dyn Lookup>),
        "query" => QueryLookup::new(&options.query.name).map(|l| Box::new(l) as Box<dyn Lookup>),
        "hostname" => Ok(Box::new(HostnameLookup::new(options.hostname.clone()))),
        "accept-language" => Ok(Box::new(AcceptLanguageLookup)),
        "map" => Ok(Box::new(MapLookup::new(options.map.clone()))),
        "default" => {
            DefaultLookup::new(&options.default_locale).map(|l| Box::new(l) as Box<dyn Lookup>)
        }
        _ => return None,
    };

    Some(lookup)
}
