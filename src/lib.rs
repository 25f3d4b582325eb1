//! Resolve a request's locale from prioritized lookup sources.
//!
//! The resolver pulls raw locale candidates from pluggable, named lookup
//! sources (cookie, query string, hostname map, Accept-Language list,
//! language map, static default) in a configured priority order, normalizes
//! and validates them, and disambiguates between bare language preferences
//! and fully region-qualified locales — including a backtracking re-scan
//! when the best available match cannot be satisfied.
//!
//! # Architecture
//!
//! - `config`: options, priority order, allow-list, and construction errors
//! - `locale`: candidate and result types
//! - `normalize`: raw string to validated candidate
//! - `lookup`: the `Lookup` trait and the six built-in sources
//! - `resolver`: the forward/backtracking resolution engine
//! - `middleware`: tower layer and extractor for axum
//!
//! # Example
//!
//! ```rust,ignore
//! use request_locale::{LocaleLayer, LocaleResolver, Options, ResolvedLocale};
//!
//! let resolver = LocaleResolver::new(Options::default())?;
//!
//! let app = axum::Router::new()
//!     .route("/", axum::routing::get(|locale: ResolvedLocale| async move {
//!         match locale.get() {
//!             Some(value) => format!("locale: {}", value.code),
//!             None => "no locale".to_string(),
//!         }
//!     }))
//!     .layer(LocaleLayer::new(resolver));
//! ```
//!
//! All configuration problems (unknown lookup names, locales used but
//! missing from the allow-list, malformed option values) fail resolver
//! construction; at request time resolution is total and yields
//! `Option<LocaleValue>`.

pub mod config;
mod http;
mod locale;
pub mod lookup;
mod middleware;
mod normalize;
mod request;
mod resolver;

pub use config::{ConfigError, CookieOptions, Options, Priority, QueryOptions, Separator};
pub use locale::{Candidate, LocaleValue, Source};
pub use lookup::Lookup;
pub use middleware::{LocaleLayer, LocaleService, ResolvedLocale};
pub use normalize::normalize;
pub use request::{RequestParts, RequestSignals};
pub use resolver::LocaleResolver;
