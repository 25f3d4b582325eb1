//! Tower middleware for axum.
//!
//! [`LocaleLayer`] resolves the locale synchronously from the request's
//! headers and URI before the inner service runs, and attaches the outcome
//! as a typed [`ResolvedLocale`] request extension. Resolution never blocks
//! the pipeline: the inner service is called whether or not a locale was
//! found.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::Request;
use tower::{Layer, Service};

use crate::http::HttpSignals;
use crate::locale::LocaleValue;
use crate::resolver::LocaleResolver;

/// The resolution outcome attached to every request passing through
/// [`LocaleLayer`].
///
/// Also an axum extractor: a handler taking `ResolvedLocale` receives
/// `ResolvedLocale(None)` when the layer found no locale (or was not
/// installed) rather than rejecting the request.
#[derive(Debug, Clone)]
pub struct ResolvedLocale(pub Option<LocaleValue>);

impl ResolvedLocale {
    pub fn get(&self) -> Option<&LocaleValue> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResolvedLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<ResolvedLocale>()
            .cloned()
            .unwrap_or(ResolvedLocale(None)))
    }
}

/// Layer that wraps a service with locale resolution.
#[derive(Clone)]
pub struct LocaleLayer {
    resolver: Arc<LocaleResolver>,
}

impl LocaleLayer {
    pub fn new(resolver: LocaleResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Wrap an already shared resolver, e.g. one also used outside the
    /// middleware.
    pub fn from_shared(resolver: Arc<LocaleResolver>) -> Self {
        Self { resolver }
    }
}

impl<S> Layer<S> for LocaleLayer {
    type Service = LocaleService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LocaleService {
            inner,
            resolver: Arc::clone(&self.resolver),
        }
    }
}

/// Service produced by [`LocaleLayer`].
#[derive(Clone)]
pub struct LocaleService<S> {
    inner: S,
    resolver: Arc<LocaleResolver>,
}

impl<S, B> Service<Request<B>> for LocaleService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let resolved = {
            let signals = HttpSignals::new(request.headers(), request.uri());
            self.resolver.resolve(&signals)
        };

        request.extensions_mut().insert(ResolvedLocale(resolved));
        self.inner.call(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;

    #[test]
    fn test_resolved_locale_get() {
        assert!(ResolvedLocale(None).get().is_none());
    }

    #[test]
    fn test_layer_is_cheap_to_clone() {
        let layer = LocaleLayer::new(LocaleResolver::new(Options::default()).expect("config"));
        let cloned = layer.clone();

        assert!(Arc::ptr_eq(&layer.resolver, &cloned.resolver));
    }
}
