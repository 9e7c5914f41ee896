//! Ambient request context
//!
//! Link generation needs a base URI to root the produced hyperlinks. When the
//! assembler has no explicit base configured, it asks a [`RequestContext`] for
//! the absolute URI of the request currently being served. Web-framework
//! adapters implement the trait on their side; [`FixedRequest`] covers
//! non-web callers and tests.

use crate::error::{Error, Result};
use url::Url;

/// Supplies the URI of the request currently being served.
pub trait RequestContext: Send + Sync {
    /// Absolute URI of the current request, including its query string.
    fn request_uri(&self) -> Url;
}

/// A context that always reports the same request URI.
#[derive(Debug, Clone)]
pub struct FixedRequest {
    uri: Url,
}

impl FixedRequest {
    /// Create a context from an already-parsed URI
    pub fn new(uri: Url) -> Self {
        Self { uri }
    }

    /// Parse an absolute URI string into a context
    pub fn parse(uri: &str) -> Result<Self> {
        let parsed = Url::parse(uri).map_err(|source| Error::invalid_base_uri(uri, source))?;
        Ok(Self::new(parsed))
    }
}

impl RequestContext for FixedRequest {
    fn request_uri(&self) -> Url {
        self.uri.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_request_roundtrip() {
        let context = FixedRequest::parse("http://localhost/people?sort=name").unwrap();
        assert_eq!(
            context.request_uri().as_str(),
            "http://localhost/people?sort=name"
        );
    }

    #[test]
    fn test_fixed_request_rejects_relative_uri() {
        let result = FixedRequest::parse("/people");
        assert!(matches!(result, Err(Error::InvalidBaseUri { .. })));
    }
}
