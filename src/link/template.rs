//! Concrete page URI construction
//!
//! Builds fully-expanded URIs for individual pages. Every produced href
//! carries literal `page` and `size` query parameters; callers never observe
//! `{`/`}` template syntax in a link.

use crate::error::{Error, Result};
use crate::page::PageNumbering;
use url::Url;

/// Query parameter carrying the external page number.
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size.
pub const SIZE_PARAM: &str = "size";

/// Produces concrete page URIs rooted at a base.
///
/// The base is either configured explicitly or derived from the URI of the
/// request being served. Query parameters other than `page`/`size` on the
/// base are preserved in every produced URI; `page`/`size` themselves are
/// always replaced with the requested coordinates.
#[derive(Debug, Clone)]
pub struct PageUriBuilder {
    base: Url,
    numbering: PageNumbering,
}

impl PageUriBuilder {
    /// Create a builder from an already-parsed absolute base URI
    pub fn new(base: Url, numbering: PageNumbering) -> Self {
        Self { base, numbering }
    }

    /// Parse an absolute base URI from a string
    pub fn parse(base: &str, numbering: PageNumbering) -> Result<Self> {
        let parsed = Url::parse(base).map_err(|source| Error::invalid_base_uri(base, source))?;
        Ok(Self::new(parsed, numbering))
    }

    /// Create a builder rooted at the URI of the request being served
    pub fn from_request(uri: &Url, numbering: PageNumbering) -> Self {
        Self::new(uri.clone(), numbering)
    }

    /// The base URI this builder roots links at
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Concrete URI for the page at `index` (internal, zero-based) with
    /// `size` elements.
    ///
    /// Existing `page`/`size` parameters on the base are dropped so the
    /// produced URI carries exactly one of each; all other parameters are
    /// kept in their original order.
    pub fn page_uri(&self, index: u64, size: u64) -> Url {
        let retained: Vec<(String, String)> = self
            .base
            .query_pairs()
            .filter(|(key, _)| key != PAGE_PARAM && key != SIZE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut uri = self.base.clone();
        uri.set_query(None);
        {
            let mut pairs = uri.query_pairs_mut();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(PAGE_PARAM, &self.numbering.to_external(index).to_string());
            pairs.append_pair(SIZE_PARAM, &size.to_string());
        }
        uri
    }
}
