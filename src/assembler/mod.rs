//! Paged resource assembly
//!
//! # Overview
//!
//! [`PagedAssembler`] is the top-level entry point: it takes a page of domain
//! elements, optionally converts each element through a caller-supplied
//! closure, computes the navigational link set for the page's position, and
//! returns the transport-ready [`AssembledPage`]. Configuration (numbering
//! scheme, explicit base URI, forced `first`/`last`) is set up front and read
//! by every call; freeze it before sharing the assembler across threads.

mod types;

pub use types::{AssembledPage, EmbeddedTypePlaceholder, LinkOptions, PageMetadata};


use crate::context::RequestContext;
use crate::error::{Error, Result};
use crate::link::{compute_links, Link, LinkSet, PageUriBuilder};
use crate::page::{Page, PageNumbering};
use std::sync::Arc;
use url::Url;

/// Turns pages of domain elements into transport-ready paginated resources.
pub struct PagedAssembler {
    context: Arc<dyn RequestContext>,
    options: LinkOptions,
}

impl PagedAssembler {
    /// Create an assembler that roots links at the ambient request URI
    pub fn new(context: Arc<dyn RequestContext>) -> Self {
        Self {
            context,
            options: LinkOptions::default(),
        }
    }

    /// Create an assembler with an explicit base URI
    pub fn with_base_uri(context: Arc<dyn RequestContext>, base_uri: Url) -> Self {
        Self {
            context,
            options: LinkOptions {
                base_uri: Some(base_uri),
                ..LinkOptions::default()
            },
        }
    }

    /// The current link-generation settings
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Emit `first`/`last` links even for single-page results.
    ///
    /// Takes effect on the next assembly call.
    pub fn set_force_first_and_last(&mut self, force: bool) {
        self.options.force_first_and_last = force;
    }

    /// Switch the external page numbering scheme
    pub fn set_numbering(&mut self, numbering: PageNumbering) {
        self.options.numbering = numbering;
    }

    /// Configure an explicit base URI, parsed eagerly so a bad value fails
    /// here instead of during assembly
    pub fn set_base_uri(&mut self, base_uri: &str) -> Result<()> {
        let parsed =
            Url::parse(base_uri).map_err(|source| Error::invalid_base_uri(base_uri, source))?;
        self.options.base_uri = Some(parsed);
        Ok(())
    }

    /// Drop the explicit base URI and fall back to the ambient request URI
    pub fn clear_base_uri(&mut self) {
        self.options.base_uri = None;
    }

    /// Assemble a page, forwarding its elements unchanged
    pub fn assemble<T>(&self, page: Page<T>) -> AssembledPage<T> {
        self.assemble_with(page, |element| element)
    }

    /// Assemble a page, converting every element through `convert` in the
    /// page's original order
    pub fn assemble_with<T, R>(
        &self,
        page: Page<T>,
        convert: impl FnMut(T) -> R,
    ) -> AssembledPage<R> {
        let builder = self.uri_builder();
        self.assemble_inner(page, convert, &builder, None, AssembledPage::new)
    }

    /// Assemble a page rooted at a caller-supplied link, forwarding its
    /// elements unchanged.
    ///
    /// The link's href verbatim becomes the `self` entry, and every other
    /// relation is derived from that href with `page`/`size` substituted.
    /// Fails if the href is not an absolute URI.
    pub fn assemble_with_link<T>(&self, page: Page<T>, link: &Link) -> Result<AssembledPage<T>> {
        self.assemble_converted_with_link(page, |element| element, link)
    }

    /// Assemble a page rooted at a caller-supplied link, converting every
    /// element through `convert` in the page's original order.
    ///
    /// Combines the element conversion of [`assemble_with`](Self::assemble_with)
    /// with the explicit-link handling of
    /// [`assemble_with_link`](Self::assemble_with_link).
    pub fn assemble_converted_with_link<T, R>(
        &self,
        page: Page<T>,
        convert: impl FnMut(T) -> R,
        link: &Link,
    ) -> Result<AssembledPage<R>> {
        let builder = PageUriBuilder::parse(&link.href, self.options.numbering)?;
        Ok(self.assemble_inner(page, convert, &builder, Some(link), AssembledPage::new))
    }

    /// Assemble a page into a caller-chosen representation.
    ///
    /// `wrap` replaces the default [`AssembledPage`] construction and receives
    /// the converted content, the page metadata and the computed links.
    pub fn assemble_wrapped<T, R, W>(
        &self,
        page: Page<T>,
        convert: impl FnMut(T) -> R,
        wrap: impl FnOnce(Vec<R>, PageMetadata, LinkSet) -> W,
    ) -> W {
        let builder = self.uri_builder();
        self.assemble_inner(page, convert, &builder, None, wrap)
    }

    /// Assemble an empty page around a type placeholder.
    ///
    /// The result carries exactly one synthetic [`EmbeddedTypePlaceholder`]
    /// entry naming `element_type`, so downstream serialization can declare
    /// the element type of the empty collection. Fails if the page has
    /// content or `element_type` is blank.
    pub fn assemble_empty<T>(
        &self,
        page: &Page<T>,
        element_type: &str,
    ) -> Result<AssembledPage<EmbeddedTypePlaceholder>> {
        if !page.is_empty() {
            return Err(Error::invalid_argument(
                "expected an empty page, but it has content",
            ));
        }
        if element_type.trim().is_empty() {
            return Err(Error::invalid_argument("element type must not be blank"));
        }

        let builder = self.uri_builder();
        let links = compute_links(
            &page.descriptor,
            &builder,
            self.options.force_first_and_last,
            None,
        );
        let metadata = PageMetadata::from_descriptor(&page.descriptor, self.options.numbering);
        let placeholder = EmbeddedTypePlaceholder::new(element_type);

        Ok(AssembledPage::new(vec![placeholder], metadata, links))
    }

    fn uri_builder(&self) -> PageUriBuilder {
        match &self.options.base_uri {
            Some(base) => PageUriBuilder::new(base.clone(), self.options.numbering),
            None => {
                PageUriBuilder::from_request(&self.context.request_uri(), self.options.numbering)
            }
        }
    }

    fn assemble_inner<T, R, W>(
        &self,
        page: Page<T>,
        convert: impl FnMut(T) -> R,
        builder: &PageUriBuilder,
        self_override: Option<&Link>,
        wrap: impl FnOnce(Vec<R>, PageMetadata, LinkSet) -> W,
    ) -> W {
        let descriptor = page.descriptor;
        let content: Vec<R> = page.content.into_iter().map(convert).collect();
        let links = compute_links(
            &descriptor,
            builder,
            self.options.force_first_and_last,
            self_override,
        );
        let metadata = PageMetadata::from_descriptor(&descriptor, self.options.numbering);

        tracing::trace!(
            elements = content.len(),
            number = metadata.number,
            "assembled page"
        );

        wrap(content, metadata, links)
    }
}
