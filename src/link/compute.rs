//! Link-set computation
//!
//! Decides which of the navigational relations apply to a page and produces
//! the concrete URI for each one.

use super::template::PageUriBuilder;
use super::types::{Link, LinkRelation, LinkSet};
use crate::page::PageDescriptor;

/// Compute the navigational links for the page described by `descriptor`.
///
/// Boundary rules:
/// - `self` is always present.
/// - `prev` is present iff the page is not the first one.
/// - `next` is present iff a further page exists; an out-of-range index is
///   presented with last-page semantics and never yields `next`.
/// - `first`/`last` are present iff more than one page exists, or
///   `force_first_and_last` is set. `last` points at the final page, which
///   for an empty result set is page 0.
///
/// When `self_override` is given, its href verbatim becomes the `self` entry
/// (re-keyed to the `self` relation) while every other relation is still
/// derived through `builder`.
pub fn compute_links(
    descriptor: &PageDescriptor,
    builder: &PageUriBuilder,
    force_first_and_last: bool,
    self_override: Option<&Link>,
) -> LinkSet {
    let total_pages = descriptor.total_pages();
    let size = descriptor.size;
    let mut links = LinkSet::new();

    if total_pages > 1 || force_first_and_last {
        links.insert(LinkRelation::First, builder.page_uri(0, size));
    }

    if descriptor.index > 0 {
        links.insert(
            LinkRelation::Prev,
            builder.page_uri(descriptor.index - 1, size),
        );
    }

    match self_override {
        Some(link) => links.insert_link(link.with_rel(LinkRelation::SelfRel)),
        None => links.insert(
            LinkRelation::SelfRel,
            builder.page_uri(descriptor.index, size),
        ),
    }

    let next_index = descriptor.index.saturating_add(1);
    if next_index < total_pages {
        links.insert(LinkRelation::Next, builder.page_uri(next_index, size));
    }

    if total_pages > 1 || force_first_and_last {
        links.insert(LinkRelation::Last, builder.page_uri(total_pages - 1, size));
    }

    tracing::debug!(
        page = descriptor.index,
        total_pages,
        relations = links.len(),
        "computed pagination links"
    );

    links
}
