//! Assembler configuration and wire types

use crate::link::LinkSet;
use crate::page::{PageDescriptor, PageNumbering};
use serde::{Deserialize, Serialize};
use url::Url;

/// Link-generation settings shared by all assembly calls.
///
/// Held by the assembler and read during every call; mutate through the
/// assembler's setters before issuing calls, not concurrently with them.
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    /// External page numbering scheme
    pub numbering: PageNumbering,
    /// Explicit base URI; when absent the ambient request URI is used
    pub base_uri: Option<Url>,
    /// Emit `first`/`last` even for single-page results
    pub force_first_and_last: bool,
}

/// Positional metadata of an assembled page.
///
/// `number` is already converted to the external numbering scheme, so a
/// one-based assembler reports internal page 1 as number 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Number of elements per page
    pub size: u64,
    /// External page number of this page
    pub number: u64,
    /// Total number of elements across all pages
    pub total_elements: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl PageMetadata {
    pub(crate) fn from_descriptor(descriptor: &PageDescriptor, numbering: PageNumbering) -> Self {
        Self {
            size: descriptor.size,
            number: numbering.to_external(descriptor.index),
            total_elements: descriptor.total_elements,
            total_pages: descriptor.total_pages(),
        }
    }
}

/// A transport-ready page: converted content, positional metadata and
/// navigational links.
///
/// Owned by the caller after assembly; the assembler keeps no reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledPage<T> {
    /// Converted elements, in the source page's order
    pub content: Vec<T>,
    /// Positional metadata
    pub metadata: PageMetadata,
    /// Navigational links for this page
    pub links: LinkSet,
}

impl<T> AssembledPage<T> {
    /// Create an assembled page from its parts
    pub fn new(content: Vec<T>, metadata: PageMetadata, links: LinkSet) -> Self {
        Self {
            content,
            metadata,
            links,
        }
    }
}

/// Synthetic content entry of an empty assembled page.
///
/// Carries the element type the collection would hold, so downstream
/// serialization can still declare the type of an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedTypePlaceholder {
    /// Name of the element type of the empty collection
    pub element_type: String,
}

impl EmbeddedTypePlaceholder {
    /// Create a placeholder for the given element type
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
        }
    }
}
