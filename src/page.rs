//! Page model
//!
//! A [`Page`] is a bounded, ordered slice of a larger result set plus the
//! positional metadata ([`PageDescriptor`]) that produced it. Pages are built
//! by the caller (typically from a repository query) and handed to the
//! assembler; the assembler never mutates them.

use serde::{Deserialize, Serialize};

/// External page numbering scheme.
///
/// Internally pages are always zero-indexed. Externally visible page numbers
/// (in links and metadata) may start at 0 or 1 depending on this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageNumbering {
    /// External page numbers start at 0 (the default)
    #[default]
    ZeroBased,
    /// External page numbers start at 1
    OneBased,
}

impl PageNumbering {
    /// Convert an internal zero-based index to its external page number
    pub fn to_external(self, internal: u64) -> u64 {
        internal.saturating_add(self.offset())
    }

    /// Convert an external page number back to the internal zero-based index
    pub fn to_internal(self, external: u64) -> u64 {
        external.saturating_sub(self.offset())
    }

    fn offset(self) -> u64 {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }
}

/// Positional metadata of a single page: which page, of what size, out of how
/// many elements in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Zero-based index of the page currently held
    pub index: u64,
    /// Number of elements per page. 0 is only meaningful for an explicitly
    /// empty page.
    pub size: u64,
    /// Total number of elements across all pages
    pub total_elements: u64,
}

impl PageDescriptor {
    /// Create a new page descriptor
    pub fn new(index: u64, size: u64, total_elements: u64) -> Self {
        Self {
            index,
            size,
            total_elements,
        }
    }

    /// Total number of pages.
    ///
    /// An empty result set still counts as one conceptual page, so this never
    /// returns 0.
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 || self.total_elements == 0 {
            1
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    /// Whether the index points beyond the last page.
    ///
    /// Out-of-range descriptors are tolerated and presented with last-page
    /// link semantics rather than rejected.
    pub fn is_out_of_range(&self) -> bool {
        self.index >= self.total_pages()
    }
}

/// A single page of content plus its descriptor.
///
/// Content order is preserved end to end through assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The elements on this page, in result-set order
    pub content: Vec<T>,
    /// Positional metadata for this page
    pub descriptor: PageDescriptor,
}

impl<T> Page<T> {
    /// Create a page from its content and descriptor
    pub fn new(content: Vec<T>, descriptor: PageDescriptor) -> Self {
        Self {
            content,
            descriptor,
        }
    }

    /// Create a page with no content
    pub fn empty(descriptor: PageDescriptor) -> Self {
        Self {
            content: Vec::new(),
            descriptor,
        }
    }

    /// Number of elements on this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether this page holds no elements
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
