//! # pagelink
//!
//! Pagination link assembly for hypermedia-style APIs.
//!
//! Given a single page of a larger result set plus the pagination parameters
//! that produced it, pagelink deterministically builds the navigational
//! hyperlinks (`first`, `prev`, `self`, `next`, `last`) describing that
//! page's position, and wraps the page's content into a transport-ready
//! paginated representation.
//!
//! ## Features
//!
//! - **Boundary-aware links**: no `prev` on the first page, no `next` on the
//!   last; `first`/`last` appear for multi-page results or when forced
//! - **Concrete URIs**: literal `page`/`size` query parameters, other request
//!   parameters preserved, never a template placeholder
//! - **Zero- or one-indexed** external page numbering
//! - **Pluggable conversion**: convert elements and wrap the final
//!   representation through caller-supplied closures
//! - **Empty-page placeholders**: empty collections still declare their
//!   element type downstream
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use pagelink::{FixedRequest, Page, PageDescriptor, PagedAssembler};
//!
//! let context = FixedRequest::parse("http://localhost/people?sort=name")?;
//! let assembler = PagedAssembler::new(Arc::new(context));
//!
//! // The second of three pages of size 1.
//! let page = Page::new(vec!["Dave"], PageDescriptor::new(1, 1, 3));
//! let assembled = assembler.assemble(page);
//!
//! let next = assembled.links.href(pagelink::LinkRelation::Next).unwrap();
//! assert_eq!(next, "http://localhost/people?sort=name&page=2&size=1");
//! # Ok::<(), pagelink::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller ──▶ PagedAssembler ──▶ compute_links ──▶ PageUriBuilder
//!                 │                                (page/size substitution)
//!                 └──▶ AssembledPage { content, metadata, links }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Ambient request context collaborator
pub mod context;

/// Page model and numbering schemes
pub mod page;

/// Navigational link construction
pub mod link;

/// Paged resource assembly
pub mod assembler;

// ============================================================================
// Re-exports
// ============================================================================

pub use assembler::{
    AssembledPage, EmbeddedTypePlaceholder, LinkOptions, PageMetadata, PagedAssembler,
};
pub use context::{FixedRequest, RequestContext};
pub use error::{Error, Result};
pub use link::{Link, LinkRelation, LinkSet, PageUriBuilder};
pub use page::{Page, PageDescriptor, PageNumbering};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
