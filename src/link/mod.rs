//! Navigational link construction
//!
//! Supports: `self`, `first`, `prev`, `next`, `last`
//!
//! # Overview
//!
//! This module turns a page descriptor and a base URI into the set of
//! navigational hyperlinks describing the page's position within the full
//! result set. Boundary pages drop the relations that do not apply (no `prev`
//! on the first page, no `next` on the last), and every produced href carries
//! literal `page`/`size` query parameters instead of template placeholders.

mod compute;
mod template;
mod types;

pub use compute::compute_links;
pub use template::{PageUriBuilder, PAGE_PARAM, SIZE_PARAM};
pub use types::{Link, LinkRelation, LinkSet};
