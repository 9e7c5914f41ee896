//! Link types
//!
//! Defines the link relations, the hyperlink value type, and the per-page
//! link collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The navigational roles a pagination link can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    /// The page itself
    SelfRel,
    /// The first page of the result set
    First,
    /// The page preceding the current one
    Prev,
    /// The page following the current one
    Next,
    /// The last page of the result set
    Last,
}

impl LinkRelation {
    /// The relation name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelfRel => "self",
            Self::First => "first",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LinkRelation> for String {
    fn from(rel: LinkRelation) -> Self {
        rel.as_str().to_string()
    }
}

/// A single hyperlink: a relation name plus a concrete href.
///
/// The relation is kept as a string so callers can supply links under custom
/// relations; links produced by this crate use the [`LinkRelation`] names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The role this link plays relative to the current page
    pub rel: String,
    /// Concrete URI, never containing template placeholders
    pub href: String,
}

impl Link {
    /// Create a new link
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// The same href re-keyed under another relation
    pub fn with_rel(&self, rel: impl Into<String>) -> Self {
        Self::new(rel, self.href.clone())
    }
}

/// The set of navigational links computed for one page.
///
/// Holds at most one link per relation, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSet {
    links: Vec<Link>,
}

impl LinkSet {
    /// Create an empty link set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a link for `rel`, replacing any existing link with the same
    /// relation
    pub fn insert(&mut self, rel: LinkRelation, href: impl Into<String>) {
        self.insert_link(Link::new(rel, href));
    }

    /// Insert a pre-built link, replacing any existing link with the same
    /// relation
    pub fn insert_link(&mut self, link: Link) {
        self.links.retain(|existing| existing.rel != link.rel);
        self.links.push(link);
    }

    /// The link for `rel`, if present
    pub fn get(&self, rel: LinkRelation) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel.as_str())
    }

    /// Whether a link for `rel` is present
    pub fn has(&self, rel: LinkRelation) -> bool {
        self.get(rel).is_some()
    }

    /// The href for `rel`, if present
    pub fn href(&self, rel: LinkRelation) -> Option<&str> {
        self.get(rel).map(|link| link.href.as_str())
    }

    /// Iterate over the links in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Number of links in the set
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the set holds no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl IntoIterator for LinkSet {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}
