//! Page identifiers, display metadata and the fixed progression order.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Short string key naming one page in the progression (e.g. `"timeline"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Create a page identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link target for this page: the identifier followed by `suffix`.
    pub fn href(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for PageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PageId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Presentation info for a page's navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Icon shown before the label
    pub icon: String,

    /// Human-readable label
    pub label: String,
}

impl PageInfo {
    /// Icon used for pages missing from the metadata table.
    pub const FALLBACK_ICON: &'static str = "📄";

    /// Create page info.
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }

    /// Generic info for a page with no metadata entry: the raw id as label.
    pub fn fallback(id: &PageId) -> Self {
        Self::new(Self::FALLBACK_ICON, id.as_str())
    }
}

/// Errors building a [`PageSequence`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The sequence has no pages
    #[error("page sequence is empty")]
    Empty,

    /// The same identifier appears twice
    #[error("duplicate page in sequence: {0}")]
    Duplicate(PageId),

    /// An identifier is blank
    #[error("page identifier must not be blank")]
    BlankId,
}

/// The canonical, fixed progression order plus display metadata.
///
/// Immutable once built. The first page is the home page: it is always
/// accessible and is the redirect target on denial or reset.
#[derive(Debug, Clone)]
pub struct PageSequence {
    pages: Vec<PageId>,
    info: HashMap<PageId, PageInfo>,
}

impl PageSequence {
    /// Build a sequence from ordered identifiers.
    pub fn new<I, P>(pages: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PageId>,
    {
        let pages: Vec<PageId> = pages.into_iter().map(Into::into).collect();
        if pages.is_empty() {
            return Err(SequenceError::Empty);
        }
        for (i, page) in pages.iter().enumerate() {
            if page.as_str().trim().is_empty() {
                return Err(SequenceError::BlankId);
            }
            if pages[..i].contains(page) {
                return Err(SequenceError::Duplicate(page.clone()));
            }
        }
        Ok(Self {
            pages,
            info: HashMap::new(),
        })
    }

    /// Attach display metadata for a page.
    pub fn with_info(mut self, id: impl Into<PageId>, info: PageInfo) -> Self {
        self.info.insert(id.into(), info);
        self
    }

    /// The first (home) page.
    pub fn first(&self) -> &PageId {
        // Non-empty is enforced in `new`.
        &self.pages[0]
    }

    /// All pages in progression order.
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; sequences are never empty.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Whether `id` is part of the sequence.
    pub fn contains(&self, id: &PageId) -> bool {
        self.pages.contains(id)
    }

    /// Zero-based position of `id` in the sequence.
    pub fn position(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| p == id)
    }

    /// Page immediately following `id`.
    ///
    /// `None` for the last page and for identifiers outside the sequence.
    pub fn next_after(&self, id: &PageId) -> Option<&PageId> {
        let pos = self.position(id)?;
        self.pages.get(pos + 1)
    }

    /// Whether `id` is the final page.
    pub fn is_last(&self, id: &PageId) -> bool {
        self.pages.last() == Some(id)
    }

    /// Display info for `id`, falling back to generic info when unmapped.
    pub fn info(&self, id: &PageId) -> PageInfo {
        self.info
            .get(id)
            .cloned()
            .unwrap_or_else(|| PageInfo::fallback(id))
    }
}
