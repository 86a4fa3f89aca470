//! The persisted set of unlocked pages.

use serde::{Deserialize, Serialize};
use crate::page::PageId;

/// Every page the user has earned access to.
///
/// Kept as an ordered list so the persisted form is a plain JSON array of
/// identifiers in unlock order. Order carries no meaning for access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockedPages(Vec<PageId>);

impl UnlockedPages {
    /// The starting state: only the first page.
    pub fn initial(first: &PageId) -> Self {
        Self(vec![first.clone()])
    }

    /// Decode the persisted JSON array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether `id` is unlocked.
    pub fn contains(&self, id: &PageId) -> bool {
        self.0.contains(id)
    }

    /// Add `id` if absent. Returns whether the set grew.
    pub fn insert(&mut self, id: PageId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Make sure `first` is a member, placing it at the front if it was
    /// missing. Returns whether the set changed.
    pub fn ensure(&mut self, first: &PageId) -> bool {
        if self.contains(first) {
            return false;
        }
        self.0.insert(0, first.clone());
        true
    }

    /// Identifiers in unlock order.
    pub fn iter(&self) -> impl Iterator<Item = &PageId> {
        self.0.iter()
    }

    /// Number of stored identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<PageId>> FromIterator<P> for UnlockedPages {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a UnlockedPages {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut unlocked = UnlockedPages::initial(&"index".into());
        assert!(unlocked.insert("timeline".into()));
        assert!(!unlocked.insert("timeline".into()));
        assert_eq!(unlocked.len(), 2);
        assert!(unlocked.contains(&"timeline".into()));
    }

    #[test]
    fn test_ensure_adds_first_page_once() {
        let mut unlocked = UnlockedPages::from_json(r#"["timeline"]"#).unwrap();
        assert!(unlocked.ensure(&"index".into()));
        assert!(!unlocked.ensure(&"index".into()));
        assert_eq!(unlocked.to_json().unwrap(), r#"["index","timeline"]"#);
    }

    #[test]
    fn test_json_layout() {
        let unlocked: UnlockedPages = ["index", "timeline"].into_iter().collect();
        assert_eq!(unlocked.to_json().unwrap(), r#"["index","timeline"]"#);

        let decoded = UnlockedPages::from_json(r#"["index","photos"]"#).unwrap();
        assert!(decoded.contains(&"photos".into()));
        assert!(!decoded.contains(&"timeline".into()));
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(UnlockedPages::from_json(r#"{"index":true}"#).is_err());
        assert!(UnlockedPages::from_json("not json").is_err());
        assert!(UnlockedPages::from_json("[1,2]").is_err());
    }
}
