//! Access gating, completion targets and current-page derivation.

use crate::page::{PageId, PageSequence};
use crate::unlocked::UnlockedPages;

/// Outcome of the access check for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The page may be shown
    Granted,

    /// The page is locked; the browser must leave for `redirect`
    Denied {
        /// The page that was refused
        page: PageId,
        /// Link target of the first page
        redirect: String,
    },
}

impl AccessDecision {
    /// Whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}

/// Result of completing the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The following page, now unlocked, and its link target
    Next {
        /// Identifier of the unlocked page
        page: PageId,
        /// Navigation target for the caller to follow
        target: String,
    },

    /// The current page is last (or outside the sequence); nothing changed
    NoNextPage,
}

impl Completion {
    /// Navigation target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Completion::Next { target, .. } => Some(target),
            Completion::NoNextPage => None,
        }
    }
}

/// Derive the page identifier from a location pathname.
///
/// Only the last path segment counts. An empty segment (root path) maps
/// to `first`; a trailing `suffix` is stripped. A suffix in the middle of
/// the name is kept, so `a.html.bak` stays `a.html.bak`.
pub fn page_from_path(path: &str, first: &PageId, suffix: &str) -> PageId {
    let file = path.rsplit('/').next().unwrap_or("");
    let name = if suffix.is_empty() {
        file
    } else {
        file.strip_suffix(suffix).unwrap_or(file)
    };
    if name.is_empty() {
        first.clone()
    } else {
        PageId::new(name)
    }
}

/// The sole gating rule: the first page is always open, any other page
/// only when it is a member of the unlocked set.
pub fn decide_access(
    sequence: &PageSequence,
    unlocked: &UnlockedPages,
    current: &PageId,
    suffix: &str,
) -> AccessDecision {
    if current == sequence.first() || unlocked.contains(current) {
        AccessDecision::Granted
    } else {
        AccessDecision::Denied {
            page: current.clone(),
            redirect: sequence.first().href(suffix),
        }
    }
}

/// The page that completing `current` unlocks, with its link target.
pub fn next_target(sequence: &PageSequence, current: &PageId, suffix: &str) -> Completion {
    match sequence.next_after(current) {
        Some(next) => Completion::Next {
            page: next.clone(),
            target: next.href(suffix),
        },
        None => Completion::NoNextPage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> PageSequence {
        PageSequence::new(["index", "timeline", "photos"]).unwrap()
    }

    #[test]
    fn test_page_from_path() {
        let first = PageId::from("index");
        assert_eq!(page_from_path("", &first, ".html"), "index");
        assert_eq!(page_from_path("/", &first, ".html"), "index");
        assert_eq!(page_from_path("/index.html", &first, ".html"), "index");
        assert_eq!(page_from_path("/site/timeline.html", &first, ".html"), "timeline");
        assert_eq!(page_from_path("love-cycle.html", &first, ".html"), "love-cycle");
        assert_eq!(page_from_path("/site/photos", &first, ".html"), "photos");
        assert_eq!(page_from_path("/site/", &first, ".html"), "index");
        assert_eq!(page_from_path("/a.html.bak", &first, ".html"), "a.html.bak");
    }

    #[test]
    fn test_first_page_always_granted() {
        let seq = sequence();
        let unlocked = UnlockedPages::default();
        assert!(decide_access(&seq, &unlocked, &"index".into(), ".html").is_granted());
    }

    #[test]
    fn test_locked_page_denied_with_home_redirect() {
        let seq = sequence();
        let unlocked: UnlockedPages = ["index", "timeline"].into_iter().collect();

        assert_eq!(
            decide_access(&seq, &unlocked, &"timeline".into(), ".html"),
            AccessDecision::Granted
        );
        assert_eq!(
            decide_access(&seq, &unlocked, &"photos".into(), ".html"),
            AccessDecision::Denied {
                page: "photos".into(),
                redirect: "index.html".to_string()
            }
        );
    }

    #[test]
    fn test_next_target() {
        let seq = sequence();
        let done = next_target(&seq, &"index".into(), ".html");
        assert_eq!(done.target(), Some("timeline.html"));
        assert_eq!(next_target(&seq, &"photos".into(), ".html"), Completion::NoNextPage);
        assert_eq!(next_target(&seq, &"nowhere".into(), ".html"), Completion::NoNextPage);
    }
}
