//! Navigation entries built from the unlocked set.

use serde::{Deserialize, Serialize};
use crate::page::{PageId, PageSequence};
use crate::unlocked::UnlockedPages;

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Page the link points at
    pub page: PageId,

    /// Link target (`<pageId><suffix>`)
    pub href: String,

    /// Icon from the metadata table
    pub icon: String,

    /// Label from the metadata table
    pub label: String,

    /// Whether this is the page being displayed
    pub active: bool,
}

impl NavEntry {
    /// Link text: icon, a space, then the label.
    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// Entries for every unlocked page, in sequence order.
///
/// Locked pages are omitted entirely.
pub fn navigation_entries(
    sequence: &PageSequence,
    unlocked: &UnlockedPages,
    current: &PageId,
    suffix: &str,
) -> Vec<NavEntry> {
    sequence
        .pages()
        .iter()
        .filter(|page| unlocked.contains(page))
        .map(|page| {
            let info = sequence.info(page);
            NavEntry {
                page: page.clone(),
                href: page.href(suffix),
                icon: info.icon,
                label: info.label,
                active: page == current,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageInfo;

    fn sequence() -> PageSequence {
        PageSequence::new(["index", "timeline", "photos", "game"])
            .unwrap()
            .with_info("index", PageInfo::new("🏠", "Home"))
            .with_info("timeline", PageInfo::new("📅", "Timeline"))
            .with_info("photos", PageInfo::new("📸", "Photos"))
            .with_info("game", PageInfo::new("🎮", "Game"))
    }

    #[test]
    fn test_entries_follow_sequence_order() {
        // Unlock order differs from sequence order.
        let unlocked: UnlockedPages = ["index", "game", "timeline"].into_iter().collect();
        let entries = navigation_entries(&sequence(), &unlocked, &"timeline".into(), ".html");

        let pages: Vec<&str> = entries.iter().map(|e| e.page.as_str()).collect();
        assert_eq!(pages, vec!["index", "timeline", "game"]);

        let active: Vec<&NavEntry> = entries.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "timeline.html");
        assert_eq!(active[0].text(), "📅 Timeline");
    }

    #[test]
    fn test_locked_pages_omitted() {
        let unlocked = UnlockedPages::initial(&"index".into());
        let entries = navigation_entries(&sequence(), &unlocked, &"index".into(), ".html");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text(), "🏠 Home");
        assert!(entries[0].active);
    }

    #[test]
    fn test_unknown_sequence_member_uses_fallback() {
        let seq = PageSequence::new(["index", "extra"]).unwrap();
        let unlocked: UnlockedPages = ["index", "extra"].into_iter().collect();
        let entries = navigation_entries(&seq, &unlocked, &"index".into(), ".html");
        assert_eq!(entries[1].label, "extra");
        assert_eq!(entries[1].icon, PageInfo::FALLBACK_ICON);
    }
}
