//! Progression tracking service.

use pagegate_core::{
    decide_access, navigation_entries, next_target, page_from_path, AccessDecision, Completion,
    NavEntry, PageId, PageSequence, UnlockedPages, DEFAULT_PAGE_SUFFIX,
};
use pagegate_storage::{KeyValueStore, StorageError};
use tracing::{debug, info, warn};
use crate::location::Location;
use crate::render::NavRenderer;

/// Error type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors that can occur while tracking progress.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Unlocked set could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for the progression tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Storage key holding the JSON array of unlocked pages
    pub storage_key: String,
    /// Suffix turning a page id into a link target
    pub page_suffix: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "unlockedPages".to_string(),
            page_suffix: DEFAULT_PAGE_SUFFIX.to_string(),
        }
    }
}

/// Gatekeeper for a linear page progression.
///
/// On each page load the host calls [`init`](Self::init): a locked page
/// redirects home, an open page gets its navigation rendered. A page that
/// has been finished calls [`complete_current_page`](Self::complete_current_page)
/// and follows the returned target.
///
/// Every mutation reads the whole unlocked set, changes it in memory and
/// writes it back. Nothing guards against another tab writing in between.
pub struct ProgressionTracker<S, L, R> {
    store: S,
    location: L,
    renderer: R,
    sequence: PageSequence,
    config: TrackerConfig,
}

impl<S: KeyValueStore, L: Location, R: NavRenderer> ProgressionTracker<S, L, R> {
    /// Create a tracker over `sequence` with its collaborators.
    pub fn new(store: S, location: L, renderer: R, sequence: PageSequence) -> Self {
        Self {
            store,
            location,
            renderer,
            sequence,
            config: TrackerConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// The progression order.
    pub fn sequence(&self) -> &PageSequence {
        &self.sequence
    }

    /// Active configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The navigation location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the location, e.g. to move to another page.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// The navigation renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Page identifier derived from the current location.
    pub fn current_page(&self) -> PageId {
        page_from_path(
            &self.location.pathname(),
            self.sequence.first(),
            &self.config.page_suffix,
        )
    }

    /// Read the unlocked set.
    ///
    /// Falls back to the first page alone when nothing is stored. A value
    /// that does not decode is logged and treated the same way. The fallback
    /// is never written back. A decoded set always contains the first page.
    pub async fn unlocked_pages(&self) -> Result<UnlockedPages> {
        let initial = || UnlockedPages::initial(self.sequence.first());
        let Some(raw) = self.store.get(&self.config.storage_key).await? else {
            return Ok(initial());
        };
        match UnlockedPages::from_json(&raw) {
            Ok(mut unlocked) => {
                unlocked.ensure(self.sequence.first());
                Ok(unlocked)
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable value under {:?}: {}",
                    self.config.storage_key, e
                );
                Ok(initial())
            }
        }
    }

    /// Overwrite the stored unlocked set. Contents are not validated.
    pub async fn save_unlocked_pages(&mut self, pages: &UnlockedPages) -> Result<()> {
        let json = pages.to_json()?;
        self.store.set(&self.config.storage_key, &json).await?;
        Ok(())
    }

    /// Add `page` to the unlocked set and persist it.
    ///
    /// Returns whether the page was newly unlocked. Unlocking a page twice
    /// leaves the set unchanged.
    pub async fn unlock_page(&mut self, page: PageId) -> Result<bool> {
        let mut unlocked = self.unlocked_pages().await?;
        let added = unlocked.insert(page.clone());
        self.save_unlocked_pages(&unlocked).await?;
        if added {
            debug!("Unlocked page {}", page);
        }
        Ok(added)
    }

    /// Whether `page` is in the unlocked set.
    pub async fn is_page_unlocked(&self, page: &PageId) -> Result<bool> {
        Ok(self.unlocked_pages().await?.contains(page))
    }

    /// Page following the current one in the sequence.
    pub fn next_page(&self) -> Option<PageId> {
        self.sequence.next_after(&self.current_page()).cloned()
    }

    /// Mark the current page complete and unlock its successor.
    ///
    /// On the last page (or a page outside the sequence) nothing is
    /// written and [`Completion::NoNextPage`] is returned.
    pub async fn complete_current_page(&mut self) -> Result<Completion> {
        let current = self.current_page();
        let completion = next_target(&self.sequence, &current, &self.config.page_suffix);
        match &completion {
            Completion::Next { page, target } => {
                self.unlock_page(page.clone()).await?;
                info!("Completed {}; next is {}", current, target);
            }
            Completion::NoNextPage => {
                debug!("Completed {}; no next page", current);
            }
        }
        Ok(completion)
    }

    /// Forget all progress and return to the first page.
    pub async fn reset_progress(&mut self) -> Result<()> {
        self.store.remove(&self.config.storage_key).await?;
        let home = self.home_href();
        info!("Progress reset; redirecting to {}", home);
        self.location.redirect(&home);
        Ok(())
    }

    /// Gate the current page, redirecting home when it is locked.
    pub async fn check_access(&mut self) -> Result<AccessDecision> {
        let current = self.current_page();
        // The first page never needs a storage read.
        if &current == self.sequence.first() {
            return Ok(AccessDecision::Granted);
        }

        let unlocked = self.unlocked_pages().await?;
        let decision = decide_access(&self.sequence, &unlocked, &current, &self.config.page_suffix);
        if let AccessDecision::Denied { redirect, .. } = &decision {
            debug!("Page {} is locked; redirecting to {}", current, redirect);
            self.location.redirect(redirect);
        }
        Ok(decision)
    }

    /// Navigation entries for the unlocked pages, in sequence order.
    pub async fn navigation(&self) -> Result<Vec<NavEntry>> {
        let unlocked = self.unlocked_pages().await?;
        Ok(navigation_entries(
            &self.sequence,
            &unlocked,
            &self.current_page(),
            &self.config.page_suffix,
        ))
    }

    /// Replace the rendered navigation.
    ///
    /// Returns `false` if the page has no navigation container.
    pub async fn update_navigation(&mut self) -> Result<bool> {
        let entries = self.navigation().await?;
        Ok(self.renderer.render(&entries))
    }

    /// Page-load entry point: check access, then render navigation.
    ///
    /// Navigation is left untouched when access is denied, since the page
    /// is being left.
    pub async fn init(&mut self) -> Result<AccessDecision> {
        let decision = self.check_access().await?;
        if decision.is_granted() {
            self.update_navigation().await?;
        }
        Ok(decision)
    }

    fn home_href(&self) -> String {
        self.sequence.first().href(&self.config.page_suffix)
    }
}
