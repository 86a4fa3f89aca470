//! Pagegate core data models.
//!
//! This crate defines the page progression sequence, the unlocked set and
//! the pure decisions made over them. Nothing here touches storage or the
//! browser; side effects live in `pagegate-progress`.

#![warn(missing_docs)]

// Page identity and ordering
mod page;

// Persisted unlock state
mod unlocked;

// Decisions over sequence + unlocked set
mod access;
mod navigation;

// Re-exports
pub use page::{PageId, PageInfo, PageSequence, SequenceError};
pub use unlocked::UnlockedPages;
pub use access::{page_from_path, decide_access, next_target, AccessDecision, Completion};
pub use navigation::{navigation_entries, NavEntry};

/// Suffix appended to page identifiers to form link targets.
pub const DEFAULT_PAGE_SUFFIX: &str = ".html";
