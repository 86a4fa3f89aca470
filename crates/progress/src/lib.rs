//! Page progression tracking.
//!
//! Gates a fixed sequence of pages, unlocking each successor once the
//! previous page is completed, and persists the unlocked set in a
//! [`pagegate_storage::KeyValueStore`].

#![warn(missing_docs)]

pub mod tracker;
pub mod location;
pub mod render;

pub use tracker::{ProgressionTracker, TrackerConfig, TrackerError, Result};
pub use location::{Location, StaticLocation};
pub use render::{NavRenderer, HtmlNavRenderer};
