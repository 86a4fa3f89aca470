//! The navigation location seen by the tracker.

/// Source of the current pathname and sink for redirects.
///
/// In a browser this is `window.location`; the tracker only needs to read
/// the pathname and to send the user elsewhere.
pub trait Location {
    /// Pathname of the displayed page (e.g. `/site/timeline.html`).
    fn pathname(&self) -> String;

    /// Navigate away to `target`.
    fn redirect(&mut self, target: &str);
}

/// A location held in memory.
///
/// A redirect replaces the pathname with its target, as following it
/// would, and is also recorded so callers can tell that one happened.
#[derive(Debug, Clone, Default)]
pub struct StaticLocation {
    path: String,
    redirects: Vec<String>,
}

impl StaticLocation {
    /// Location showing `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirects: Vec::new(),
        }
    }

    /// Move to another page as a link click would.
    pub fn navigate_to(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Every redirect target, oldest first.
    pub fn redirects(&self) -> &[String] {
        &self.redirects
    }

    /// Most recent redirect target.
    pub fn last_redirect(&self) -> Option<&str> {
        self.redirects.last().map(String::as_str)
    }
}

impl Location for StaticLocation {
    fn pathname(&self) -> String {
        self.path.clone()
    }

    fn redirect(&mut self, target: &str) {
        self.redirects.push(target.to_string());
        self.path = target.to_string();
    }
}
