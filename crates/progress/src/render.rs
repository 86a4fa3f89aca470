//! Applying navigation entries to the page.

use pagegate_core::NavEntry;
use tracing::debug;

/// Replaces the navigation list with a fresh set of entries.
pub trait NavRenderer {
    /// Replace the whole navigation content with `entries`.
    ///
    /// Returns `false` when there is no navigation container to fill; the
    /// tracker treats that as a silent no-op.
    fn render(&mut self, entries: &[NavEntry]) -> bool;
}

/// Renders the `nav ul` list as HTML markup.
///
/// Each entry becomes `<li><a href="page.html">icon label</a></li>`, with
/// `class="active"` on the current page's link.
#[derive(Debug, Clone)]
pub struct HtmlNavRenderer {
    container: Option<String>,
}

impl HtmlNavRenderer {
    /// Renderer for a page that has a navigation container.
    pub fn new() -> Self {
        Self {
            container: Some(String::new()),
        }
    }

    /// Renderer for a page without a navigation container.
    pub fn without_container() -> Self {
        Self { container: None }
    }

    /// Current inner markup of the list, if the container exists.
    pub fn markup(&self) -> Option<&str> {
        self.container.as_deref()
    }
}

impl Default for HtmlNavRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl NavRenderer for HtmlNavRenderer {
    fn render(&mut self, entries: &[NavEntry]) -> bool {
        let Some(container) = self.container.as_mut() else {
            debug!("No navigation container; skipping render");
            return false;
        };

        container.clear();
        for entry in entries {
            container.push_str("<li><a href=\"");
            container.push_str(&escape(&entry.href));
            container.push('"');
            if entry.active {
                container.push_str(" class=\"active\"");
            }
            container.push('>');
            container.push_str(&escape(&entry.text()));
            container.push_str("</a></li>");
        }
        debug!("Rendered {} navigation entries", entries.len());
        true
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
