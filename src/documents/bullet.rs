//! Bullet list document.
//!
//! Renders each line on its own row behind a fixed `"* "` marker, with no
//! surrounding markers. The marker is a per-kind constant rather than
//! instance state.
//!
//! ## Example Usage
//!
//! ```rust
//! use list_visitor::{BulletList, ListDocument};
//!
//! let mut list = BulletList::new();
//! list.append("A");
//! list.append("B");
//! assert_eq!(list.lines(), ["A", "B"]);
//! ```

use super::ListDocument;

/// Document whose lines are printed as `* line`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletList {
    content: Vec<String>,
}

impl BulletList {
    /// Marker written in front of every line
    pub const PREFIX: &'static str = "* ";

    /// Create an empty bullet list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListDocument for BulletList {
    fn append(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    fn lines(&self) -> &[String] {
        &self.content
    }
}

impl<S: Into<String>> Extend<S> for BulletList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.append(line);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for BulletList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
