//! Document kinds and the closed union over them.
//!
//! The set of kinds is fixed: every kind is a variant of [`Document`], and
//! every operation over documents is a [`DocumentVisitor`] with one method
//! per kind. Adding a kind means adding a variant here and a method to the
//! visitor trait; the exhaustive match in [`Document::accept`] makes the
//! compiler list every visitor that still needs a handler.
//!
//! ## Document Types
//!
//! - **BulletList**: lines printed behind a `* ` marker
//! - **HtmlList**: lines printed as `<li>` items of a `<ul>` block

/// Bullet list kind
pub mod bullet;
/// HTML list kind
pub mod html;

pub use bullet::BulletList;
pub use html::HtmlList;

use crate::visitor::DocumentVisitor;

/// Capability shared by every document kind.
pub trait ListDocument {
    /// Append a line to the end of the content. Any string is accepted,
    /// including the empty string.
    fn append(&mut self, line: impl Into<String>);

    /// Content lines in insertion order.
    fn lines(&self) -> &[String];

    /// Number of content lines
    fn len(&self) -> usize {
        self.lines().len()
    }

    /// True when no line has been appended
    fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// A document holding exactly one kind.
///
/// The union only gives read access. Lines are appended to the kind
/// before it is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// `* line` rendering
    BulletList(BulletList),
    /// `<ul><li>line</li></ul>` rendering
    HtmlList(HtmlList),
}

impl Document {
    /// Dispatch `visitor` to the handler for the live kind.
    pub fn accept<V: DocumentVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Document::BulletList(list) => visitor.visit_bullet_list(list),
            Document::HtmlList(list) => visitor.visit_html_list(list),
        }
    }

    /// Content lines of the live kind
    pub fn lines(&self) -> &[String] {
        match self {
            Document::BulletList(list) => list.lines(),
            Document::HtmlList(list) => list.lines(),
        }
    }

    /// Number of content lines
    pub fn len(&self) -> usize {
        self.lines().len()
    }

    /// True when the live kind has no content
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl From<BulletList> for Document {
    fn from(list: BulletList) -> Self {
        Document::BulletList(list)
    }
}

impl From<HtmlList> for Document {
    fn from(list: HtmlList) -> Self {
        Document::HtmlList(list)
    }
}
