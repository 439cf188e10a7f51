//! list-visitor - Closed-set document rendering
//!
//! Documents come in a fixed set of kinds, held by the [`Document`] enum.
//! Operations over documents are visitors: types implementing
//! [`DocumentVisitor`] with one method per kind, dispatched through an
//! exhaustive `match` instead of trait objects.
//!
//! ```rust
//! use list_visitor::{render_to_string, Document, HtmlList, ListDocument};
//!
//! let mut html = HtmlList::new();
//! html.append("This is line");
//! let doc = Document::from(html);
//!
//! assert_eq!(render_to_string(&doc), "<ul>\n\t<li>This is line</li>\n</ul>\n");
//! ```
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod documents;
pub mod visitor;
pub mod printer;

// Re-export commonly used items for convenience
pub use crate::core::{Config, DocumentKind, Error, Result};
pub use documents::{BulletList, Document, HtmlList, ListDocument};
pub use printer::{render_to_string, DocumentPrinter, TextRenderer};
pub use visitor::{DocumentVisitor, LineCounter};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build the document described by `kind`, appending `lines` in order.
pub fn build_document<I, S>(kind: DocumentKind, lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match kind {
        DocumentKind::Bullet => lines.into_iter().collect::<BulletList>().into(),
        DocumentKind::Html => lines.into_iter().collect::<HtmlList>().into(),
    }
}

/// Initialize logging from configuration
pub fn init(config: &Config) -> Result<()> {
    crate::core::logging::init(&config.logging)?;
    tracing::debug!("Initializing {} v{}", NAME, VERSION);
    Ok(())
}
