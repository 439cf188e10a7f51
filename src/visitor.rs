//! Operations over the closed set of document kinds.
//!
//! A visitor has one required method per kind and no fallback. Dispatch
//! happens in [`Document::accept`](crate::Document::accept) through an
//! exhaustive match, so a kind without a handler is a compile error.

use crate::documents::{BulletList, HtmlList, ListDocument};

/// One operation, defined once per document kind.
pub trait DocumentVisitor {
    /// Value produced by a single visit
    type Output;

    /// Handle a bullet list
    fn visit_bullet_list(&mut self, list: &BulletList) -> Self::Output;

    /// Handle an HTML list
    fn visit_html_list(&mut self, list: &HtmlList) -> Self::Output;
}

/// Counts the lines a render of the document would emit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCounter;

impl DocumentVisitor for LineCounter {
    type Output = usize;

    fn visit_bullet_list(&mut self, list: &BulletList) -> usize {
        list.len()
    }

    fn visit_html_list(&mut self, list: &HtmlList) -> usize {
        // <ul> and </ul>
        list.len() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn test_line_counter_bullet() {
        let list: BulletList = ["A", "B", "C"].into_iter().collect();
        assert_eq!(Document::from(list).accept(&mut LineCounter), 3);
        assert_eq!(Document::from(BulletList::new()).accept(&mut LineCounter), 0);
    }

    #[test]
    fn test_line_counter_html_counts_markers() {
        assert_eq!(Document::from(HtmlList::new()).accept(&mut LineCounter), 2);

        let list: HtmlList = ["x"].into_iter().collect();
        assert_eq!(Document::from(list).accept(&mut LineCounter), 3);
    }
}
