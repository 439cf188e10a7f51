//! HTML unordered list document.
//!
//! Each line becomes an `<li>` item inside a `<ul>` block. Items are
//! indented by one tab. The item and block markers are constants of the
//! kind.

use super::ListDocument;

/// Document whose lines are printed as `<li>` items of a `<ul>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlList {
    content: Vec<String>,
}

impl HtmlList {
    /// Written before every item
    pub const PREFIX: &'static str = "<li>";
    /// Written after every item
    pub const SUFFIX: &'static str = "</li>";
    /// Opening line of the block
    pub const OPEN: &'static str = "<ul>";
    /// Closing line of the block
    pub const CLOSE: &'static str = "</ul>";
    /// Indentation unit in front of each item
    pub const INDENT: &'static str = "\t";

    /// Create an empty HTML list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListDocument for HtmlList {
    fn append(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    fn lines(&self) -> &[String] {
        &self.content
    }
}

impl<S: Into<String>> Extend<S> for HtmlList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for line in iter {
            self.append(line);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for HtmlList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_list_decorations() {
        assert_eq!(HtmlList::PREFIX, "<li>");
        assert_eq!(HtmlList::SUFFIX, "</li>");
        assert_eq!(HtmlList::OPEN, "<ul>");
        assert_eq!(HtmlList::CLOSE, "</ul>");
    }

    #[test]
    fn test_html_list_append() {
        let mut list = HtmlList::new();
        assert!(list.is_empty());

        list.append("This is line");
        list.append(String::from("second"));

        assert_eq!(list.lines(), ["This is line", "second"]);
    }

    #[test]
    fn test_html_list_extend_appends_at_end() {
        let mut list = HtmlList::new();
        list.append("first");
        list.extend(vec!["x", "x"]);
        assert_eq!(list.lines(), ["first", "x", "x"]);
    }
}
