//! Printing visitor.
//!
//! Renders each document kind as text lines terminated by `\n`:
//!
//! ```text
//! BulletList            HtmlList
//! * A                   <ul>
//! * B                   \t<li>A</li>
//!                       </ul>
//! ```
//!
//! The printer holds nothing but its output sink and never touches the
//! document's content.

use std::fmt::{self, Write as _};
use std::io;

use tracing::trace;

use crate::documents::{BulletList, Document, HtmlList, ListDocument};
use crate::visitor::DocumentVisitor;

/// Renders documents into any [`fmt::Write`] target.
///
/// This is the single place the text layout is defined. [`Document`]'s
/// `Display` impl and [`DocumentPrinter`] both go through it.
#[derive(Debug)]
pub struct TextRenderer<'a, W: ?Sized> {
    out: &'a mut W,
}

impl<'a, W: fmt::Write + ?Sized> TextRenderer<'a, W> {
    /// Renderer appending to `out`.
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: fmt::Write + ?Sized> DocumentVisitor for TextRenderer<'_, W> {
    type Output = fmt::Result;

    fn visit_bullet_list(&mut self, list: &BulletList) -> fmt::Result {
        for item in list.lines() {
            writeln!(self.out, "{}{}", BulletList::PREFIX, item)?;
        }
        Ok(())
    }

    fn visit_html_list(&mut self, list: &HtmlList) -> fmt::Result {
        writeln!(self.out, "{}", HtmlList::OPEN)?;
        for item in list.lines() {
            writeln!(
                self.out,
                "{}{}{}{}",
                HtmlList::INDENT,
                HtmlList::PREFIX,
                item,
                HtmlList::SUFFIX
            )?;
        }
        writeln!(self.out, "{}", HtmlList::CLOSE)
    }
}

/// Writes documents to an [`io::Write`] sink.
#[derive(Debug)]
pub struct DocumentPrinter<W> {
    out: W,
}

impl DocumentPrinter<io::Stdout> {
    /// Printer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> DocumentPrinter<W> {
    /// Printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Render `doc` and flush the sink.
    pub fn print(&mut self, doc: &Document) -> io::Result<()> {
        doc.accept(self)?;
        io::Write::flush(&mut self.out)
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(
        &mut self,
        draw: impl FnOnce(&mut TextRenderer<'_, IoSink<'_, W>>) -> fmt::Result,
    ) -> io::Result<()> {
        let mut sink = IoSink { out: &mut self.out, error: None };
        let drawn = draw(&mut TextRenderer::new(&mut sink));
        match (drawn, sink.error) {
            (Ok(()), _) => Ok(()),
            (Err(_), Some(e)) => Err(e),
            (Err(_), None) => Err(io::Error::other("formatter error")),
        }
    }
}

/// `fmt::Write` view of an `io::Write`, keeping the first I/O error.
struct IoSink<'a, W> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        io::Write::write_all(&mut *self.out, s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl<W: io::Write> DocumentVisitor for DocumentPrinter<W> {
    type Output = io::Result<()>;

    fn visit_bullet_list(&mut self, list: &BulletList) -> io::Result<()> {
        trace!(lines = list.len(), "rendering bullet list");
        self.render(|r| r.visit_bullet_list(list))
    }

    fn visit_html_list(&mut self, list: &HtmlList) -> io::Result<()> {
        trace!(lines = list.len(), "rendering html list");
        self.render(|r| r.visit_html_list(list))
    }
}

/// Render `doc` into a string.
pub fn render_to_string(doc: &Document) -> String {
    doc.to_string()
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut TextRenderer::new(f))
    }
}
