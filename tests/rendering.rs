//! Rendering properties across both document kinds.

use list_visitor::{
    build_document, render_to_string, BulletList, Document, DocumentKind, DocumentPrinter,
    HtmlList, LineCounter, ListDocument,
};
use proptest::prelude::*;

fn output_lines(doc: &Document) -> Vec<String> {
    render_to_string(doc).lines().map(str::to_owned).collect()
}

// Lines without terminators, so `str::lines` splits rendered output exactly.
fn content() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[^\r\n]{0,12}", 0..16)
}

proptest! {
    #[test]
    fn bullet_list_one_prefixed_line_per_item(items in content()) {
        let doc = build_document(DocumentKind::Bullet, items.clone());
        let expected: Vec<String> = items.iter().map(|i| format!("* {i}")).collect();

        prop_assert_eq!(output_lines(&doc), expected);
    }

    #[test]
    fn html_list_wraps_items_in_ul(items in content()) {
        let doc = build_document(DocumentKind::Html, items.clone());

        let mut expected = vec!["<ul>".to_string()];
        expected.extend(items.iter().map(|i| format!("\t<li>{i}</li>")));
        expected.push("</ul>".to_string());

        prop_assert_eq!(output_lines(&doc), expected);
    }

    #[test]
    fn rendering_is_repeatable_and_leaves_content_alone(
        items in content(),
        html in any::<bool>(),
    ) {
        let kind = if html { DocumentKind::Html } else { DocumentKind::Bullet };
        let doc = build_document(kind, items.clone());

        let first = render_to_string(&doc);
        let second = render_to_string(&doc);

        prop_assert_eq!(first, second);
        prop_assert_eq!(doc.lines(), items.as_slice());
    }

    #[test]
    fn line_counter_matches_rendered_lines(
        items in content(),
        html in any::<bool>(),
    ) {
        let kind = if html { DocumentKind::Html } else { DocumentKind::Bullet };
        let doc = build_document(kind, items);

        let newlines = render_to_string(&doc).matches('\n').count();
        prop_assert_eq!(doc.accept(&mut LineCounter), newlines);
    }
}

#[test]
fn html_single_line_scenario() {
    let mut html = HtmlList::new();
    html.append("This is line");
    let doc: Document = html.into();

    let mut printer = DocumentPrinter::new(Vec::new());
    printer.print(&doc).unwrap();

    assert_eq!(
        String::from_utf8(printer.into_inner()).unwrap(),
        "<ul>\n\t<li>This is line</li>\n</ul>\n"
    );
}

#[test]
fn bullet_two_lines_scenario() {
    let mut list = BulletList::new();
    list.append("A");
    list.append("B");

    assert_eq!(Document::from(list).to_string(), "* A\n* B\n");
}

#[test]
fn empty_documents() {
    assert_eq!(output_lines(&HtmlList::new().into()), ["<ul>", "</ul>"]);
    assert!(render_to_string(&BulletList::new().into()).is_empty());
}
