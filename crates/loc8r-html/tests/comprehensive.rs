//! Comprehensive tests for loc8r-html
//!
//! Parsing behaviour the locator engine relies on: tag case, attributes,
//! element order and text content.

use loc8r_dom::NodeData;
use loc8r_html::{HtmlParser, parse};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("").unwrap();
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
    assert!(doc.document_element().is_valid());
    assert!(doc.body().is_valid());
}

#[test]
fn test_tags_are_lowercase() {
    let doc = parse("<DIV><SPAN>x</SPAN></DIV>").unwrap();
    let tree = doc.tree();
    let div = tree.element_children(doc.body()).next().unwrap();
    let span = tree.element_children(div).next().unwrap();
    assert_eq!(tree.tag_name(div), Some("div"));
    assert_eq!(tree.tag_name(span), Some("span"));
}

#[test]
fn test_parse_with_attributes() {
    let html = r#"
        <div id="main" class="container primary" data-value="123">
            <input name="email" type="text">
        </div>
    "#;

    let doc = parse(html).unwrap();
    let tree = doc.tree();
    let main = doc.get_element_by_id("main").unwrap();
    let elem = tree.get(main).unwrap().as_element().unwrap();

    assert_eq!(elem.class_name(), Some("container primary"));
    assert_eq!(elem.get_attr("data-value"), Some("123"));

    let input = tree.element_children(main).next().unwrap();
    let input = tree.get(input).unwrap().as_element().unwrap();
    assert_eq!(input.name(), Some("email"));
}

#[test]
fn test_child_order_preserved() {
    let doc = parse("<ul><li>A</li><li>B</li><li>C</li></ul>").unwrap();
    let tree = doc.tree();
    let ul = tree.element_children(doc.body()).next().unwrap();
    let texts: Vec<String> = tree
        .element_children(ul)
        .map(|li| tree.text_content(li))
        .collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
}

#[test]
fn test_whitespace_text_kept_inside_elements() {
    let doc = parse("<div>\n   <p>x</p>\n</div>").unwrap();
    let tree = doc.tree();
    let div = tree.element_children(doc.body()).next().unwrap();
    assert_eq!(tree.children(div).len(), 3);
    assert_eq!(tree.element_children(div).count(), 1);
}

#[test]
fn test_whitespace_text_dropped_outside_body() {
    let doc = parse("<html>\n<head>\n  <title>t</title>\n</head>\n<body><p>x</p></body></html>").unwrap();
    let tree = doc.tree();
    let only_elements = |id| {
        tree.children(id)
            .iter()
            .all(|&c| tree.get(c).is_some_and(|n| n.is_element()))
    };
    assert!(only_elements(doc.document_element()));
    assert!(only_elements(doc.head()));
}

#[test]
fn test_inline_spacing_in_text_content() {
    let doc = parse("<p><b>Hello</b> <i>world</i></p>").unwrap();
    let tree = doc.tree();
    let p = tree.element_children(doc.body()).next().unwrap();
    assert_eq!(tree.text_content(p), "Hello world");
}

#[test]
fn test_doctype_and_comment_kept() {
    let doc = parse("<!DOCTYPE html><!-- top --><html><body></body></html>").unwrap();
    let tree = doc.tree();
    let kinds: Vec<_> = tree
        .children(tree.root())
        .iter()
        .map(|&c| match tree.get(c).unwrap().data {
            NodeData::Doctype { .. } => "doctype",
            NodeData::Comment(_) => "comment",
            NodeData::Element(_) => "element",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["doctype", "comment", "element"]);
}

#[test]
fn test_parse_malformed_html() {
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;

    let doc = parse(html).unwrap();
    assert!(doc.tree().len() > 5);
}
