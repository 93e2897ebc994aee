//! XPath generation
//!
//! Both generators collect the ancestor chain first and only then build
//! segments, so a parent cycle surfaces as `CycleDetected` before any
//! sibling lookup can trip over the inconsistent links.

use loc8r_dom::{DomTree, NodeId};

use crate::error::Result;
use crate::walk::{Ancestors, element, path_segment};

/// Relative XPath for `node`.
///
/// `//*[@id="..."]` when the node has an id. Otherwise ascends until an
/// ancestor with an id (which becomes the leading `tag[@id="..."]`
/// segment) or until the `boundary_tag` ancestor / the document node,
/// neither of which is emitted. The boundary test runs before the id test.
pub fn relative_xpath(tree: &DomTree, node: NodeId, boundary_tag: &str) -> Result<String> {
    let elem = element(tree, node)?;
    if let Some(id) = elem.id() {
        return Ok(format!("//*[@id=\"{id}\"]"));
    }

    let mut chain = Vec::new();
    let mut anchor = None;

    for (depth, step) in Ancestors::new(tree, node)?.enumerate() {
        let current = step?;
        let elem = element(tree, current)?;

        if depth > 0 && elem.tag == boundary_tag {
            break;
        }
        if let Some(id) = elem.id() {
            anchor = Some(format!("{}[@id=\"{}\"]", elem.tag, id));
            break;
        }
        chain.push(current);
    }

    let mut parts = Vec::with_capacity(chain.len() + 1);
    parts.extend(anchor);
    for &current in chain.iter().rev() {
        parts.push(path_segment(tree, current)?);
    }

    Ok(format!("//{}", parts.join("/")))
}

/// Absolute XPath for `node`: every element from the document element
/// down, ids ignored.
pub fn absolute_xpath(tree: &DomTree, node: NodeId) -> Result<String> {
    let chain = Ancestors::new(tree, node)?.collect::<Result<Vec<_>>>()?;

    let parts = chain
        .iter()
        .rev()
        .map(|&current| path_segment(tree, current))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("/{}", parts.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// html > body > div#app > ul > li, li
    fn app_tree() -> (DomTree, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let body = tree.create_element("body");
        let app = tree.create_element("div");
        tree.set_attr(app, "id", "app");
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        let root = tree.root();
        tree.append_child(root, html);
        tree.append_child(html, body);
        tree.append_child(body, app);
        tree.append_child(app, ul);
        tree.append_child(ul, a);
        tree.append_child(ul, b);
        (tree, ul, b)
    }

    #[test]
    fn test_relative_anchors_on_id_ancestor() {
        let (tree, _, li) = app_tree();
        assert_eq!(
            relative_xpath(&tree, li, "body").unwrap(),
            "//div[@id=\"app\"]/ul/li[2]"
        );
    }

    #[test]
    fn test_absolute_ignores_ids() {
        let (tree, ul, li) = app_tree();
        assert_eq!(absolute_xpath(&tree, li).unwrap(), "/html/body/div/ul/li[2]");
        assert_eq!(absolute_xpath(&tree, ul).unwrap(), "/html/body/div/ul");
    }
}
