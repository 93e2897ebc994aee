//! JS path generation

use loc8r_dom::{DomTree, NodeId};

use crate::css::css_selector;
use crate::error::Result;
use crate::walk::element;

/// Property-access expression selecting `node` from a page script.
///
/// The class form uses `querySelector`, so it returns the first element
/// with that class chain, which need not be `node`.
pub fn js_path(tree: &DomTree, node: NodeId) -> Result<String> {
    let elem = element(tree, node)?;

    if let Some(id) = elem.id() {
        return Ok(format!("document.getElementById(\"{id}\")"));
    }

    if elem.has_classes() {
        let chain = elem.classes().collect::<Vec<_>>().join(".");
        return Ok(format!("document.querySelector(\".{chain}\")"));
    }

    Ok(format!(
        "document.querySelector(\"{}\")",
        css_selector(tree, node)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_forms() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let nav = tree.create_element("nav");
        let by_id = tree.create_element("a");
        let by_class = tree.create_element("a");
        let bare = tree.create_element("a");
        tree.set_attr(by_id, "id", "home");
        tree.set_attr(by_class, "class", "link primary");
        tree.append_child(root, nav);
        tree.append_child(nav, by_id);
        tree.append_child(nav, by_class);
        tree.append_child(nav, bare);

        assert_eq!(js_path(&tree, by_id).unwrap(), "document.getElementById(\"home\")");
        assert_eq!(
            js_path(&tree, by_class).unwrap(),
            "document.querySelector(\".link.primary\")"
        );
        assert_eq!(
            js_path(&tree, bare).unwrap(),
            "document.querySelector(\"a:nth-child(3)\")"
        );
    }
}
