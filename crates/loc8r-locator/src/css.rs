//! CSS selector generation

use loc8r_dom::{DomTree, NodeId};

use crate::error::Result;
use crate::walk::{element, same_tag_index};

/// Single-segment CSS selector for `node`.
///
/// `#id` when the element has an id. Otherwise `tag.class1.class2`,
/// suffixed with `:nth-child(k)` when the parent holds more than one
/// element of the same tag. `k` counts same-tag siblings only, which is
/// `:nth-of-type` arithmetic under the `:nth-child` name; output consumers
/// depend on that exact form.
///
/// Ids are emitted verbatim, without escaping.
pub fn css_selector(tree: &DomTree, node: NodeId) -> Result<String> {
    let elem = element(tree, node)?;

    if let Some(id) = elem.id() {
        return Ok(format!("#{id}"));
    }

    let mut selector = elem.tag.clone();
    for class in elem.classes() {
        selector.push('.');
        selector.push_str(class);
    }

    if let Some(index) = same_tag_index(tree, node)? {
        selector.push_str(&format!(":nth-child({index})"));
    }

    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_wins_over_classes() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.set_attr(div, "id", "hero");
        tree.set_attr(div, "class", "a b");
        let root = tree.root();
        tree.append_child(root, div);

        assert_eq!(css_selector(&tree, div).unwrap(), "#hero");
    }

    #[test]
    fn test_classes_and_index() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let first = tree.create_element("li");
        let second = tree.create_element("li");
        tree.set_attr(second, "class", "item  active");
        let root = tree.root();
        tree.append_child(root, ul);
        tree.append_child(ul, first);
        tree.append_child(ul, second);

        assert_eq!(css_selector(&tree, first).unwrap(), "li:nth-child(1)");
        assert_eq!(css_selector(&tree, second).unwrap(), "li.item.active:nth-child(2)");
        assert_eq!(css_selector(&tree, ul).unwrap(), "ul");
    }
}
