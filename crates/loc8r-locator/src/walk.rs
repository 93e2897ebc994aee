//! Tree-walk helpers shared by every generator
//!
//! - node validation (`element`)
//! - 1-based index among same-tag siblings (`same_tag_index`)
//! - ancestor ascent with cycle detection (`Ancestors`)

use std::collections::HashSet;

use loc8r_dom::{DomTree, ElementData, Node, NodeId};

use crate::error::{LocatorError, Result};

/// Element data of `node`, or `InvalidNode` if there is none to read
pub(crate) fn element(tree: &DomTree, node: NodeId) -> Result<&ElementData> {
    if !node.is_valid() {
        return Err(LocatorError::invalid(node, "null node reference"));
    }
    let data = tree
        .get(node)
        .ok_or_else(|| LocatorError::invalid(node, "node is not part of this tree"))?;
    let elem = data
        .as_element()
        .ok_or_else(|| LocatorError::invalid(node, "node is not an element"))?;
    if elem.tag.is_empty() {
        return Err(LocatorError::invalid(node, "element has no tag label"));
    }
    Ok(elem)
}

/// Position of `node` among its parent's element children that share its
/// tag, 1-based. `None` when that group has a single member or the node
/// has no parent.
pub(crate) fn same_tag_index(tree: &DomTree, node: NodeId) -> Result<Option<usize>> {
    let tag = &element(tree, node)?.tag;
    let parent = tree.parent(node);
    if !parent.is_valid() {
        return Ok(None);
    }
    if parent == node {
        return Err(LocatorError::CycleDetected { node });
    }
    if tree.get(parent).is_none() {
        return Err(LocatorError::invalid(node, format!("dangling parent {parent}")));
    }

    let group: Vec<NodeId> = tree
        .element_children(parent)
        .filter(|&c| tree.tag_name(c) == Some(tag.as_str()))
        .collect();

    let position = group
        .iter()
        .position(|&c| c == node)
        .ok_or_else(|| LocatorError::invalid(node, format!("not listed among the children of {parent}")))?;

    Ok((group.len() > 1).then_some(position + 1))
}

/// `tag` or `tag[k]`
pub(crate) fn path_segment(tree: &DomTree, node: NodeId) -> Result<String> {
    let mut segment = element(tree, node)?.tag.clone();
    if let Some(index) = same_tag_index(tree, node)? {
        segment.push_str(&format!("[{index}]"));
    }
    Ok(segment)
}

/// Walks from a node up through its element ancestors.
///
/// Yields the start node first. Ascent ends when the parent is missing or
/// is not an element (the document node). Meeting a node twice yields a
/// single `CycleDetected` and ends the walk.
pub(crate) struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
    visited: HashSet<NodeId>,
    done: bool,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a DomTree, node: NodeId) -> Result<Self> {
        element(tree, node)?;
        Ok(Self {
            tree,
            next: node,
            visited: HashSet::new(),
            done: false,
        })
    }
}

impl Iterator for Ancestors<'_> {
    type Item = Result<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.next;
        if !self.visited.insert(current) {
            self.done = true;
            tracing::warn!("Parent cycle through {} after {} steps", current, self.visited.len());
            return Some(Err(LocatorError::CycleDetected { node: current }));
        }

        let parent = self.tree.parent(current);
        if self.tree.get(parent).is_some_and(Node::is_element) {
            self.next = parent;
        } else {
            self.done = true;
        }
        Some(Ok(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn siblings(tags: &[&str]) -> (DomTree, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let parent = tree.create_element("section");
        let root = tree.root();
        tree.append_child(root, parent);
        let kids = tags
            .iter()
            .map(|tag| {
                let id = tree.create_element(tag);
                tree.append_child(parent, id);
                id
            })
            .collect();
        (tree, kids)
    }

    #[test]
    fn test_index_counts_same_tag_only() {
        let (tree, kids) = siblings(&["div", "span", "div", "div"]);
        assert_eq!(same_tag_index(&tree, kids[0]).unwrap(), Some(1));
        assert_eq!(same_tag_index(&tree, kids[1]).unwrap(), None);
        assert_eq!(same_tag_index(&tree, kids[2]).unwrap(), Some(2));
        assert_eq!(same_tag_index(&tree, kids[3]).unwrap(), Some(3));
    }

    #[test]
    fn test_index_ignores_text_nodes() {
        let (mut tree, kids) = siblings(&["p"]);
        let parent = tree.parent(kids[0]);
        let text = tree.create_text("between");
        tree.append_child(parent, text);
        assert_eq!(same_tag_index(&tree, kids[0]).unwrap(), None);
    }

    #[test]
    fn test_unlisted_child_is_invalid() {
        let (mut tree, kids) = siblings(&["p", "p"]);
        let stray = tree.create_element("p");
        let section = tree.parent(kids[0]);
        tree.get_mut(stray).unwrap().parent = section;
        assert!(matches!(
            same_tag_index(&tree, stray),
            Err(LocatorError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_ancestors_stop_at_document() {
        let (tree, kids) = siblings(&["p"]);
        let chain: Vec<NodeId> = Ancestors::new(&tree, kids[0])
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chain, vec![kids[0], tree.parent(kids[0])]);
    }

    #[test]
    fn test_ancestors_report_cycle_once() {
        let (mut tree, kids) = siblings(&["p"]);
        let section = tree.parent(kids[0]);
        tree.get_mut(section).unwrap().parent = kids[0];

        let steps: Vec<_> = Ancestors::new(&tree, kids[0]).unwrap().collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], Err(LocatorError::CycleDetected { node: kids[0] }));
    }
}
