//! DOM Tree (arena-based allocation)

use crate::{Node, NodeData, NodeId};

/// Arena-based DOM tree. Slot 0 always holds the document node.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Pairs with `len`. Always false, since the document node is created
    /// with the tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            tracing::warn!("append_child ignored: {} -> {}", child, parent);
            return;
        }

        let old_parent = self.nodes[child.index()].parent;
        if let Some(old) = self.get_mut(old_parent) {
            old.children.retain(|&c| c != child);
        }

        self.nodes[child.index()].parent = parent;
        self.nodes[parent.index()].children.push(child);
    }

    /// Set an attribute on an element. Non-elements are left alone.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.get_mut(id).and_then(Node::as_element_mut) {
            elem.set_attr(name, value);
        }
    }

    /// Parent of a node (NONE for the root or detached nodes)
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).map_or(NodeId::NONE, |n| n.parent)
    }

    /// Children of a node in document order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Element children of a node in document order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.get(c).is_some_and(Node::is_element))
    }

    /// Tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)
            .and_then(Node::as_element)
            .map(|e| e.tag.as_str())
    }

    /// Pre-order iterator over `start` and all of its descendants
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        let stack = if self.get(start).is_some() {
            vec![start]
        } else {
            Vec::new()
        };
        Descendants {
            tree: self,
            stack,
            visited: 0,
        }
    }

    /// Concatenated text of all descendant text nodes (DOM `textContent`)
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node_id in self.descendants(id) {
            if let Some(NodeData::Text(t)) = self.get(node_id).map(|n| &n.data) {
                out.push_str(t);
            }
        }
        out
    }

    /// First element carrying the given `id` attribute, in document order
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root()).find(|&n| {
            self.get(n)
                .and_then(Node::as_element)
                .and_then(|e| e.id())
                == Some(id)
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order traversal. Bounded by the arena size, so a child list that
/// loops back on itself cannot spin forever.
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
    visited: usize,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.visited >= self.tree.len() {
            return None;
        }
        let id = self.stack.pop()?;
        self.visited += 1;
        self.stack.extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_navigate() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("hi");
        tree.append_child(tree.root(), div);
        tree.append_child(div, text);

        assert_eq!(tree.parent(div), NodeId::ROOT);
        assert_eq!(tree.children(div), &[text]);
        assert_eq!(tree.element_children(div).count(), 0);
        assert_eq!(tree.text_content(div), "hi");
    }

    #[test]
    fn test_append_moves_node() {
        let mut tree = DomTree::new();
        let a = tree.create_element("a");
        let b = tree.create_element("b");
        let c = tree.create_element("c");
        tree.append_child(a, c);
        tree.append_child(b, c);

        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[c]);
        assert_eq!(tree.parent(c), b);
    }

    #[test]
    fn test_new_tree_holds_document() {
        let tree = DomTree::new();
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_none_lookups() {
        let tree = DomTree::new();
        assert!(tree.get(NodeId::NONE).is_none());
        assert!(tree.children(NodeId(42)).is_empty());
        assert_eq!(tree.parent(NodeId::ROOT), NodeId::NONE);
    }
}
