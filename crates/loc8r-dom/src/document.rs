//! Document - High-level document API

use crate::{DomTree, Node, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Focused element (`document.activeElement`)
    focused: NodeId,
}

impl Document {
    /// Create a new document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            focused: NodeId::NONE,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: NodeId::NONE,
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        self.html_element = self.first_child_tagged(self.tree.root(), "html");
        self.head_element = self.first_child_tagged(self.html_element, "head");
        self.body_element = self.first_child_tagged(self.html_element, "body");

        tracing::debug!(
            "Document {} finalized: html={} head={} body={}",
            self.url,
            self.html_element,
            self.head_element,
            self.body_element
        );
    }

    fn first_child_tagged(&self, parent: NodeId, tag: &str) -> NodeId {
        self.tree
            .element_children(parent)
            .find(|&c| self.tree.tag_name(c) == Some(tag))
            .unwrap_or(NodeId::NONE)
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> String {
        let title = self.first_child_tagged(self.head_element, "title");
        if !title.is_valid() {
            return String::new();
        }
        self.tree.text_content(title).trim().to_string()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Currently focused element, if any
    pub fn focused(&self) -> Option<NodeId> {
        Some(self.focused).filter(|id| self.tree.get(*id).is_some_and(Node::is_element))
    }

    /// Move focus to an element; `NodeId::NONE` clears it
    pub fn set_focus(&mut self, id: NodeId) {
        self.focused = id;
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.find_by_id(id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
