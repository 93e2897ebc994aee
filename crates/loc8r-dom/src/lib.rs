//! Loc8r DOM - Document Object Model
//!
//! Arena-based DOM tree. Nodes reference each other by `NodeId`
//! instead of pointers, so a tree is a plain `Vec` that can be read
//! without borrowing gymnastics.

mod node;
mod tree;
mod document;

pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Descendants, DomTree};
pub use document::Document;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);

    /// Null reference
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
