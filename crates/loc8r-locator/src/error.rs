//! Error types for locator generation

use loc8r_dom::NodeId;
use thiserror::Error;

/// Locator error enumeration
///
/// A missing attribute is never an error; it is reported through the
/// sentinel labels of [`crate::MissingLabels`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// Null reference, non-element node, tag-less element, or a node
    /// its parent does not list as a child
    #[error("Invalid node {node}: {reason}")]
    InvalidNode { node: NodeId, reason: String },

    /// The ancestor chain visits the same node twice
    #[error("Cycle detected in ancestor chain at node {node}")]
    CycleDetected { node: NodeId },
}

impl LocatorError {
    pub(crate) fn invalid(node: NodeId, reason: impl Into<String>) -> Self {
        LocatorError::InvalidNode {
            node,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
