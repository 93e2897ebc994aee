//! Raw identifying attributes

use loc8r_dom::{DomTree, NodeId};
use serde::Serialize;

use crate::config::LocatorConfig;
use crate::error::Result;
use crate::walk::element;

/// id / name / class / text of an element, with absent values replaced
/// by the configured labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementAttributes {
    pub id: String,
    pub name: String,
    pub class: String,
    /// Trimmed text content, cut to the preview length
    pub text: String,
}

/// Trimmed, untruncated text content of an element
pub fn text_content(tree: &DomTree, node: NodeId) -> Result<String> {
    element(tree, node)?;
    Ok(tree.text_content(node).trim().to_string())
}

pub fn extract_attributes(
    tree: &DomTree,
    node: NodeId,
    config: &LocatorConfig,
) -> Result<ElementAttributes> {
    let elem = element(tree, node)?;
    let missing = &config.missing;

    let text: String = text_content(tree, node)?
        .chars()
        .take(config.text_preview_len)
        .collect();

    Ok(ElementAttributes {
        id: elem.id().unwrap_or(&missing.id).to_string(),
        name: elem.name().unwrap_or(&missing.name).to_string(),
        class: elem.class_name().unwrap_or(&missing.class).to_string(),
        text: if text.is_empty() { missing.text.clone() } else { text },
    })
}
