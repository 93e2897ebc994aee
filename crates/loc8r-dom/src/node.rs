//! DOM Node
//!
//! A node knows its parent and its ordered children by `NodeId`.
//! Fields are public: the tree never hides its structure from readers.

use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            children: Vec::new(),
            data,
        }
    }

    /// Create a new element node. The tag is stored lower-cased.
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::with_data(NodeData::Comment(content.to_string()))
    }

    /// Create a doctype node
    pub fn doctype(name: &str) -> Self {
        Self::with_data(NodeData::Doctype { name: name.to_string() })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name, lower-cased
    pub tag: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value.to_string();
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Non-empty `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id").filter(|v| !v.is_empty())
    }

    /// Non-empty `name` attribute
    pub fn name(&self) -> Option<&str> {
        self.get_attr("name").filter(|v| !v.is_empty())
    }

    /// Raw `class` attribute as authored
    pub fn class_name(&self) -> Option<&str> {
        self.get_attr("class").filter(|v| !v.is_empty())
    }

    /// Class tokens in authored order; blank tokens are dropped
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class")
            .unwrap_or_default()
            .split_whitespace()
    }

    /// Check if the element has at least one class token
    pub fn has_classes(&self) -> bool {
        self.classes().next().is_some()
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_lowercased() {
        let node = Node::element("DIV");
        assert_eq!(node.as_element().unwrap().tag, "div");
    }

    #[test]
    fn test_classes_drop_blank_tokens() {
        let mut elem = ElementData::new("p");
        elem.set_attr("class", "  lead\tintro \n ");
        let classes: Vec<_> = elem.classes().collect();
        assert_eq!(classes, vec!["lead", "intro"]);
        assert_eq!(elem.class_name(), Some("  lead\tintro \n "));
    }

    #[test]
    fn test_empty_id_is_absent() {
        let mut elem = ElementData::new("p");
        elem.set_attr("id", "");
        assert_eq!(elem.id(), None);
        elem.set_attr("id", "main");
        assert_eq!(elem.id(), Some("main"));
        assert_eq!(elem.attrs.len(), 1);
    }
}
