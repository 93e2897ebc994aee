//! Locator engine - one entry point for every locator kind

use std::fmt;

use loc8r_dom::{DomTree, NodeId};
use serde::Serialize;

use crate::attributes::{ElementAttributes, extract_attributes};
use crate::config::LocatorConfig;
use crate::error::Result;
use crate::walk::element;
use crate::{css, js_path, xpath};

/// Locator string kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    Css,
    XPath,
    AbsoluteXPath,
    JsPath,
}

impl LocatorKind {
    pub const ALL: [LocatorKind; 4] = [
        LocatorKind::Css,
        LocatorKind::XPath,
        LocatorKind::AbsoluteXPath,
        LocatorKind::JsPath,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            LocatorKind::Css => "CSS Selector",
            LocatorKind::XPath => "XPath (Relative)",
            LocatorKind::AbsoluteXPath => "XPath (Absolute)",
            LocatorKind::JsPath => "JavaScript Path",
        }
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every locator for one element, built in a single call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locator {
    pub tag_name: String,
    pub css_selector: String,
    pub xpath: String,
    #[serde(rename = "absoluteXPath")]
    pub absolute_xpath: String,
    pub js_path: String,
    pub attributes: ElementAttributes,
}

impl Locator {
    /// The string for one kind
    pub fn get(&self, kind: LocatorKind) -> &str {
        match kind {
            LocatorKind::Css => &self.css_selector,
            LocatorKind::XPath => &self.xpath,
            LocatorKind::AbsoluteXPath => &self.absolute_xpath,
            LocatorKind::JsPath => &self.js_path,
        }
    }
}

/// Stateless locator generator
#[derive(Debug, Clone, Default)]
pub struct LocatorEngine {
    config: LocatorConfig,
}

impl LocatorEngine {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn css_selector(&self, tree: &DomTree, node: NodeId) -> Result<String> {
        css::css_selector(tree, node)
    }

    pub fn xpath(&self, tree: &DomTree, node: NodeId) -> Result<String> {
        xpath::relative_xpath(tree, node, &self.config.boundary_tag)
    }

    pub fn absolute_xpath(&self, tree: &DomTree, node: NodeId) -> Result<String> {
        xpath::absolute_xpath(tree, node)
    }

    pub fn js_path(&self, tree: &DomTree, node: NodeId) -> Result<String> {
        js_path::js_path(tree, node)
    }

    pub fn attributes(&self, tree: &DomTree, node: NodeId) -> Result<ElementAttributes> {
        extract_attributes(tree, node, &self.config)
    }

    /// Generate a single locator string
    pub fn generate(&self, tree: &DomTree, node: NodeId, kind: LocatorKind) -> Result<String> {
        match kind {
            LocatorKind::Css => self.css_selector(tree, node),
            LocatorKind::XPath => self.xpath(tree, node),
            LocatorKind::AbsoluteXPath => self.absolute_xpath(tree, node),
            LocatorKind::JsPath => self.js_path(tree, node),
        }
    }

    /// Generate every locator for `node`
    pub fn locate(&self, tree: &DomTree, node: NodeId) -> Result<Locator> {
        let tag_name = element(tree, node)?.tag.clone();

        let locator = Locator {
            css_selector: self.css_selector(tree, node)?,
            xpath: self.xpath(tree, node)?,
            absolute_xpath: self.absolute_xpath(tree, node)?,
            js_path: self.js_path(tree, node)?,
            attributes: self.attributes(tree, node)?,
            tag_name,
        };

        tracing::debug!(
            "Locators for {} <{}>: css={} xpath={}",
            node,
            locator.tag_name,
            locator.css_selector,
            locator.xpath
        );
        Ok(locator)
    }
}
