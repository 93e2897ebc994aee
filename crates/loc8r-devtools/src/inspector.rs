//! Element Inspector
//!
//! Holds the inspector mode flag and the element the user is pointing at,
//! and turns picks into locators. Highlighting, notifications and the
//! clipboard belong to the host; this type only tracks state and produces
//! the text they would show or copy.

use chrono::{DateTime, Utc};
use loc8r_dom::{Document, NodeId};
use loc8r_locator::{Locator, LocatorConfig, LocatorEngine, text_content};

use crate::export::ExportRecord;
use crate::menu::MenuAction;
use crate::InspectorError;

/// Element inspector session
#[derive(Debug, Default)]
pub struct Inspector {
    engine: LocatorEngine,
    active: bool,
    current: Option<NodeId>,
    last_right_clicked: Option<NodeId>,
    selected: Option<Locator>,
}

impl Inspector {
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            engine: LocatorEngine::new(config),
            ..Self::default()
        }
    }

    pub fn engine(&self) -> &LocatorEngine {
        &self.engine
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
        tracing::info!("Inspector activated");
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        tracing::info!("Inspector deactivated");
    }

    /// Flip the mode flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        if self.active {
            self.deactivate();
        } else {
            self.activate();
        }
        self.active
    }

    /// Pointer moved over `node`. Ignored while inactive.
    pub fn hover(&mut self, node: NodeId) -> bool {
        if !self.active {
            return false;
        }
        self.current = Some(node);
        true
    }

    /// Element under the pointer or last acted on
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// User clicked `node`. While active, generates and keeps its locators.
    ///
    /// On failure the previously selected result stays in place.
    pub fn click(&mut self, doc: &Document, node: NodeId) -> Result<Option<&Locator>, InspectorError> {
        if !self.active {
            return Ok(None);
        }
        self.current = Some(node);

        let locator = self.engine.locate(doc.tree(), node)?;
        tracing::info!(
            "Element selected: {}{}",
            locator.tag_name,
            doc.tree()
                .get(node)
                .and_then(|n| n.as_element())
                .and_then(|e| e.id())
                .map(|id| format!("#{id}"))
                .unwrap_or_default()
        );

        self.selected = Some(locator);
        Ok(self.selected.as_ref())
    }

    /// Right-click on `node`; works whether or not the inspector is active
    pub fn context_menu(&mut self, node: NodeId) {
        self.last_right_clicked = Some(node);
        self.current = Some(node);
    }

    /// Node a menu action applies to: the current element, else the last
    /// right-clicked one, else the focused element, else `<body>`.
    pub fn target(&self, doc: &Document) -> Option<NodeId> {
        self.current
            .or(self.last_right_clicked)
            .or_else(|| doc.focused())
            .or_else(|| Some(doc.body()).filter(|b| b.is_valid()))
    }

    /// Text a context-menu item copies
    pub fn menu_action(&mut self, doc: &Document, action: MenuAction) -> Result<String, InspectorError> {
        let node = self.target(doc).ok_or(InspectorError::NoTarget)?;
        self.current = Some(node);

        let tree = doc.tree();
        let engine = &self.engine;

        let text = match action {
            MenuAction::CopyId => engine.attributes(tree, node)?.id,
            MenuAction::CopyName => engine.attributes(tree, node)?.name,
            MenuAction::CopyClass => engine.attributes(tree, node)?.class,
            MenuAction::CopyCssSelector => engine.css_selector(tree, node)?,
            MenuAction::CopyXPath => engine.xpath(tree, node)?,
            MenuAction::CopyAbsoluteXPath => engine.absolute_xpath(tree, node)?,
            MenuAction::CopyJsPath => engine.js_path(tree, node)?,
            MenuAction::CopyTextContent => {
                let text = text_content(tree, node)?;
                if text.is_empty() {
                    engine.config().missing.text.clone()
                } else {
                    text
                }
            }
        };

        tracing::debug!("{} on {}: {}", action, node, text);
        Ok(text)
    }

    /// Locators of the last clicked element
    pub fn selected(&self) -> Option<&Locator> {
        self.selected.as_ref()
    }

    /// Drop the selected result
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Export record for the selected element, stamped now
    pub fn export(&self) -> Result<ExportRecord, InspectorError> {
        self.export_at(Utc::now())
    }

    /// Export record for the selected element with an explicit timestamp
    pub fn export_at(&self, timestamp: DateTime<Utc>) -> Result<ExportRecord, InspectorError> {
        let locator = self.selected.as_ref().ok_or(InspectorError::NothingSelected)?;
        Ok(ExportRecord::new(locator, &self.engine.config().missing, timestamp))
    }
}
