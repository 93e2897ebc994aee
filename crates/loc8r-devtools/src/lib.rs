//! Loc8r DevTools
//!
//! State of an element-picking session around the locator engine.
//!
//! Features:
//! - Inspector mode flag, hover and click handling
//! - Context-menu copy actions with fallback node resolution
//! - JSON export of the selected element's locators

pub mod export;
pub mod inspector;
pub mod menu;

pub use export::{ExportElement, ExportRecord, ExportSelectors, NOT_AVAILABLE};
pub use inspector::Inspector;
pub use menu::MenuAction;

use loc8r_locator::LocatorError;

/// DevTools error
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("No element selected")]
    NothingSelected,

    #[error("No element to act on")]
    NoTarget,

    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error("Export serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
