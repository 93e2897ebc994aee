//! Loc8r Locator Engine
//!
//! Derives strings that re-select a DOM element:
//! - CSS selector (single segment, id short-circuit)
//! - Relative XPath (anchored at the nearest id or the body boundary)
//! - Absolute XPath (full root-to-node path, ids ignored)
//! - JS path (`document.getElementById` / `document.querySelector`)
//! - Raw identifying attributes (id, name, class, text preview)
//!
//! Every generator is a read-only walk over a `DomTree`; nothing is cached.

mod attributes;
mod config;
mod css;
mod engine;
mod error;
mod js_path;
mod walk;
mod xpath;
pub mod resolve;

pub use attributes::{ElementAttributes, extract_attributes, text_content};
pub use config::{LocatorConfig, MissingLabels};
pub use css::css_selector;
pub use engine::{Locator, LocatorEngine, LocatorKind};
pub use error::{LocatorError, Result};
pub use js_path::js_path;
pub use xpath::{absolute_xpath, relative_xpath};
