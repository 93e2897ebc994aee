//! Locator export
//!
//! JSON document written when the user exports the selected element:
//!
//! ```json
//! {
//!   "timestamp": "2024-05-01T12:00:00.000Z",
//!   "element": { "tagName": "li", "id": "...", "className": "...", "textContent": "..." },
//!   "selectors": { "cssSelector": "...", "xpath": "...", "absoluteXPath": "...", "jsPath": "..." }
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use loc8r_locator::{Locator, MissingLabels};
use serde::{Serialize, Serializer};

use crate::InspectorError;

/// Value written for an id, class or text the element does not have
pub const NOT_AVAILABLE: &str = "N/A";

/// Exported snapshot of one element's locators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub element: ExportElement,
    pub selectors: ExportSelectors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportElement {
    pub tag_name: String,
    pub id: String,
    pub class_name: String,
    pub text_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSelectors {
    pub css_selector: String,
    pub xpath: String,
    #[serde(rename = "absoluteXPath")]
    pub absolute_xpath: String,
    pub js_path: String,
}

impl ExportRecord {
    /// Build a record from `locator`. Attributes equal to the engine's
    /// `missing` labels are written as `N/A`.
    pub fn new(locator: &Locator, missing: &MissingLabels, timestamp: DateTime<Utc>) -> Self {
        let attrs = &locator.attributes;
        Self {
            timestamp,
            element: ExportElement {
                tag_name: locator.tag_name.clone(),
                id: or_not_available(&attrs.id, &missing.id),
                class_name: or_not_available(&attrs.class, &missing.class),
                text_content: or_not_available(&attrs.text, &missing.text),
            },
            selectors: ExportSelectors {
                css_selector: locator.css_selector.clone(),
                xpath: locator.xpath.clone(),
                absolute_xpath: locator.absolute_xpath.clone(),
                js_path: locator.js_path.clone(),
            },
        }
    }

    /// Suggested download name, `loc8r-selectors-<unix millis>.json`
    pub fn file_name(&self) -> String {
        format!("loc8r-selectors-{}.json", self.timestamp.timestamp_millis())
    }

    /// Two-space indented JSON
    pub fn to_json_pretty(&self) -> Result<String, InspectorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn or_not_available(value: &str, missing: &str) -> String {
    let value = if value == missing { NOT_AVAILABLE } else { value };
    value.to_string()
}

fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
