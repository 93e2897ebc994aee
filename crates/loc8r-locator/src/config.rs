//! Locator configuration

/// Engine configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Tag of the ancestor where relative XPath ascent stops.
    /// The boundary element itself never appears in the path.
    pub boundary_tag: String,

    /// Maximum characters kept in the attribute text preview
    pub text_preview_len: usize,

    /// Labels substituted for absent attributes
    pub missing: MissingLabels,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            boundary_tag: "body".to_string(),
            text_preview_len: 50,
            missing: MissingLabels::default(),
        }
    }
}

/// "Not found" sentinels for the attribute view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLabels {
    pub id: String,
    pub name: String,
    pub class: String,
    pub text: String,
}

impl Default for MissingLabels {
    fn default() -> Self {
        Self {
            id: "No ID found".to_string(),
            name: "No name attribute found".to_string(),
            class: "No class found".to_string(),
            text: "No text content".to_string(),
        }
    }
}
