//! Context menu copy actions

use std::fmt;
use std::str::FromStr;

use crate::InspectorError;

/// Copy actions offered on a right-clicked element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    CopyId,
    CopyName,
    CopyClass,
    CopyCssSelector,
    CopyXPath,
    CopyAbsoluteXPath,
    CopyJsPath,
    CopyTextContent,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::CopyId,
        MenuAction::CopyName,
        MenuAction::CopyClass,
        MenuAction::CopyCssSelector,
        MenuAction::CopyXPath,
        MenuAction::CopyAbsoluteXPath,
        MenuAction::CopyJsPath,
        MenuAction::CopyTextContent,
    ];

    /// Menu item id
    pub fn id(self) -> &'static str {
        match self {
            MenuAction::CopyId => "copy-id",
            MenuAction::CopyName => "copy-name",
            MenuAction::CopyClass => "copy-class",
            MenuAction::CopyCssSelector => "copy-css-selector",
            MenuAction::CopyXPath => "copy-xpath",
            MenuAction::CopyAbsoluteXPath => "copy-xpath-absolute",
            MenuAction::CopyJsPath => "copy-js-path",
            MenuAction::CopyTextContent => "copy-text-content",
        }
    }

    /// Menu item title
    pub fn title(self) -> &'static str {
        match self {
            MenuAction::CopyId => "Copy ID",
            MenuAction::CopyName => "Copy Name",
            MenuAction::CopyClass => "Copy Class",
            MenuAction::CopyCssSelector => "Copy CSS Selector",
            MenuAction::CopyXPath => "Copy XPath",
            MenuAction::CopyAbsoluteXPath => "Copy Absolute XPath",
            MenuAction::CopyJsPath => "Copy JS Path",
            MenuAction::CopyTextContent => "Copy Text Content",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MenuAction {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuAction::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| InspectorError::UnknownMenuItem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for action in MenuAction::ALL {
            assert_eq!(action.id().parse::<MenuAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_id() {
        assert!(matches!(
            "copy-everything".parse::<MenuAction>(),
            Err(InspectorError::UnknownMenuItem(id)) if id == "copy-everything"
        ));
    }
}
