use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize, Serializer};

use crate::bookmark::BookmarkEntry;
use crate::locator::browser_icon;

pub const CUSTOM_SOURCE_LABEL: &str = "custom_path";

/// Which browser a bookmark file belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLabel {
    Browser(String),
    Custom,
}

impl SourceLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Browser(id) => id,
            Self::Custom => CUSTOM_SOURCE_LABEL,
        }
    }

    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Browser(id) => browser_icon(id),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SourceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkSource {
    pub path: PathBuf,
    pub label: SourceLabel,
}

impl BookmarkSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, label: SourceLabel) -> Self {
        Self {
            path: path.into(),
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultAction {
    OpenUrl { url: String },
}

/// One row handed back to the launcher for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub on_enter: ResultAction,
}

impl ResultItem {
    #[must_use]
    pub fn for_bookmark(entry: &BookmarkEntry, label: &SourceLabel) -> Self {
        Self {
            name: entry.name.clone(),
            description: entry.url.clone(),
            icon: label.icon().map(ToString::to_string),
            on_enter: ResultAction::OpenUrl {
                url: entry.url.clone(),
            },
        }
    }
}
