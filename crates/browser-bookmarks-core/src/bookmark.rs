use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookmarksError, Result};

/// A single saved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    pub name: String,
    pub url: String,
}

/// Node of a Chromium-style bookmark tree, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookmarkNode {
    Folder {
        #[serde(default)]
        children: Vec<BookmarkNode>,
    },
    #[serde(rename = "url")]
    Bookmark(BookmarkEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRoots {
    pub bookmark_bar: BookmarkNode,
    pub synced: BookmarkNode,
    pub other: BookmarkNode,
}

impl BookmarkRoots {
    /// Root sections in search order: bar, synced, other.
    #[must_use]
    pub fn sections(&self) -> [&BookmarkNode; 3] {
        [&self.bookmark_bar, &self.synced, &self.other]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkFile {
    pub roots: BookmarkRoots,
}

impl BookmarkFile {
    pub fn from_slice(bytes: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Reads and decodes one bookmark file. Nothing is cached between calls.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => BookmarksError::NotFound(path.display().to_string()),
            _ => BookmarksError::Io(err),
        })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|err| BookmarksError::invalid_bookmark_file(path, err))
    }
}
