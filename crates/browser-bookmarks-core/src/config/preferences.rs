use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Activation keyword. Changing it never affects bookmark discovery.
pub const KEYWORD_PREFERENCE: &str = "keyword";
/// Colon-separated list of extra directories to scan for `Bookmarks` files.
pub const ADDITIONAL_BROWSER_PATHS_PREFERENCE: &str = "additional_browser_paths";

const SEARCH_PATH_SEPARATOR: char = ':';
const HOME_PREFIXES: [&str; 3] = ["~", "${HOME}", "$HOME"];

/// Host-supplied preference values, keyed by preference id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, String>,
}

impl Preferences {
    #[must_use]
    pub fn from_map(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.get(KEYWORD_PREFERENCE)
    }

    #[must_use]
    pub fn additional_browser_paths(&self) -> Option<&str> {
        self.get(ADDITIONAL_BROWSER_PATHS_PREFERENCE)
            .filter(|raw| !raw.trim().is_empty())
    }
}

/// Splits a colon-separated directory list, dropping blank segments.
///
/// A leading `~`, `$HOME` or `${HOME}` is replaced by `home`. Without a home
/// directory the segment is kept as written.
#[must_use]
pub fn parse_search_paths(raw: &str, home: Option<&Path>) -> Vec<PathBuf> {
    raw.split(SEARCH_PATH_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| expand_home(segment, home))
        .collect()
}

fn expand_home(segment: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(segment);
    };
    for prefix in HOME_PREFIXES {
        let Some(rest) = segment.strip_prefix(prefix) else {
            continue;
        };
        if rest.is_empty() {
            return home.to_path_buf();
        }
        // `~user` and `$HOMEDIR` are not home references.
        if let Some(rest) = rest.strip_prefix('/') {
            return home.join(rest.trim_start_matches('/'));
        }
    }
    PathBuf::from(segment)
}
