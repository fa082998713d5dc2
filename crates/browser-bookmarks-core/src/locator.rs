use std::path::{Path, PathBuf};

use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::models::{BookmarkSource, SourceLabel};

pub const BOOKMARKS_FILE_NAME: &str = "Bookmarks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserProfile {
    /// Directory name under the XDG config dir; doubles as the source label.
    pub id: &'static str,
    pub icon: &'static str,
}

pub const SUPPORTED_BROWSERS: &[BrowserProfile] = &[
    BrowserProfile {
        id: "google-chrome",
        icon: "images/chrome.png",
    },
    BrowserProfile {
        id: "chromium",
        icon: "images/chromium.png",
    },
    BrowserProfile {
        id: "BraveSoftware/Brave-Browser",
        icon: "images/brave.png",
    },
    BrowserProfile {
        id: "BraveSoftware/Brave-Browser-Beta",
        icon: "images/brave-beta.png",
    },
    BrowserProfile {
        id: "BraveSoftware/Brave-Browser-Nightly",
        icon: "images/brave-nightly.png",
    },
    BrowserProfile {
        id: "vivaldi",
        icon: "images/vivaldi.png",
    },
    BrowserProfile {
        id: "microsoft-edge",
        icon: "images/edge.png",
    },
];

#[must_use]
pub fn browser_icon(id: &str) -> Option<&'static str> {
    SUPPORTED_BROWSERS
        .iter()
        .find(|browser| browser.id == id)
        .map(|browser| browser.icon)
}

impl BrowserProfile {
    /// Standard config directory, then the snap-packaged variant.
    #[must_use]
    pub fn candidate_dirs(&self, home: &Path) -> Vec<PathBuf> {
        vec![
            home.join(".config").join(self.id),
            home.join("snap")
                .join(self.id)
                .join("current")
                .join(".config")
                .join(self.id),
        ]
    }
}

/// Discovers every bookmark file: supported browsers first, then `extra_dirs` in order.
#[must_use]
pub fn find_bookmark_sources(home: Option<&Path>, extra_dirs: &[PathBuf]) -> Vec<BookmarkSource> {
    let mut found = Vec::new();

    match home {
        Some(home) => {
            for browser in SUPPORTED_BROWSERS {
                let dirs = browser.candidate_dirs(home);
                found.extend(collect_bookmark_paths(
                    &dirs,
                    &SourceLabel::Browser(browser.id.to_string()),
                ));
            }
        }
        None => debug!("home directory unavailable; skipping supported browser locations"),
    }

    if !extra_dirs.is_empty() {
        info!(paths = ?extra_dirs, "custom browser paths found, searching through them");
        found.extend(collect_bookmark_paths(extra_dirs, &SourceLabel::Custom));
    }

    if found.is_empty() {
        error!("no bookmarks were found");
    }
    found
}

/// Recursively collects files named `Bookmarks` under each directory.
///
/// Missing or unreadable directories contribute nothing. A path that names a
/// `Bookmarks` file directly is kept as is. Entries within one directory come
/// back sorted by file name.
#[must_use]
pub fn collect_bookmark_paths(dirs: &[PathBuf], label: &SourceLabel) -> Vec<BookmarkSource> {
    let mut sources = Vec::new();

    for dir in dirs {
        if !dir.exists() {
            debug!(dir = %dir.display(), browser = %label, "bookmark directory not present");
            continue;
        }
        let before = sources.len();
        for item in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let item = match item {
                Ok(item) => item,
                Err(err) => {
                    debug!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if item.file_type().is_file() && item.file_name() == BOOKMARKS_FILE_NAME {
                sources.push(BookmarkSource::new(item.into_path(), label.clone()));
            }
        }
        if sources.len() == before {
            info!(dir = %dir.display(), browser = %label, "path to the bookmarks was not found");
        }
    }

    sources
}
