use tracing::{debug, warn};

use crate::bookmark::BookmarkFile;
use crate::config::{AppConfig, KEYWORD_PREFERENCE, Preferences};
use crate::error::Result;
use crate::locator::find_bookmark_sources;
use crate::models::{BookmarkSource, ResultItem};
use crate::protocol::{HostEvent, HostResponse};
use crate::search::{BookmarkQuery, MatchAccumulator, search_bookmark_file};

/// Extension state: the host preferences and the bookmark sources they resolve to.
#[derive(Debug, Clone)]
pub struct BrowserBookmarks {
    config: AppConfig,
    preferences: Preferences,
    sources: Vec<BookmarkSource>,
}

impl BrowserBookmarks {
    /// Starts with no preferences; sources stay empty until the host sends them.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            preferences: Preferences::default(),
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_preferences(config: AppConfig, preferences: Preferences) -> Self {
        let mut extension = Self::new(config);
        extension.apply_preferences(preferences);
        extension
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn sources(&self) -> &[BookmarkSource] {
        &self.sources
    }

    /// Replaces all preferences and rescans.
    pub fn apply_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
        self.refresh_sources();
    }

    /// Applies one changed value. Returns `false` when the key does not affect discovery.
    pub fn update_preference(&mut self, id: &str, new_value: &str) -> bool {
        if id == KEYWORD_PREFERENCE {
            return false;
        }
        self.preferences.set(id, new_value);
        self.refresh_sources();
        true
    }

    /// Full recompute of the source list.
    pub fn refresh_sources(&mut self) {
        let home = self.config.resolve_home_dir();
        let extra_dirs = self.config.extra_search_paths(&self.preferences);
        self.sources = find_bookmark_sources(home.as_deref(), &extra_dirs);
        debug!(count = self.sources.len(), "bookmark sources refreshed");
    }

    /// Searches every source, re-reading each file from disk.
    ///
    /// A source that fails to load is logged and skipped.
    #[must_use]
    pub fn get_items(&self, query: Option<&str>) -> Vec<ResultItem> {
        let query_text = query.unwrap_or_default();
        debug!(query = query_text, "finding bookmark entries");

        let query = BookmarkQuery::parse(query_text);
        let mut acc = MatchAccumulator::default();
        let mut items = Vec::new();

        for source in &self.sources {
            if acc.is_full() {
                break;
            }
            let start = acc.len();
            if let Err(err) = search_source(source, &query, &mut acc) {
                warn!(
                    path = %source.path.display(),
                    browser = %source.label,
                    code = err.code(),
                    error = %err,
                    "skipping bookmark source"
                );
                continue;
            }
            items.extend(
                acc.since(start)
                    .iter()
                    .map(|entry| ResultItem::for_bookmark(entry, &source.label)),
            );
        }

        items
    }

    /// Single dispatch point for host events.
    pub fn handle_event(&mut self, event: HostEvent) -> HostResponse {
        match event {
            HostEvent::Preferences { preferences } => {
                self.apply_preferences(Preferences::from_map(preferences));
            }
            HostEvent::PreferencesUpdate { id, new_value, .. } => {
                if !self.update_preference(&id, &new_value) {
                    debug!(id = %id, "preference change ignored");
                }
            }
            HostEvent::KeywordQuery { argument, .. } => {
                return HostResponse::RenderResultList {
                    items: self.get_items(argument.as_deref()),
                };
            }
        }
        HostResponse::PreferencesApplied {
            sources: self.sources.len(),
        }
    }
}

fn search_source(
    source: &BookmarkSource,
    query: &BookmarkQuery,
    acc: &mut MatchAccumulator,
) -> Result<()> {
    let file = BookmarkFile::load(&source.path)?;
    search_bookmark_file(&file, query, acc);
    Ok(())
}
