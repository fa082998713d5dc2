use std::path::PathBuf;

mod env;
mod preferences;

pub use preferences::{
    ADDITIONAL_BROWSER_PATHS_PREFERENCE, KEYWORD_PREFERENCE, Preferences, parse_search_paths,
};

pub const HOME_DIR_ENV: &str = "BROWSER_BOOKMARKS_HOME";
pub const EXTRA_PATHS_ENV: &str = "BROWSER_BOOKMARKS_EXTRA_PATHS";

/// Process-level settings that sit underneath host preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Replaces the platform home directory when expanding browser templates.
    pub home_dir: Option<PathBuf>,
    /// Extra search paths used while the host preference is empty.
    pub default_extra_paths: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            home_dir: env::read_env_path(HOME_DIR_ENV),
            default_extra_paths: env::read_non_empty_env(EXTRA_PATHS_ENV),
        }
    }

    #[must_use]
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    #[must_use]
    pub fn with_default_extra_paths(mut self, raw: impl Into<String>) -> Self {
        self.default_extra_paths = Some(raw.into());
        self
    }

    #[must_use]
    pub fn resolve_home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone().or_else(dirs::home_dir)
    }

    /// Preference value wins; the env default only fills an empty preference.
    /// Home prefixes expand against [`Self::resolve_home_dir`].
    #[must_use]
    pub fn extra_search_paths(&self, preferences: &Preferences) -> Vec<PathBuf> {
        let home = self.resolve_home_dir();
        preferences
            .additional_browser_paths()
            .or(self.default_extra_paths.as_deref())
            .map(|raw| parse_search_paths(raw, home.as_deref()))
            .unwrap_or_default()
    }
}
