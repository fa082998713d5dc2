use std::path::PathBuf;

#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_env_path(name: &str) -> Option<PathBuf> {
    read_non_empty_env(name).map(PathBuf::from)
}
