// Public fallible APIs in this crate share one concrete error contract (`BookmarksError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod bookmark;
pub mod client;
pub mod config;
pub mod error;
pub mod locator;
pub mod models;
pub mod protocol;
pub mod search;

pub use bookmark::{BookmarkEntry, BookmarkFile, BookmarkNode};
pub use client::BrowserBookmarks;
pub use config::{AppConfig, Preferences};
pub use error::{BookmarksError, Result};
pub use models::{BookmarkSource, ResultItem, SourceLabel};
pub use protocol::{HostEvent, HostResponse};
pub use search::{BookmarkQuery, MAX_MATCHES_LEN, MatchAccumulator};
