//! Line-delimited JSON messages exchanged with the launcher host.
//!
//! The host writes one [`HostEvent`] per line and reads back one
//! [`HostResponse`] per line, in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BookmarksError, ErrorPayload, Result};
use crate::models::ResultItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// Full preference snapshot, sent once on startup.
    Preferences {
        #[serde(default)]
        preferences: BTreeMap<String, String>,
    },
    PreferencesUpdate {
        id: String,
        new_value: String,
        #[serde(default)]
        old_value: Option<String>,
    },
    KeywordQuery {
        #[serde(default)]
        keyword: Option<String>,
        #[serde(default)]
        argument: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostResponse {
    RenderResultList { items: Vec<ResultItem> },
    PreferencesApplied { sources: usize },
    Error(ErrorPayload),
}

impl HostEvent {
    /// Decodes one event line. Callers skip blank lines before decoding.
    pub fn decode(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line.trim())?)
    }
}

impl HostResponse {
    /// Serializes to a single line without the trailing newline.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn from_error(err: &BookmarksError, operation: &str) -> Self {
        Self::Error(err.to_payload(operation))
    }
}
