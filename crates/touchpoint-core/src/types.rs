//! Persisted attribution state

use crate::params::UtmParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribution captured on an event detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub params: UtmParams,
    /// Epoch milliseconds at capture. Stored for forward compatibility,
    /// never consulted by resolution.
    pub timestamp: i64,
}

/// Attribution captured on a non-event page, with the path it came from.
/// The path lets resolution reject a latest record that was itself captured
/// on an event page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestRecord {
    pub params: UtmParams,
    pub path: String,
    pub timestamp: i64,
}

/// The whole store, serialized as one JSON value into the storage slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    /// One record per event slug, newest write overwrites.
    #[serde(default)]
    pub events: HashMap<String, EventRecord>,
    /// Most recent capture on a non-event page, overwritten whole.
    #[serde(default)]
    pub latest: Option<LatestRecord>,
}

impl StoreState {
    /// Parse a stored blob. A missing or unparsable slot collapses to the
    /// empty state so a corrupted store can never break a page visit.
    pub fn from_blob(blob: Option<&str>) -> Self {
        match blob {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "attribution slot unreadable, starting empty");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn to_blob(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
