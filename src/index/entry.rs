//! Cache entry data model

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lifecycle state of a cached icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Never attempted
    #[default]
    None,
    /// Image file was written to the cache directory
    Exist,
    /// Download or write failed; the entry is not retried
    Skip,
}

/// One index record per entry that may have a favicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheEntry {
    /// Stable external identifier, unique within the index
    pub item_id: String,

    /// Current lifecycle state
    pub status: CacheStatus,

    /// Raw favicon-resolution key; empty until first registration
    #[serde(rename = "fav")]
    pub fav_key: String,
}

impl CacheEntry {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            status: CacheStatus::None,
            fav_key: String::new(),
        }
    }
}

/// Extract the `fav` field from a raw vault metadata payload.
///
/// The payload must be a JSON object; every other field is ignored.
/// Returns `None` for anything unparseable and for an empty or missing key.
pub fn extract_fav_key(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("could not parse favicon payload: {}", e);
            return None;
        }
    };

    match value.get("fav").and_then(serde_json::Value::as_str) {
        Some(fav) if !fav.is_empty() => Some(fav.to_string()),
        _ => None,
    }
}

/// An item id names the image file under `images/`; reject anything that
/// could escape the cache directory.
pub fn valid_item_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(std::path::is_separator)
}
