//! Persisted index of cache entries
//!
//! The index is a JSON array at `images/index.json`, rewritten in full on
//! every persist. Malformed or unreadable content is recovered as an empty
//! index rather than surfaced to callers.

use super::entry::{extract_fav_key, valid_item_id, CacheEntry, CacheStatus};
use crate::error::{FavcacheError, FavcacheResult};
use crate::layout::CacheLayout;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// In-memory index backed by the on-disk JSON document
pub struct IndexStore {
    layout: CacheLayout,
    entries: Vec<CacheEntry>,
}

impl IndexStore {
    /// Load the index, initializing an empty one on first run.
    ///
    /// The index file is guaranteed to exist after this call.
    pub fn load(layout: CacheLayout) -> FavcacheResult<Self> {
        let path = layout.index_path();
        if !path.exists() {
            fs::write(&path, "[]").map_err(|e| {
                FavcacheError::io(format!("initializing index file {}", path.display()), e)
            })?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<CacheEntry>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("malformed index {}, starting empty: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("unreadable index {}, starting empty: {}", path.display(), e);
                Vec::new()
            }
        };

        debug!("loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { layout, entries })
    }

    pub fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    pub fn entries(&self) -> &[CacheEntry] {
        &self.entries
    }

    pub fn find(&self, item_id: &str) -> Option<&CacheEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }

    /// Register a favicon key for an entry, creating the entry when absent.
    ///
    /// The key is set at most once: registrations for an entry that already
    /// carries a key are no-ops, whatever the new payload says.
    pub fn register(&mut self, item_id: &str, payload: &str) {
        if payload.is_empty() {
            return;
        }
        if !valid_item_id(item_id) {
            warn!("refusing to register invalid item id {:?}", item_id);
            return;
        }

        let pos = match self.entries.iter().position(|e| e.item_id == item_id) {
            Some(pos) => pos,
            None => {
                self.entries.push(CacheEntry::new(item_id));
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[pos];
        if !entry.fav_key.is_empty() {
            return;
        }

        if let Some(key) = extract_fav_key(payload) {
            entry.fav_key = key;
        }
    }

    /// Path to the cached image for an entry, if it has been materialized.
    ///
    /// Checks the file on disk: a stale `exist` entry whose image was
    /// removed out-of-band resolves to `None` without repairing the index.
    pub fn resolve_image_path(&self, item_id: &str) -> Option<PathBuf> {
        let entry = self.find(item_id)?;
        if entry.status != CacheStatus::Exist {
            return None;
        }

        let path = self.layout.image_path(item_id);
        path.is_file().then_some(path)
    }

    /// Positions of entries eligible for a batch run: keyed and untried.
    pub(crate) fn pending(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.fav_key.is_empty() && e.status == CacheStatus::None)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub(crate) fn get(&self, pos: usize) -> Option<&CacheEntry> {
        self.entries.get(pos)
    }

    pub(crate) fn set_status(&mut self, pos: usize, status: CacheStatus) {
        if let Some(entry) = self.entries.get_mut(pos) {
            entry.status = status;
        }
    }

    /// Serialize the full index and overwrite the index file.
    ///
    /// Written to a sibling temp file and renamed into place so a crash
    /// mid-write never truncates the index.
    pub fn persist(&self) -> FavcacheResult<()> {
        let path = self.layout.index_path();
        let tmp = path.with_extension("json.tmp");

        let content = serde_json::to_vec(&self.entries)?;
        fs::write(&tmp, content)
            .map_err(|e| FavcacheError::io(format!("writing index to {}", tmp.display()), e))?;
        fs::rename(&tmp, &path)
            .map_err(|e| FavcacheError::io(format!("replacing index {}", path.display()), e))?;

        Ok(())
    }
}
