//! Process-wide cache handle
//!
//! `IconCache` is constructed once per invocation and passed to whatever
//! needs lookups or updates. When the cache root cannot be prepared the
//! handle opens disabled: every operation is a no-op and the failure is
//! logged exactly once, never raised.

use crate::batch::{self, BatchOutcome};
use crate::config::ProviderConfig;
use crate::favicon::Fetcher;
use crate::index::{CacheEntry, IndexStore};
use crate::layout::CacheLayout;
use std::path::PathBuf;
use tracing::{error, warn};

/// Handle over the cache directory, index and provider settings
pub struct IconCache {
    provider: ProviderConfig,
    store: Option<IndexStore>,
}

impl IconCache {
    /// Open the cache, ensuring the directory layout and index file exist.
    pub fn open(layout: CacheLayout, provider: ProviderConfig) -> Self {
        let store = match layout.ensure().and_then(|()| IndexStore::load(layout)) {
            Ok(store) => Some(store),
            Err(e) => {
                error!("cache unavailable, operations disabled: {}", e);
                None
            }
        };

        Self { provider, store }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    pub fn entries(&self) -> &[CacheEntry] {
        self.store.as_ref().map(IndexStore::entries).unwrap_or(&[])
    }

    /// Register a favicon key for an entry (first registration wins).
    pub fn register(&mut self, item_id: &str, payload: &str) {
        if let Some(store) = self.store.as_mut() {
            store.register(item_id, payload);
        }
    }

    /// Path to the cached image, if materialized and still on disk.
    pub fn resolve(&self, item_id: &str) -> Option<PathBuf> {
        self.store.as_ref()?.resolve_image_path(item_id)
    }

    /// Run a batch update over all pending entries.
    pub fn update(&mut self, fetcher: &dyn Fetcher) -> BatchOutcome {
        match self.store.as_mut() {
            Some(store) => batch::run(store, fetcher, &self.provider),
            None => BatchOutcome::default(),
        }
    }

    /// Best-effort persist of registrations made through this handle.
    pub fn persist(&self) {
        if let Some(store) = self.store.as_ref() {
            if let Err(e) = store.persist() {
                warn!("could not persist index: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FavcacheResult;
    use crate::favicon::Fetcher;
    use tempfile::TempDir;

    struct DeadFetcher;

    impl Fetcher for DeadFetcher {
        fn get_bytes(&self, url: &str) -> FavcacheResult<Vec<u8>> {
            panic!("unexpected fetch of {}", url);
        }
    }

    fn payload(fav: &str) -> String {
        format!(r#"{{"fav":"{}"}}"#, fav)
    }

    #[test]
    fn open_prepares_layout_and_index() {
        let dir = TempDir::new().unwrap();
        let layout = CacheLayout::new(dir.path().join("cache"));
        let cache = IconCache::open(layout.clone(), ProviderConfig::default());

        assert!(cache.is_enabled());
        assert!(layout.index_path().is_file());
    }

    #[test]
    fn register_persist_reload() {
        let dir = TempDir::new().unwrap();
        let layout = CacheLayout::new(dir.path().to_path_buf());

        let mut cache = IconCache::open(layout.clone(), ProviderConfig::default());
        cache.register("e1", &payload("app.example.com"));
        cache.persist();

        let reopened = IconCache::open(layout, ProviderConfig::default());
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(reopened.entries()[0].fav_key, "app.example.com");
    }

    #[test]
    fn unusable_root_disables_the_handle() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file in the way").unwrap();

        let layout = CacheLayout::new(blocker.join("cache"));
        let mut cache = IconCache::open(layout, ProviderConfig::default());

        assert!(!cache.is_enabled());
        assert!(cache.entries().is_empty());

        cache.register("e1", &payload("x.y"));
        assert!(cache.resolve("e1").is_none());

        let outcome = cache.update(&DeadFetcher);
        assert_eq!(outcome, BatchOutcome::default());

        cache.persist(); // still a no-op, still no panic
    }

    #[test]
    fn resolve_is_none_for_unmaterialized_entries() {
        let dir = TempDir::new().unwrap();
        let mut cache = IconCache::open(
            CacheLayout::new(dir.path().to_path_buf()),
            ProviderConfig::default(),
        );

        cache.register("e1", &payload("x.y"));
        assert!(cache.resolve("e1").is_none());
        assert!(cache.resolve("unknown").is_none());
    }
}
