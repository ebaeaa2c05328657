//! Batch orchestration of pending favicon downloads
//!
//! Walks entries with a registered key that have never been attempted,
//! strictly in index order, and materializes their images. A failed entry
//! never aborts the run, and the run itself never returns an error.

pub mod guard;

use crate::config::ProviderConfig;
use crate::favicon::{candidate_urls, download_first, Fetcher};
use crate::index::{CacheStatus, IndexStore};
use guard::BatchGuard;
use std::fs;
use tracing::{debug, info, warn};

/// Counters describing one batch run, so callers and tests can observe
/// failures without parsing log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Entries that were eligible at the start of the run
    pub pending: usize,
    /// Entries whose image was fetched and written
    pub fetched: usize,
    /// Entries marked skip (fetch or write failure)
    pub skipped: usize,
    /// Successful index rewrites during the run
    pub index_writes: usize,
    /// True when another run held the lock and nothing was attempted
    pub lock_contended: bool,
}

/// Run one batch pass over all pending entries.
pub fn run(
    store: &mut IndexStore,
    fetcher: &dyn Fetcher,
    provider: &ProviderConfig,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    let Some(_guard) = BatchGuard::acquire(&store.layout().lock_path()) else {
        warn!("another update run is in progress, skipping");
        outcome.lock_contended = true;
        return outcome;
    };

    let pending = store.pending();
    outcome.pending = pending.len();
    info!("checking {} pending entries", pending.len());

    for pos in pending {
        let Some((item_id, fav_key)) = store.get(pos).map(|e| (e.item_id.clone(), e.fav_key.clone()))
        else {
            continue;
        };

        let candidates = candidate_urls(&fav_key, &provider.origin, &provider.size);
        let Some(bytes) = download_first(fetcher, &candidates) else {
            debug!("no candidate succeeded for {}", item_id);
            store.set_status(pos, CacheStatus::Skip);
            outcome.skipped += 1;
            continue;
        };

        let image_path = store.layout().image_path(&item_id);
        if let Err(e) = fs::write(&image_path, &bytes) {
            warn!("could not write {}: {}", image_path.display(), e);
            store.set_status(pos, CacheStatus::Skip);
            outcome.skipped += 1;
            continue;
        }

        store.set_status(pos, CacheStatus::Exist);
        outcome.fetched += 1;

        // Persist right away so a crash loses at most the entry in flight.
        match store.persist() {
            Ok(()) => outcome.index_writes += 1,
            Err(e) => warn!("could not persist index: {}", e),
        }
    }

    match store.persist() {
        Ok(()) => outcome.index_writes += 1,
        Err(e) => warn!("could not persist index: {}", e),
    }

    info!(
        "update finished: {} fetched, {} skipped",
        outcome.fetched, outcome.skipped
    );
    outcome
}
